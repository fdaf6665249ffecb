mod lookup;
mod partition;

pub(crate) use lookup::*;
pub(crate) use partition::*;
