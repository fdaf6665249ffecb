mod builder;
mod error;
mod mapper;
mod property;
mod result;
mod rules;
mod verb;

pub(crate) use builder::*;
pub use error::*;
pub(crate) use mapper::*;
pub(crate) use property::*;
pub use result::*;
pub(crate) use rules::*;
pub(crate) use verb::{dispatch, validate_verbs};
pub use verb::{VerbOutcome, VerbSpecification};
