mod conversion;
mod core;
mod settings;
mod specification;
mod value;

pub use self::core::*;
pub(crate) use conversion::change_type;
pub use conversion::{ConversionSettings, ConversionType, FloatKind, IntegerKind};
pub use settings::*;
pub use specification::*;
pub(crate) use specification::validate_specifications;
pub use value::*;
