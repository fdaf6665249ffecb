use thiserror::Error;

use crate::api::Value;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The integer widths a [`ConversionType::Integer`] may be bounded to.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl IntegerKind {
    /// The inclusive `(min, max)` range of this kind.
    pub fn bounds(&self) -> (i128, i128) {
        match self {
            IntegerKind::I8 => (i8::MIN as i128, i8::MAX as i128),
            IntegerKind::I16 => (i16::MIN as i128, i16::MAX as i128),
            IntegerKind::I32 => (i32::MIN as i128, i32::MAX as i128),
            IntegerKind::I64 => (i64::MIN as i128, i64::MAX as i128),
            IntegerKind::Isize => (isize::MIN as i128, isize::MAX as i128),
            IntegerKind::U8 => (0, u8::MAX as i128),
            IntegerKind::U16 => (0, u16::MAX as i128),
            IntegerKind::U32 => (0, u32::MAX as i128),
            IntegerKind::U64 => (0, u64::MAX as i128),
            IntegerKind::Usize => (0, usize::MAX as i128),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            IntegerKind::I8 => "i8",
            IntegerKind::I16 => "i16",
            IntegerKind::I32 => "i32",
            IntegerKind::I64 => "i64",
            IntegerKind::Isize => "isize",
            IntegerKind::U8 => "u8",
            IntegerKind::U16 => "u16",
            IntegerKind::U32 => "u32",
            IntegerKind::U64 => "u64",
            IntegerKind::Usize => "usize",
        }
    }
}

/// The floating point widths a [`ConversionType::Float`] may be bounded to.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F32,
    F64,
}

impl FloatKind {
    // The number narrowed to this width.
    fn narrow(&self, number: f64) -> f64 {
        match self {
            FloatKind::F32 => number as f32 as f64,
            FloatKind::F64 => number,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FloatKind::F32 => "f32",
            FloatKind::F64 => "f64",
        }
    }
}

/// The declared type a raw argument string is converted to.
#[derive(Debug, Clone)]
pub enum ConversionType {
    /// `true` or `false`, case insensitively.
    Bool,
    /// Exactly one character.
    Char,
    /// Any text.
    Text,
    /// A whole number, range checked against its kind.
    Integer(IntegerKind),
    /// A floating point number, range checked against its kind.
    Float(FloatKind),
    /// One of the listed variant names.
    Enum(Vec<String>),
    /// A type with a string constructor; `validate` probes whether the text constructs.
    Custom {
        /// The type name, for error messages.
        type_name: &'static str,
        /// Whether the text successfully constructs the type.
        validate: fn(&str) -> bool,
    },
    /// Zero or more of the inner type.
    Sequence(Box<ConversionType>),
}

impl PartialEq for ConversionType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConversionType::Bool, ConversionType::Bool)
            | (ConversionType::Char, ConversionType::Char)
            | (ConversionType::Text, ConversionType::Text) => true,
            (ConversionType::Integer(left), ConversionType::Integer(right)) => left == right,
            (ConversionType::Float(left), ConversionType::Float(right)) => left == right,
            (ConversionType::Enum(left), ConversionType::Enum(right)) => left == right,
            // Custom types are identified by name alone.
            (
                ConversionType::Custom { type_name: left, .. },
                ConversionType::Custom {
                    type_name: right, ..
                },
            ) => left == right,
            (ConversionType::Sequence(left), ConversionType::Sequence(right)) => left == right,
            _ => false,
        }
    }
}

impl ConversionType {
    /// Whether this is a [`ConversionType::Sequence`].
    pub fn is_sequence(&self) -> bool {
        matches!(self, ConversionType::Sequence(_))
    }

    /// The element type: the inner type of a sequence, otherwise itself.
    pub fn element(&self) -> &ConversionType {
        match self {
            ConversionType::Sequence(inner) => inner,
            _ => self,
        }
    }

    /// The declared variants of an enum (or sequence of enum), if any.
    pub fn enum_values(&self) -> Option<&[String]> {
        match self.element() {
            ConversionType::Enum(variants) => Some(variants),
            _ => None,
        }
    }

    /// The human readable name of this type.
    pub fn type_name(&self) -> String {
        match self {
            ConversionType::Bool => "bool".to_string(),
            ConversionType::Char => "char".to_string(),
            ConversionType::Text => "string".to_string(),
            ConversionType::Integer(kind) => kind.name().to_string(),
            ConversionType::Float(kind) => kind.name().to_string(),
            ConversionType::Enum(variants) => format!("one of {{{}}}", variants.join(", ")),
            ConversionType::Custom { type_name, .. } => type_name.to_string(),
            ConversionType::Sequence(inner) => format!("sequence of {}", inner.type_name()),
        }
    }
}

/// The knobs of string to value conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSettings {
    case_insensitive_enum_values: bool,
}

impl ConversionSettings {
    /// Whether enum variant names are matched ignoring case.
    pub fn case_insensitive_enum_values(mut self, value: bool) -> Self {
        self.case_insensitive_enum_values = value;
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConversionFailure {
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion { token: String, type_name: String },
    #[error("no value to convert to {type_name}.")]
    Empty { type_name: String },
}

/// Convert the raw strings of one specification to its declared type.
///
/// Scalars convert the last string, sequences convert every string and only succeed if each element does.
pub(crate) fn change_type(
    values: &[String],
    conversion: &ConversionType,
    settings: &ConversionSettings,
) -> Result<Value, ConversionFailure> {
    let result = match conversion {
        ConversionType::Sequence(inner) => values
            .iter()
            .map(|value| convert_scalar(value, inner, settings))
            .collect::<Result<Vec<Value>, ConversionFailure>>()
            .map(Value::Sequence),
        _ => match values.last() {
            Some(value) => convert_scalar(value, conversion, settings),
            None => Err(ConversionFailure::Empty {
                type_name: conversion.type_name(),
            }),
        },
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Converted {values:?} to {}: {result:?}.", conversion.type_name());
    }

    result
}

fn convert_scalar(
    token: &str,
    conversion: &ConversionType,
    settings: &ConversionSettings,
) -> Result<Value, ConversionFailure> {
    let invalid = || ConversionFailure::InvalidConversion {
        token: token.to_string(),
        type_name: conversion.type_name(),
    };

    match conversion {
        ConversionType::Bool => {
            if token.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if token.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(invalid())
            }
        }
        ConversionType::Char => {
            let mut characters = token.chars();
            match (characters.next(), characters.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(invalid()),
            }
        }
        ConversionType::Text => Ok(Value::Text(token.to_string())),
        ConversionType::Integer(kind) => {
            let number = token.parse::<i128>().map_err(|_| invalid())?;
            let (min, max) = kind.bounds();

            if number < min || number > max {
                Err(invalid())
            } else {
                Ok(Value::Integer(number))
            }
        }
        ConversionType::Float(kind) => {
            let number = kind.narrow(token.parse::<f64>().map_err(|_| invalid())?);

            // Only an explicit infinity may convert to one.
            if number.is_infinite() && !token.to_ascii_lowercase().contains("inf") {
                Err(invalid())
            } else {
                Ok(Value::Float(number))
            }
        }
        ConversionType::Enum(variants) => {
            // Numeric literals must never match an enum.
            if token.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
                return Err(invalid());
            }

            variants
                .iter()
                .find(|variant| {
                    if settings.case_insensitive_enum_values {
                        variant.eq_ignore_ascii_case(token)
                    } else {
                        *variant == token
                    }
                })
                .map(|variant| Value::Enum(variant.clone()))
                .ok_or_else(invalid)
        }
        ConversionType::Custom { validate, .. } => {
            if validate(token) {
                Ok(Value::Custom(token.to_string()))
            } else {
                Err(invalid())
            }
        }
        ConversionType::Sequence(_) => Err(invalid()),
    }
}
