use std::path::PathBuf;

use crate::api::{ConversionType, FloatKind, IntegerKind};
use crate::model::TargetType;

/// A converted argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    #[allow(missing_docs)]
    Bool(bool),
    #[allow(missing_docs)]
    Char(char),
    #[allow(missing_docs)]
    Text(String),
    /// Any integer width, range checked during conversion.
    Integer(i128),
    #[allow(missing_docs)]
    Float(f64),
    /// The canonical variant name.
    Enum(String),
    /// The text of a string-constructed type, already validated.
    Custom(String),
    #[allow(missing_docs)]
    Sequence(Vec<Value>),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Char(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) | Value::Enum(value) | Value::Custom(value) => write!(f, "{value}"),
            Value::Sequence(values) => {
                let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", items.join(" "))
            }
        }
    }
}

/// Behaviour to move a Rust type in and out of the [`Value`] model.
///
/// Implemented for the primitives, [`String`], [`PathBuf`], [`Option`], and [`Vec`].
/// Use [`from_str_value`] for types with a string constructor, or `#[derive(OptionEnum)]` for fieldless enums.
pub trait Convertible: Sized {
    /// The declared conversion type.
    fn conversion() -> ConversionType;

    /// The target shape; derived from the conversion type unless overridden.
    fn target() -> TargetType {
        TargetType::from(&Self::conversion())
    }

    /// Extract from a converted value, if the value has the right shape.
    fn from_value(value: Value) -> Option<Self>;

    /// Represent as a value; `None` when there is nothing to represent.
    fn to_value(&self) -> Option<Value>;
}

impl Convertible for bool {
    fn conversion() -> ConversionType {
        ConversionType::Bool
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }
}

impl Convertible for char {
    fn conversion() -> ConversionType {
        ConversionType::Char
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Char(value) => Some(value),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Char(*self))
    }
}

impl Convertible for String {
    fn conversion() -> ConversionType {
        ConversionType::Text
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Text(self.clone()))
    }
}

impl Convertible for PathBuf {
    fn conversion() -> ConversionType {
        ConversionType::Text
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(value) => Some(PathBuf::from(value)),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Text(self.to_string_lossy().into_owned()))
    }
}

macro_rules! integer_value {
    ($($type:ty => $kind:ident),* $(,)?) => {
        $(
            impl Convertible for $type {
                fn conversion() -> ConversionType {
                    ConversionType::Integer(IntegerKind::$kind)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Integer(value) => <$type>::try_from(value).ok(),
                        _ => None,
                    }
                }

                fn to_value(&self) -> Option<Value> {
                    Some(Value::Integer(*self as i128))
                }
            }
        )*
    };
}

integer_value!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
);

impl Convertible for f64 {
    fn conversion() -> ConversionType {
        ConversionType::Float(FloatKind::F64)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(value) => Some(value),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Float(*self))
    }
}

impl Convertible for f32 {
    fn conversion() -> ConversionType {
        ConversionType::Float(FloatKind::F32)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(value) => Some(value as f32),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Float(*self as f64))
    }
}

impl<T: Convertible> Convertible for Option<T> {
    fn conversion() -> ConversionType {
        T::conversion()
    }

    // An optional bool must be able to express absence, so it is not a switch.
    fn target() -> TargetType {
        match T::target() {
            TargetType::Switch => TargetType::Scalar,
            target => target,
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        T::from_value(value).map(Some)
    }

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(T::to_value)
    }
}

impl<T: Convertible> Convertible for Vec<T> {
    fn conversion() -> ConversionType {
        ConversionType::Sequence(Box::new(T::conversion()))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Sequence(values) => values.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        self.iter()
            .map(T::to_value)
            .collect::<Option<Vec<Value>>>()
            .map(Value::Sequence)
    }
}

/// Implement [`Convertible`] for a type with [`std::str::FromStr`] and [`std::fmt::Display`].
///
/// ### Example
/// ```
/// use cmdspec_builder::{from_str_value, Convertible, ConversionType, Value};
/// use std::net::Ipv4Addr;
///
/// struct Address(Ipv4Addr);
///
/// impl std::str::FromStr for Address {
///     type Err = std::net::AddrParseError;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         Ok(Address(Ipv4Addr::from_str(s)?))
///     }
/// }
///
/// impl std::fmt::Display for Address {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// from_str_value!(Address);
///
/// assert_matches::assert_matches!(Address::conversion(), ConversionType::Custom { .. });
/// let address = Address::from_value(Value::Custom("10.0.0.1".to_string())).unwrap();
/// assert_eq!(address.0, Ipv4Addr::new(10, 0, 0, 1));
/// ```
#[macro_export]
macro_rules! from_str_value {
    ($type:ty) => {
        impl $crate::Convertible for $type {
            fn conversion() -> $crate::ConversionType {
                $crate::ConversionType::Custom {
                    type_name: stringify!($type),
                    validate: |text| <$type as std::str::FromStr>::from_str(text).is_ok(),
                }
            }

            fn from_value(value: $crate::Value) -> Option<Self> {
                match value {
                    $crate::Value::Custom(text) => {
                        <$type as std::str::FromStr>::from_str(&text).ok()
                    }
                    _ => None,
                }
            }

            fn to_value(&self) -> Option<$crate::Value> {
                Some($crate::Value::Custom(self.to_string()))
            }
        }
    };
}

/// The values bound by one parse, keyed by property name, in specification order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundValues {
    values: Vec<(String, Value)>,
}

impl BoundValues {
    /// Bind a value, replacing any previous value of the same property.
    pub fn insert(&mut self, property: impl Into<String>, value: Value) {
        let property = property.into();

        match self.values.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((property, value)),
        }
    }

    /// The value bound to a property.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, value)| value)
    }

    /// Whether a property is bound.
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Remove the value of a property.
    pub fn remove(&mut self, property: &str) -> Option<Value> {
        let position = self.values.iter().position(|(p, _)| p == property)?;
        Some(self.values.remove(position).1)
    }

    /// Remove and convert the value of a property, falling back to `T::default()` when unbound or mis-shaped.
    pub fn take<T: Convertible + Default>(&mut self, property: &str) -> T {
        self.remove(property)
            .and_then(T::from_value)
            .unwrap_or_default()
    }

    /// The number of bound properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no property is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the `(property, value)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(p, v)| (p.as_str(), v))
    }
}
