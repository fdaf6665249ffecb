use crate::api::ConversionType;

/// The shape of the values a specification binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// No value follows the name; presence alone means `true`.
    Switch,
    /// Precisely one value.
    Scalar,
    /// Zero or more values, up to an optional maximum.
    Sequence,
}

impl From<&ConversionType> for TargetType {
    fn from(value: &ConversionType) -> Self {
        match value {
            ConversionType::Bool => TargetType::Switch,
            ConversionType::Sequence(_) => TargetType::Sequence,
            _ => TargetType::Scalar,
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The partitioning view of a specification: its shape and how many values it may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    target: TargetType,
    max_items: Option<usize>,
}

impl TypeDescriptor {
    /// Create a type descriptor.
    pub fn new(target: TargetType, max_items: Option<usize>) -> Self {
        Self { target, max_items }
    }

    /// The target shape.
    pub fn target(&self) -> TargetType {
        self.target
    }

    /// The maximum number of values, if bounded.
    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }
}

/// The names under which an option is reported in errors.
///
/// Positional values have no names; they are reported via [`NameInfo::empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NameInfo {
    short_name: Option<char>,
    long_name: String,
}

impl NameInfo {
    /// Create a name info.
    pub fn new(short_name: Option<char>, long_name: impl Into<String>) -> Self {
        Self {
            short_name,
            long_name: long_name.into(),
        }
    }

    /// The name info of an unnamed (positional) parameter.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The short name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// The long name (may be empty).
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Whether neither name is set.
    pub fn is_empty(&self) -> bool {
        self.short_name.is_none() && self.long_name.is_empty()
    }

    /// The combined name text, ex: `s, string`.
    pub fn name_text(&self) -> String {
        match (&self.short_name, self.long_name.is_empty()) {
            (Some(short), false) => format!("{short}, {}", self.long_name),
            (Some(short), true) => short.to_string(),
            (None, _) => self.long_name.clone(),
        }
    }
}

impl std::fmt::Display for NameInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FloatKind, IntegerKind};
    use rstest::rstest;

    #[rstest]
    #[case(ConversionType::Bool, TargetType::Switch)]
    #[case(ConversionType::Text, TargetType::Scalar)]
    #[case(ConversionType::Char, TargetType::Scalar)]
    #[case(ConversionType::Integer(IntegerKind::I32), TargetType::Scalar)]
    #[case(ConversionType::Float(FloatKind::F64), TargetType::Scalar)]
    #[case(ConversionType::Enum(vec!["Red".to_string()]), TargetType::Scalar)]
    #[case(ConversionType::Sequence(Box::new(ConversionType::Text)), TargetType::Sequence)]
    #[case(ConversionType::Sequence(Box::new(ConversionType::Bool)), TargetType::Sequence)]
    fn target_from_conversion(#[case] conversion: ConversionType, #[case] expected: TargetType) {
        assert_eq!(TargetType::from(&conversion), expected);
    }

    #[rstest]
    #[case(Some('s'), "string", "s, string")]
    #[case(Some('s'), "", "s")]
    #[case(None, "string", "string")]
    #[case(None, "", "")]
    fn name_text(#[case] short: Option<char>, #[case] long: &str, #[case] expected: &str) {
        let name_info = NameInfo::new(short, long);
        assert_eq!(name_info.name_text(), expected);
        assert_eq!(name_info.to_string(), expected);
        assert_eq!(name_info.is_empty(), expected.is_empty());
    }
}
