use std::collections::HashSet;

use crate::api::{BoundValues, ConversionType, Convertible, ParserSettings, Value};
use crate::model::{NameInfo, TargetType, TypeDescriptor};
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The option (named) part of a [`Specification`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSpecification {
    short_name: Option<char>,
    long_name: String,
    separator: Option<char>,
    set_name: String,
    help_text: Option<String>,
    meta_value: Option<String>,
    hidden: bool,
}

impl OptionSpecification {
    #[allow(missing_docs)]
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    #[allow(missing_docs)]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// The mutually exclusive set this option belongs to (empty for none).
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    #[allow(missing_docs)]
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    #[allow(missing_docs)]
    pub fn meta_value(&self) -> Option<&str> {
        self.meta_value.as_deref()
    }

    #[allow(missing_docs)]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// The positional part of a [`Specification`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSpecification {
    index: usize,
    meta_name: Option<String>,
    help_text: Option<String>,
}

impl ValueSpecification {
    /// The position, relative to the other values.
    pub fn index(&self) -> usize {
        self.index
    }

    #[allow(missing_docs)]
    pub fn meta_name(&self) -> Option<&str> {
        self.meta_name.as_deref()
    }

    #[allow(missing_docs)]
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }
}

/// Whether a [`Specification`] is named or positional.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecificationKind {
    Option(OptionSpecification),
    Value(ValueSpecification),
}

/// The static description of one declared option or positional value.
///
/// ### Example
/// ```
/// use cmdspec_builder::{ConversionType, Specification, TargetType};
///
/// let items = Specification::option_of::<Vec<String>>("items")
///     .short('i')
///     .separator(',')
///     .min(1)
///     .max(3);
/// assert_eq!(items.target(), TargetType::Sequence);
/// assert_eq!(items.max_value_count(), Some(3));
///
/// let file = Specification::value("file", 0, ConversionType::Text).required();
/// assert!(file.is_value());
/// assert!(file.is_required());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    property: String,
    kind: SpecificationKind,
    required: bool,
    min: Option<usize>,
    max: Option<usize>,
    default: Option<Value>,
    conversion: ConversionType,
    target: TargetType,
}

impl Specification {
    fn new(
        property: &str,
        kind: SpecificationKind,
        conversion: ConversionType,
        target: TargetType,
    ) -> Self {
        Self {
            property: property.to_string(),
            kind,
            required: false,
            min: None,
            max: None,
            default: None,
            conversion,
            target,
        }
    }

    /// Create a named option.
    ///
    /// Without an explicit short or long name, the long name is the lower cased property.
    pub fn option(property: &str, conversion: ConversionType) -> Self {
        let target = TargetType::from(&conversion);
        Self::new(
            property,
            SpecificationKind::Option(OptionSpecification::default()),
            conversion,
            target,
        )
    }

    /// Create a named option for the Rust type `T`.
    pub fn option_of<T: Convertible>(property: &str) -> Self {
        Self::new(
            property,
            SpecificationKind::Option(OptionSpecification::default()),
            T::conversion(),
            T::target(),
        )
    }

    /// Create a positional value at `index`.
    pub fn value(property: &str, index: usize, conversion: ConversionType) -> Self {
        let target = positional_target(TargetType::from(&conversion));
        Self::new(property, Self::value_kind(index), conversion, target)
    }

    /// Create a positional value at `index` for the Rust type `T`.
    pub fn value_of<T: Convertible>(property: &str, index: usize) -> Self {
        Self::new(
            property,
            Self::value_kind(index),
            T::conversion(),
            positional_target(T::target()),
        )
    }

    fn value_kind(index: usize) -> SpecificationKind {
        SpecificationKind::Value(ValueSpecification {
            index,
            ..ValueSpecification::default()
        })
    }

    /// Set the short name; has no effect on positional values.
    pub fn short(mut self, name: char) -> Self {
        if let SpecificationKind::Option(ref mut option) = self.kind {
            option.short_name.replace(name);
        }
        self
    }

    /// Set the long name; has no effect on positional values.
    pub fn long(mut self, name: impl Into<String>) -> Self {
        if let SpecificationKind::Option(ref mut option) = self.kind {
            option.long_name = name.into();
        }
        self
    }

    /// Split the value following this option on `separator`; has no effect on positional values.
    pub fn separator(mut self, separator: char) -> Self {
        if let SpecificationKind::Option(ref mut option) = self.kind {
            option.separator.replace(separator);
        }
        self
    }

    /// Place this option in a mutually exclusive set; has no effect on positional values.
    pub fn set(mut self, set_name: impl Into<String>) -> Self {
        if let SpecificationKind::Option(ref mut option) = self.kind {
            option.set_name = set_name.into();
        }
        self
    }

    /// Hide this option from documentation; has no effect on positional values.
    pub fn hidden(mut self) -> Self {
        if let SpecificationKind::Option(ref mut option) = self.kind {
            option.hidden = true;
        }
        self
    }

    #[allow(missing_docs)]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        match self.kind {
            SpecificationKind::Option(ref mut option) => option.help_text.replace(text.into()),
            SpecificationKind::Value(ref mut value) => value.help_text.replace(text.into()),
        };
        self
    }

    /// The meta value of an option, or meta name of a positional value.
    pub fn meta(mut self, text: impl Into<String>) -> Self {
        match self.kind {
            SpecificationKind::Option(ref mut option) => option.meta_value.replace(text.into()),
            SpecificationKind::Value(ref mut value) => value.meta_name.replace(text.into()),
        };
        self
    }

    #[allow(missing_docs)]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The minimum number of sequence values.
    pub fn min(mut self, min: usize) -> Self {
        self.min.replace(min);
        self
    }

    /// The maximum number of sequence values.
    pub fn max(mut self, max: usize) -> Self {
        self.max.replace(max);
        self
    }

    /// The value bound when nothing is parsed.
    pub fn default(mut self, value: Value) -> Self {
        self.default.replace(value);
        self
    }

    /// Like [`Specification::default`], accepting the output of [`Convertible::to_value`].
    pub fn default_value(mut self, value: Option<Value>) -> Self {
        self.default = value;
        self
    }

    /// The name of the bound property.
    pub fn property(&self) -> &str {
        &self.property
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> &SpecificationKind {
        &self.kind
    }

    #[allow(missing_docs)]
    pub fn is_option(&self) -> bool {
        matches!(self.kind, SpecificationKind::Option(_))
    }

    #[allow(missing_docs)]
    pub fn is_value(&self) -> bool {
        matches!(self.kind, SpecificationKind::Value(_))
    }

    #[allow(missing_docs)]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[allow(missing_docs)]
    pub fn get_min(&self) -> Option<usize> {
        self.min
    }

    #[allow(missing_docs)]
    pub fn get_max(&self) -> Option<usize> {
        self.max
    }

    #[allow(missing_docs)]
    pub fn get_default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[allow(missing_docs)]
    pub fn conversion(&self) -> &ConversionType {
        &self.conversion
    }

    #[allow(missing_docs)]
    pub fn target(&self) -> TargetType {
        self.target
    }

    /// The partitioning view of this specification.
    pub fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(self.target, self.max_value_count())
    }

    /// The most values this specification takes: 1 for scalars, the declared max for sequences, none for switches.
    pub fn max_value_count(&self) -> Option<usize> {
        match self.target {
            TargetType::Switch => None,
            TargetType::Scalar => Some(1),
            TargetType::Sequence => self.max,
        }
    }

    /// The names to report this specification under; empty for positional values.
    pub fn name_info(&self) -> NameInfo {
        match &self.kind {
            SpecificationKind::Option(option) => {
                NameInfo::new(option.short_name, option.long_name.clone())
            }
            SpecificationKind::Value(_) => NameInfo::empty(),
        }
    }

    /// The sequence separator of an option.
    pub fn get_separator(&self) -> Option<char> {
        match &self.kind {
            SpecificationKind::Option(option) => option.separator,
            SpecificationKind::Value(_) => None,
        }
    }

    /// The mutually exclusive set name; empty when none is declared.
    pub fn set_name(&self) -> &str {
        match &self.kind {
            SpecificationKind::Option(option) => &option.set_name,
            SpecificationKind::Value(_) => "",
        }
    }

    /// The position of a positional value.
    pub fn index(&self) -> Option<usize> {
        match &self.kind {
            SpecificationKind::Option(_) => None,
            SpecificationKind::Value(value) => Some(value.index),
        }
    }

    /// The declared variants, when the conversion is an enum.
    pub fn enum_values(&self) -> Option<&[String]> {
        self.conversion.enum_values()
    }

    /// Whether the option answers to `name` (either a short or long name).
    pub fn matches_name(&self, name: &str, case_sensitive: bool) -> bool {
        let option = match &self.kind {
            SpecificationKind::Option(option) => option,
            SpecificationKind::Value(_) => return false,
        };
        let equals = |left: &str, right: &str| {
            if case_sensitive {
                left == right
            } else {
                left.eq_ignore_ascii_case(right)
            }
        };

        let short_match = match option.short_name {
            Some(short) => {
                let mut buffer = [0; 4];
                equals(short.encode_utf8(&mut buffer), name)
            }
            None => false,
        };

        short_match || (!option.long_name.is_empty() && equals(&option.long_name, name))
    }

    pub(crate) fn normalized(mut self) -> Self {
        if let SpecificationKind::Option(ref mut option) = self.kind {
            if option.short_name.is_none() && option.long_name.is_empty() {
                option.long_name = self.property.to_lowercase();
            }
        }
        self
    }
}

fn positional_target(target: TargetType) -> TargetType {
    match target {
        TargetType::Switch => TargetType::Scalar,
        target => target,
    }
}

/// Normalize and check a specification table, before any parsing.
pub(crate) fn validate_specifications(
    specifications: Vec<Specification>,
    settings: &ParserSettings,
) -> Result<Vec<Specification>, ConfigError> {
    let specifications: Vec<Specification> = specifications
        .into_iter()
        .map(Specification::normalized)
        .collect();
    let case_sensitive = settings.is_case_sensitive();
    let fold = |name: &str| {
        if case_sensitive {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        }
    };
    let mut properties = HashSet::new();
    let mut long_names = HashSet::new();
    let mut short_names = HashSet::new();
    let mut indices = HashSet::new();

    for specification in &specifications {
        let property = specification.property();

        if property.is_empty() {
            return Err(ConfigError("property name must not be empty.".to_string()));
        }

        if !properties.insert(property.to_string()) {
            return Err(ConfigError(format!(
                "cannot duplicate the property '{property}'."
            )));
        }

        if (specification.target == TargetType::Sequence) != specification.conversion.is_sequence() {
            return Err(ConfigError(format!(
                "'{property}' declares a {} target for a {} conversion.",
                specification.target,
                specification.conversion.type_name()
            )));
        }

        match specification.target {
            TargetType::Switch | TargetType::Scalar => {
                if specification.min.is_some() || specification.max.is_some() {
                    return Err(ConfigError(format!(
                        "'{property}' is not a sequence and must not specify a range."
                    )));
                }
            }
            TargetType::Sequence => {
                if specification.min == Some(0) || specification.max == Some(0) {
                    return Err(ConfigError(format!(
                        "'{property}' must not specify a zero bound; omit the bound instead."
                    )));
                }

                if let (Some(min), Some(max)) = (specification.min, specification.max) {
                    if min > max {
                        return Err(ConfigError(format!(
                            "'{property}' specifies min {min} greater than max {max}."
                        )));
                    }
                }
            }
        }

        if let Some(default) = &specification.default {
            if let Some(variants) = specification.enum_values() {
                let defaults = match default {
                    Value::Sequence(values) => values.iter().collect(),
                    value => vec![value],
                };

                for value in defaults {
                    if !matches!(value, Value::Enum(variant) if variants.contains(variant)) {
                        return Err(ConfigError(format!(
                            "'{property}' default '{value}' is not one of {{{}}}.",
                            variants.join(", ")
                        )));
                    }
                }
            }
        }

        match specification.kind() {
            SpecificationKind::Option(option) => {
                let long_name = option.long_name();

                if long_name.chars().count() == 1 {
                    return Err(ConfigError(format!(
                        "long name '{long_name}' of '{property}' must be longer than one character."
                    )));
                }

                if long_name.starts_with('-') || long_name.contains(char::is_whitespace) {
                    return Err(ConfigError(format!(
                        "long name '{long_name}' of '{property}' must not start with '-' nor contain whitespace."
                    )));
                }

                if !long_name.is_empty() && !long_names.insert(fold(long_name)) {
                    return Err(ConfigError(format!(
                        "cannot duplicate the long name '{long_name}'."
                    )));
                }

                if let Some(short_name) = option.short_name() {
                    if short_name == '-' || short_name.is_whitespace() || short_name.is_ascii_digit()
                    {
                        return Err(ConfigError(format!(
                            "short name '{short_name}' of '{property}' is not allowed."
                        )));
                    }

                    if !short_names.insert(fold(&short_name.to_string())) {
                        return Err(ConfigError(format!(
                            "cannot duplicate the short name '{short_name}'."
                        )));
                    }
                }

                if option.separator.is_some() && specification.target != TargetType::Sequence {
                    return Err(ConfigError(format!(
                        "'{property}' is not a sequence and must not specify a separator."
                    )));
                }
            }
            SpecificationKind::Value(value) => {
                if !indices.insert(value.index()) {
                    return Err(ConfigError(format!(
                        "cannot duplicate the value index {}.",
                        value.index()
                    )));
                }
            }
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Validated {} specifications.", specifications.len());
    }

    Ok(specifications)
}

/// Information about a verb (sub-command) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbInfo {
    name: String,
    help: Option<String>,
    hidden: bool,
    is_default: bool,
}

impl VerbInfo {
    /// Create verb information for the verb `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: None,
            hidden: false,
            is_default: false,
        }
    }

    #[allow(missing_docs)]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help.replace(text.into());
        self
    }

    #[allow(missing_docs)]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Select this verb when no arguments are given.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(missing_docs)]
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    #[allow(missing_docs)]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[allow(missing_docs)]
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// Behaviour of a type that declares its command line specification and binds from parsed values.
///
/// Typically implemented via `#[derive(Options)]`.
pub trait Specified: Sized {
    /// The specification table.
    fn specifications() -> Vec<Specification>;

    /// Construct from the values of one parse.
    fn bind(values: BoundValues) -> Self;

    /// The verb information, for types used as verbs.
    fn verb() -> Option<VerbInfo> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IntegerKind;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn text_list() -> ConversionType {
        ConversionType::Sequence(Box::new(ConversionType::Text))
    }

    fn colour() -> ConversionType {
        ConversionType::Enum(vec!["Red".to_string(), "Blue".to_string()])
    }

    #[test]
    fn option_builder() {
        // Execute
        let specification = Specification::option("items", text_list())
            .short('i')
            .long("item")
            .separator(':')
            .set("group")
            .help("the items")
            .meta("ITEM")
            .hidden()
            .required()
            .min(1)
            .max(2);

        // Verify
        assert!(specification.is_option());
        assert!(specification.is_required());
        assert_eq!(specification.property(), "items");
        assert_eq!(specification.name_info(), NameInfo::new(Some('i'), "item"));
        assert_eq!(specification.get_separator(), Some(':'));
        assert_eq!(specification.set_name(), "group");
        assert_eq!(specification.index(), None);
        assert_eq!(
            specification.type_descriptor(),
            TypeDescriptor::new(TargetType::Sequence, Some(2))
        );
        assert_matches!(specification.kind(), SpecificationKind::Option(option) => {
            assert_eq!(option.help_text(), Some("the items"));
            assert_eq!(option.meta_value(), Some("ITEM"));
            assert!(option.is_hidden());
        });
    }

    #[test]
    fn value_builder() {
        // Execute
        let specification = Specification::value("flag", 2, ConversionType::Bool)
            .short('x')
            .separator(',')
            .meta("FLAG")
            .help("a positional flag");

        // Verify
        assert!(specification.is_value());
        assert_eq!(specification.target(), TargetType::Scalar);
        assert_eq!(specification.index(), Some(2));
        assert_eq!(specification.name_info(), NameInfo::empty());
        assert_eq!(specification.get_separator(), None);
        assert_eq!(specification.set_name(), "");
        assert!(!specification.matches_name("x", true));
        assert_matches!(specification.kind(), SpecificationKind::Value(value) => {
            assert_eq!(value.meta_name(), Some("FLAG"));
            assert_eq!(value.help_text(), Some("a positional flag"));
        });
    }

    #[rstest]
    #[case(Specification::option_of::<bool>("x"), TargetType::Switch, None)]
    #[case(Specification::option_of::<Option<bool>>("x"), TargetType::Scalar, Some(1))]
    #[case(Specification::option_of::<u16>("x"), TargetType::Scalar, Some(1))]
    #[case(Specification::option_of::<Vec<u16>>("x"), TargetType::Sequence, None)]
    #[case(Specification::option_of::<Vec<u16>>("x").max(4), TargetType::Sequence, Some(4))]
    #[case(Specification::value_of::<bool>("x", 0), TargetType::Scalar, Some(1))]
    fn typed(
        #[case] specification: Specification,
        #[case] target: TargetType,
        #[case] max_value_count: Option<usize>,
    ) {
        assert_eq!(specification.target(), target);
        assert_eq!(specification.max_value_count(), max_value_count);
    }

    #[rstest]
    #[case(Specification::option("Verbose", ConversionType::Bool), NameInfo::new(None, "verbose"))]
    #[case(Specification::option("Verbose", ConversionType::Bool).short('v'), NameInfo::new(Some('v'), ""))]
    #[case(Specification::option("Verbose", ConversionType::Bool).long("loud"), NameInfo::new(None, "loud"))]
    fn normalized(#[case] specification: Specification, #[case] expected: NameInfo) {
        assert_eq!(specification.normalized().name_info(), expected);
    }

    #[rstest]
    #[case("v", true, true)]
    #[case("V", true, false)]
    #[case("V", false, true)]
    #[case("verbose", true, true)]
    #[case("VERBOSE", false, true)]
    #[case("verb", true, false)]
    #[case("", true, false)]
    fn matches_name(#[case] name: &str, #[case] case_sensitive: bool, #[case] expected: bool) {
        let specification = Specification::option("verbose", ConversionType::Bool)
            .short('v')
            .long("verbose");
        assert_eq!(specification.matches_name(name, case_sensitive), expected);
    }

    #[test]
    fn validate_ok() {
        // Setup
        let specifications = vec![
            Specification::option("verbose", ConversionType::Bool).short('v'),
            Specification::option("Count", ConversionType::Integer(IntegerKind::U8)),
            Specification::option("items", text_list()).separator(',').min(1).max(3),
            Specification::option("colour", colour()).default(Value::Enum("Red".to_string())),
            Specification::value("file", 0, ConversionType::Text),
            Specification::value("rest", 1, text_list()),
        ];

        // Execute
        let specifications =
            validate_specifications(specifications, &ParserSettings::default()).unwrap();

        // Verify
        assert_eq!(specifications.len(), 6);
        assert_eq!(specifications[1].name_info(), NameInfo::new(None, "count"));
    }

    #[rstest]
    #[case(vec![Specification::option("", ConversionType::Text)], "must not be empty")]
    #[case(vec![Specification::option("alpha", ConversionType::Text).min(1)], "must not specify a range")]
    #[case(vec![Specification::option("alpha", ConversionType::Bool).max(1)], "must not specify a range")]
    #[case(vec![Specification::value("alpha", 0, ConversionType::Text).max(1)], "must not specify a range")]
    #[case(vec![Specification::option("alpha", text_list()).min(0)], "zero bound")]
    #[case(vec![Specification::option("alpha", text_list()).max(0)], "zero bound")]
    #[case(vec![Specification::option("alpha", text_list()).min(3).max(2)], "greater than max")]
    #[case(vec![Specification::option("alpha", ConversionType::Text).long("x")], "longer than one character")]
    #[case(vec![Specification::option("alpha", ConversionType::Text).long("-ab")], "must not start with '-'")]
    #[case(vec![Specification::option("alpha", ConversionType::Text).long("a b")], "contain whitespace")]
    #[case(vec![Specification::option("alpha", ConversionType::Text).short('1')], "is not allowed")]
    #[case(vec![
        Specification::option("alpha", ConversionType::Text).long("name"),
        Specification::option("bravo", ConversionType::Text).long("name"),
    ], "duplicate the long name 'name'")]
    #[case(vec![
        Specification::option("alpha", ConversionType::Text).short('n'),
        Specification::option("bravo", ConversionType::Text).short('n'),
    ], "duplicate the short name 'n'")]
    #[case(vec![
        Specification::value("alpha", 0, ConversionType::Text),
        Specification::value("bravo", 0, ConversionType::Text),
    ], "duplicate the value index 0")]
    #[case(vec![
        Specification::option("alpha", ConversionType::Text).short('a'),
        Specification::value("alpha", 0, ConversionType::Text),
    ], "duplicate the property 'alpha'")]
    #[case(vec![Specification::option("alpha", ConversionType::Text).separator(',')], "must not specify a separator")]
    #[case(vec![Specification::option("alpha", colour()).default(Value::Enum("Green".to_string()))], "is not one of {Red, Blue}")]
    #[case(vec![Specification::option("alpha", colour()).default(Value::Text("Red".to_string()))], "is not one of")]
    fn validate_rejects(#[case] specifications: Vec<Specification>, #[case] message: &str) {
        // Execute
        let error = validate_specifications(specifications, &ParserSettings::default()).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), message);
    }

    #[test]
    fn validate_case_insensitive_duplicates() {
        // Setup
        let specifications = vec![
            Specification::option("a", ConversionType::Text).long("name"),
            Specification::option("b", ConversionType::Text).long("NAME"),
        ];

        // Execute & Verify
        assert!(validate_specifications(specifications.clone(), &ParserSettings::default()).is_ok());
        assert!(validate_specifications(
            specifications,
            &ParserSettings::default().case_sensitive(false)
        )
        .is_err());
    }

    #[test]
    fn verb_info() {
        let verb = VerbInfo::new("commit").help("record changes").as_default();
        assert_eq!(verb.name(), "commit");
        assert_eq!(verb.help_text(), Some("record changes"));
        assert!(verb.is_default());
        assert!(!verb.is_hidden());
    }
}
