use crate::api::{BoundValues, ParserSettings, Specification};
use crate::constant::{HELP_NAME, VERSION_NAME};
use crate::matcher::{partition, SpecificationLookup};
use crate::parser::{
    enforce_rules, map_options, map_values, Error, ParseOutcome, SpecificationProperty,
};
use crate::tokens::{explode, tokenize, Token, TokenizerSettings};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Drives one parse through the pipeline: tokenize, explode, partition, map, default, and validate.
pub(crate) struct InstanceBuilder<'s> {
    specifications: &'s [Specification],
    settings: &'s ParserSettings,
}

impl<'s> InstanceBuilder<'s> {
    /// The `specifications` must already be validated.
    pub(crate) fn new(specifications: &'s [Specification], settings: &'s ParserSettings) -> Self {
        Self {
            specifications,
            settings,
        }
    }

    pub(crate) fn build<S: AsRef<str>>(&self, arguments: &[S]) -> ParseOutcome {
        let lookup = SpecificationLookup::new(self.specifications, self.settings);

        if let Some(first) = arguments.first() {
            // A declared `help` option shadows the short-circuit.
            if lookup.builtin(HELP_NAME).is_some()
                && self.settings.is_help_token(first.as_ref())
            {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Help token short-circuit.");
                }

                return ParseOutcome::signal(Error::HelpRequested);
            }
        }

        let (tokens, mut errors) = tokenize(
            arguments,
            |name| lookup.name_lookup(name),
            TokenizerSettings::from(self.settings),
        );
        let tokens = explode(tokens, |name| lookup.separator(name));

        if let Some(signal) = builtin_signal(&tokens, &lookup) {
            return ParseOutcome::signal(signal);
        }

        let partitions = partition(tokens, |name| lookup.type_descriptor(name));
        errors.extend(
            partitions
                .errors
                .iter()
                .map(|token| Error::MissingValueOption(lookup.name_info(token.text()))),
        );

        let conversion_settings = self.settings.conversion_settings();
        let mut properties: Vec<SpecificationProperty> = self
            .specifications
            .iter()
            .map(SpecificationProperty::new)
            .collect();
        errors.extend(map_options(
            &mut properties,
            &partitions.options,
            &lookup,
            &conversion_settings,
        ));
        errors.extend(map_values(
            &mut properties,
            &partitions.values,
            &conversion_settings,
        ));

        for property in properties.iter_mut() {
            property.apply_default();
        }

        errors.extend(enforce_rules(&properties));

        let mut values = BoundValues::default();

        for property in properties {
            let name = property.specification().property().to_string();

            if let Some(value) = property.into_value() {
                values.insert(name, value);
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Built {} values with {} errors: {errors:?}.",
                values.len(),
                errors.len()
            );
        }

        ParseOutcome::new(values, errors)
    }
}

// The first help or version builtin named among the tokens.
fn builtin_signal(tokens: &[Token], lookup: &SpecificationLookup) -> Option<Error> {
    tokens
        .iter()
        .filter(|token| token.is_name())
        .find_map(|token| match lookup.builtin(token.text()) {
            Some(HELP_NAME) => Some(Error::HelpRequested),
            Some(VERSION_NAME) => Some(Error::VersionRequested),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{validate_specifications, ConversionType, IntegerKind, Value};
    use crate::model::NameInfo;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn specifications(settings: &ParserSettings) -> Vec<Specification> {
        validate_specifications(
            vec![
                Specification::option("verbose", ConversionType::Bool).short('v'),
                Specification::option("count", ConversionType::Integer(IntegerKind::I32))
                    .short('c')
                    .long("count"),
                Specification::option(
                    "list",
                    ConversionType::Sequence(Box::new(ConversionType::Text)),
                )
                .short('l')
                .long("list")
                .separator(','),
                Specification::option("name", ConversionType::Text)
                    .short('n')
                    .long("name")
                    .default(Value::Text("anonymous".to_string())),
                Specification::value("file", 0, ConversionType::Text),
            ],
            settings,
        )
        .unwrap()
    }

    fn build(arguments: &[&str]) -> ParseOutcome {
        let settings = ParserSettings::default();
        let specifications = specifications(&settings);
        InstanceBuilder::new(&specifications, &settings).build(arguments)
    }

    #[test]
    fn empty() {
        // Execute
        let outcome = build(&[]);

        // Verify
        assert!(outcome.is_success());
        assert_eq!(
            outcome.values().get("name"),
            Some(&Value::Text("anonymous".to_string()))
        );
        assert_eq!(outcome.values().get("list"), Some(&Value::Sequence(vec![])));
        assert_eq!(outcome.values().get("count"), None);
        assert_eq!(outcome.values().get("verbose"), None);
    }

    #[test]
    fn full() {
        // Execute
        let outcome = build(&["-vc", "-5", "--list=a,b", "in.txt", "--name", "x"]);

        // Verify
        assert!(outcome.is_success(), "{:?}", outcome.errors());
        let values = outcome.values();
        assert_eq!(values.get("verbose"), Some(&Value::Bool(true)));
        assert_eq!(values.get("count"), Some(&Value::Integer(-5)));
        assert_eq!(
            values.get("list"),
            Some(&Value::Sequence(vec![
                Value::Text("a".to_string()),
                Value::Text("b".to_string())
            ]))
        );
        assert_eq!(values.get("name"), Some(&Value::Text("x".to_string())));
        assert_eq!(values.get("file"), Some(&Value::Text("in.txt".to_string())));
        assert_eq!(
            values.iter().map(|(p, _)| p).collect::<Vec<_>>(),
            vec!["verbose", "count", "list", "name", "file"]
        );
    }

    #[rstest]
    #[case(vec!["--help"])]
    #[case(vec!["--HELP", "--count", "x"])]
    #[case(vec!["-c", "1", "--help"])]
    #[case(vec!["--foo", "--help"])]
    fn help(#[case] arguments: Vec<&str>) {
        let outcome = build(&arguments);
        assert_eq!(outcome.errors(), &[Error::HelpRequested]);
        assert!(outcome.values().is_empty());
    }

    #[test]
    fn version() {
        let outcome = build(&["-v", "--version", "--count", "x"]);
        assert_eq!(outcome.errors(), &[Error::VersionRequested]);
    }

    #[test]
    fn error_order() {
        // Execute
        let outcome = build(&["--foo", "--count", "3", "-c"]);

        // Verify
        assert_eq!(
            outcome.errors(),
            &[
                Error::UnknownOption("foo".to_string()),
                Error::MissingValueOption(NameInfo::new(Some('c'), "count")),
            ]
        );
    }

    #[test]
    fn error_order_across_stages() {
        // Setup
        let settings = ParserSettings::default();
        let specifications = validate_specifications(
            vec![
                Specification::option("count", ConversionType::Integer(IntegerKind::U8))
                    .long("count"),
                Specification::option("name", ConversionType::Text)
                    .long("name")
                    .required(),
                Specification::value("number", 0, ConversionType::Integer(IntegerKind::U8)),
            ],
            &settings,
        )
        .unwrap();

        // Execute
        let outcome = InstanceBuilder::new(&specifications, &settings)
            .build(&["-x", "--count", "300", "abc", "--name"]);

        // Verify
        assert_eq!(
            outcome.errors(),
            &[
                Error::UnknownOption("x".to_string()),
                Error::MissingValueOption(NameInfo::new(None, "name")),
                Error::BadFormatConversion(NameInfo::new(None, "count")),
                Error::BadFormatConversion(NameInfo::empty()),
                Error::MissingRequiredOption(NameInfo::new(None, "name")),
            ]
        );
    }

    #[test]
    fn deterministic() {
        let arguments = ["--bad", "-c", "q", "-z", "--list", "--name"];

        for _ in 0..25 {
            // Setup
            let length = thread_rng().gen_range(0..=arguments.len());

            // Execute
            let first = build(&arguments[..length]);
            let second = build(&arguments[..length]);

            // Verify
            assert_eq!(first, second);
        }
    }

    #[test]
    fn ignore_unknown() {
        // Setup
        let settings = ParserSettings::default().ignore_unknown_arguments(true);
        let specifications = specifications(&settings);

        // Execute
        let outcome = InstanceBuilder::new(&specifications, &settings).build(&["--foo"]);

        // Verify
        assert!(outcome.is_success());
        assert_eq!(outcome.values().get("count"), None);
    }

    #[test]
    fn help_option_declared() {
        // Setup
        let settings = ParserSettings::default();
        let specifications = validate_specifications(
            vec![Specification::option("help", ConversionType::Text).long("help")],
            &settings,
        )
        .unwrap();

        // Execute
        let outcome =
            InstanceBuilder::new(&specifications, &settings).build(&["--help", "topic"]);

        // Verify
        assert!(outcome.is_success(), "{:?}", outcome.errors());
        assert_eq!(
            outcome.values().get("help"),
            Some(&Value::Text("topic".to_string()))
        );
    }

    #[test]
    fn builtins_disabled() {
        // Setup
        let settings = ParserSettings::default().auto_help(false).auto_version(false);
        let specifications = specifications(&settings);

        // Execute
        let outcome = InstanceBuilder::new(&specifications, &settings).build(&["--help", "--version"]);

        // Verify
        assert_eq!(
            outcome.errors(),
            &[
                Error::UnknownOption("help".to_string()),
                Error::UnknownOption("version".to_string()),
            ]
        );
    }
}
