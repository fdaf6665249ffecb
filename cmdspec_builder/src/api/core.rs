use crate::api::{validate_specifications, ParserSettings, Specification, Specified};
use crate::parser::{
    dispatch, validate_verbs, ConfigError, InstanceBuilder, ParseOutcome, ParserResult,
    VerbOutcome, VerbSpecification,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser.
///
/// Stateless between calls; one parser may be reused for any number of parses.
///
/// ### Example
/// ```
/// use cmdspec_builder::{
///     BoundValues, CommandLineParser, ConversionType, Specification, Specified,
/// };
///
/// #[derive(Debug)]
/// struct Params {
///     verbose: bool,
///     items: Vec<u32>,
/// }
///
/// impl Specified for Params {
///     fn specifications() -> Vec<Specification> {
///         vec![
///             Specification::option_of::<bool>("verbose").short('v'),
///             Specification::option_of::<Vec<u32>>("items")
///                 .short('i')
///                 .separator(','),
///         ]
///     }
///
///     fn bind(mut values: BoundValues) -> Self {
///         Self {
///             verbose: values.take("verbose"),
///             items: values.take("items"),
///         }
///     }
/// }
///
/// let parser = CommandLineParser::default();
/// let params: Params = parser
///     .parse(&["-v", "-i", "1,2,3"])
///     .unwrap()
///     .into_result()
///     .unwrap();
/// assert!(params.verbose);
/// assert_eq!(params.items, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineParser {
    settings: ParserSettings,
}

impl CommandLineParser {
    /// Create a command line parser.
    pub fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    #[allow(missing_docs)]
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parse `arguments` against a specification table, returning the untyped outcome.
    ///
    /// A defect in the table is an `Err`; errors in the arguments are part of the `Ok` outcome.
    pub fn parse_values<S: AsRef<str>>(
        &self,
        specifications: Vec<Specification>,
        arguments: &[S],
    ) -> Result<ParseOutcome, ConfigError> {
        let specifications = validate_specifications(specifications, &self.settings)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing {} arguments.", arguments.len());
        }

        Ok(InstanceBuilder::new(&specifications, &self.settings).build(arguments))
    }

    /// Parse `arguments` into `T`.
    pub fn parse<T: Specified, S: AsRef<str>>(
        &self,
        arguments: &[S],
    ) -> Result<ParserResult<T>, ConfigError> {
        Ok(self.parse_values(T::specifications(), arguments)?.bind())
    }

    /// Parse the process arguments (without the program name) into `T`.
    pub fn parse_env<T: Specified>(&self) -> Result<ParserResult<T>, ConfigError> {
        let arguments: Vec<String> = std::env::args().skip(1).collect();
        self.parse(&arguments)
    }

    /// Select a verb by the first argument, then parse the remaining arguments against it.
    pub fn parse_verbs<S: AsRef<str>>(
        &self,
        verbs: Vec<VerbSpecification>,
        arguments: &[S],
    ) -> Result<VerbOutcome, ConfigError> {
        let verbs = validate_verbs(verbs, &self.settings)?;
        Ok(dispatch(&verbs, arguments, &self.settings))
    }
}
