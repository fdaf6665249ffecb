use crate::api::ConversionSettings;
use crate::constant::{HELP_TOKEN, VERSION_TOKEN};

/// The behaviour switches of a [`crate::CommandLineParser`].
///
/// ### Example
/// ```
/// use cmdspec_builder::ParserSettings;
///
/// let settings = ParserSettings::default()
///     .case_sensitive(false)
///     .ignore_unknown_arguments(true);
/// assert!(!settings.is_case_sensitive());
/// assert!(settings.is_ignore_unknown_arguments());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    case_sensitive: bool,
    case_insensitive_enum_values: bool,
    ignore_unknown_arguments: bool,
    enable_dash_dash: bool,
    posixly_correct: bool,
    auto_help: bool,
    auto_version: bool,
    help_token: String,
    version_token: String,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            case_insensitive_enum_values: false,
            ignore_unknown_arguments: false,
            enable_dash_dash: true,
            posixly_correct: false,
            auto_help: true,
            auto_version: true,
            help_token: HELP_TOKEN.to_string(),
            version_token: VERSION_TOKEN.to_string(),
        }
    }
}

impl ParserSettings {
    /// Whether option names are matched case sensitively (default `true`).
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    /// Whether enum values are matched ignoring case (default `false`).
    pub fn case_insensitive_enum_values(mut self, value: bool) -> Self {
        self.case_insensitive_enum_values = value;
        self
    }

    /// Whether unknown option names are silently dropped (default `false`).
    pub fn ignore_unknown_arguments(mut self, value: bool) -> Self {
        self.ignore_unknown_arguments = value;
        self
    }

    /// Whether a bare `--` ends option scanning (default `true`).
    pub fn enable_dash_dash(mut self, value: bool) -> Self {
        self.enable_dash_dash = value;
        self
    }

    /// Whether the first positional value ends option scanning (default `false`).
    pub fn posixly_correct(mut self, value: bool) -> Self {
        self.posixly_correct = value;
        self
    }

    /// Whether `help` is recognized as a builtin switch (default `true`).
    pub fn auto_help(mut self, value: bool) -> Self {
        self.auto_help = value;
        self
    }

    /// Whether `version` is recognized as a builtin switch (default `true`).
    pub fn auto_version(mut self, value: bool) -> Self {
        self.auto_version = value;
        self
    }

    /// The argument that, when first, short-circuits into a help request (default `--help`).
    pub fn help_token(mut self, value: impl Into<String>) -> Self {
        self.help_token = value.into();
        self
    }

    /// The argument that, in verb position, requests the version (default `--version`).
    pub fn version_token(mut self, value: impl Into<String>) -> Self {
        self.version_token = value.into();
        self
    }

    #[allow(missing_docs)]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[allow(missing_docs)]
    pub fn is_case_insensitive_enum_values(&self) -> bool {
        self.case_insensitive_enum_values
    }

    #[allow(missing_docs)]
    pub fn is_ignore_unknown_arguments(&self) -> bool {
        self.ignore_unknown_arguments
    }

    #[allow(missing_docs)]
    pub fn is_enable_dash_dash(&self) -> bool {
        self.enable_dash_dash
    }

    #[allow(missing_docs)]
    pub fn is_posixly_correct(&self) -> bool {
        self.posixly_correct
    }

    #[allow(missing_docs)]
    pub fn is_auto_help(&self) -> bool {
        self.auto_help
    }

    #[allow(missing_docs)]
    pub fn is_auto_version(&self) -> bool {
        self.auto_version
    }

    #[allow(missing_docs)]
    pub fn get_help_token(&self) -> &str {
        &self.help_token
    }

    #[allow(missing_docs)]
    pub fn get_version_token(&self) -> &str {
        &self.version_token
    }

    pub(crate) fn conversion_settings(&self) -> ConversionSettings {
        ConversionSettings::default().case_insensitive_enum_values(self.case_insensitive_enum_values)
    }

    pub(crate) fn is_help_token(&self, argument: &str) -> bool {
        self.auto_help && argument.eq_ignore_ascii_case(&self.help_token)
    }

    pub(crate) fn is_version_token(&self, argument: &str) -> bool {
        self.auto_version && argument.eq_ignore_ascii_case(&self.version_token)
    }
}
