/// Ends option scanning; everything after it is a (forced) value.
pub(crate) const DASH_DASH: &str = "--";
/// Conventional stdin/stdout marker, always a value.
pub(crate) const SINGLE_DASH: &str = "-";
pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: char = '-';
pub(crate) const ASSIGNMENT: char = '=';

pub(crate) const HELP_NAME: &str = "help";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const HELP_TOKEN: &str = "--help";
pub(crate) const VERSION_TOKEN: &str = "--version";
pub(crate) const HELP_VERB: &str = "help";

/// The implicit value a matched switch binds.
pub(crate) const SWITCH_VALUE: &str = "true";
