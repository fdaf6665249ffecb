use thiserror::Error;

use crate::model::NameInfo;

/// A defect in the specification table itself, raised before any argument is looked at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// An error in the arguments of one parse.
///
/// Parsing never stops at the first error; every stage contributes its errors to one ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed option syntax, ex: `--=v`.
    #[error("Parse error: bad format token '{0}'.")]
    BadFormatToken(String),
    /// A name that matches no option.
    #[error("Parse error: unknown option '{0}'.")]
    UnknownOption(String),
    /// A name that needed a value but found none.
    #[error("Parse error: {} is missing a value.", describe(.0))]
    MissingValueOption(NameInfo),
    /// A value that did not convert to the declared type.
    #[error("Parse error: {} has a badly formatted value.", describe(.0))]
    BadFormatConversion(NameInfo),
    /// A sequence with too few or too many values.
    #[error("Parse error: {} has a number of values out of range.", describe(.0))]
    SequenceOutOfRange(NameInfo),
    /// A required option or value that was not supplied.
    #[error("Parse error: {} is required.", describe(.0))]
    MissingRequiredOption(NameInfo),
    /// An option supplied alongside an option of another mutually exclusive set.
    #[error("Parse error: {} of set '{set_name}' conflicts with another set.", describe(.name))]
    MutuallyExclusiveSet {
        /// The supplied option.
        name: NameInfo,
        /// The set it belongs to.
        set_name: String,
    },
    /// Help was requested.
    #[error("Help requested.")]
    HelpRequested,
    /// The version was requested.
    #[error("Version requested.")]
    VersionRequested,
    /// Help on a verb was requested, ex: `help commit`.
    #[error("Help requested for verb {}.", .verb.as_deref().unwrap_or("<none>"))]
    HelpVerbRequested {
        /// The verb, if the name matched one.
        verb: Option<String>,
    },
    /// No verb was given, and there is no default verb.
    #[error("Parse error: no verb selected.")]
    NoVerbSelected,
    /// The given verb is not declared.
    #[error("Parse error: bad verb '{0}'.")]
    BadVerbSelected(String),
}

impl Error {
    /// Whether this error is a control flow signal (help, version, verb selection) rather than bad input.
    pub fn stops_processing(&self) -> bool {
        matches!(
            self,
            Error::HelpRequested
                | Error::VersionRequested
                | Error::HelpVerbRequested { .. }
                | Error::NoVerbSelected
                | Error::BadVerbSelected(_)
        )
    }

    /// The names of the offending option, for the name based errors.
    pub fn name_info(&self) -> Option<&NameInfo> {
        match self {
            Error::MissingValueOption(name)
            | Error::BadFormatConversion(name)
            | Error::SequenceOutOfRange(name)
            | Error::MissingRequiredOption(name)
            | Error::MutuallyExclusiveSet { name, .. } => Some(name),
            _ => None,
        }
    }
}

fn describe(name: &NameInfo) -> String {
    if name.is_empty() {
        "a positional value".to_string()
    } else {
        format!("option '{name}'")
    }
}
