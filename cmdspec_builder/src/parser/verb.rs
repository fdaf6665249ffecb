use std::collections::HashSet;

use crate::api::{validate_specifications, ParserSettings, Specification, Specified};
use crate::constant::HELP_VERB;
use crate::parser::{ConfigError, Error, InstanceBuilder, ParseOutcome, ParserResult};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A verb (sub-command) and its own specification table.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbSpecification {
    name: String,
    help: Option<String>,
    hidden: bool,
    is_default: bool,
    specifications: Vec<Specification>,
}

impl VerbSpecification {
    /// Create a verb specification.
    pub fn new(name: impl Into<String>, specifications: Vec<Specification>) -> Self {
        Self {
            name: name.into(),
            help: None,
            hidden: false,
            is_default: false,
            specifications,
        }
    }

    /// Create the verb specification of a [`Specified`] type that declares verb information.
    pub fn of<T: Specified>() -> Result<Self, ConfigError> {
        let info = T::verb().ok_or_else(|| {
            ConfigError(format!(
                "type '{}' does not declare a verb.",
                std::any::type_name::<T>()
            ))
        })?;
        let mut verb = Self::new(info.name(), T::specifications());
        verb.help = info.help_text().map(str::to_string);
        verb.hidden = info.is_hidden();
        verb.is_default = info.is_default();
        Ok(verb)
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

    /// Select this verb when no verb is given.
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

    #[allow(missing_docs)]
    pub fn specifications(&self) -> &[Specification] {
        &self.specifications
    }
}

/// The outcome of a verb parse: the selected verb (if any), and the outcome of its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbOutcome {
    verb: Option<String>,
    outcome: ParseOutcome,
}

impl VerbOutcome {
    /// The selected verb; `None` when selection itself failed.
    pub fn verb(&self) -> Option<&str> {
        self.verb.as_deref()
    }

    #[allow(missing_docs)]
    pub fn outcome(&self) -> &ParseOutcome {
        &self.outcome
    }

    /// Whether `name` is the selected verb.
    pub fn is_verb(&self, name: &str) -> bool {
        self.verb.as_deref() == Some(name)
    }

    #[allow(missing_docs)]
    pub fn into_parts(self) -> (Option<String>, ParseOutcome) {
        (self.verb, self.outcome)
    }

    /// Bind the outcome into the verb type `T`.
    pub fn bind<T: Specified>(self) -> ParserResult<T> {
        self.outcome.bind()
    }
}

/// Validate every verb table, and the verb set itself.
pub(crate) fn validate_verbs(
    verbs: Vec<VerbSpecification>,
    settings: &ParserSettings,
) -> Result<Vec<VerbSpecification>, ConfigError> {
    let mut names = HashSet::new();
    let mut defaults = 0;
    let mut validated = Vec::with_capacity(verbs.len());

    for verb in verbs {
        let folded = if settings.is_case_sensitive() {
            verb.name.clone()
        } else {
            verb.name.to_ascii_lowercase()
        };

        if verb.name.is_empty()
            || verb.name.starts_with('-')
            || verb.name.contains(char::is_whitespace)
        {
            return Err(ConfigError(format!("invalid verb name '{}'.", verb.name)));
        }

        if verb.name.eq_ignore_ascii_case(HELP_VERB) {
            return Err(ConfigError(format!("verb name '{HELP_VERB}' is reserved.")));
        }

        if !names.insert(folded) {
            return Err(ConfigError(format!(
                "cannot duplicate the verb '{}'.",
                verb.name
            )));
        }

        if verb.is_default {
            defaults += 1;
        }

        let specifications = validate_specifications(verb.specifications, settings)?;
        validated.push(VerbSpecification {
            specifications,
            ..verb
        });
    }

    if defaults > 1 {
        return Err(ConfigError("cannot declare multiple default verbs.".to_string()));
    }

    Ok(validated)
}

/// Select the verb named by the first argument and parse the rest against it.
pub(crate) fn dispatch<S: AsRef<str>>(
    verbs: &[VerbSpecification],
    arguments: &[S],
    settings: &ParserSettings,
) -> VerbOutcome {
    let matches = |verb_name: &str, name: &str| {
        if settings.is_case_sensitive() {
            verb_name == name
        } else {
            verb_name.eq_ignore_ascii_case(name)
        }
    };
    let find = |name: &str| verbs.iter().find(|verb| matches(&verb.name, name));
    let default_verb = verbs.iter().find(|verb| verb.is_default);
    let parse = |verb: &VerbSpecification, arguments: &[S]| {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Selected verb '{}'.", verb.name);
        }

        VerbOutcome {
            verb: Some(verb.name.clone()),
            outcome: InstanceBuilder::new(&verb.specifications, settings).build(arguments),
        }
    };
    let signal = |error: Error| VerbOutcome {
        verb: None,
        outcome: ParseOutcome::signal(error),
    };

    let first = match arguments.first() {
        Some(first) => first.as_ref(),
        None => {
            return match default_verb {
                Some(verb) => parse(verb, arguments),
                None => signal(Error::NoVerbSelected),
            };
        }
    };

    if matches(HELP_VERB, first) {
        let verb = arguments
            .get(1)
            .and_then(|name| find(name.as_ref()))
            .map(|verb| verb.name.clone());
        return signal(Error::HelpVerbRequested { verb });
    }

    if settings.is_help_token(first) {
        return signal(Error::HelpRequested);
    }

    if settings.is_version_token(first) {
        return signal(Error::VersionRequested);
    }

    match (find(first), default_verb) {
        (Some(verb), _) => parse(verb, &arguments[1..]),
        // Without a verb name, the arguments belong to the default verb.
        (None, Some(verb)) => parse(verb, arguments),
        (None, None) => signal(Error::BadVerbSelected(first.to_string())),
    }
}
