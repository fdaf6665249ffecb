use crate::api::{BoundValues, Specified};
use crate::parser::Error;

/// The untyped outcome of one parse: the bound values, and every error found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    values: BoundValues,
    errors: Vec<Error>,
}

impl ParseOutcome {
    pub(crate) fn new(values: BoundValues, errors: Vec<Error>) -> Self {
        Self { values, errors }
    }

    pub(crate) fn signal(error: Error) -> Self {
        Self::new(BoundValues::default(), vec![error])
    }

    /// The values bound, including defaults.
    pub fn values(&self) -> &BoundValues {
        &self.values
    }

    /// The errors, in pipeline order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Whether there are no errors.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether a control flow signal (help, version, verb selection) ended the parse.
    pub fn stops_processing(&self) -> bool {
        self.errors.iter().any(Error::stops_processing)
    }

    #[allow(missing_docs)]
    pub fn into_parts(self) -> (BoundValues, Vec<Error>) {
        (self.values, self.errors)
    }

    /// Bind the values into `T`.
    pub fn bind<T: Specified>(self) -> ParserResult<T> {
        if self.errors.is_empty() {
            ParserResult::Parsed(T::bind(self.values))
        } else if self.stops_processing() {
            ParserResult::NotParsed {
                partial: None,
                errors: self.errors,
            }
        } else {
            ParserResult::NotParsed {
                partial: Some(T::bind(self.values)),
                errors: self.errors,
            }
        }
    }
}

/// The typed outcome of one parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserResult<T> {
    /// Parsing succeeded.
    Parsed(T),
    /// Parsing failed.
    NotParsed {
        /// The best effort instance; `None` when a control flow signal short-circuited the parse.
        partial: Option<T>,
        /// The errors, in pipeline order.
        errors: Vec<Error>,
    },
}

impl<T> ParserResult<T> {
    #[allow(missing_docs)]
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParserResult::Parsed(_))
    }

    /// The parsed instance, or the partial instance of a failed parse.
    pub fn value(&self) -> Option<&T> {
        match self {
            ParserResult::Parsed(value) => Some(value),
            ParserResult::NotParsed { partial, .. } => partial.as_ref(),
        }
    }

    /// The errors; empty when parsed.
    pub fn errors(&self) -> &[Error] {
        match self {
            ParserResult::Parsed(_) => &[],
            ParserResult::NotParsed { errors, .. } => errors,
        }
    }

    #[allow(missing_docs)]
    pub fn into_result(self) -> Result<T, Vec<Error>> {
        match self {
            ParserResult::Parsed(value) => Ok(value),
            ParserResult::NotParsed { errors, .. } => Err(errors),
        }
    }

    /// Transform the instance, keeping the errors.
    pub fn map<U>(self, function: impl Fn(T) -> U) -> ParserResult<U> {
        match self {
            ParserResult::Parsed(value) => ParserResult::Parsed(function(value)),
            ParserResult::NotParsed { partial, errors } => ParserResult::NotParsed {
                partial: partial.map(function),
                errors,
            },
        }
    }
}
