/// A classified command line argument (or fragment of one).
///
/// Equality is by kind and text; whether a value was explicitly assigned (`--name=value`) does not participate.
#[derive(Debug, Clone)]
pub(crate) enum Token {
    Name(String),
    Value {
        text: String,
        explicitly_assigned: bool,
    },
    /// A value that must never be reinterpreted as a name, nor split.
    ValueForced(String),
}

impl Token {
    pub(crate) fn name(text: impl Into<String>) -> Self {
        Token::Name(text.into())
    }

    pub(crate) fn value(text: impl Into<String>) -> Self {
        Token::Value {
            text: text.into(),
            explicitly_assigned: false,
        }
    }

    pub(crate) fn assigned(text: impl Into<String>) -> Self {
        Token::Value {
            text: text.into(),
            explicitly_assigned: true,
        }
    }

    pub(crate) fn forced(text: impl Into<String>) -> Self {
        Token::ValueForced(text.into())
    }

    pub(crate) fn text(&self) -> &str {
        match self {
            Token::Name(text) | Token::Value { text, .. } | Token::ValueForced(text) => text,
        }
    }

    pub(crate) fn into_text(self) -> String {
        match self {
            Token::Name(text) | Token::Value { text, .. } | Token::ValueForced(text) => text,
        }
    }

    pub(crate) fn is_name(&self) -> bool {
        matches!(self, Token::Name(_))
    }

    /// Whether this is any kind of value (forced or not).
    pub(crate) fn is_value(&self) -> bool {
        !self.is_name()
    }

    pub(crate) fn is_forced(&self) -> bool {
        matches!(self, Token::ValueForced(_))
    }

    pub(crate) fn is_explicitly_assigned(&self) -> bool {
        matches!(
            self,
            Token::Value {
                explicitly_assigned: true,
                ..
            }
        )
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Name(left), Token::Name(right)) => left == right,
            (Token::Value { text: left, .. }, Token::Value { text: right, .. }) => left == right,
            (Token::ValueForced(left), Token::ValueForced(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Token {}

/// The tokenizer's view of a name: whether it is known, and if so whether it takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameLookup {
    NotFound,
    Switch,
    TakesValue,
}
