use crate::api::ParserSettings;
use crate::constant::*;
use crate::parser::Error;
use crate::tokens::model::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TokenizerSettings {
    pub(crate) ignore_unknown: bool,
    pub(crate) enable_dash_dash: bool,
    pub(crate) posixly_correct: bool,
}

impl From<&ParserSettings> for TokenizerSettings {
    fn from(value: &ParserSettings) -> Self {
        Self {
            ignore_unknown: value.is_ignore_unknown_arguments(),
            enable_dash_dash: value.is_enable_dash_dash(),
            posixly_correct: value.is_posixly_correct(),
        }
    }
}

/// Single pass, left to right, classification of raw arguments into tokens.
///
/// Errors never stop the tokenizer; every argument is fed so that all errors of one invocation are collected together.
pub(crate) struct Tokenizer<F> {
    lookup: F,
    settings: TokenizerSettings,
    consume_next: usize,
    force_values: bool,
    tokens: Vec<Token>,
    errors: Vec<Error>,
}

impl<F> Tokenizer<F>
where
    F: Fn(&str) -> NameLookup,
{
    pub(crate) fn new(lookup: F, settings: TokenizerSettings) -> Self {
        Self {
            lookup,
            settings,
            consume_next: 0,
            force_values: false,
            tokens: Vec::default(),
            errors: Vec::default(),
        }
    }

    pub(crate) fn feed(&mut self, argument: &str) {
        if self.force_values {
            self.tokens.push(Token::forced(argument));
        } else if self.consume_next > 0 {
            self.tokens.push(Token::value(argument));
            self.consume_next -= 1;
        } else if argument == DASH_DASH {
            if self.settings.enable_dash_dash {
                self.force_values = true;
            } else {
                self.tokens.push(Token::value(argument));
                self.latch_positional();
            }
        } else if argument == SINGLE_DASH {
            self.tokens.push(Token::value(argument));
            self.latch_positional();
        } else if let Some(text) = argument.strip_prefix(LONG_PREFIX) {
            self.feed_long(argument, text);
        } else if let Some(text) = argument.strip_prefix(SHORT_PREFIX) {
            self.feed_short(argument, text);
        } else {
            self.tokens.push(Token::value(argument));
            self.latch_positional();
        }
    }

    // Find a 'long' name, such as:
    //  --initial
    //  --initial ..
    //  --initial=..
    fn feed_long(&mut self, argument: &str, text: &str) {
        let (name, inline_value) = split_equals_delimiter(text);

        if name.is_empty() || name.contains(' ') {
            self.errors.push(Error::BadFormatToken(argument.to_string()));
            return;
        }

        match (self.lookup)(name) {
            NameLookup::NotFound => self.unknown(name),
            found => {
                self.tokens.push(Token::name(name));

                match (inline_value, found) {
                    (Some(value), _) => self.tokens.push(Token::assigned(value)),
                    (None, NameLookup::TakesValue) => self.consume_next += 1,
                    (None, _) => {
                        // Switches take nothing further.
                    }
                }
            }
        }
    }

    // Find 'short' name(s), such as (both -i and -v are example short names):
    //  -i
    //  -i..
    //  -i ..
    //  -i=..
    //  -vi..
    //  -vi ..
    //  -v=..
    fn feed_short(&mut self, argument: &str, text: &str) {
        // Negative numbers are values, not short name clusters.
        if text.starts_with(|c: char| c.is_ascii_digit()) {
            self.tokens.push(Token::value(argument));
            self.latch_positional();
            return;
        }

        for (index, single) in text.char_indices() {
            let name = single.to_string();

            let remainder = &text[index + single.len_utf8()..];

            match (self.lookup)(&name) {
                NameLookup::NotFound => self.unknown(&name),
                NameLookup::Switch => {
                    self.tokens.push(Token::name(name));

                    // An assignment (`-v=false`) ends the cluster.
                    if let Some(value) = remainder.strip_prefix(ASSIGNMENT) {
                        self.tokens.push(Token::assigned(value));
                        return;
                    }
                }
                NameLookup::TakesValue => {
                    self.tokens.push(Token::name(name));

                    if remainder.is_empty() {
                        self.consume_next += 1;
                    } else if let Some(value) = remainder.strip_prefix(ASSIGNMENT) {
                        self.tokens.push(Token::assigned(value));
                    } else {
                        self.tokens.push(Token::value(remainder));
                    }

                    // Only the final name in a cluster may take a value.
                    return;
                }
            }
        }
    }

    fn unknown(&mut self, name: &str) {
        if !self.settings.ignore_unknown {
            self.errors.push(Error::UnknownOption(name.to_string()));
        }
    }

    fn latch_positional(&mut self) {
        if self.settings.posixly_correct {
            self.force_values = true;
        }
    }

    pub(crate) fn close(self) -> (Vec<Token>, Vec<Error>) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Tokenized into {} tokens with {} errors.",
                self.tokens.len(),
                self.errors.len()
            );
        }

        (self.tokens, self.errors)
    }
}

pub(crate) fn tokenize<S, F>(
    arguments: &[S],
    lookup: F,
    settings: TokenizerSettings,
) -> (Vec<Token>, Vec<Error>)
where
    S: AsRef<str>,
    F: Fn(&str) -> NameLookup,
{
    let mut tokenizer = Tokenizer::new(lookup, settings);

    for argument in arguments {
        tokenizer.feed(argument.as_ref());
    }

    tokenizer.close()
}

/// Split the single value following a separator-configured name into multiple values.
///
/// Only the value immediately after the name is eligible; forced values are never split.
pub(crate) fn explode<F>(tokens: Vec<Token>, separator_lookup: F) -> Vec<Token>
where
    F: Fn(&str) -> Option<char>,
{
    let mut out = Vec::with_capacity(tokens.len());
    let mut pending: Option<char> = None;

    for token in tokens {
        match token {
            Token::Name(ref name) => {
                pending = separator_lookup(name);
                out.push(token);
            }
            Token::Value {
                text,
                explicitly_assigned,
            } => match pending.take() {
                Some(separator) if text.contains(separator) => {
                    out.extend(text.split(separator).map(|piece| Token::Value {
                        text: piece.to_string(),
                        explicitly_assigned,
                    }));
                }
                _ => out.push(Token::Value {
                    text,
                    explicitly_assigned,
                }),
            },
            Token::ValueForced(_) => {
                pending = None;
                out.push(token);
            }
        }
    }

    out
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once(ASSIGNMENT) {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}
