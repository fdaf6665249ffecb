//! Builder module for `cmdspec`.
//! See [documentation root](https://docs.rs/cmdspec/latest/cmdspec/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, Error, ParseOutcome, ParserResult, VerbOutcome, VerbSpecification};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
