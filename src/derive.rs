//! Derive Api for `cmdspec` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a struct `S` with `#[derive(Options)]`.
//! This implements [`Specified`](crate::Specified) for `S`, so that `CommandLineParser::parse::<S>(..)` returns a `ParserResult<S>`.
//!
//! ```
//! use cmdspec::{derive::*, CommandLineParser};
//!
//! #[derive(Debug, Default, Options)]
//! struct Parameters {
//!     #[cmdspec(option, short = 'c', long = "count", default = 1u32)]
//!     count: u32,
//!     #[cmdspec(value, min = 1)]
//!     items: Vec<String>,
//!     cache: Option<String>,
//! }
//!
//! let parameters: Parameters = CommandLineParser::default()
//!     .parse(&["-c", "3", "a", "b"])
//!     .unwrap()
//!     .into_result()
//!     .unwrap();
//! assert_eq!(parameters.count, 3);
//! assert_eq!(parameters.items, vec!["a", "b"]);
//! assert_eq!(parameters.cache, None);
//! ```
//!
//! ### Field Configuration
//! Only fields marked `#[cmdspec(option)]` or `#[cmdspec(value)]` are on the command line.
//! The remaining fields bind with `Default::default()`.
//! * `short = 'c'`, `long = "name"`, `separator = ','`, `set = "name"`, and `hidden` configure options.
//! * `index = N` places a value; by default, values are indexed in field order.
//! * `help = ".."`, `meta = ".."`, `required`, `min = N`, `max = N`, and `default = EXPR` apply to both.
//!
//! ### Verb Configuration
//! `#[cmdspec(verb = "name")]` on the struct declares it as a verb, for use with [`VerbSpecification::of`](crate::VerbSpecification::of).
//! The verb may also be `hidden`, the `default_verb`, and carry `help = ".."`.
//!
//! ### Enumerations
//! `#[derive(OptionEnum)]` on a fieldless enum makes it [`Convertible`](crate::Convertible), matching its variants by name.
//! Rename a variant via `#[cmdspec(name = "..")]`.
pub use cmdspec_derive::*;
