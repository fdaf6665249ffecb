//! `cmdspec` is a specification-driven command line parser for Rust.
//!
//! A program declares a table of [`Specification`]s, one per property: named options (`-c`, `--count`) and positional values.
//! The parser reads the arguments against that table and produces every value it could bind, along with every error it found.
//! It never stops at the first error.
//!
//! `cmdspec` prioritizes the following concerns:
//! * *Declarative specifications*:
//! The table says what each property is (its names, type, cardinality, and rules), not how to parse it.
//! * *Complete error reporting*:
//! Errors are collected across every stage, in a fixed and deterministic order.
//! A failed parse still yields a best effort, partially populated instance.
//! * *GNU/POSIX conventions*:
//! Short options group (`-vc 3`), attach their values (`-c3`), and long options take `--name=value`.
//! A lone `--` ends option scanning.
//! * *Typed results*:
//! Values convert into bool, char, strings, paths, integers, floats, enums, and any type with a string constructor.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo.rs")]
//! ```
//!
//! # Specifications
//! Each [`Specification`] is either an option or a positional value.
//! * [`Specification::option`] is found by name.
//! Without an explicit [`Specification::short`] or [`Specification::long`], the long name is the lower cased property.
//! * [`Specification::value`] is found by its index among the positional values.
//!
//! The [`ConversionType`] decides how many values each property consumes:
//! ```console
//! Conversion                  | Shape
//! --------------------------------------
//! Bool                        | Switch (option), Scalar (value)
//! Text, Integer, Enum, ...    | Scalar
//! Sequence(..)                | Sequence
//! ```
//!
//! Sequences may declare [`Specification::min`] and [`Specification::max`], and options may split their value on a [`Specification::separator`].
//!
//! # Rules
//! After mapping, the parser enforces, in this order:
//! * Mutually exclusive sets: options placed via [`Specification::set`] in different sets cannot be combined.
//! * Required: [`Specification::required`] properties must be supplied, unless another option of the same set was.
//! * Range: sequences must respect their min and max.
//!
//! # Errors
//! A defect in the specification table is a [`ConfigError`], returned before any argument is read.
//! Problems with the arguments are [`Error`]s, accumulated into the [`ParserResult`].
//! The help and version requests, along with verb selection failures, are also reported as errors: they [`Error::stops_processing`].
//!
//! # Verbs
//! Programs with sub-commands (ex: `git add`, `git status`) declare a [`VerbSpecification`] per verb:
//! ```no_run
#![doc = include_str!("../demos/demo_verbs.rs")]
//! ```
pub mod derive;
pub use cmdspec_builder::*;
