extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveEnum, DeriveOptions};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

const MACRO_OPTIONS: &str = "Options";
const MACRO_OPTION_ENUM: &str = "OptionEnum";
const ATTRIBUTE: &str = "cmdspec";

/// Implement `cmdspec::Specified` for a struct with named fields.
///
/// ### Struct attributes
/// * `#[cmdspec(verb = "name")]` also implements `Specified::verb`, for use with `VerbSpecification::of`.
/// May be combined with `help = "..."`, `hidden`, and `default_verb`.
///
/// ### Field attributes
/// Every field on the command line is either `#[cmdspec(option)]` or `#[cmdspec(value)]`.
/// Fields without a `#[cmdspec(..)]` attribute are not on the command line, and bind with `Default::default()`.
/// * Options: `short = 'c'`, `long = "name"`, `separator = ','`, `set = "name"`, `hidden`.
/// With neither `short` nor `long`, the long name is the field name with `_` replaced by `-`.
/// An option given only `short` has no long name.
/// * Values: `index = N`; defaults to the number of preceding value fields.
/// * Both: `help = "..."`, `meta = "..."`, `required`, `min = N`, `max = N`, `default = EXPR`.
///
/// Every field on the command line must implement `cmdspec::Convertible` and `Default`.
#[proc_macro_derive(Options, attributes(cmdspec))]
pub fn options(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    DeriveOptions::try_from(input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implement `cmdspec::Convertible` for a fieldless enum, as an enumerated option value.
///
/// Each variant is named by its identifier, unless renamed via `#[cmdspec(name = "...")]`.
#[proc_macro_derive(OptionEnum, attributes(cmdspec))]
pub fn option_enum(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    DeriveEnum::try_from(input)
        .map(TokenStream2::from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
