use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The loose contents of `#[cmdspec(..)]` attributes, before interpretation.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveOptions {
    pub struct_name: syn::Ident,
    pub verb: Option<DeriveVerb>,
    pub fields: Vec<DeriveField>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveVerb {
    pub name: DeriveValue,
    pub help: Option<DeriveValue>,
    pub hidden: bool,
    pub default_verb: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveField {
    pub field_name: syn::Ident,
    pub field_type: DeriveValue,
    pub kind: FieldKind,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Option {
        names: OptionNames,
        common: CommonProperties,
    },
    Value {
        index: DeriveValue,
        common: CommonProperties,
    },
    /// Not on the command line; bound with `Default::default()`.
    Ignored,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct OptionNames {
    pub short: Option<DeriveValue>,
    pub long: Option<DeriveValue>,
    pub separator: Option<DeriveValue>,
    pub set: Option<DeriveValue>,
    pub hidden: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CommonProperties {
    pub help: Option<DeriveValue>,
    pub meta: Option<DeriveValue>,
    pub required: bool,
    pub min: Option<DeriveValue>,
    pub max: Option<DeriveValue>,
    pub default: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveEnum {
    pub enum_name: syn::Ident,
    pub variants: Vec<DeriveVariant>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveVariant {
    pub variant_name: syn::Ident,
    /// The name on the command line.
    pub name: String,
}
