mod attribute;
mod enumeration;
mod field;
mod options;

use crate::model::{DeriveValue, IntermediateAttributes};
use crate::ATTRIBUTE;
use quote::ToTokens;

/// Gather every `#[cmdspec(..)]` attribute into one.
fn load_attributes(attributes: &[syn::Attribute]) -> Result<IntermediateAttributes, syn::Error> {
    let mut intermediate = IntermediateAttributes::default();

    for attribute in attributes {
        if attribute.path().is_ident(ATTRIBUTE) {
            intermediate.merge(IntermediateAttributes::try_from(attribute)?);
        }
    }

    Ok(intermediate)
}

/// The single value of the pair `key`, if present.
fn single(
    attributes: &IntermediateAttributes,
    key: &str,
    span: &impl ToTokens,
) -> Result<Option<DeriveValue>, syn::Error> {
    match attributes.pairs.get(key).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value.clone())),
        Some(_) => Err(syn::Error::new_spanned(
            span,
            format!("Invalid - `{key} = ..` may only be specified once."),
        )),
    }
}

fn incompatible_error(
    span: &impl ToTokens,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new_spanned(
        span,
        format!(
            "Invalid - field cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}
