use crate::load::{incompatible_error, load_attributes, single};
use crate::model::{
    CommonProperties, DeriveField, DeriveValue, FieldKind, IntermediateAttributes, OptionNames,
};
use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;

const OPTION_ONLY: [&str; 4] = ["short", "long", "separator", "set"];

impl DeriveField {
    /// Load a named field; `implicit_index` is the index used by a value without `index = ..`.
    pub(crate) fn load(value: &syn::Field, implicit_index: TokenStream2) -> Result<Self, syn::Error> {
        let attributes = load_attributes(&value.attrs)?;
        let field_name = value
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(value, "Invalid - field must be named."))?;
        let field_type = DeriveValue {
            tokens: value.ty.to_token_stream(),
        };

        if attributes == IntermediateAttributes::default() {
            return Ok(DeriveField {
                field_name,
                field_type,
                kind: FieldKind::Ignored,
            });
        }

        let explicit_option = attributes.singletons.contains("option");
        let explicit_value = attributes.singletons.contains("value");

        let kind = match (explicit_option, explicit_value) {
            (true, true) => {
                return Err(incompatible_error(
                    &field_name,
                    "#[cmdspec(option)]",
                    "#[cmdspec(value)]",
                ));
            }
            (false, false) => {
                return Err(syn::Error::new_spanned(
                    &field_name,
                    "Invalid - field must be one of `#[cmdspec(option)]` or `#[cmdspec(value)]`.",
                ));
            }
            (true, false) => {
                if attributes.pairs.contains_key("index") {
                    return Err(incompatible_error(
                        &field_name,
                        "#[cmdspec(option)]",
                        "#[cmdspec(index = ..)]",
                    ));
                }

                FieldKind::Option {
                    names: OptionNames {
                        short: single(&attributes, "short", &field_name)?,
                        long: single(&attributes, "long", &field_name)?,
                        separator: single(&attributes, "separator", &field_name)?,
                        set: single(&attributes, "set", &field_name)?,
                        hidden: attributes.singletons.contains("hidden"),
                    },
                    common: load_common(&attributes, &field_name)?,
                }
            }
            (false, true) => {
                if let Some(key) = OPTION_ONLY
                    .iter()
                    .find(|key| attributes.pairs.contains_key(**key))
                {
                    return Err(incompatible_error(
                        &field_name,
                        "#[cmdspec(value)]",
                        format!("#[cmdspec({key} = ..)]"),
                    ));
                }

                if attributes.singletons.contains("hidden") {
                    return Err(incompatible_error(
                        &field_name,
                        "#[cmdspec(value)]",
                        "#[cmdspec(hidden)]",
                    ));
                }

                FieldKind::Value {
                    index: single(&attributes, "index", &field_name)?.unwrap_or(DeriveValue {
                        tokens: implicit_index,
                    }),
                    common: load_common(&attributes, &field_name)?,
                }
            }
        };

        Ok(DeriveField {
            field_name,
            field_type,
            kind,
        })
    }
}

fn load_common(
    attributes: &IntermediateAttributes,
    field_name: &syn::Ident,
) -> Result<CommonProperties, syn::Error> {
    Ok(CommonProperties {
        help: single(attributes, "help", field_name)?,
        meta: single(attributes, "meta", field_name)?,
        required: attributes.singletons.contains("required"),
        min: single(attributes, "min", field_name)?,
        max: single(attributes, "max", field_name)?,
        default: single(attributes, "default", field_name)?,
    })
}
