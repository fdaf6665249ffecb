use crate::load::{load_attributes, single};
use crate::model::{DeriveField, DeriveOptions, DeriveVerb, FieldKind};
use crate::MACRO_OPTIONS;
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveOptions {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = load_attributes(&value.attrs)?;
        let struct_name = value.ident.clone();
        let verb = match single(&attributes, "verb", &struct_name)? {
            Some(name) => Some(DeriveVerb {
                name,
                help: single(&attributes, "help", &struct_name)?,
                hidden: attributes.singletons.contains("hidden"),
                default_verb: attributes.singletons.contains("default_verb"),
            }),
            None => None,
        };

        let named = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => &fields.named,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => {
                return Ok(DeriveOptions {
                    struct_name,
                    verb,
                    fields: Vec::default(),
                });
            }
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    format!("Invalid - {MACRO_OPTIONS} only applies to structs with named fields."),
                ));
            }
        };

        let mut fields = Vec::with_capacity(named.len());
        let mut positional = 0usize;

        for field in named {
            let implicit_index = quote! { #positional };
            let field = DeriveField::load(field, implicit_index)?;

            if let FieldKind::Value { .. } = field.kind {
                positional += 1;
            }

            fields.push(field);
        }

        Ok(DeriveOptions {
            struct_name,
            verb,
            fields,
        })
    }
}
