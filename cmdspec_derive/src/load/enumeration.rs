use crate::load::{load_attributes, single};
use crate::model::{DeriveEnum, DeriveVariant};
use crate::MACRO_OPTION_ENUM;

impl TryFrom<syn::DeriveInput> for DeriveEnum {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = value.ident.clone();

        match &value.data {
            syn::Data::Enum(data) => {
                if data.variants.is_empty() {
                    return Err(syn::Error::new(
                        enum_name.span(),
                        format!("Invalid - {MACRO_OPTION_ENUM} requires at least one variant."),
                    ));
                }

                let variants = data
                    .variants
                    .iter()
                    .map(DeriveVariant::try_from)
                    .collect::<Result<Vec<_>, _>>()?;

                if let Some(duplicate) = variants.iter().enumerate().find_map(|(i, variant)| {
                    variants[..i]
                        .iter()
                        .find(|other| other.name == variant.name)
                        .map(|_| variant)
                }) {
                    return Err(syn::Error::new(
                        duplicate.variant_name.span(),
                        format!("Invalid - duplicate variant name '{}'.", duplicate.name),
                    ));
                }

                Ok(DeriveEnum {
                    enum_name,
                    variants,
                })
            }
            _ => Err(syn::Error::new(
                enum_name.span(),
                format!("Invalid - {MACRO_OPTION_ENUM} only applies to enums."),
            )),
        }
    }
}

impl TryFrom<&syn::Variant> for DeriveVariant {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        let variant_name = value.ident.clone();

        if !matches!(value.fields, syn::Fields::Unit) {
            return Err(syn::Error::new(
                variant_name.span(),
                format!("Invalid - {MACRO_OPTION_ENUM} variants cannot have fields."),
            ));
        }

        let attributes = load_attributes(&value.attrs)?;
        let name = match single(&attributes, "name", &variant_name)? {
            Some(derive_value) => syn::parse2::<syn::LitStr>(derive_value.tokens)?.value(),
            None => variant_name.to_string(),
        };

        Ok(DeriveVariant { variant_name, name })
    }
}
