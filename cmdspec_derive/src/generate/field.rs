use crate::model::{CommonProperties, DeriveField, FieldKind};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveField {
    fn property(&self) -> String {
        let name = self.field_name.to_string();
        name.trim_start_matches("r#").to_string()
    }

    /// The `Specification` expression of this field; `None` when ignored.
    pub(crate) fn specification(&self) -> Option<TokenStream2> {
        let property = self.property();
        let field_type = &self.field_type.tokens;

        match &self.kind {
            FieldKind::Ignored => None,
            FieldKind::Option { names, common } => {
                let mut tokens =
                    quote! { ::cmdspec::Specification::option_of::<#field_type>(#property) };

                if names.short.is_none() && names.long.is_none() {
                    let long = property.replace('_', "-");
                    tokens = quote! { #tokens.long(#long) };
                }

                if let Some(short) = &names.short {
                    let short = &short.tokens;
                    tokens = quote! { #tokens.short(#short) };
                }

                if let Some(long) = &names.long {
                    let long = &long.tokens;
                    tokens = quote! { #tokens.long(#long) };
                }

                if let Some(separator) = &names.separator {
                    let separator = &separator.tokens;
                    tokens = quote! { #tokens.separator(#separator) };
                }

                if let Some(set) = &names.set {
                    let set = &set.tokens;
                    tokens = quote! { #tokens.set(#set) };
                }

                if names.hidden {
                    tokens = quote! { #tokens.hidden() };
                }

                Some(common.generate(tokens, field_type))
            }
            FieldKind::Value { index, common } => {
                let index = &index.tokens;
                let tokens =
                    quote! { ::cmdspec::Specification::value_of::<#field_type>(#property, #index) };
                Some(common.generate(tokens, field_type))
            }
        }
    }

    /// The field initializer within `Specified::bind`.
    pub(crate) fn binding(&self) -> TokenStream2 {
        let field_name = &self.field_name;

        match &self.kind {
            FieldKind::Ignored => quote! { #field_name: ::std::default::Default::default() },
            _ => {
                let property = self.property();
                quote! { #field_name: values.take(#property) }
            }
        }
    }
}

impl CommonProperties {
    fn generate(&self, mut tokens: TokenStream2, field_type: &TokenStream2) -> TokenStream2 {
        if let Some(help) = &self.help {
            let help = &help.tokens;
            tokens = quote! { #tokens.help(#help) };
        }

        if let Some(meta) = &self.meta {
            let meta = &meta.tokens;
            tokens = quote! { #tokens.meta(#meta) };
        }

        if self.required {
            tokens = quote! { #tokens.required() };
        }

        if let Some(min) = &self.min {
            let min = &min.tokens;
            tokens = quote! { #tokens.min(#min) };
        }

        if let Some(max) = &self.max {
            let max = &max.tokens;
            tokens = quote! { #tokens.max(#max) };
        }

        if let Some(default) = &self.default {
            let default = &default.tokens;
            tokens = quote! {
                #tokens.default_value(::cmdspec::Convertible::to_value(
                    &::std::convert::Into::<#field_type>::into(#default)
                ))
            };
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveValue, OptionNames};
    use crate::test::ident;

    fn field(name: &str, field_type: TokenStream2, kind: FieldKind) -> DeriveField {
        DeriveField {
            field_name: ident(name),
            field_type: DeriveValue { tokens: field_type },
            kind,
        }
    }

    #[test]
    fn render_ignored() {
        // Setup
        let derive_field = field("apple", quote! { u8 }, FieldKind::Ignored);

        // Execute & verify
        assert!(derive_field.specification().is_none());
        assert_eq!(
            derive_field.binding().to_string(),
            "apple : :: std :: default :: Default :: default ()"
        );
    }

    #[test]
    fn render_option() {
        // Setup
        let derive_field = field(
            "dry_run",
            quote! { Vec<u8> },
            FieldKind::Option {
                names: OptionNames {
                    short: Some(DeriveValue { tokens: quote! { 'd' } }),
                    separator: Some(DeriveValue { tokens: quote! { ',' } }),
                    set: Some(DeriveValue { tokens: quote! { "mode" } }),
                    ..OptionNames::default()
                },
                common: CommonProperties {
                    required: true,
                    max: Some(DeriveValue { tokens: quote! { 2 } }),
                    ..CommonProperties::default()
                },
            },
        );

        // Execute
        let specification = derive_field.specification().unwrap();

        // Verify
        assert_eq!(
            specification.to_string(),
            ":: cmdspec :: Specification :: option_of :: < Vec < u8 > > (\"dry_run\") . short ('d') . separator (',') . set (\"mode\") . required () . max (2)"
        );
        assert_eq!(
            derive_field.binding().to_string(),
            "dry_run : values . take (\"dry_run\")"
        );
    }

    #[test]
    fn render_option_implicit_long() {
        // Setup
        let derive_field = field(
            "dry_run",
            quote! { bool },
            FieldKind::Option {
                names: OptionNames::default(),
                common: CommonProperties::default(),
            },
        );

        // Execute
        let specification = derive_field.specification().unwrap();

        // Verify
        assert_eq!(
            specification.to_string(),
            ":: cmdspec :: Specification :: option_of :: < bool > (\"dry_run\") . long (\"dry-run\")"
        );
    }

    #[test]
    fn render_value() {
        // Setup
        let derive_field = field(
            "file",
            quote! { String },
            FieldKind::Value {
                index: DeriveValue { tokens: quote! { 0 } },
                common: CommonProperties {
                    help: Some(DeriveValue { tokens: quote! { "The file." } }),
                    default: Some(DeriveValue { tokens: quote! { "a.txt" } }),
                    ..CommonProperties::default()
                },
            },
        );

        // Execute
        let specification = derive_field.specification().unwrap();

        // Verify
        assert_eq!(
            specification.to_string(),
            ":: cmdspec :: Specification :: value_of :: < String > (\"file\" , 0) . help (\"The file.\") . default_value (:: cmdspec :: Convertible :: to_value (& :: std :: convert :: Into :: < String > :: into (\"a.txt\")))"
        );
    }
}
