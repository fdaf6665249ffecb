use crate::model::{DeriveField, DeriveOptions, DeriveVerb};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveOptions> for TokenStream2 {
    fn from(value: DeriveOptions) -> Self {
        let DeriveOptions {
            struct_name,
            verb,
            fields,
        } = value;
        let specifications = fields.iter().filter_map(DeriveField::specification);
        let bindings = fields.iter().map(DeriveField::binding);
        let verb = verb.map(DeriveVerb::generate);

        quote! {
            impl ::cmdspec::Specified for #struct_name {
                fn specifications() -> ::std::vec::Vec<::cmdspec::Specification> {
                    ::std::vec![ #( #specifications ),* ]
                }

                #[allow(unused_mut, unused_variables)]
                fn bind(mut values: ::cmdspec::BoundValues) -> Self {
                    Self { #( #bindings ),* }
                }

                #verb
            }
        }
    }
}

impl DeriveVerb {
    fn generate(self) -> TokenStream2 {
        let DeriveVerb {
            name,
            help,
            hidden,
            default_verb,
        } = self;
        let name = name.tokens;
        let mut info = quote! { ::cmdspec::VerbInfo::new(#name) };

        if let Some(help) = help {
            let help = help.tokens;
            info = quote! { #info.help(#help) };
        }

        if hidden {
            info = quote! { #info.hidden() };
        }

        if default_verb {
            info = quote! { #info.as_default() };
        }

        quote! {
            fn verb() -> ::std::option::Option<::cmdspec::VerbInfo> {
                ::std::option::Option::Some(#info)
            }
        }
    }
}
