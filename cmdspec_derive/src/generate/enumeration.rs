use crate::model::DeriveEnum;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveEnum> for TokenStream2 {
    fn from(value: DeriveEnum) -> Self {
        let DeriveEnum {
            enum_name,
            variants,
        } = value;
        let names: Vec<&String> = variants.iter().map(|variant| &variant.name).collect();
        let from_arms: Vec<TokenStream2> = variants
            .iter()
            .map(|variant| {
                let name = &variant.name;
                let variant_name = &variant.variant_name;
                quote! { #name => ::std::option::Option::Some(#enum_name::#variant_name) }
            })
            .collect();
        let to_arms: Vec<TokenStream2> = variants
            .iter()
            .map(|variant| {
                let name = &variant.name;
                let variant_name = &variant.variant_name;
                quote! { #enum_name::#variant_name => #name }
            })
            .collect();

        quote! {
            impl ::cmdspec::Convertible for #enum_name {
                fn conversion() -> ::cmdspec::ConversionType {
                    ::cmdspec::ConversionType::Enum(::std::vec![
                        #( ::std::string::String::from(#names) ),*
                    ])
                }

                fn from_value(value: ::cmdspec::Value) -> ::std::option::Option<Self> {
                    match value {
                        ::cmdspec::Value::Enum(name) => match name.as_str() {
                            #( #from_arms, )*
                            _ => ::std::option::Option::None,
                        },
                        _ => ::std::option::Option::None,
                    }
                }

                fn to_value(&self) -> ::std::option::Option<::cmdspec::Value> {
                    let name = match self {
                        #( #to_arms, )*
                    };
                    ::std::option::Option::Some(::cmdspec::Value::Enum(
                        ::std::string::String::from(name),
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveVariant;
    use crate::test::{ident, simple_format};

    #[test]
    fn render() {
        // Setup
        let derive_enum = DeriveEnum {
            enum_name: ident("Mode"),
            variants: vec![
                DeriveVariant {
                    variant_name: ident("Fast"),
                    name: "fast".to_string(),
                },
                DeriveVariant {
                    variant_name: ident("Slow"),
                    name: "Slow".to_string(),
                },
            ],
        };

        // Execute
        let token_stream = TokenStream2::from(derive_enum);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl :: cmdspec :: Convertible for Mode {
 fn conversion () -> :: cmdspec :: ConversionType {
 :: cmdspec :: ConversionType :: Enum (:: std :: vec ! [:: std :: string :: String :: from ("fast") , :: std :: string :: String :: from ("Slow")]) }
 fn from_value (value : :: cmdspec :: Value) -> :: std :: option :: Option < Self > {
 match value {
 :: cmdspec :: Value :: Enum (name) => match name . as_str () {
 "fast" => :: std :: option :: Option :: Some (Mode :: Fast) , "Slow" => :: std :: option :: Option :: Some (Mode :: Slow) , _ => :: std :: option :: Option :: None , }
 , _ => :: std :: option :: Option :: None , }
 }
 fn to_value (& self) -> :: std :: option :: Option < :: cmdspec :: Value > {
 let name = match self {
 Mode :: Fast => "fast" , Mode :: Slow => "Slow" , }
 ;
 :: std :: option :: Option :: Some (:: cmdspec :: Value :: Enum (:: std :: string :: String :: from (name) ,)) }
 }
"#,
        );
    }
}
