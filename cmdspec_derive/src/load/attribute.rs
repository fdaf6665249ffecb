use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;

impl IntermediateAttributes {
    pub(crate) fn merge(&mut self, other: IntermediateAttributes) {
        self.singletons.extend(other.singletons);

        for (key, values) in other.pairs {
            self.pairs.entry(key).or_default().extend(values);
        }
    }
}

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let mut intermediate = IntermediateAttributes::default();

        for expression in value.parse_args_with(attributes_parser)? {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    intermediate
                        .pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                syn::Expr::Path(ref path) if path.path.get_ident().is_some() => {
                    if let Some(ident) = path.path.get_ident() {
                        intermediate.singletons.insert(ident.to_string());
                    }
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Unparseable attribute: {}",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(intermediate)
    }
}
