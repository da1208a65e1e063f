//! Field type inspection for the generated template.

use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::ToTokens;
use syn::Type;

/// Type text recorded for unsupported fields, e.g. `Vec<String>`.
pub fn type_text(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Whether `ty` names any of the struct's type parameters.
///
/// Such fields get a `BindTarget` bound on the generated impl.
pub fn mentions_type_param(ty: &Type, params: &[Ident]) -> bool {
    fn scan(tokens: TokenStream, params: &[Ident]) -> bool {
        tokens.into_iter().any(|tree| match tree {
            TokenTree::Ident(ident) => params.contains(&ident),
            TokenTree::Group(group) => scan(group.stream(), params),
            _ => false,
        })
    }
    scan(ty.to_token_stream(), params)
}
