//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Ident};

mod attrs;
mod kind;

use attrs::FieldAttrs;

/// `EnvBind` derive macro
///
/// Implements `envbind::EnvBind` for a struct with named fields.
///
/// # Field Attributes
///
/// - `#[env("KEY")]`: bind the field from `KEY`
/// - `#[env("KEY,required")]`: fail when `KEY` is not set or empty
///
/// Fields without `#[env]` are not bound. A field's type is resolved through
/// `envbind::BindTarget`, so aliases of supported types bind like the type
/// they name. Other annotated types are reported by the binder as
/// unsupported when a value is found for them. A field whose type uses one
/// of the struct's type parameters adds a `BindTarget` bound to the impl.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Struct name
    let struct_name = &input.ident;
    let struct_name_str = struct_name.unraw().to_string();
    let type_params: Vec<Ident> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let mut generics = input.generics.clone();

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    struct_name,
                    "invalid bind target: EnvBind only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                struct_name,
                "invalid bind target: EnvBind only supports structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut templates = Vec::new();
    let mut assign_arms = Vec::new();

    for field in fields {
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(e) => return e.to_compile_error().into(),
        };

        // Fields without #[env] are not part of the template
        let Some(tag) = attrs.tag else {
            continue;
        };

        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = field_ident.unraw().to_string();
        let field_type = &field.ty;

        let type_text = kind::type_text(field_type);

        if kind::mentions_type_param(field_type, &type_params) {
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#field_type: ::envbind::BindTarget));
        }

        templates.push(quote! {
            ::envbind::FieldTemplate::new(#field_name, #tag, {
                #[allow(unused_imports)]
                use ::envbind::__private::{SupportedField as _, UnsupportedField as _};
                (&::envbind::__private::Field::<#field_type>::new()).field_kind(#type_text)
            })
        });
        assign_arms.push(quote! {
            #field_name => {
                #[allow(unused_imports)]
                use ::envbind::__private::{SupportedField as _, UnsupportedField as _};
                (&::envbind::__private::Field::<#field_type>::new())
                    .write(&mut self.#field_ident, __field, __value)
            }
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::envbind::EnvBind for #struct_name #ty_generics #where_clause {
            const NAME: &'static str = #struct_name_str;

            fn template() -> ::std::vec::Vec<::envbind::FieldTemplate> {
                ::std::vec![#(#templates),*]
            }

            fn assign(
                &mut self,
                __field: &str,
                __value: ::envbind::Value,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                match __field {
                    #(#assign_arms)*
                    _ => ::core::result::Result::Err(
                        ::envbind::BindError::assign(__field, __value.kind_name())
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}
