//! Attribute parsing for `#[env("...")]` annotations.

use syn::{Field, LitStr};

/// Parsed `#[env(...)]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw `"<LOOKUP_KEY>[,modifier]*"` tag.
    ///
    /// `None` when the field carries no `#[env]` attribute and is not bound.
    /// The tag is split into key and modifiers at bind time.
    pub tag: Option<LitStr>,
}

impl FieldAttrs {
    /// Extract the `#[env("...")]` tag from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            if attrs.tag.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate `env` attribute; put modifiers in one tag: `#[env(\"KEY,required\")]`",
                ));
            }

            let tag = attr.parse_args::<LitStr>().map_err(|e| {
                syn::Error::new(
                    e.span(),
                    "expected a string tag: `#[env(\"KEY\")]` or `#[env(\"KEY,required\")]`",
                )
            })?;
            attrs.tag = Some(tag);
        }

        Ok(attrs)
    }
}
