//! Record templates: the per-field binding rules of an [`EnvBind`] record.

use std::fmt;

use crate::bind::Binder;
use crate::coerce::Value;
use crate::error::BindError;
use crate::provider::{EnvProvider, ValueProvider};

/// The modifier marking a field as mandatory.
pub const REQUIRED: &str = "required";

/// Closed set of coercion targets.
///
/// The bit width of `Complex` covers the whole value, so `Complex(64)` holds
/// two 32-bit components and `Complex(128)` two 64-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Verbatim string
    String,
    /// Signed integer of the given bit width
    SignedInteger(u32),
    /// Unsigned integer of the given bit width
    UnsignedInteger(u32),
    /// `float32` or `float64`
    Float(u32),
    /// Boolean with the extended vocabulary
    Boolean,
    /// `complex64` or `complex128`
    Complex(u32),
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::SignedInteger(bits) => write!(f, "int{bits}"),
            Self::UnsignedInteger(bits) => write!(f, "uint{bits}"),
            Self::Float(bits) => write!(f, "float{bits}"),
            Self::Boolean => f.write_str("bool"),
            Self::Complex(bits) => write!(f, "complex{bits}"),
        }
    }
}

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// One of the supported coercion targets
    Supported(TypeTag),
    /// Anything else, carrying the type as written on the field
    Unsupported(&'static str),
}

/// A field as declared on the record: its name, raw annotation and type.
///
/// `#[derive(EnvBind)]` emits one per `#[env("...")]` field, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTemplate {
    /// Field name
    pub field: &'static str,
    /// Raw annotation, e.g. `"PORT,required"`
    pub tag: &'static str,
    /// Declared type
    pub kind: FieldKind,
}

impl FieldTemplate {
    /// Create a template entry (used by macro-generated code)
    pub const fn new(field: &'static str, tag: &'static str, kind: FieldKind) -> Self {
        Self { field, tag, kind }
    }
}

/// Binding rule parsed from a [`FieldTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name
    pub field_name: &'static str,
    /// Key passed to the provider
    pub lookup_key: &'static str,
    /// Whether the annotation carries `required`
    pub required: bool,
    /// Declared type
    pub kind: FieldKind,
    /// Modifiers other than `required`, in annotation order
    pub unknown_modifiers: Vec<&'static str>,
}

impl FieldDecl {
    /// Parse a `"<LOOKUP_KEY>[,modifier]*"` annotation.
    ///
    /// Segments are trimmed and empty modifiers dropped. Returns `None` when
    /// the lookup key is empty, which leaves the field unbound.
    pub fn parse(template: &FieldTemplate) -> Option<Self> {
        let mut segments = template.tag.split(',').map(str::trim);
        let lookup_key = segments.next().filter(|key| !key.is_empty())?;

        let mut required = false;
        let mut unknown_modifiers = Vec::new();
        for modifier in segments.filter(|m| !m.is_empty()) {
            if modifier == REQUIRED {
                required = true;
            } else {
                unknown_modifiers.push(modifier);
            }
        }

        Some(Self {
            field_name: template.field,
            lookup_key,
            required,
            kind: template.kind,
            unknown_modifiers,
        })
    }
}

/// A record whose fields can be bound from a [`ValueProvider`].
///
/// Usually implemented with `#[derive(EnvBind)]`:
///
/// ```rust
/// use envbind::EnvBind;
///
/// #[derive(Debug, Default, EnvBind)]
/// struct Config {
///     #[env("APP_NAME")]
///     name: String,
///
///     #[env("APP_PORT,required")]
///     port: u16,
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// let provider = |key: &str| match key {
///     "APP_PORT" => Some("8080".to_string()),
///     _ => None,
/// };
/// let config = Config::from_provider(&provider)?;
/// assert_eq!(config.port, 8080);
/// assert_eq!(config.name, "");
/// # Ok(())
/// # }
/// ```
pub trait EnvBind {
    /// Record name used in log events
    const NAME: &'static str;

    /// Annotated fields in declaration order.
    fn template() -> Vec<FieldTemplate>;

    /// Write a coerced value into the named field.
    fn assign(&mut self, field: &str, value: Value) -> Result<(), BindError>;

    /// Bind values from `provider` into `self` with the default [`Binder`].
    fn bind_from<P>(&mut self, provider: &P) -> Result<(), BindError>
    where
        Self: Sized,
        P: ValueProvider + ?Sized,
    {
        Binder::new().bind(self, provider)
    }

    /// Build a default record and bind values from `provider`.
    fn from_provider<P>(provider: &P) -> Result<Self, BindError>
    where
        Self: Sized + Default,
        P: ValueProvider + ?Sized,
    {
        let mut record = Self::default();
        record.bind_from(provider)?;
        Ok(record)
    }

    /// Build a default record and bind values from the process environment.
    ///
    /// # Errors
    ///
    /// - Required variables are not set or empty
    /// - Values cannot be coerced into the field types
    /// - A field with a value has an unsupported type
    fn from_env() -> Result<Self, BindError>
    where
        Self: Sized + Default,
    {
        Self::from_provider(&EnvProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(tag: &'static str) -> Option<FieldDecl> {
        FieldDecl::parse(&FieldTemplate::new(
            "field",
            tag,
            FieldKind::Supported(TypeTag::String),
        ))
    }

    #[test]
    fn test_parse_key_only() {
        let decl = decl("STRING").unwrap();
        assert_eq!(decl.lookup_key, "STRING");
        assert!(!decl.required);
        assert!(decl.unknown_modifiers.is_empty());
    }

    #[test]
    fn test_parse_required() {
        let decl = decl("BOOL,required").unwrap();
        assert_eq!(decl.lookup_key, "BOOL");
        assert!(decl.required);
    }

    #[test]
    fn test_parse_trims_segments() {
        let decl = decl(" BOOL , required ").unwrap();
        assert_eq!(decl.lookup_key, "BOOL");
        assert!(decl.required);
    }

    #[test]
    fn test_parse_collects_unknown_modifiers() {
        let decl = decl("PORT,requried,,secret").unwrap();
        assert!(!decl.required);
        assert_eq!(decl.unknown_modifiers, vec!["requried", "secret"]);
    }

    #[test]
    fn test_parse_empty_key_is_unbound() {
        assert!(decl("").is_none());
        assert!(decl(",required").is_none());
    }

    #[test]
    fn test_type_tag_display() {
        assert_eq!(TypeTag::SignedInteger(8).to_string(), "int8");
        assert_eq!(TypeTag::UnsignedInteger(64).to_string(), "uint64");
        assert_eq!(TypeTag::Float(32).to_string(), "float32");
        assert_eq!(TypeTag::Complex(128).to_string(), "complex128");
        assert_eq!(TypeTag::Boolean.to_string(), "bool");
        assert_eq!(TypeTag::String.to_string(), "string");
    }
}
