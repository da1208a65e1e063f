//! The structure binder: walks a record template and writes coerced values

use tracing::{debug, trace, warn};

use crate::coerce::coerce;
use crate::error::BindError;
use crate::provider::ValueProvider;
use crate::template::{EnvBind, FieldDecl, FieldKind};

/// Bind values from `provider` into `record` with the default [`Binder`].
///
/// Binding stops at the first error. Fields processed before the failing
/// one have already been written.
pub fn bind<R, P>(record: &mut R, provider: &P) -> Result<(), BindError>
where
    R: EnvBind,
    P: ValueProvider + ?Sized,
{
    Binder::new().bind(record, provider)
}

/// Binding policy.
///
/// The default binder ignores unknown annotation modifiers (logging a
/// warning); a strict binder rejects them with [`BindError::UnknownModifier`].
#[derive(Debug, Clone, Default)]
pub struct Binder {
    strict_modifiers: bool,
}

impl Binder {
    /// A lenient binder, same as [`Binder::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A binder that rejects unknown modifiers.
    pub fn strict() -> Self {
        Self::new().strict_modifiers(true)
    }

    /// Set whether unknown modifiers are rejected.
    pub fn strict_modifiers(mut self, strict: bool) -> Self {
        self.strict_modifiers = strict;
        self
    }

    /// Bind values from `provider` into `record`, field by field in declaration order.
    pub fn bind<R, P>(&self, record: &mut R, provider: &P) -> Result<(), BindError>
    where
        R: EnvBind,
        P: ValueProvider + ?Sized,
    {
        for template in R::template() {
            let Some(decl) = FieldDecl::parse(&template) else {
                trace!(record = R::NAME, field = template.field, "no lookup key, skipping");
                continue;
            };
            self.bind_field(record, &decl, provider)?;
        }
        Ok(())
    }

    fn bind_field<R, P>(
        &self,
        record: &mut R,
        decl: &FieldDecl,
        provider: &P,
    ) -> Result<(), BindError>
    where
        R: EnvBind,
        P: ValueProvider + ?Sized,
    {
        for modifier in &decl.unknown_modifiers {
            if self.strict_modifiers {
                return Err(BindError::UnknownModifier {
                    field: decl.field_name.to_string(),
                    modifier: modifier.to_string(),
                });
            }
            warn!(
                record = R::NAME,
                field = decl.field_name,
                modifier = *modifier,
                "ignoring unknown modifier"
            );
        }

        let raw = match provider.lookup(decl.lookup_key) {
            Ok(Some(raw)) => raw,
            Ok(None) if decl.required => {
                return Err(BindError::missing(decl.field_name, decl.lookup_key));
            }
            Ok(None) => {
                trace!(
                    record = R::NAME,
                    field = decl.field_name,
                    key = decl.lookup_key,
                    "not set, skipping"
                );
                return Ok(());
            }
            Err(source) if decl.required => {
                return Err(BindError::Provider {
                    field: decl.field_name.to_string(),
                    key: decl.lookup_key.to_string(),
                    source,
                });
            }
            Err(err) => {
                warn!(
                    record = R::NAME,
                    field = decl.field_name,
                    key = decl.lookup_key,
                    error = %err,
                    "lookup failed for optional field, skipping"
                );
                return Ok(());
            }
        };

        if decl.required && raw.is_empty() {
            return Err(BindError::missing(decl.field_name, decl.lookup_key));
        }

        let tag = match decl.kind {
            FieldKind::Supported(tag) => tag,
            FieldKind::Unsupported(kind) => {
                return Err(BindError::UnsupportedType {
                    field: decl.field_name.to_string(),
                    kind: kind.to_string(),
                });
            }
        };

        let value = match coerce(&raw, tag) {
            Ok(value) => value,
            Err(source) => {
                return Err(BindError::Coercion {
                    field: decl.field_name.to_string(),
                    value: raw,
                    target: tag,
                    source,
                });
            }
        };

        record.assign(decl.field_name, value)?;
        debug!(
            record = R::NAME,
            field = decl.field_name,
            key = decl.lookup_key,
            kind = %tag,
            "bound field"
        );
        Ok(())
    }
}
