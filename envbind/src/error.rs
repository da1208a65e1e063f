//! Error types for loading `.env` sources and binding values onto records

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::coerce::CoerceError;
use crate::template::TypeTag;

/// Boxed error returned by fallible [`ValueProvider`](crate::ValueProvider) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while binding provider values onto a record.
///
/// Binding is fail-fast: the first error stops the pass, and fields bound
/// before the failing one keep their newly written values.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A `required` field's lookup key was not found, or was found empty.
    #[error("required field '{field}' is missing: '{key}' is not set or empty")]
    MissingRequired {
        /// Name of the record field
        field: String,
        /// Lookup key the field is bound to
        key: String,
    },

    /// The provider failed while looking up a `required` field.
    ///
    /// Provider failures on optional fields are skipped, not reported.
    #[error("failed to get value for field '{field}' from '{key}': {source}")]
    Provider {
        /// Name of the record field
        field: String,
        /// Lookup key the field is bound to
        key: String,
        /// Failure reported by the provider
        source: ProviderError,
    },

    /// The raw value could not be parsed as, or does not fit, the field's type.
    #[error("failed to parse {target} value for field '{field}' from '{value}': {source}")]
    Coercion {
        /// Name of the record field
        field: String,
        /// Raw string returned by the provider
        value: String,
        /// Coercion target
        target: TypeTag,
        /// Parser failure
        source: CoerceError,
    },

    /// The field's declared type is outside the supported set.
    #[error("unsupported field type `{kind}` for field '{field}'")]
    UnsupportedType {
        /// Name of the record field
        field: String,
        /// Declared type as written on the field
        kind: String,
    },

    /// The field's annotation carries a modifier other than `required`.
    ///
    /// Only returned by a [`Binder`](crate::Binder) in strict mode.
    #[error("unknown modifier '{modifier}' on field '{field}'")]
    UnknownModifier {
        /// Name of the record field
        field: String,
        /// The unrecognized modifier
        modifier: String,
    },

    /// The record refused a coerced value.
    ///
    /// Only happens when a hand-written [`EnvBind`](crate::EnvBind) template
    /// and its `assign` disagree.
    #[error("field '{field}' cannot accept a {value} value")]
    Assign {
        /// Name of the record field
        field: String,
        /// Kind of the rejected value
        value: &'static str,
    },
}

impl BindError {
    /// Create a missing required field error
    pub fn missing(field: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
            key: key.into(),
        }
    }

    /// Create an assignment error (used by macro-generated code)
    #[doc(hidden)]
    pub fn assign(field: impl Into<String>, value: &'static str) -> Self {
        Self::Assign {
            field: field.into(),
            value,
        }
    }
}

/// Errors that can occur while reading a `.env` source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A non-comment, non-blank line is not a valid `KEY=VALUE` declaration.
    #[error("invalid .env format at line {line_number}: {line}")]
    Format {
        /// 1-based line number
        line_number: usize,
        /// The offending line, trimmed
        line: String,
    },

    /// The underlying reader failed.
    #[error("failed to read .env source: {0}")]
    Io(#[from] io::Error),

    /// The `.env` file could not be opened.
    #[error("failed to open .env file {path:?}: {source}")]
    Open {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Error returned by the combined load-then-bind helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the `.env` source failed; nothing was bound
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The source was loaded but binding failed
    #[error(transparent)]
    Bind(#[from] BindError),
}

/// Failure reported by a [`ValueProvider`](crate::ValueProvider).
///
/// Wraps any error type so providers backed by files, secret stores or
/// remote services can report their own failures.
#[derive(Debug)]
pub struct ProviderError(BoxError);

impl ProviderError {
    /// Wrap a provider failure.
    pub fn new(error: impl Into<BoxError>) -> Self {
        Self(error.into())
    }

    /// Returns the wrapped error.
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}
