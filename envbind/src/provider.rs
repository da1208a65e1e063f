//! Value providers: where the binder looks up raw strings by key

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::hash::BuildHasher;

use crate::error::ProviderError;

/// Supplies raw string values by lookup key.
///
/// `Ok(None)` means the key is not set; `Ok(Some(""))` means it is set to
/// the empty string. The binder treats the two differently for `required`
/// fields.
pub trait ValueProvider {
    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError>;
}

/// Any `Fn(&str) -> Option<String>` closure is an infallible provider.
impl<F> ValueProvider for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError> {
        Ok(self(key))
    }
}

impl<S: BuildHasher> ValueProvider for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.get(key).cloned())
    }
}

impl ValueProvider for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.get(key).cloned())
    }
}

/// Provider backed by the process environment.
///
/// Variables holding non-UTF-8 data are reported as provider errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvProvider;

impl ValueProvider for EnvProvider {
    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e @ VarError::NotUnicode(_)) => Err(ProviderError::new(e)),
        }
    }
}
