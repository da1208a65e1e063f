//! `.env` source loading
//!
//! One `KEY=VALUE` declaration per line. Lines starting with `#` and blank
//! lines are skipped; key and value are trimmed; the line is split at the
//! first `=`, so values may themselves contain `=`.

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::bind::bind;
use crate::error::{Error, LoadError};
use crate::provider::EnvProvider;
use crate::template::EnvBind;

/// Parse a `.env` source into `(key, value)` pairs without touching the environment.
///
/// The whole source is read before anything is returned, so a malformed
/// line anywhere aborts the parse.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<(String, String)>, LoadError> {
    let mut pairs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        if let Some(pair) = parse_line(&line?, index + 1)? {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

/// Load a `.env` source into the process environment.
///
/// Existing variables are overwritten. Nothing is written unless the whole
/// source parses. Returns the number of variables set.
pub fn load_reader<R: BufRead>(reader: R) -> Result<usize, LoadError> {
    let pairs = parse_reader(reader)?;
    for (key, value) in &pairs {
        debug!(key = %key, "setting environment variable");
        env::set_var(key, value);
    }
    debug!(count = pairs.len(), "loaded .env source");
    Ok(pairs.len())
}

/// Load the `.env` file at `path` into the process environment.
pub fn load_file(path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading .env file");
    load_reader(BufReader::new(file))
}

/// Load a `.env` source into the environment, then bind it into `dst`.
pub fn load_and_bind_reader<R, T>(reader: R, dst: &mut T) -> Result<(), Error>
where
    R: BufRead,
    T: EnvBind,
{
    load_reader(reader)?;
    bind(dst, &EnvProvider)?;
    Ok(())
}

/// Load the `.env` file at `path` into the environment, then bind it into `dst`.
pub fn load_and_bind_file<T>(path: impl AsRef<Path>, dst: &mut T) -> Result<(), Error>
where
    T: EnvBind,
{
    load_file(path)?;
    bind(dst, &EnvProvider)?;
    Ok(())
}

fn parse_line(raw: &str, line_number: usize) -> Result<Option<(String, String)>, LoadError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let format_error = || LoadError::Format {
        line_number,
        line: line.to_string(),
    };

    let (key, value) = line.split_once('=').ok_or_else(format_error)?;
    let (key, value) = (key.trim(), value.trim());

    // `env::set_var` panics on these
    if key.is_empty() || key.contains('\0') || value.contains('\0') {
        return Err(format_error());
    }

    Ok(Some((key.to_string(), value.to_string())))
}
