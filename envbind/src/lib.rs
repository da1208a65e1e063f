//! Bind `.env` files and environment variables onto typed configuration structs
//!
//! `envbind` has two parts:
//!
//! - a **loader** that reads `KEY=VALUE` lines (`.env` style) into the process
//!   environment, or into plain pairs for an in-memory provider;
//! - a **binder** that walks the `#[env("...")]` fields of a struct, looks each
//!   key up in a [`ValueProvider`], coerces the string to the field's type and
//!   writes it into the struct.
//!
//! # Features
//!
//! - **Declarative**: field rules come from `#[derive(EnvBind)]`
//! - **Required fields**: `#[env("KEY,required")]` rejects unset and empty values
//! - **Checked coercion**: integers are range-checked, never truncated
//! - **Pluggable lookup**: closures, maps and the process environment are all providers
//!
//! # Value Parsing
//!
//! | Field type | Accepted input |
//! |------------|----------------|
//! | `String` | any value, verbatim |
//! | `i8`..`i128`, `isize`, `u8`..`u128`, `usize` | base-10 integer that fits the width |
//! | `f32`, `f64` | decimal floating point |
//! | `bool` | `Y y Yes YES yes on`, `N n No NO no off`, `true`, `false` |
//! | `Complex32`, `Complex64` | `a+bi`, `a-bi`, optionally in parentheses |
//!
//! Type aliases and generic parameters resolve through [`BindTarget`], so
//! `type Port = u16` binds as a `u16`.
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//! use std::io::Cursor;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env("STRING")]
//!     pub string: String,
//!
//!     #[env("INT")]
//!     pub count: i64,
//!
//!     #[env("BOOL,required")]
//!     pub flag: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let source = "STRING=hello\nINT=42\nBOOL=Y\n";
//! let values: std::collections::HashMap<_, _> =
//!     envbind::parse_reader(Cursor::new(source))?.into_iter().collect();
//!
//! let config = Config::from_provider(&values)?;
//! assert_eq!(config.string, "hello");
//! assert_eq!(config.count, 42);
//! assert!(config.flag);
//! # Ok(())
//! # }
//! ```
//!
//! # Annotations
//!
//! ## `#[env("KEY")]`
//!
//! Bind the field from `KEY`. When `KEY` is not set the field keeps its
//! current value.
//!
//! ## `#[env("KEY,required")]`
//!
//! Fail with [`BindError::MissingRequired`] when `KEY` is not set or is empty.
//!
//! Other modifiers are ignored with a warning, or rejected by
//! [`Binder::strict`]. Fields without `#[env]` are left alone.

// Lets `#[derive(EnvBind)]` expand to `::envbind::...` inside this crate's own tests.
extern crate self as envbind;

mod bind;
mod coerce;
mod error;
mod loader;
mod provider;
mod target;
mod template;

pub use bind::{bind, Binder};
pub use coerce::{coerce, parse_bool, CoerceError, FromValue, Value, FALSY, TRUTHY};
pub use envbind_derive::EnvBind;
pub use error::{BindError, BoxError, Error, LoadError, ProviderError};
pub use loader::{load_and_bind_file, load_and_bind_reader, load_file, load_reader, parse_reader};
pub use provider::{EnvProvider, ValueProvider};
pub use target::BindTarget;
pub use template::{EnvBind, FieldDecl, FieldKind, FieldTemplate, TypeTag, REQUIRED};

pub use num_complex::{Complex32, Complex64};

#[doc(hidden)]
pub mod __private {
    pub use crate::target::{Field, SupportedField, UnsupportedField};
}
