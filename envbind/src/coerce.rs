//! String-to-value coercion for each [`TypeTag`]

use std::num::{ParseFloatError, ParseIntError};
use std::str::{FromStr, ParseBoolError};

use num_complex::{Complex, Complex64};

use crate::template::TypeTag;

/// Literals accepted as `true` before falling back to `bool::from_str`.
pub const TRUTHY: &[&str] = &["Y", "y", "Yes", "YES", "yes", "on"];

/// Literals accepted as `false` before falling back to `bool::from_str`.
pub const FALSY: &[&str] = &["N", "n", "No", "NO", "no", "off"];

/// Failure to coerce a raw string into a [`TypeTag`].
#[derive(Debug, thiserror::Error)]
pub enum CoerceError {
    /// Not a base-10 integer, or out of range for the width
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Not a decimal floating point number
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// Neither `true`/`false` nor one of [`TRUTHY`] / [`FALSY`]
    #[error(transparent)]
    Bool(#[from] ParseBoolError),

    /// Not an `a+bi` complex literal
    #[error("invalid complex literal: {0}")]
    Complex(String),

    /// The tag names a width this kind does not have
    #[error("unsupported bit width {bits} for {kind}")]
    BitWidth {
        /// Kind of the tag (`int`, `uint`, `float`, `complex`)
        kind: &'static str,
        /// Requested width
        bits: u32,
    },
}

/// A coerced value, wide enough for every width of its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Verbatim string
    Str(String),
    /// Any signed integer width
    Signed(i128),
    /// Any unsigned integer width
    Unsigned(u128),
    /// `float32` values are widened losslessly
    Float(f64),
    /// Boolean
    Bool(bool),
    /// `complex64` values are widened losslessly
    Complex(Complex64),
}

impl Value {
    /// Short name of the value's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Signed(_) => "signed integer",
            Self::Unsigned(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Complex(_) => "complex",
        }
    }
}

/// Coerce `raw` into a value of type `tag`.
///
/// Integers are range-checked against the tag's bit width, so
/// `"300"` fails for `SignedInteger(8)` instead of wrapping.
pub fn coerce(raw: &str, tag: TypeTag) -> Result<Value, CoerceError> {
    match tag {
        TypeTag::String => Ok(Value::Str(raw.to_owned())),
        TypeTag::SignedInteger(bits) => parse_signed(raw, bits).map(Value::Signed),
        TypeTag::UnsignedInteger(bits) => parse_unsigned(raw, bits).map(Value::Unsigned),
        TypeTag::Float(32) => Ok(Value::Float(raw.parse::<f32>()?.into())),
        TypeTag::Float(64) => Ok(Value::Float(raw.parse::<f64>()?)),
        TypeTag::Float(bits) => Err(CoerceError::BitWidth { kind: "float", bits }),
        TypeTag::Boolean => Ok(Value::Bool(parse_bool(raw)?)),
        TypeTag::Complex(64) => {
            let c = parse_complex::<f32>(raw)?;
            Ok(Value::Complex(Complex64::new(c.re.into(), c.im.into())))
        }
        TypeTag::Complex(128) => parse_complex::<f64>(raw).map(Value::Complex),
        TypeTag::Complex(bits) => Err(CoerceError::BitWidth {
            kind: "complex",
            bits,
        }),
    }
}

/// Parse a boolean with the extended `Y`/`yes`/`on` and `N`/`no`/`off` vocabulary.
pub fn parse_bool(raw: &str) -> Result<bool, ParseBoolError> {
    if TRUTHY.contains(&raw) {
        Ok(true)
    } else if FALSY.contains(&raw) {
        Ok(false)
    } else {
        raw.parse()
    }
}

fn parse_signed(raw: &str, bits: u32) -> Result<i128, CoerceError> {
    Ok(match bits {
        8 => raw.parse::<i8>()?.into(),
        16 => raw.parse::<i16>()?.into(),
        32 => raw.parse::<i32>()?.into(),
        64 => raw.parse::<i64>()?.into(),
        128 => raw.parse::<i128>()?,
        _ => return Err(CoerceError::BitWidth { kind: "int", bits }),
    })
}

fn parse_unsigned(raw: &str, bits: u32) -> Result<u128, CoerceError> {
    Ok(match bits {
        8 => raw.parse::<u8>()?.into(),
        16 => raw.parse::<u16>()?.into(),
        32 => raw.parse::<u32>()?.into(),
        64 => raw.parse::<u64>()?.into(),
        128 => raw.parse::<u128>()?,
        _ => return Err(CoerceError::BitWidth { kind: "uint", bits }),
    })
}

/// Parse `a+bi`, also accepting one surrounding pair of parentheses: `(a+bi)`.
fn parse_complex<T>(raw: &str) -> Result<Complex<T>, CoerceError>
where
    Complex<T>: FromStr,
    <Complex<T> as FromStr>::Err: std::fmt::Display,
{
    let literal = raw
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(raw);
    literal
        .parse::<Complex<T>>()
        .map_err(|e| CoerceError::Complex(e.to_string()))
}

/// Conversion from a coerced [`Value`] into a concrete field type.
///
/// Implemented for every Rust type the derive maps to a [`TypeTag`].
pub trait FromValue: Sized {
    /// Returns `None` when the value has another kind or does not fit `Self`.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_from_value!(Signed => i8, i16, i32, i64, i128, isize);
impl_from_value!(Unsigned => u8, u16, u32, u64, u128, usize);

impl FromValue for String {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(f as f32),
            _ => None,
        }
    }
}

impl FromValue for Complex<f64> {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Complex(c) => Some(c),
            _ => None,
        }
    }
}

impl FromValue for Complex<f32> {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Complex(c) => Some(Complex::new(c.re as f32, c.im as f32)),
            _ => None,
        }
    }
}
