//! Field types the binder can coerce into, resolved through the type system

use std::marker::PhantomData;

use num_complex::Complex;

use crate::coerce::{FromValue, Value};
use crate::error::BindError;
use crate::template::{FieldKind, TypeTag};

/// A field type with a [`TypeTag`].
///
/// `#[derive(EnvBind)]` looks every annotated field up through this trait,
/// so a type alias such as `type Port = u16` or a generic parameter
/// instantiated with `u8` binds exactly like the type it stands for.
pub trait BindTarget: FromValue {
    /// Coercion target for this type
    const TAG: TypeTag;
}

macro_rules! impl_bind_target {
    ($($ty:ty => $tag:expr),+ $(,)?) => {
        $(
            impl BindTarget for $ty {
                const TAG: TypeTag = $tag;
            }
        )+
    };
}

impl_bind_target! {
    String => TypeTag::String,
    i8 => TypeTag::SignedInteger(8),
    i16 => TypeTag::SignedInteger(16),
    i32 => TypeTag::SignedInteger(32),
    i64 => TypeTag::SignedInteger(64),
    i128 => TypeTag::SignedInteger(128),
    isize => TypeTag::SignedInteger(isize::BITS),
    u8 => TypeTag::UnsignedInteger(8),
    u16 => TypeTag::UnsignedInteger(16),
    u32 => TypeTag::UnsignedInteger(32),
    u64 => TypeTag::UnsignedInteger(64),
    u128 => TypeTag::UnsignedInteger(128),
    usize => TypeTag::UnsignedInteger(usize::BITS),
    f32 => TypeTag::Float(32),
    f64 => TypeTag::Float(64),
    bool => TypeTag::Boolean,
    Complex<f32> => TypeTag::Complex(64),
    Complex<f64> => TypeTag::Complex(128),
}

/// Handle on a field of type `T`, used by macro-generated code.
///
/// Calling a method on `&Field<T>` picks [`SupportedField`] when
/// `T: BindTarget` and falls back to [`UnsupportedField`] otherwise.
#[doc(hidden)]
pub struct Field<T>(PhantomData<fn() -> T>);

impl<T> Field<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[doc(hidden)]
pub trait SupportedField<T> {
    fn field_kind(&self, type_text: &'static str) -> FieldKind;
    fn write(&self, slot: &mut T, field: &str, value: Value) -> Result<(), BindError>;
}

impl<T: BindTarget> SupportedField<T> for Field<T> {
    fn field_kind(&self, _type_text: &'static str) -> FieldKind {
        FieldKind::Supported(T::TAG)
    }

    fn write(&self, slot: &mut T, field: &str, value: Value) -> Result<(), BindError> {
        let kind = value.kind_name();
        *slot = T::from_value(value).ok_or_else(|| BindError::assign(field, kind))?;
        Ok(())
    }
}

#[doc(hidden)]
pub trait UnsupportedField<T> {
    fn field_kind(&self, type_text: &'static str) -> FieldKind;
    fn write(&self, slot: &mut T, field: &str, value: Value) -> Result<(), BindError>;
}

impl<T> UnsupportedField<T> for &Field<T> {
    fn field_kind(&self, type_text: &'static str) -> FieldKind {
        FieldKind::Unsupported(type_text)
    }

    // The binder reports `UnsupportedType` before it ever assigns.
    fn write(&self, _slot: &mut T, field: &str, value: Value) -> Result<(), BindError> {
        Err(BindError::assign(field, value.kind_name()))
    }
}
