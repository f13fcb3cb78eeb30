//! Element types and host type identifiers.

use std::fmt;

/// Host type identifier stored in the `elemtype` word of an array header.
///
/// Values match the host catalog's built-in scalar types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid(pub u32);

impl Oid {
    /// `int8` (64-bit signed integer).
    pub const INT8: Oid = Oid(20);
    /// `int2` (16-bit signed integer).
    pub const INT2: Oid = Oid(21);
    /// `int4` (32-bit signed integer).
    pub const INT4: Oid = Oid(23);
    /// `float4` (32-bit IEEE float).
    pub const FLOAT4: Oid = Oid(700);
    /// `float8` (64-bit IEEE float).
    pub const FLOAT8: Oid = Oid(701);

    /// Host type name for a known OID, if any.
    pub fn type_name(self) -> Option<&'static str> {
        match self {
            Self::INT8 => Some(i64::TYPE_NAME),
            Self::INT2 => Some(i16::TYPE_NAME),
            Self::INT4 => Some(i32::TYPE_NAME),
            Self::FLOAT4 => Some(f32::TYPE_NAME),
            Self::FLOAT8 => Some(f64::TYPE_NAME),
            _ => None,
        }
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name() {
            Some(name) => write!(f, "{name} (oid {})", self.0),
            None => write!(f, "oid {}", self.0),
        }
    }
}

impl From<u32> for Oid {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A fixed-width scalar that can be stored inline in a host array.
///
/// Every bit pattern of the implementing type must be a valid value, since
/// handles reinterpret host memory in place. For that reason the trait is
/// sealed and only implemented for the primitive numeric types the host
/// stores by value.
pub trait ArrayElement:
    Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static + sealed::Sealed
{
    /// Host type identifier recorded in the array header.
    const TYPE_OID: Oid;
    /// Host type name, used in error messages.
    const TYPE_NAME: &'static str;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! array_element {
    ($($ty:ty => $oid:expr, $name:literal;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ArrayElement for $ty {
                const TYPE_OID: Oid = $oid;
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

array_element! {
    i16 => Oid::INT2, "int2";
    i32 => Oid::INT4, "int4";
    i64 => Oid::INT8, "int8";
    f32 => Oid::FLOAT4, "float4";
    f64 => Oid::FLOAT8, "float8";
}
