//! C-compatible status codes.
//!
//! [`HostArrayStatus`] is a `repr(i32)` enum covering every error the
//! exported functions can report. Conversions from the Rust error types
//! (`PreconditionError`, `DomainError`, `ArrayOpError`) are provided.

use hostarray_core::{DomainError, PreconditionError};
use hostarray_numeric::ArrayOpError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostArrayStatus {
    /// Success.
    Ok = 0,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -1,
    /// The array pointer is null.
    NullArray = -2,
    /// The array is not aligned for its element type.
    Misaligned = -3,
    /// The array's element type is not the one the function expects.
    ElementTypeMismatch = -4,
    /// The array carries a null bitmap.
    ContainsNulls = -5,
    /// `ndim` or a dimension extent is out of range.
    InvalidDimensions = -6,
    /// The element count exceeds the host's maximum array size.
    SizeOverflow = -7,
    /// A numeric argument is outside the function's domain.
    DomainError = -8,
    /// Two array operands differ in length.
    LengthMismatch = -9,
    /// The operation is undefined on an empty array.
    EmptyArray = -10,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&PreconditionError> for HostArrayStatus {
    fn from(e: &PreconditionError) -> Self {
        match e {
            PreconditionError::NullArray => HostArrayStatus::NullArray,
            PreconditionError::Misaligned { .. } => HostArrayStatus::Misaligned,
            PreconditionError::ElementTypeMismatch { .. } => HostArrayStatus::ElementTypeMismatch,
            PreconditionError::ContainsNulls => HostArrayStatus::ContainsNulls,
            PreconditionError::InvalidDimensions { .. } => HostArrayStatus::InvalidDimensions,
            PreconditionError::SizeOverflow => HostArrayStatus::SizeOverflow,
            PreconditionError::DataLengthMismatch { .. } => HostArrayStatus::InvalidArgument,
        }
    }
}

impl From<&DomainError> for HostArrayStatus {
    fn from(_e: &DomainError) -> Self {
        HostArrayStatus::DomainError
    }
}

impl From<&ArrayOpError> for HostArrayStatus {
    fn from(e: &ArrayOpError) -> Self {
        match e {
            ArrayOpError::LengthMismatch { .. } => HostArrayStatus::LengthMismatch,
            ArrayOpError::Empty => HostArrayStatus::EmptyArray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostarray_core::Oid;

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(HostArrayStatus::Ok as i32, 0);
        assert_eq!(HostArrayStatus::InvalidArgument as i32, -1);
        assert_eq!(HostArrayStatus::NullArray as i32, -2);
        assert_eq!(HostArrayStatus::Misaligned as i32, -3);
        assert_eq!(HostArrayStatus::ElementTypeMismatch as i32, -4);
        assert_eq!(HostArrayStatus::ContainsNulls as i32, -5);
        assert_eq!(HostArrayStatus::InvalidDimensions as i32, -6);
        assert_eq!(HostArrayStatus::SizeOverflow as i32, -7);
        assert_eq!(HostArrayStatus::DomainError as i32, -8);
        assert_eq!(HostArrayStatus::LengthMismatch as i32, -9);
        assert_eq!(HostArrayStatus::EmptyArray as i32, -10);
        assert_eq!(HostArrayStatus::Panicked as i32, -128);
    }

    #[test]
    fn precondition_error_to_status() {
        assert_eq!(
            HostArrayStatus::from(&PreconditionError::NullArray),
            HostArrayStatus::NullArray
        );
        assert_eq!(
            HostArrayStatus::from(&PreconditionError::Misaligned { required: 8 }),
            HostArrayStatus::Misaligned
        );
        assert_eq!(
            HostArrayStatus::from(&PreconditionError::ElementTypeMismatch {
                expected: Oid::FLOAT8,
                found: Oid::INT4,
            }),
            HostArrayStatus::ElementTypeMismatch
        );
        assert_eq!(
            HostArrayStatus::from(&PreconditionError::ContainsNulls),
            HostArrayStatus::ContainsNulls
        );
        assert_eq!(
            HostArrayStatus::from(&PreconditionError::InvalidDimensions {
                reason: "ndim 7".into()
            }),
            HostArrayStatus::InvalidDimensions
        );
        assert_eq!(
            HostArrayStatus::from(&PreconditionError::SizeOverflow),
            HostArrayStatus::SizeOverflow
        );
        assert_eq!(
            HostArrayStatus::from(&PreconditionError::DataLengthMismatch {
                expected: 4,
                found: 3
            }),
            HostArrayStatus::InvalidArgument
        );
    }

    #[test]
    fn numeric_errors_to_status() {
        assert_eq!(
            HostArrayStatus::from(&DomainError::DegreesOfFreedomNaN),
            HostArrayStatus::DomainError
        );
        assert_eq!(
            HostArrayStatus::from(&DomainError::NonPositiveDegreesOfFreedom { nu: -1.0 }),
            HostArrayStatus::DomainError
        );
        assert_eq!(
            HostArrayStatus::from(&ArrayOpError::LengthMismatch { left: 2, right: 3 }),
            HostArrayStatus::LengthMismatch
        );
        assert_eq!(
            HostArrayStatus::from(&ArrayOpError::Empty),
            HostArrayStatus::EmptyArray
        );
    }
}
