//! Error types for host array access and numeric kernels.
//!
//! Organized by failure class: precondition violations at handle
//! construction, bounds violations at element access, and domain
//! violations in numeric routines. All errors are local-origin and are
//! returned to the immediate caller; none are retried or logged.

use std::error::Error;
use std::fmt;

use crate::element::Oid;

/// The buffer handed to a handle constructor does not satisfy its contract.
///
/// Fatal for the buffer in question: retrying with the same buffer fails
/// the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreconditionError {
    /// The array pointer was null.
    NullArray,
    /// The array or its data region is not aligned for the element type.
    Misaligned {
        /// Required alignment in bytes.
        required: usize,
    },
    /// The header's element type differs from the handle's element type.
    ElementTypeMismatch {
        /// Element type the handle was instantiated with.
        expected: Oid,
        /// Element type recorded in the array header.
        found: Oid,
    },
    /// The array carries a null bitmap; handles only cover null-free arrays.
    ContainsNulls,
    /// `ndim` or one of the dimension extents is out of range.
    InvalidDimensions {
        /// Description of the offending value.
        reason: String,
    },
    /// The product of the dimensions exceeds the host's maximum array size.
    SizeOverflow,
    /// The number of supplied elements does not match the dimensions.
    DataLengthMismatch {
        /// Element count implied by the dimensions.
        expected: usize,
        /// Number of elements supplied.
        found: usize,
    },
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArray => write!(f, "array pointer is null"),
            Self::Misaligned { required } => {
                write!(f, "array is not aligned to {required} bytes")
            }
            Self::ElementTypeMismatch { expected, found } => {
                write!(f, "element type mismatch: expected {expected}, found {found}")
            }
            Self::ContainsNulls => write!(f, "array contains null elements"),
            Self::InvalidDimensions { reason } => write!(f, "invalid dimensions: {reason}"),
            Self::SizeOverflow => write!(f, "array size exceeds the maximum allowed"),
            Self::DataLengthMismatch { expected, found } => {
                write!(f, "dimensions imply {expected} elements, got {found}")
            }
        }
    }
}

impl Error for PreconditionError {}

/// An element index fell outside `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsError {
    /// The requested index.
    pub index: usize,
    /// Number of elements in the array.
    pub len: usize,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for array of length {}",
            self.index, self.len
        )
    }
}

impl Error for BoundsError {}

/// An argument to a numeric routine lies outside its mathematical domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DomainError {
    /// Degrees of freedom must be strictly positive.
    NonPositiveDegreesOfFreedom {
        /// The rejected value.
        nu: f64,
    },
    /// Degrees of freedom must not be NaN.
    DegreesOfFreedomNaN,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDegreesOfFreedom { nu } => {
                write!(f, "degrees of freedom must be > 0, got {nu}")
            }
            Self::DegreesOfFreedomNaN => write!(f, "degrees of freedom is NaN"),
        }
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_error_message() {
        let e = BoundsError { index: 7, len: 3 };
        assert_eq!(e.to_string(), "index 7 out of bounds for array of length 3");
    }

    #[test]
    fn mismatch_message_names_both_types() {
        let e = PreconditionError::ElementTypeMismatch {
            expected: Oid::FLOAT8,
            found: Oid::INT4,
        };
        let msg = e.to_string();
        assert!(msg.contains("float8"), "{msg}");
        assert!(msg.contains("int4"), "{msg}");
    }

    #[test]
    fn domain_error_message() {
        let e = DomainError::NonPositiveDegreesOfFreedom { nu: -1.0 };
        assert_eq!(e.to_string(), "degrees of freedom must be > 0, got -1");
    }
}
