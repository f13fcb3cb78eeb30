//! hostarray: zero-copy typed access to host-owned database arrays.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the hostarray sub-crates. For most users, adding `hostarray` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hostarray::prelude::*;
//!
//! // An array laid out exactly as the host stores it.
//! let mut buf = ArrayBuffer::from_slice(&[0.5f64, -1.25, 2.0]).unwrap();
//!
//! // Read in place: no copy, checked access.
//! let h = ArrayHandle::<f64>::new(&buf).unwrap();
//! assert_eq!(h.size(), 3);
//! assert_eq!(h.get(1), Ok(&-1.25));
//! assert!(h.get(3).is_err());
//!
//! // Feed elements to the t CDF.
//! let p = student_t::cdf(h[2], 4.0).unwrap();
//! assert!(p > 0.5 && p < 1.0);
//!
//! // Mutate through a separate handle built from exclusive access.
//! let mut m = MutableArrayHandle::<f64>::new(&mut buf).unwrap();
//! m[0] = 3.0;
//! assert_eq!(buf.to_vec::<f64>().unwrap(), vec![3.0, -1.25, 2.0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hostarray-core` | element types, header layout, errors, read/write traits |
//! | [`handle`] | `hostarray-handle` | `ArrayBuffer`, `ArrayHandle`, `MutableArrayHandle` |
//! | [`numeric`] | `hostarray-numeric` | Student's t and normal CDFs, array kernels |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element types, header layout, errors and traits (`hostarray-core`).
///
/// Contains the [`types::ArrayElement`] trait, the [`types::ArrayHeader`]
/// layout and the [`types::ArrayRead`] / [`types::ArrayWrite`] traits.
pub use hostarray_core as types;

/// Typed handles over host arrays (`hostarray-handle`).
pub use hostarray_handle as handle;

/// Numeric kernels (`hostarray-numeric`).
///
/// [`numeric::student_t::cdf`] is the main entry point; the
/// [`numeric::array_ops`] kernels run on any handle.
pub use hostarray_numeric as numeric;

/// Common imports for typical hostarray usage.
///
/// ```rust
/// use hostarray::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use hostarray_core::{ArrayElement, ArrayRead, ArrayWrite, Oid};

    // Errors
    pub use hostarray_core::{BoundsError, DomainError, PreconditionError};

    // Handles
    pub use hostarray_handle::{ArrayBuffer, ArrayHandle, MutableArrayHandle};

    // Numeric
    pub use hostarray_numeric::{array_ops, normal, student_t, BetaConfig};
}
