//! Core types and traits for zero-copy access to host-owned arrays.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! host's binary array layout, the element types a handle may be
//! instantiated with, the error taxonomy, and the read/write traits that
//! numeric kernels are written against.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod layout;
pub mod traits;

pub use element::{ArrayElement, Oid};
pub use error::{BoundsError, DomainError, PreconditionError};
pub use layout::{ArrayHeader, Shape, MAXDIM};
pub use traits::{ArrayRead, ArrayWrite};
