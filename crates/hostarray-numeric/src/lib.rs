//! Numeric kernels that run directly on host-owned arrays.
//!
//! - [`student_t`]: Student's t cumulative distribution function.
//! - [`normal`]: standard normal CDF, the `nu → ∞` limit of the above.
//! - [`beta`]: regularized incomplete beta function backing the t CDF.
//! - [`array_ops`]: reductions and in-place updates over any
//!   [`ArrayRead`](hostarray_core::ArrayRead) /
//!   [`ArrayWrite`](hostarray_core::ArrayWrite) view, including host array
//!   handles.
//!
//! Every function here is pure and synchronous; errors are returned, never
//! logged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array_ops;
pub mod beta;
pub mod config;
pub mod normal;
pub mod student_t;

pub use array_ops::ArrayOpError;
pub use config::{BetaConfig, ConfigError};
