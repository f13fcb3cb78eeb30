//! Zero-copy typed handles over host-owned array buffers.
//!
//! A host hands us a pointer to an array it owns. [`ArrayHandle`] presents
//! that memory as a bounds-checked `&[T]` without copying, and
//! [`MutableArrayHandle`] adds in-place mutation by wrapping an
//! `ArrayHandle` rather than duplicating its read path. This crate is one
//! of two that may contain `unsafe` code (along with `hostarray-ffi`), and
//! all of it lives in `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! host allocation ── *const ArrayHeader ──► ArrayHandle<'a, T>        (Copy, shared)
//!                 └─ *mut ArrayHeader ────► MutableArrayHandle<'a, T>
//!                                             └── base: ArrayHandle<'a, T>
//! ArrayBuffer (owned, same layout) ── &   ──► ArrayHandle::new
//!                                   └─ &mut ─► MutableArrayHandle::new
//! ```
//!
//! # Bounds policy
//!
//! Checked by default: [`ArrayHandle::get`] returns a
//! [`BoundsError`](hostarray_core::BoundsError) and `handle[i]` panics with
//! the same message. Hot loops should iterate over
//! [`as_slice`](ArrayHandle::as_slice) (where the compiler elides the
//! checks) or use the `unsafe` `get_unchecked` accessors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
mod raw;
pub mod read;
pub mod write;

pub use buffer::ArrayBuffer;
pub use read::ArrayHandle;
pub use write::MutableArrayHandle;
