//! Test utilities and fixtures for hostarray development.
//!
//! Provides deterministic host-array fixtures (see [`fixtures`]) and a
//! small [`HostArena`] that keeps buffers alive at stable addresses so
//! tests can exercise the raw-pointer constructors the way a host would.

#![allow(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use hostarray_core::layout::ArrayHeader;
use hostarray_handle::ArrayBuffer;

/// Owns a set of host arrays and hands out raw pointers to them, standing
/// in for the host's memory context.
///
/// Pointers stay valid until the arena is dropped. Array bytes live in each
/// buffer's own heap allocation, so pushing more does not move earlier ones.
#[derive(Default)]
pub struct HostArena {
    buffers: Vec<ArrayBuffer>,
}

impl HostArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `buffer` and return a writable pointer to it.
    pub fn alloc(&mut self, buffer: ArrayBuffer) -> *mut ArrayHeader {
        self.buffers.push(buffer);
        let last = self.buffers.len() - 1;
        self.buffers[last].as_mut_ptr()
    }

    /// Borrow a previously allocated buffer by allocation order.
    pub fn buffer(&self, index: usize) -> &ArrayBuffer {
        &self.buffers[index]
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostarray_handle::ArrayHandle;

    #[test]
    fn pointers_survive_further_allocations() {
        let mut arena = HostArena::new();
        let first = arena.alloc(ArrayBuffer::from_slice(&[1.0f64, 2.0]).unwrap());
        for i in 0..32 {
            arena.alloc(ArrayBuffer::from_slice(&[i as f64]).unwrap());
        }
        // SAFETY: the arena still owns the buffer behind `first`.
        let h = unsafe { ArrayHandle::<f64>::from_raw(first) }.unwrap();
        assert_eq!(h.as_slice(), &[1.0, 2.0]);
        assert_eq!(arena.len(), 33);
    }
}
