//! Read-only typed view of a host array.
//!
//! [`ArrayHandle`] borrows a host allocation for `'a` and exposes its
//! elements as `&'a [T]`. It never allocates, never copies, and dropping it
//! leaves the buffer untouched.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use std::ptr::NonNull;

use hostarray_core::layout::{ArrayHeader, Shape};
use hostarray_core::{ArrayElement, ArrayRead, BoundsError, Oid, PreconditionError};

use crate::buffer::ArrayBuffer;
use crate::raw;

/// A read-only, zero-copy view over a host-owned array of `T`.
///
/// # Lifetime
///
/// `'a` is the lifetime of the host allocation. When built from an
/// [`ArrayBuffer`] the borrow checker enforces it; when built with
/// [`from_raw`](Self::from_raw) the caller promises it, and no pointer
/// obtained from [`ptr`](Self::ptr) or [`array`](Self::array) may be used
/// after the host releases the buffer.
///
/// # Aliasing
///
/// Handles are `Copy`; any number may view the same buffer at once, from
/// any thread. Reading while a [`MutableArrayHandle`](crate::MutableArrayHandle)
/// over the same buffer is live is only possible through `from_raw`, and
/// the host must rule it out.
pub struct ArrayHandle<'a, T: ArrayElement> {
    array: NonNull<ArrayHeader>,
    data: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

// SAFETY: the handle is semantically a `&'a [T]` plus a pointer to the
// immutable header; sharing it is as safe as sharing the slice.
#[allow(unsafe_code)]
unsafe impl<T: ArrayElement> Send for ArrayHandle<'_, T> {}
// SAFETY: see above.
#[allow(unsafe_code)]
unsafe impl<T: ArrayElement> Sync for ArrayHandle<'_, T> {}

impl<T: ArrayElement> Clone for ArrayHandle<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ArrayElement> Copy for ArrayHandle<'_, T> {}

impl<'a, T: ArrayElement> ArrayHandle<'a, T> {
    /// Capability flag: read-only.
    pub const IS_MUTABLE: bool = false;

    /// Wrap an owned buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::ElementTypeMismatch`] if the buffer does
    /// not hold `T`.
    #[allow(unsafe_code)]
    pub fn new(buffer: &'a ArrayBuffer) -> Result<Self, PreconditionError> {
        // SAFETY: ArrayBuffer always holds a complete, aligned array that
        // lives at least as long as the shared borrow.
        unsafe { Self::from_raw(buffer.as_ptr()) }
    }

    /// Wrap a host array in place.
    ///
    /// # Errors
    ///
    /// Returns a [`PreconditionError`] if `array` is null or misaligned, holds
    /// a different element type, carries a null bitmap, or has invalid
    /// dimensions.
    ///
    /// # Safety
    ///
    /// If non-null, `array` must point to a complete host array (header,
    /// dimension arrays and all elements in one allocation) that stays
    /// valid, unmoved and unmodified for `'a`.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw(array: *const ArrayHeader) -> Result<Self, PreconditionError> {
        // SAFETY: forwarded caller contract.
        let raw = unsafe { raw::validate::<T>(array)? };
        Ok(Self::from_parts(raw))
    }

    pub(crate) fn from_parts(raw: raw::RawArray<T>) -> Self {
        Self {
            array: raw.array,
            data: raw.data,
            len: raw.len,
            _marker: PhantomData,
        }
    }

    /// Number of elements, cached at construction.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of elements. Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first element. Valid only while the host buffer is.
    pub fn ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// The host array this handle wraps, at the address it was given.
    pub fn array(&self) -> *const ArrayHeader {
        self.array.as_ptr()
    }

    /// The elements as a slice borrowed from the host buffer.
    #[allow(unsafe_code)]
    pub fn as_slice(&self) -> &'a [T] {
        self.debug_check_layout();
        // SAFETY: data and len were validated at construction, and the
        // `'a` borrow (or from_raw contract) excludes concurrent writers.
        unsafe { raw::slice(self.data, self.len) }
    }

    /// Checked element access.
    pub fn get(&self, index: usize) -> Result<&'a T, BoundsError> {
        self.as_slice().get(index).ok_or(BoundsError {
            index,
            len: self.len,
        })
    }

    /// Element access without a bounds check.
    ///
    /// Saves one compare-and-branch per access in loops the optimizer cannot
    /// already prove in range.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](Self::size).
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        debug_assert!(index < self.len, "index {index} >= len {}", self.len);
        // SAFETY: caller guarantees index < len.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// The array header.
    #[allow(unsafe_code)]
    pub fn header(&self) -> &'a ArrayHeader {
        // SAFETY: validated at construction; the header is never written
        // through a handle.
        unsafe { raw::header(self.array) }
    }

    /// Number of dimensions (0 for the empty array).
    pub fn ndim(&self) -> usize {
        self.header().ndim as usize
    }

    /// Extent of each dimension.
    #[allow(unsafe_code)]
    pub fn dims(&self) -> &'a [i32] {
        // SAFETY: ndim was range-checked at construction.
        unsafe { raw::dims(self.array, self.ndim()) }
    }

    /// Lower bound of each dimension.
    #[allow(unsafe_code)]
    pub fn lower_bounds(&self) -> &'a [i32] {
        // SAFETY: ndim was range-checked at construction.
        unsafe { raw::lower_bounds(self.array, self.ndim()) }
    }

    /// Extents as `usize`.
    pub fn shape(&self) -> Shape {
        self.dims().iter().map(|&d| d as usize).collect()
    }

    /// Element type recorded in the header.
    pub fn element_type(&self) -> Oid {
        Oid(self.header().elemtype)
    }

    /// In debug builds, assert the header still describes `len` elements.
    #[inline]
    #[allow(unsafe_code)]
    fn debug_check_layout(&self) {
        if cfg!(debug_assertions) {
            // SAFETY: validated at construction.
            let recount = unsafe { raw::element_count(self.array) };
            debug_assert_eq!(
                recount,
                Ok(self.len),
                "host array at {:p} changed size under a live handle",
                self.array
            );
        }
    }
}

impl<T: ArrayElement> ArrayRead<T> for ArrayHandle<'_, T> {
    fn as_slice(&self) -> &[T] {
        ArrayHandle::as_slice(self)
    }
}

impl<T: ArrayElement> Index<usize> for ArrayHandle<'_, T> {
    type Output = T;

    /// Fail-fast access: panics with the [`BoundsError`] message.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T: ArrayElement> IntoIterator for ArrayHandle<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T: ArrayElement> IntoIterator for &ArrayHandle<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: ArrayElement> fmt::Debug for ArrayHandle<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHandle")
            .field("array", &self.array)
            .field("element_type", &T::TYPE_NAME)
            .field("data", &self.as_slice())
            .finish()
    }
}
