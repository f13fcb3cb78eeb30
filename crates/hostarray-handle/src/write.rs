//! Mutable typed view of a host array.
//!
//! [`MutableArrayHandle`] wraps an [`ArrayHandle`] and adds element writes.
//! All reads go through the wrapped handle, so the two types cannot drift
//! apart in how they interpret the buffer.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use hostarray_core::layout::{ArrayHeader, Shape};
use hostarray_core::{ArrayElement, ArrayRead, ArrayWrite, BoundsError, Oid, PreconditionError};

use crate::buffer::ArrayBuffer;
use crate::raw;
use crate::read::ArrayHandle;

/// A zero-copy view over a host-owned array of `T` that permits in-place
/// writes.
///
/// # Borrow-checker design
///
/// The handle holds its base [`ArrayHandle`] privately and never hands out
/// a copy with the full `'a` lifetime: [`as_handle`](Self::as_handle) and
/// every read accessor borrow `&self`, so no shared view can be alive when
/// a `&mut self` write method runs. The handle is neither `Copy` nor
/// `Clone`.
///
/// # Aliasing
///
/// Built from `&'a mut ArrayBuffer`, exclusivity is checked at compile time.
/// Built with [`from_raw`](Self::from_raw), the host must guarantee that
/// nothing else reads or writes the buffer while the handle is live; there
/// is no locking.
pub struct MutableArrayHandle<'a, T: ArrayElement> {
    base: ArrayHandle<'a, T>,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T: ArrayElement> MutableArrayHandle<'a, T> {
    /// Capability flag: mutable.
    pub const IS_MUTABLE: bool = true;

    /// Wrap an owned buffer for writing.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::ElementTypeMismatch`] if the buffer does
    /// not hold `T`.
    #[allow(unsafe_code)]
    pub fn new(buffer: &'a mut ArrayBuffer) -> Result<Self, PreconditionError> {
        // SAFETY: ArrayBuffer always holds a complete, aligned array, and the
        // exclusive borrow rules out any other access for 'a.
        unsafe { Self::from_raw(buffer.as_mut_ptr()) }
    }

    /// Wrap a host array in place for writing.
    ///
    /// # Errors
    ///
    /// Same as [`ArrayHandle::from_raw`].
    ///
    /// # Safety
    ///
    /// The contract of [`ArrayHandle::from_raw`], plus: `array` must be
    /// writable, and no other access to the elements may happen for `'a`
    /// except through this handle.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw(array: *mut ArrayHeader) -> Result<Self, PreconditionError> {
        // SAFETY: forwarded caller contract. The pointer keeps its write
        // provenance through validation.
        let raw = unsafe { raw::validate::<T>(array.cast_const())? };
        Ok(Self {
            base: ArrayHandle::from_parts(raw),
            _marker: PhantomData,
        })
    }

    /// A read-only view borrowing this handle.
    pub fn as_handle(&self) -> ArrayHandle<'_, T> {
        self.base
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.base.size()
    }

    /// Number of elements. Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Pointer to the first element.
    pub fn ptr(&self) -> *const T {
        self.base.ptr()
    }

    /// The host array this handle wraps.
    pub fn array(&self) -> *const ArrayHeader {
        self.base.array()
    }

    /// The elements as a shared slice.
    pub fn as_slice(&self) -> &[T] {
        self.as_handle().as_slice()
    }

    /// Checked element access.
    pub fn get(&self, index: usize) -> Result<&T, BoundsError> {
        self.as_handle().get(index)
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_handle().iter()
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.base.ndim()
    }

    /// Extent of each dimension.
    pub fn dims(&self) -> &[i32] {
        self.as_handle().dims()
    }

    /// Lower bound of each dimension.
    pub fn lower_bounds(&self) -> &[i32] {
        self.as_handle().lower_bounds()
    }

    /// Extents as `usize`.
    pub fn shape(&self) -> Shape {
        self.base.shape()
    }

    /// Element type recorded in the header.
    pub fn element_type(&self) -> Oid {
        self.base.element_type()
    }

    /// Writable pointer to the first element.
    pub fn ptr_mut(&mut self) -> *mut T {
        self.base.ptr().cast_mut()
    }

    /// Writable pointer to the host array, for handing it back to the host.
    pub fn array_mut(&mut self) -> *mut ArrayHeader {
        self.base.array().cast_mut()
    }

    /// The elements as a mutable slice.
    #[allow(unsafe_code)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.base.len();
        let data = self.ptr_mut();
        // SAFETY: data and len were validated at construction from a pointer
        // with write provenance; `&mut self` excludes every other view this
        // handle can produce.
        unsafe { raw::slice_mut(std::ptr::NonNull::new_unchecked(data), len) }
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, BoundsError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(BoundsError { index, len })
    }

    /// Mutable element access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](Self::size).
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "index {index} >= len {}", self.len());
        // SAFETY: caller guarantees index < len.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Write `value` at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), BoundsError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Iterate mutably over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }
}

impl<T: ArrayElement> ArrayRead<T> for MutableArrayHandle<'_, T> {
    fn as_slice(&self) -> &[T] {
        MutableArrayHandle::as_slice(self)
    }
}

impl<T: ArrayElement> ArrayWrite<T> for MutableArrayHandle<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        MutableArrayHandle::as_mut_slice(self)
    }
}

impl<T: ArrayElement> Index<usize> for MutableArrayHandle<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: ArrayElement> IndexMut<usize> for MutableArrayHandle<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: ArrayElement> fmt::Debug for MutableArrayHandle<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableArrayHandle")
            .field("array", &self.array())
            .field("element_type", &T::TYPE_NAME)
            .field("data", &self.as_slice())
            .finish()
    }
}
