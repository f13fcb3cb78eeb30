//! Low-level primitives for reading and writing host array memory.
//!
//! Every `unsafe` operation in this crate lives here, each with a
//! `// SAFETY:` comment. Callers in `read.rs`, `write.rs` and `buffer.rs`
//! only ever see validated [`RawArray`] parts.

#![allow(unsafe_code)]

use std::ptr::NonNull;

use hostarray_core::layout::{self, ArrayHeader};
use hostarray_core::{ArrayElement, PreconditionError};

/// Validated location of an array's header and elements.
pub(crate) struct RawArray<T> {
    pub(crate) array: NonNull<ArrayHeader>,
    pub(crate) data: NonNull<T>,
    pub(crate) len: usize,
}

/// Validate the array at `array` for element type `T`.
///
/// # Safety
///
/// `array` must be null or point to a readable host array whose header,
/// dimension arrays and `product(dims)` elements are all inside one
/// allocation that stays valid and unmoved for as long as the returned
/// pointers are used.
pub(crate) unsafe fn validate<T: ArrayElement>(
    array: *const ArrayHeader,
) -> Result<RawArray<T>, PreconditionError> {
    let array = NonNull::new(array.cast_mut()).ok_or(PreconditionError::NullArray)?;
    if !array.as_ptr().is_aligned() {
        return Err(PreconditionError::Misaligned {
            required: std::mem::align_of::<ArrayHeader>(),
        });
    }

    // SAFETY: non-null and aligned; the caller guarantees a readable header.
    let header = unsafe { array.as_ptr().read() };
    if header.elemtype != T::TYPE_OID.0 {
        return Err(PreconditionError::ElementTypeMismatch {
            expected: T::TYPE_OID,
            found: header.elemtype.into(),
        });
    }
    if header.dataoffset != 0 {
        return Err(PreconditionError::ContainsNulls);
    }
    let ndim = layout::checked_ndim(header.ndim)?;

    // SAFETY: ndim is in range and the caller guarantees the dims follow the header.
    let len = layout::element_count(unsafe { dims(array, ndim) })?;

    // SAFETY: the data region starts inside the same allocation.
    let data = unsafe { data_ptr::<T>(array, ndim) };
    if !data.as_ptr().is_aligned() {
        return Err(PreconditionError::Misaligned {
            required: std::mem::align_of::<T>(),
        });
    }

    Ok(RawArray { array, data, len })
}

/// Re-derive the element count from the header.
///
/// # Safety
///
/// `array` must satisfy the contract of [`validate`].
pub(crate) unsafe fn element_count(array: NonNull<ArrayHeader>) -> Result<usize, PreconditionError> {
    // SAFETY: caller contract.
    let ndim = layout::checked_ndim(unsafe { header(array) }.ndim)?;
    // SAFETY: caller contract; ndim checked above.
    layout::element_count(unsafe { dims(array, ndim) })
}

/// Borrow the fixed header.
///
/// # Safety
///
/// `array` must point to a valid, aligned header that outlives `'a`.
pub(crate) unsafe fn header<'a>(array: NonNull<ArrayHeader>) -> &'a ArrayHeader {
    // SAFETY: caller contract.
    unsafe { array.as_ref() }
}

/// Borrow the dimension extents.
///
/// # Safety
///
/// `array` must point to a valid header followed by `ndim` extents, all of
/// which outlive `'a` and are never written while borrowed.
pub(crate) unsafe fn dims<'a>(array: NonNull<ArrayHeader>, ndim: usize) -> &'a [i32] {
    // SAFETY: the dims array starts at a 4-aligned offset inside the allocation.
    unsafe {
        let ptr = array.cast::<u8>().add(layout::dims_offset()).cast::<i32>();
        std::slice::from_raw_parts(ptr.as_ptr(), ndim)
    }
}

/// Borrow the per-dimension lower bounds.
///
/// # Safety
///
/// Same contract as [`dims`].
pub(crate) unsafe fn lower_bounds<'a>(array: NonNull<ArrayHeader>, ndim: usize) -> &'a [i32] {
    // SAFETY: the lbounds array follows the dims array inside the allocation.
    unsafe {
        let ptr = array
            .cast::<u8>()
            .add(layout::lbounds_offset(ndim))
            .cast::<i32>();
        std::slice::from_raw_parts(ptr.as_ptr(), ndim)
    }
}

/// Pointer to the first element.
///
/// # Safety
///
/// `array` must point to a null-free host array of `ndim` dimensions.
unsafe fn data_ptr<T>(array: NonNull<ArrayHeader>, ndim: usize) -> NonNull<T> {
    // SAFETY: data_offset is within (or one past the end of) the allocation.
    unsafe { array.cast::<u8>().add(layout::data_offset(ndim)).cast::<T>() }
}

/// Shared slice over validated elements.
///
/// # Safety
///
/// `data` and `len` must come from [`validate`], and no mutable access to
/// the elements may happen during `'a`.
pub(crate) unsafe fn slice<'a, T>(data: NonNull<T>, len: usize) -> &'a [T] {
    // SAFETY: caller contract.
    unsafe { std::slice::from_raw_parts(data.as_ptr(), len) }
}

/// Mutable slice over validated elements.
///
/// # Safety
///
/// `data` and `len` must come from [`validate`] on a pointer with write
/// provenance, and no other access to the elements may happen during `'a`.
pub(crate) unsafe fn slice_mut<'a, T>(data: NonNull<T>, len: usize) -> &'a mut [T] {
    // SAFETY: caller contract.
    unsafe { std::slice::from_raw_parts_mut(data.as_ptr(), len) }
}

/// Serialize a null-free array into `words`.
///
/// `words` must be at least [`layout::total_size`] bytes and `data.len()`
/// must equal `product(dims)`; both are checked by the caller.
pub(crate) fn write_array<T: ArrayElement>(
    words: &mut [u64],
    dims: &[i32],
    lower_bounds: &[i32],
    data: &[T],
) {
    let ndim = dims.len();
    let total = layout::total_size(ndim, data.len(), std::mem::size_of::<T>());
    assert!(total <= words.len() * 8, "array buffer too small");
    assert_eq!(lower_bounds.len(), ndim, "lower bounds do not match dims");

    let base = NonNull::from(&mut *words).cast::<u8>();
    let header = ArrayHeader {
        vl_len: layout::varlena_header(total),
        ndim: ndim as i32,
        dataoffset: 0,
        elemtype: T::TYPE_OID.0,
    };

    // SAFETY: `base` is 8-aligned (backed by u64 words) and every write below
    // lands inside the first `total` bytes, which the assert above bounds.
    // Source and destination never overlap because `words` is borrowed
    // mutably for the whole call.
    unsafe {
        base.cast::<ArrayHeader>().write(header);
        std::ptr::copy_nonoverlapping(
            dims.as_ptr(),
            base.add(layout::dims_offset()).cast::<i32>().as_ptr(),
            ndim,
        );
        std::ptr::copy_nonoverlapping(
            lower_bounds.as_ptr(),
            base.add(layout::lbounds_offset(ndim)).cast::<i32>().as_ptr(),
            ndim,
        );
        std::ptr::copy_nonoverlapping(
            data.as_ptr(),
            base.add(layout::data_offset(ndim)).cast::<T>().as_ptr(),
            data.len(),
        );
    }
}
