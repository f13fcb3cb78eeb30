//! Owned allocations in the host's array layout.
//!
//! [`ArrayBuffer`] is what a routine builds when it has to hand a fresh
//! array back to the host, and what tests use in place of host memory. Its
//! bytes are laid out exactly as described in
//! [`hostarray_core::layout`], so a handle cannot tell it apart from an
//! array the host allocated.

use std::fmt;

use hostarray_core::layout::{self, ArrayHeader, MAXDIM};
use hostarray_core::{ArrayElement, Oid, PreconditionError};

use crate::raw;
use crate::read::ArrayHandle;

/// An owned, 8-byte aligned host array.
#[derive(Clone)]
pub struct ArrayBuffer {
    /// Backing storage. `u64` words give the host's maximum alignment.
    words: Vec<u64>,
    /// Total encoded size in bytes.
    byte_len: usize,
    /// Element type written into the header.
    element_type: Oid,
    /// Number of elements.
    len: usize,
}

impl ArrayBuffer {
    /// Build a one-dimensional array with lower bound 1.
    ///
    /// An empty slice produces the host's zero-dimensional empty array.
    pub fn from_slice<T: ArrayElement>(data: &[T]) -> Result<Self, PreconditionError> {
        if data.is_empty() {
            return Ok(Self::empty::<T>());
        }
        let extent = i32::try_from(data.len()).map_err(|_| PreconditionError::SizeOverflow)?;
        Self::with_dims(&[extent], &[1], data)
    }

    /// Build a one-dimensional array of `len` zero elements.
    pub fn zeroed<T: ArrayElement>(len: usize) -> Result<Self, PreconditionError> {
        Self::from_slice(&vec![T::default(); len])
    }

    /// The zero-dimensional empty array.
    pub fn empty<T: ArrayElement>() -> Self {
        let byte_len = layout::total_size(0, 0, std::mem::size_of::<T>());
        let mut words = vec![0u64; byte_len.div_ceil(8)];
        raw::write_array::<T>(&mut words, &[], &[], &[]);
        Self {
            words,
            byte_len,
            element_type: T::TYPE_OID,
            len: 0,
        }
    }

    /// Build an array with explicit dimensions and lower bounds.
    ///
    /// `data` is in row-major order and its length must equal the product
    /// of `dims`.
    pub fn with_dims<T: ArrayElement>(
        dims: &[i32],
        lower_bounds: &[i32],
        data: &[T],
    ) -> Result<Self, PreconditionError> {
        if dims.len() > MAXDIM || dims.len() != lower_bounds.len() {
            return Err(PreconditionError::InvalidDimensions {
                reason: format!(
                    "{} dims and {} lower bounds (maximum {MAXDIM})",
                    dims.len(),
                    lower_bounds.len()
                ),
            });
        }
        let len = layout::element_count(dims)?;
        if len != data.len() {
            return Err(PreconditionError::DataLengthMismatch {
                expected: len,
                found: data.len(),
            });
        }

        let byte_len = layout::total_size(dims.len(), len, std::mem::size_of::<T>());
        let mut words = vec![0u64; byte_len.div_ceil(8)];
        raw::write_array(&mut words, dims, lower_bounds, data);
        Ok(Self {
            words,
            byte_len,
            element_type: T::TYPE_OID,
            len,
        })
    }

    /// Pointer to the header, suitable for [`ArrayHandle::from_raw`] or for
    /// handing to the host.
    pub fn as_ptr(&self) -> *const ArrayHeader {
        self.words.as_ptr().cast()
    }

    /// Writable pointer to the header.
    pub fn as_mut_ptr(&mut self) -> *mut ArrayHeader {
        self.words.as_mut_ptr().cast()
    }

    /// Total encoded size in bytes, as recorded in the varlena word.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Element type recorded in the header.
    pub fn element_type(&self) -> Oid {
        self.element_type
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy the elements out.
    pub fn to_vec<T: ArrayElement>(&self) -> Result<Vec<T>, PreconditionError> {
        Ok(ArrayHandle::<T>::new(self)?.as_slice().to_vec())
    }
}

impl fmt::Debug for ArrayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("element_type", &self.element_type)
            .field("len", &self.len)
            .field("byte_len", &self.byte_len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostarray_core::layout::varlena_size;

    fn header_of(buf: &ArrayBuffer) -> ArrayHeader {
        *ArrayHandle::<f64>::new(buf).unwrap().header()
    }

    #[test]
    fn from_slice_writes_one_dimension() {
        let buf = ArrayBuffer::from_slice(&[1.0f64, 2.0, 3.0]).unwrap();
        let h = header_of(&buf);
        assert_eq!(h.ndim, 1);
        assert_eq!(h.dataoffset, 0);
        assert_eq!(h.elemtype, 701);
        assert_eq!(buf.byte_len(), 24 + 3 * 8);
        assert_eq!(varlena_size(h.vl_len), buf.byte_len());
    }

    #[test]
    fn empty_slice_is_zero_dimensional() {
        let buf = ArrayBuffer::from_slice::<f64>(&[]).unwrap();
        assert!(buf.is_empty());
        assert_eq!(header_of(&buf).ndim, 0);
        assert_eq!(buf.byte_len(), 16);
    }

    #[test]
    fn with_dims_rejects_length_mismatch() {
        let err = ArrayBuffer::with_dims(&[2, 2], &[1, 1], &[1i32, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            PreconditionError::DataLengthMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn with_dims_rejects_unpaired_bounds() {
        assert!(matches!(
            ArrayBuffer::with_dims(&[2], &[], &[1i32, 2]),
            Err(PreconditionError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn zeroed_is_all_default() {
        let buf = ArrayBuffer::zeroed::<i64>(5).unwrap();
        assert_eq!(buf.to_vec::<i64>().unwrap(), vec![0; 5]);
    }

    #[test]
    fn to_vec_checks_element_type() {
        let buf = ArrayBuffer::from_slice(&[1i16, 2]).unwrap();
        assert!(buf.to_vec::<i32>().is_err());
        assert_eq!(buf.to_vec::<i16>().unwrap(), vec![1, 2]);
    }

    #[test]
    fn pointer_is_maxaligned() {
        let buf = ArrayBuffer::from_slice(&[1.0f32]).unwrap();
        assert_eq!(buf.as_ptr() as usize % layout::MAXIMUM_ALIGNOF, 0);
    }
}
