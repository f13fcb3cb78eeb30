//! Binary layout of a host array.
//!
//! ```text
//! offset 0          vl_len      i32   varlena length word
//! offset 4          ndim        i32   0..=MAXDIM
//! offset 8          dataoffset  i32   0 unless a null bitmap is present
//! offset 12         elemtype    u32   element type OID
//! offset 16         dims        i32 × ndim
//! offset 16 + 4n    lbounds     i32 × ndim
//! MAXALIGN(16 + 8n) data        T × product(dims)
//! ```
//!
//! This module only computes offsets and sizes. Reading the trailing
//! arrays out of host memory is the job of `hostarray-handle`.

use smallvec::SmallVec;

use crate::error::PreconditionError;

/// Maximum number of dimensions the host supports.
pub const MAXDIM: usize = 6;

/// Alignment the host guarantees for every allocation, in bytes.
pub const MAXIMUM_ALIGNOF: usize = 8;

/// Largest element count the host allows in a single array.
pub const MAX_ARRAY_SIZE: usize = 0x3FFF_FFFF / 8;

/// Array extents, one entry per dimension.
pub type Shape = SmallVec<[usize; MAXDIM]>;

/// Fixed-size prefix of every host array.
///
/// The dimension and lower-bound arrays and the element data follow the
/// header in the same allocation, so a bare `ArrayHeader` value is never
/// meaningful on its own; it is only ever accessed through a pointer to
/// the start of a host buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayHeader {
    /// Varlena length word, in the host's encoding.
    pub vl_len: i32,
    /// Number of dimensions.
    pub ndim: i32,
    /// Offset to data, or 0 if there is no null bitmap.
    pub dataoffset: i32,
    /// Element type OID.
    pub elemtype: u32,
}

/// Size of [`ArrayHeader`] in bytes.
pub const HEADER_SIZE: usize = std::mem::size_of::<ArrayHeader>();

/// Round `len` up to the host's maximum alignment.
pub const fn maxalign(len: usize) -> usize {
    (len + MAXIMUM_ALIGNOF - 1) & !(MAXIMUM_ALIGNOF - 1)
}

/// Byte offset of the dims array.
pub const fn dims_offset() -> usize {
    HEADER_SIZE
}

/// Byte offset of the lower-bounds array for an array of `ndim` dimensions.
pub const fn lbounds_offset(ndim: usize) -> usize {
    HEADER_SIZE + ndim * std::mem::size_of::<i32>()
}

/// Byte offset of the element data for a null-free array of `ndim` dimensions.
pub const fn data_offset(ndim: usize) -> usize {
    maxalign(HEADER_SIZE + 2 * ndim * std::mem::size_of::<i32>())
}

/// Check a raw `ndim` value and convert it to `usize`.
pub fn checked_ndim(ndim: i32) -> Result<usize, PreconditionError> {
    if ndim < 0 || (ndim as usize) > MAXDIM {
        return Err(PreconditionError::InvalidDimensions {
            reason: format!("ndim {ndim} outside 0..={MAXDIM}"),
        });
    }
    Ok(ndim as usize)
}

/// Number of elements implied by `dims`.
///
/// Zero dimensions describe the empty array. Negative extents and products
/// above [`MAX_ARRAY_SIZE`] are rejected.
pub fn element_count(dims: &[i32]) -> Result<usize, PreconditionError> {
    if dims.len() > MAXDIM {
        return Err(PreconditionError::InvalidDimensions {
            reason: format!("{} dimensions exceeds maximum of {MAXDIM}", dims.len()),
        });
    }
    if dims.is_empty() {
        return Ok(0);
    }
    let mut count: usize = 1;
    for (axis, &extent) in dims.iter().enumerate() {
        if extent < 0 {
            return Err(PreconditionError::InvalidDimensions {
                reason: format!("dimension {axis} has negative extent {extent}"),
            });
        }
        count = count
            .checked_mul(extent as usize)
            .filter(|&c| c <= MAX_ARRAY_SIZE)
            .ok_or(PreconditionError::SizeOverflow)?;
    }
    Ok(count)
}

/// Total allocation size for a null-free array.
pub fn total_size(ndim: usize, len: usize, elem_size: usize) -> usize {
    data_offset(ndim) + len * elem_size
}

/// Encode a byte length as the host's 4-byte varlena header word.
#[cfg(target_endian = "little")]
pub const fn varlena_header(len: usize) -> i32 {
    ((len as u32) << 2) as i32
}

/// Encode a byte length as the host's 4-byte varlena header word.
#[cfg(target_endian = "big")]
pub const fn varlena_header(len: usize) -> i32 {
    (len as u32 & 0x3FFF_FFFF) as i32
}

/// Decode a 4-byte varlena header word back to a byte length.
#[cfg(target_endian = "little")]
pub const fn varlena_size(header: i32) -> usize {
    ((header as u32 >> 2) & 0x3FFF_FFFF) as usize
}

/// Decode a 4-byte varlena header word back to a byte length.
#[cfg(target_endian = "big")]
pub const fn varlena_size(header: i32) -> usize {
    (header as u32 & 0x3FFF_FFFF) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn header_is_sixteen_bytes() {
        assert_eq!(HEADER_SIZE, 16);
        assert_eq!(std::mem::align_of::<ArrayHeader>(), 4);
    }

    #[test]
    fn data_offset_is_maxaligned() {
        assert_eq!(data_offset(0), 16);
        assert_eq!(data_offset(1), 24);
        assert_eq!(data_offset(2), 32);
        assert_eq!(data_offset(3), 40);
        assert_eq!(lbounds_offset(1), 20);
    }

    #[test]
    fn empty_dims_have_no_elements() {
        assert_eq!(element_count(&[]), Ok(0));
        assert_eq!(element_count(&[0]), Ok(0));
        assert_eq!(element_count(&[3, 0, 2]), Ok(0));
    }

    #[test]
    fn negative_extent_rejected() {
        assert!(matches!(
            element_count(&[2, -1]),
            Err(PreconditionError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn oversized_product_rejected() {
        assert_eq!(
            element_count(&[i32::MAX, i32::MAX]),
            Err(PreconditionError::SizeOverflow)
        );
    }

    #[test]
    fn ndim_range_checked() {
        assert_eq!(checked_ndim(0), Ok(0));
        assert_eq!(checked_ndim(6), Ok(6));
        assert!(checked_ndim(7).is_err());
        assert!(checked_ndim(-1).is_err());
    }

    #[test]
    fn varlena_round_trip() {
        assert_eq!(varlena_size(varlena_header(24 + 8 * 5)), 64);
    }

    proptest! {
        #[test]
        fn element_count_is_product(dims in proptest::collection::vec(0i32..20, 1..=MAXDIM)) {
            let expected: usize = dims.iter().map(|&d| d as usize).product();
            prop_assert_eq!(element_count(&dims), Ok(expected));
        }

        #[test]
        fn data_offset_aligned_and_past_bounds(ndim in 0usize..=MAXDIM) {
            let off = data_offset(ndim);
            prop_assert_eq!(off % MAXIMUM_ALIGNOF, 0);
            prop_assert!(off >= lbounds_offset(ndim) + ndim * 4);
        }
    }
}
