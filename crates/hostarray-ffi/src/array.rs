//! `float8[]` entry points operating on host arrays in place.
//!
//! Each function validates the array with the same checks as
//! [`ArrayHandle::from_raw`], so a null, misaligned, null-bearing or
//! wrongly typed array is reported through the status code rather than
//! read.

use hostarray_core::layout::ArrayHeader;
use hostarray_handle::{ArrayHandle, MutableArrayHandle};
use hostarray_numeric::array_ops;

use crate::status::HostArrayStatus;

/// Wrap a host `float8[]` for reading.
///
/// # Safety
///
/// Contract of [`ArrayHandle::from_raw`] for the chosen `'a`.
#[allow(unsafe_code)]
unsafe fn read_float8<'a>(array: *const ArrayHeader) -> Result<ArrayHandle<'a, f64>, i32> {
    // SAFETY: forwarded caller contract.
    unsafe { ArrayHandle::from_raw(array) }.map_err(|e| HostArrayStatus::from(&e) as i32)
}

/// Number of elements in a `float8[]`, written to `len_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hostarray_float8_array_len(
    array: *const ArrayHeader,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if len_out.is_null() {
            return HostArrayStatus::InvalidArgument as i32;
        }
        // SAFETY: array is a live host array per caller contract.
        let h = match unsafe { read_float8(array) } {
            Ok(h) => h,
            Err(status) => return status,
        };
        // SAFETY: len_out is non-null and valid per caller contract.
        unsafe { *len_out = h.size() };
        HostArrayStatus::Ok as i32
    })
}

/// Sum of a `float8[]`, written to `out`. An empty array sums to 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hostarray_float8_array_sum(array: *const ArrayHeader, out: *mut f64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return HostArrayStatus::InvalidArgument as i32;
        }
        // SAFETY: array is a live host array per caller contract.
        let h = match unsafe { read_float8(array) } {
            Ok(h) => h,
            Err(status) => return status,
        };
        // SAFETY: out is non-null and valid per caller contract.
        unsafe { *out = array_ops::sum(&h) };
        HostArrayStatus::Ok as i32
    })
}

/// Inner product of two equal-length `float8[]`s, written to `out`.
///
/// Returns `LengthMismatch` if the arrays differ in length.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hostarray_float8_array_dot(
    left: *const ArrayHeader,
    right: *const ArrayHeader,
    out: *mut f64,
) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return HostArrayStatus::InvalidArgument as i32;
        }
        // SAFETY: both arrays are live host arrays per caller contract.
        let (l, r) = match unsafe { (read_float8(left), read_float8(right)) } {
            (Ok(l), Ok(r)) => (l, r),
            (Err(status), _) | (_, Err(status)) => return status,
        };
        match array_ops::dot(&l, &r) {
            Ok(v) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = v };
                HostArrayStatus::Ok as i32
            }
            Err(e) => HostArrayStatus::from(&e) as i32,
        }
    })
}

/// Multiply every element of a `float8[]` by `factor`, in place.
///
/// The caller must hold the array exclusively for the duration of the
/// call.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hostarray_float8_array_scale(array: *mut ArrayHeader, factor: f64) -> i32 {
    ffi_guard!({
        // SAFETY: array is a live, exclusively held host array per caller
        // contract.
        let mut h = match unsafe { MutableArrayHandle::<f64>::from_raw(array) } {
            Ok(h) => h,
            Err(e) => return HostArrayStatus::from(&e) as i32,
        };
        array_ops::scale_in_place(&mut h, factor);
        HostArrayStatus::Ok as i32
    })
}
