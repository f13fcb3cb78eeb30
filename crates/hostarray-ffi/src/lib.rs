//! C ABI entry points for hostarray.
//!
//! Every exported function returns an `i32` [`HostArrayStatus`] and writes
//! its result through an out-pointer that is left untouched on error.
//! Function bodies run inside [`ffi_guard!`], so a Rust panic never
//! unwinds into the host: it becomes [`HostArrayStatus::Panicked`] and
//! its message is kept for [`hostarray_last_panic_message`].
//!
//! The C header `include/hostarray.h` is generated by `build.rs`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_char;

thread_local! {
    pub(crate) static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Run an FFI body, converting a panic into [`HostArrayStatus::Panicked`].
///
/// The body is a block evaluating to `i32`; `return` inside it returns
/// from the guarded closure.
macro_rules! ffi_guard {
    ($body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(status) => status,
            Err(payload) => {
                $crate::record_panic(payload.as_ref());
                $crate::status::HostArrayStatus::Panicked as i32
            }
        }
    };
}

pub mod array;
pub mod numeric;
pub mod status;

pub use array::{
    hostarray_float8_array_dot, hostarray_float8_array_len, hostarray_float8_array_scale,
    hostarray_float8_array_sum,
};
pub use numeric::hostarray_student_t_cdf;
pub use status::HostArrayStatus;

pub(crate) fn record_panic(payload: &(dyn Any + Send)) {
    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    };
    LAST_PANIC.with(|cell| *cell.borrow_mut() = msg);
}

/// Copy the most recent panic message caught on this thread into `buf`.
///
/// Returns the full message length in bytes (0 if no panic was caught).
/// If `buf` is non-null, at most `cap - 1` bytes are copied followed by a
/// NUL terminator. Pass a null `buf` to query the length.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hostarray_last_panic_message(buf: *mut c_char, cap: usize) -> i32 {
    ffi_guard!({
        LAST_PANIC.with(|cell| {
            let msg = cell.borrow();
            let bytes = msg.as_bytes();
            if !buf.is_null() && cap > 0 {
                let n = bytes.len().min(cap - 1);
                // SAFETY: buf is valid for `cap` bytes per caller contract,
                // and `n < cap`.
                unsafe {
                    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), n);
                    *buf.add(n) = 0;
                }
            }
            i32::try_from(bytes.len()).unwrap_or(i32::MAX)
        })
    })
}
