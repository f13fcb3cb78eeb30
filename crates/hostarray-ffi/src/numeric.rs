//! Scalar numeric entry points.

use hostarray_numeric::student_t;

use crate::status::HostArrayStatus;

/// Student's t CDF: writes `P(T <= t)` for `T ~ t(nu)` to `out`.
///
/// Returns `DomainError` if `nu` is NaN or not strictly positive, and
/// `InvalidArgument` if `out` is null. A NaN `t` succeeds with a NaN
/// result.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hostarray_student_t_cdf(t: f64, nu: f64, out: *mut f64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return HostArrayStatus::InvalidArgument as i32;
        }
        match student_t::cdf(t, nu) {
            Ok(p) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = p };
                HostArrayStatus::Ok as i32
            }
            Err(e) => HostArrayStatus::from(&e) as i32,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_through_c_abi() {
        let mut p = 0.0;
        assert_eq!(
            hostarray_student_t_cdf(0.0, 7.0, &mut p),
            HostArrayStatus::Ok as i32
        );
        assert_eq!(p, 0.5);

        assert_eq!(
            hostarray_student_t_cdf(1.0, 1.0, &mut p),
            HostArrayStatus::Ok as i32
        );
        assert!((p - 0.75).abs() < 1e-12);
    }

    #[test]
    fn bad_degrees_of_freedom_leave_out_untouched() {
        let mut p = 42.0;
        for nu in [0.0, -3.0, f64::NAN] {
            assert_eq!(
                hostarray_student_t_cdf(1.0, nu, &mut p),
                HostArrayStatus::DomainError as i32
            );
            assert_eq!(p, 42.0, "out must not be written on error");
        }
    }

    #[test]
    fn null_out_is_invalid_argument() {
        assert_eq!(
            hostarray_student_t_cdf(1.0, 3.0, std::ptr::null_mut()),
            HostArrayStatus::InvalidArgument as i32
        );
    }

    #[test]
    fn nan_t_is_not_an_error() {
        let mut p = 0.0;
        assert_eq!(
            hostarray_student_t_cdf(f64::NAN, 3.0, &mut p),
            HostArrayStatus::Ok as i32
        );
        assert!(p.is_nan());
    }
}
