//! Elementwise and reduction kernels over array views.
//!
//! Written against [`ArrayRead`] / [`ArrayWrite`] so the same code runs on
//! host array handles, owned vectors and plain slices. Reductions accept
//! any element type that widens losslessly to `f64`; in-place updates work
//! on `float8` data.

use std::error::Error;
use std::fmt;

use hostarray_core::{ArrayElement, ArrayRead, ArrayWrite};

/// Errors from array kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayOpError {
    /// Two operands differ in length.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// The operation is undefined on an empty array.
    Empty,
}

impl fmt::Display for ArrayOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { left, right } => {
                write!(f, "array lengths differ: {left} vs {right}")
            }
            Self::Empty => write!(f, "array is empty"),
        }
    }
}

impl Error for ArrayOpError {}

/// Sum of all elements. 0 for an empty array.
pub fn sum<T, A>(array: &A) -> f64
where
    T: ArrayElement + Into<f64>,
    A: ArrayRead<T> + ?Sized,
{
    array.as_slice().iter().map(|&v| -> f64 { v.into() }).sum()
}

/// Arithmetic mean.
///
/// # Errors
///
/// [`ArrayOpError::Empty`] if the array has no elements.
pub fn mean<T, A>(array: &A) -> Result<f64, ArrayOpError>
where
    T: ArrayElement + Into<f64>,
    A: ArrayRead<T> + ?Sized,
{
    if array.is_empty() {
        return Err(ArrayOpError::Empty);
    }
    Ok(sum(array) / array.len() as f64)
}

/// Inner product of two equal-length arrays.
///
/// # Errors
///
/// [`ArrayOpError::LengthMismatch`] if the lengths differ.
pub fn dot<A, B>(left: &A, right: &B) -> Result<f64, ArrayOpError>
where
    A: ArrayRead<f64> + ?Sized,
    B: ArrayRead<f64> + ?Sized,
{
    let (l, r) = same_len(left.as_slice(), right.as_slice())?;
    Ok(l.iter().zip(r).map(|(a, b)| a * b).sum())
}

/// Multiply every element by `factor` in place.
pub fn scale_in_place<A>(array: &mut A, factor: f64)
where
    A: ArrayWrite<f64> + ?Sized,
{
    for v in array.as_mut_slice() {
        *v *= factor;
    }
}

/// Add `addend` elementwise into `target`.
///
/// # Errors
///
/// [`ArrayOpError::LengthMismatch`] if the lengths differ; `target` is left
/// unchanged.
pub fn add_in_place<A, B>(target: &mut A, addend: &B) -> Result<(), ArrayOpError>
where
    A: ArrayWrite<f64> + ?Sized,
    B: ArrayRead<f64> + ?Sized,
{
    let addend = addend.as_slice();
    let target = target.as_mut_slice();
    if target.len() != addend.len() {
        return Err(ArrayOpError::LengthMismatch {
            left: target.len(),
            right: addend.len(),
        });
    }
    for (t, a) in target.iter_mut().zip(addend) {
        *t += a;
    }
    Ok(())
}

fn same_len<'a>(l: &'a [f64], r: &'a [f64]) -> Result<(&'a [f64], &'a [f64]), ArrayOpError> {
    if l.len() != r.len() {
        return Err(ArrayOpError::LengthMismatch {
            left: l.len(),
            right: r.len(),
        });
    }
    Ok((l, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_widens_integers() {
        let v: Vec<i32> = vec![1, 2, 3, -4];
        assert_eq!(sum(&v), 2.0);
        let e: Vec<f32> = Vec::new();
        assert_eq!(sum(&e), 0.0);
    }

    #[test]
    fn mean_of_empty_is_error() {
        let e: Vec<f64> = Vec::new();
        assert_eq!(mean(&e), Err(ArrayOpError::Empty));
        assert_eq!(mean(&vec![2.0f64, 4.0]), Ok(3.0));
    }

    #[test]
    fn dot_checks_lengths() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert_eq!(dot(&a, &b), Ok(32.0));
        assert_eq!(
            dot(&a, &b[..2]),
            Err(ArrayOpError::LengthMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn scale_and_add() {
        let mut a = vec![1.0, -2.0];
        scale_in_place(&mut a, 3.0);
        assert_eq!(a, vec![3.0, -6.0]);
        add_in_place(&mut a, &vec![1.0, 1.0]).unwrap();
        assert_eq!(a, vec![4.0, -5.0]);
        assert!(add_in_place(&mut a, &vec![1.0]).is_err());
        assert_eq!(a, vec![4.0, -5.0]);
    }
}
