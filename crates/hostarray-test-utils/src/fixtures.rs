//! Deterministic fixture data.
//!
//! All generators are seeded so failures reproduce exactly.

use hostarray_handle::ArrayBuffer;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Default seed for fixture generators.
pub const DEFAULT_SEED: u64 = 0x5eed_cafe;

/// `len` uniform values in `[-scale, scale)`.
pub fn uniform_f64(len: usize, scale: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-scale..scale)).collect()
}

/// A one-dimensional float8 host array of `len` uniform values in `[-1, 1)`.
pub fn float8_array(len: usize, seed: u64) -> ArrayBuffer {
    ArrayBuffer::from_slice(&uniform_f64(len, 1.0, seed)).expect("fixture length fits the host limit")
}

/// A one-dimensional int4 host array counting up from `start`.
pub fn int4_sequence(start: i32, len: usize) -> ArrayBuffer {
    let data: Vec<i32> = (0..len as i32).map(|i| start + i).collect();
    ArrayBuffer::from_slice(&data).expect("fixture length fits the host limit")
}

/// A row-major `rows × cols` float8 matrix where element `(r, c)` is
/// `r * cols + c`.
pub fn float8_matrix(rows: i32, cols: i32) -> ArrayBuffer {
    let data: Vec<f64> = (0..rows * cols).map(f64::from).collect();
    ArrayBuffer::with_dims(&[rows, cols], &[1, 1], &data).expect("valid matrix dims")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_deterministic() {
        assert_eq!(uniform_f64(16, 2.0, 7), uniform_f64(16, 2.0, 7));
        assert_ne!(uniform_f64(16, 2.0, 7), uniform_f64(16, 2.0, 8));
    }

    #[test]
    fn uniform_respects_scale() {
        assert!(uniform_f64(256, 3.0, DEFAULT_SEED)
            .iter()
            .all(|v| (-3.0..3.0).contains(v)));
    }

    #[test]
    fn matrix_layout() {
        let m = float8_matrix(2, 3);
        assert_eq!(m.len(), 6);
        assert_eq!(m.to_vec::<f64>().unwrap()[5], 5.0);
    }
}
