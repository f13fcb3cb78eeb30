//! Benchmark inputs for hostarray handles and numeric kernels.
//!
//! - [`ARRAY_SIZES`]: element counts the handle benchmarks sweep
//! - [`array_pair`]: two seeded float8 host arrays of equal length
//! - [`cdf_grid`]: `(t, nu)` evaluation points for the t CDF

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hostarray_handle::ArrayBuffer;
use hostarray_test_utils::fixtures;

/// Element counts swept by the handle benchmarks.
pub const ARRAY_SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

/// Two float8 host arrays of `len` elements with distinct seeds.
pub fn array_pair(len: usize, seed: u64) -> (ArrayBuffer, ArrayBuffer) {
    (
        fixtures::float8_array(len, seed),
        fixtures::float8_array(len, seed.wrapping_add(1)),
    )
}

/// `(t, nu)` pairs covering small, moderate and large degrees of freedom.
///
/// `t` runs over `[-8, 8]` in `per_nu` evenly spaced steps for each `nu`.
pub fn cdf_grid(per_nu: usize) -> Vec<(f64, f64)> {
    let nus = [1.0, 2.5, 10.0, 30.0, 1_000.0, 100_000.0];
    let step = if per_nu > 1 {
        16.0 / (per_nu - 1) as f64
    } else {
        0.0
    };
    nus.iter()
        .flat_map(|&nu| (0..per_nu).map(move |i| (-8.0 + step * i as f64, nu)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_spans_range() {
        let g = cdf_grid(17);
        assert_eq!(g.len(), 6 * 17);
        assert_eq!(g[0], (-8.0, 1.0));
        assert_eq!(g[16], (8.0, 1.0));
    }

    #[test]
    fn pair_has_distinct_data() {
        let (a, b) = array_pair(8, 3);
        assert_eq!(a.len(), 8);
        assert_ne!(a.to_vec::<f64>().unwrap(), b.to_vec::<f64>().unwrap());
    }
}
