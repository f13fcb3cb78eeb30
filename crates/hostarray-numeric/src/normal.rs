//! Standard normal distribution.

use statrs::function::erf::erfc;

/// Standard normal CDF `Φ(x)`.
///
/// Uses `erfc` on the negated argument so the lower tail keeps relative
/// precision instead of underflowing through `1 - Φ(-x)`.
pub fn cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal density `φ(x)`.
pub fn pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        assert!((cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((cdf(1.0) - 0.841_344_746_068_542_9).abs() < 1e-14);
        assert!((cdf(-1.96) - 0.024_997_895_148_220_43).abs() < 1e-14);
    }

    #[test]
    fn tails() {
        assert_eq!(cdf(f64::INFINITY), 1.0);
        assert_eq!(cdf(f64::NEG_INFINITY), 0.0);
        let deep = cdf(-8.0);
        assert!(deep > 0.0 && deep < 1e-14, "{deep}");
    }

    #[test]
    fn density() {
        assert!((pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-16);
        assert!((pdf(1.5) - pdf(-1.5)).abs() < 1e-18);
        assert!((pdf(2.0) - 0.053_990_966_513_188_06).abs() < 1e-16);
        assert_eq!(pdf(1e200), 0.0);
    }
}
