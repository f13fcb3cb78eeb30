//! Tuning parameters for the iterative special functions.

use std::error::Error;
use std::fmt;

/// Convergence settings for the incomplete beta continued fraction.
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BetaConfig {
    epsilon: f64,
    max_iterations: u32,
}

impl BetaConfig {
    /// Default relative tolerance on successive convergents.
    pub const DEFAULT_EPSILON: f64 = 1e-15;

    /// Default iteration cap. The t CDF needs under a hundred terms for
    /// every `nu` below
    /// [`ASYMPTOTIC_NU`](crate::student_t::ASYMPTOTIC_NU).
    pub const DEFAULT_MAX_ITERATIONS: u32 = 10_000;

    /// Create a config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `epsilon` is not finite and positive or
    /// `max_iterations` is zero.
    pub fn new(epsilon: f64, max_iterations: u32) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon { value: epsilon });
        }
        if max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(Self {
            epsilon,
            max_iterations,
        })
    }

    /// Relative tolerance on successive convergents.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Iteration cap.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for BetaConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Invalid [`BetaConfig`] parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `epsilon` must be finite and > 0.
    InvalidEpsilon {
        /// The rejected value.
        value: f64,
    },
    /// `max_iterations` must be at least 1.
    ZeroIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEpsilon { value } => {
                write!(f, "epsilon must be finite and > 0, got {value}")
            }
            Self::ZeroIterations => write!(f, "max_iterations must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = BetaConfig::default();
        assert_eq!(c.epsilon(), BetaConfig::DEFAULT_EPSILON);
        assert_eq!(c.max_iterations(), BetaConfig::DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn rejects_bad_epsilon() {
        assert!(BetaConfig::new(0.0, 10).is_err());
        assert!(BetaConfig::new(-1e-9, 10).is_err());
        assert!(BetaConfig::new(f64::NAN, 10).is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(BetaConfig::new(1e-12, 0), Err(ConfigError::ZeroIterations));
    }
}
