//! # Solver configuration
//!
//! Numerical settings shared by both methods. The defaults are suitable for problems with
//! coefficients of moderate magnitude.
use crate::data::number_types::float::numerical_precision::Precision;
use crate::error::ConfigError;

/// Default penalty of artificial variables in the Big-M method.
pub const DEFAULT_BIG_M: f64 = 1e6;

/// Settings for a single solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Rounding rule applied to every value stored in the tableau.
    pub precision: Precision,
    /// Objective penalty of artificial variables in the Big-M method.
    ///
    /// Should dominate the magnitude of all other objective coefficients.
    pub big_m: f64,
    /// Maximum number of pivots in a single solve.
    ///
    /// Without a limit, a tableau that cycles is pivoted forever.
    pub iteration_limit: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            big_m: DEFAULT_BIG_M,
            iteration_limit: None,
        }
    }
}

impl SolverConfig {
    /// Use a different number of decimal places.
    #[must_use]
    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.precision.decimals = decimals;
        self
    }

    /// Use a different zero tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.precision.epsilon = epsilon;
        self
    }

    /// Use a different Big-M penalty.
    #[must_use]
    pub fn with_big_m(mut self, big_m: f64) -> Self {
        self.big_m = big_m;
        self
    }

    /// Stop after a number of pivots.
    #[must_use]
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Check all values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.precision.validate()?;
        if !(self.big_m.is_finite() && self.big_m > 0_f64) {
            return Err(ConfigError::BigM(self.big_m));
        }
        if self.iteration_limit == Some(0) {
            return Err(ConfigError::IterationLimit);
        }

        Ok(())
    }
}
