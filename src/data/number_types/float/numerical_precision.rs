//! Helper methods for the accuracy of floating point calculations.
use num_traits::Float;

use crate::error::ConfigError;

/// The canonical rounding rule of the tableau.
///
/// Values smaller in absolute value than `epsilon` are snapped to zero, all other values are
/// rounded half-up (away from zero) to `decimals` decimal places.
///
/// Every stored value carries rounding error of the order of `10^-decimals`, and that error grows
/// with each pivot. Sign and zero tests that steer the algorithm therefore use the coarser
/// `tolerance`, which only trusts the first half of the kept decimals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Precision {
    /// Number of decimal places that are kept.
    pub decimals: i32,
    /// Values smaller than this in absolute value are rounded to zero.
    pub epsilon: f64,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            decimals: 6,
            epsilon: 1e-10,
        }
    }
}

impl Precision {
    /// Create a new `Precision` after checking that the values are usable.
    ///
    /// # Arguments
    ///
    /// * `decimals`: Number of decimal places, in range `0..=15`.
    /// * `epsilon`: Positive, finite tolerance.
    pub fn new(decimals: i32, epsilon: f64) -> Result<Self, ConfigError> {
        let precision = Self { decimals, epsilon };
        precision.validate()?;
        Ok(precision)
    }

    /// Check the values of this precision.
    ///
    /// More than 15 decimals can't be represented faithfully by an `f64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=15).contains(&self.decimals) {
            return Err(ConfigError::Decimals(self.decimals));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0_f64) {
            return Err(ConfigError::Epsilon(self.epsilon));
        }

        Ok(())
    }

    /// Apply the rounding rule.
    pub fn round(&self, value: f64) -> f64 {
        round_half_up(value, self.decimals, self.epsilon)
    }

    /// Threshold of the sign and zero tests: `10^-(decimals / 2)`, but never below `epsilon`.
    ///
    /// With the default six decimals, this is `0.001`.
    pub fn tolerance(&self) -> f64 {
        10_f64.powi(-(self.decimals / 2)).max(self.epsilon)
    }

    /// Whether a value is zero within the tolerance.
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.tolerance()
    }

    /// Whether a value is negative by more than the tolerance.
    pub fn is_negative(&self, value: f64) -> bool {
        value < -self.tolerance()
    }

    /// Whether a value is positive by more than the tolerance.
    pub fn is_positive(&self, value: f64) -> bool {
        value > self.tolerance()
    }

    /// Whether two stored values are equal up to the snapping threshold `epsilon`.
    pub fn is_close(&self, left: f64, right: f64) -> bool {
        (left - right).abs() < self.epsilon
    }
}

/// Snap a value to zero when it is smaller than `epsilon`, and round it half-up to a fixed number
/// of decimals otherwise.
///
/// Rounding is stable: `round_half_up(round_half_up(v)) == round_half_up(v)`.
///
/// # Arguments
///
/// * `value`: Value to round. Non-finite values are returned unchanged.
/// * `decimals`: Number of decimal places to keep.
/// * `epsilon`: Positive tolerance.
///
/// # Return value
///
/// The rounded value. Never a negative zero.
pub fn round_half_up<F: Float>(value: F, decimals: i32, epsilon: F) -> F {
    debug_assert!(epsilon > F::zero());

    if !value.is_finite() {
        return value;
    }
    if value.abs() < epsilon {
        return F::zero();
    }

    let (Some(ten), Some(four)) = (F::from(10), F::from(4)) else {
        return value;
    };
    let scale = ten.powi(decimals);
    let scaled = value * scale;
    if scaled.fract() == F::zero() {
        // Also covers all values too large to have a fractional part
        return value;
    }

    // A decimal half like 2.0000005 is stored as 2.00000049999..., nudge it over the boundary
    let nudge = scaled.abs() * F::epsilon() * four;
    let rounded = (scaled + scaled.signum() * nudge).round() / scale;

    if rounded.abs() < epsilon {
        F::zero()
    } else {
        rounded
    }
}
