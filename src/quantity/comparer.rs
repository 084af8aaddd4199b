//! Tolerant comparison of quantities at a fixed decimal precision.

use super::base::Quantity;
use super::error::QuantityError;

use serde::{Serialize, Deserialize};
use tracing::debug;

use std::cmp::Ordering;

pub const DEFAULT_PRECISION: u32 = 6;

/// Settings for a [`QuantityComparer`], suitable for loading from an
/// application's configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparerConfig {
  /// Number of decimal digits, in base units, which must agree for
  /// two quantities to be considered equal.
  pub precision: u32,
}

/// Compares quantities after converting both to base units and
/// rounding to a fixed number of decimal digits. Two magnitudes are
/// equal exactly when they round to the same multiple of
/// `10^-precision`, and are otherwise ordered by those multiples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityComparer {
  precision: u32,
  epsilon: f64,
}

impl Default for ComparerConfig {
  fn default() -> Self {
    ComparerConfig { precision: DEFAULT_PRECISION }
  }
}

impl QuantityComparer {
  pub fn new(precision: u32) -> Self {
    let epsilon = 10f64.powi(-(precision as i32));
    Self { precision, epsilon }
  }

  pub fn precision(&self) -> u32 {
    self.precision
  }

  pub fn epsilon(&self) -> f64 {
    self.epsilon
  }

  /// The number of `epsilon` steps nearest to `value`.
  fn grid_steps(&self, value: f64) -> f64 {
    (value * 10f64.powi(self.precision as i32)).round()
  }

  /// Orders two compatible quantities. Fails if the operands do not
  /// share families and exponents.
  pub fn compare(&self, left: &Quantity, right: &Quantity) -> Result<Ordering, QuantityError> {
    if !left.dimensions().is_compatible(right.dimensions(), false) {
      return Err(QuantityError::IncompatibleDimensions { left: left.clone(), right: right.clone() });
    }
    let l = self.grid_steps(left.to_base().value());
    let r = self.grid_steps(right.to_base().value());
    debug!(left = l, right = r, precision = self.precision, "comparing rounded base magnitudes");
    // Both sides are whole numbers here, so equality is exact. Checking
    // it first also keeps -0 and +0 equal.
    if l == r {
      Ok(Ordering::Equal)
    } else {
      Ok(l.total_cmp(&r))
    }
  }

  /// Whether two quantities are equal at this precision. Incompatible
  /// quantities are never equal.
  pub fn equals(&self, left: &Quantity, right: &Quantity) -> bool {
    matches!(self.compare(left, right), Ok(Ordering::Equal))
  }
}

impl Default for QuantityComparer {
  fn default() -> Self {
    QuantityComparer::from(ComparerConfig::default())
  }
}

impl From<ComparerConfig> for QuantityComparer {
  fn from(config: ComparerConfig) -> Self {
    QuantityComparer::new(config.precision)
  }
}
