//! Strategies for converting a magnitude between a concrete unit and
//! the base unit of its family.
//!
//! A conversion is always parameterized by the exponent the unit is
//! raised to at the point of conversion. A unit raised to the `n`th
//! power is converted by applying the single-unit conversion `n`
//! times, and a unit raised to a negative power is converted by
//! working on the reciprocal of the magnitude.

use super::dimension::Dimension;

use std::cmp::Ordering;
use std::sync::Arc;

/// A stateless strategy for converting a magnitude into (or out of)
/// the base unit of a family.
pub trait UnitConversion {
  /// Converts `value`, expressed in a unit raised to `exponent`.
  /// An exponent of zero always produces `1`, the neutral element
  /// for a family whose contribution has canceled off.
  fn convert(&self, value: f64, exponent: i32) -> f64;

  /// Whether this conversion leaves every input unchanged. Only the
  /// canonical base unit of a family has identity conversions.
  fn is_identity(&self) -> bool;
}

/// A conversion of the form `(value + inner_offset) * factor +
/// outer_offset`. Each of the three terms is optional, and an absent
/// term is a no-op.
///
/// Most units only need a factor. Offsets exist for the scales whose
/// zero point differs from the base unit's, such as degrees Celsius
/// or Fahrenheit against kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AffineConversion {
  inner_offset: Option<f64>,
  factor: Option<f64>,
  outer_offset: Option<f64>,
}

/// Which way a [`DerivedConversion`] walks its constituents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
  ToBase,
  FromBase,
}

/// The conversion of a derived unit, which folds the conversions of
/// its constituent dimensions in order. Each constituent is converted
/// at its own exponent, not at the exponent of the derived unit.
#[derive(Debug, Clone)]
pub struct DerivedConversion {
  constituents: Arc<[Dimension]>,
  direction: Direction,
}

/// Either kind of conversion strategy.
#[derive(Debug, Clone)]
pub enum Conversion {
  Affine(AffineConversion),
  Derived(DerivedConversion),
}

/// Applies `step` once per unit of `|exponent|`. A negative exponent
/// reciprocates the value before the first step and after the last.
fn repeat_for_exponent(value: f64, exponent: i32, step: impl Fn(f64) -> f64) -> f64 {
  let count = exponent.unsigned_abs();
  match exponent.cmp(&0) {
    Ordering::Equal => 1.0,
    Ordering::Greater => (0..count).fold(value, |acc, _| step(acc)),
    Ordering::Less => (0..count).fold(value.recip(), |acc, _| step(acc)).recip(),
  }
}

impl AffineConversion {
  pub const IDENTITY: AffineConversion = AffineConversion {
    inner_offset: None,
    factor: None,
    outer_offset: None,
  };

  pub fn new(inner_offset: Option<f64>, factor: Option<f64>, outer_offset: Option<f64>) -> Self {
    Self { inner_offset, factor, outer_offset }
  }

  /// A pure ratio conversion.
  pub fn scaling(factor: f64) -> Self {
    Self::new(None, Some(factor), None)
  }

  /// A pure offset conversion, applied after the (absent) factor.
  pub fn shifting(offset: f64) -> Self {
    Self::new(None, None, Some(offset))
  }

  pub fn inner_offset(&self) -> Option<f64> {
    self.inner_offset
  }

  pub fn factor(&self) -> Option<f64> {
    self.factor
  }

  pub fn outer_offset(&self) -> Option<f64> {
    self.outer_offset
  }

  /// The conversion which undoes this one. Inverting
  /// `(x + a) * f + b` gives `(y - b) / f - a`.
  pub fn inverse(&self) -> Self {
    Self {
      inner_offset: self.outer_offset.map(|b| -b),
      factor: self.factor.map(f64::recip),
      outer_offset: self.inner_offset.map(|a| -a),
    }
  }

  fn apply_once(&self, mut value: f64) -> f64 {
    if let Some(offset) = self.inner_offset {
      value += offset;
    }
    if let Some(factor) = self.factor {
      value *= factor;
    }
    if let Some(offset) = self.outer_offset {
      value += offset;
    }
    value
  }
}

impl UnitConversion for AffineConversion {
  fn convert(&self, value: f64, exponent: i32) -> f64 {
    repeat_for_exponent(value, exponent, |x| self.apply_once(x))
  }

  fn is_identity(&self) -> bool {
    self.inner_offset.map_or(true, |a| a == 0.0) &&
      self.factor.map_or(true, |f| f == 1.0) &&
      self.outer_offset.map_or(true, |b| b == 0.0)
  }
}

impl DerivedConversion {
  pub fn new(constituents: Arc<[Dimension]>, direction: Direction) -> Self {
    Self { constituents, direction }
  }

  pub fn constituents(&self) -> &[Dimension] {
    &self.constituents
  }

  pub fn direction(&self) -> Direction {
    self.direction
  }
}

impl UnitConversion for DerivedConversion {
  fn convert(&self, value: f64, exponent: i32) -> f64 {
    repeat_for_exponent(value, exponent, |x| {
      self.constituents.iter().fold(x, |acc, dim| {
        match self.direction {
          Direction::ToBase => dim.to_base(acc),
          Direction::FromBase => dim.from_base(acc),
        }
      })
    })
  }

  fn is_identity(&self) -> bool {
    self.constituents.iter().all(Dimension::is_base_unit)
  }
}

impl UnitConversion for Conversion {
  fn convert(&self, value: f64, exponent: i32) -> f64 {
    match self {
      Conversion::Affine(affine) => affine.convert(value, exponent),
      Conversion::Derived(derived) => derived.convert(value, exponent),
    }
  }

  fn is_identity(&self) -> bool {
    match self {
      Conversion::Affine(affine) => affine.is_identity(),
      Conversion::Derived(derived) => derived.is_identity(),
    }
  }
}

impl From<AffineConversion> for Conversion {
  fn from(affine: AffineConversion) -> Self {
    Conversion::Affine(affine)
  }
}

impl From<DerivedConversion> for Conversion {
  fn from(derived: DerivedConversion) -> Self {
    Conversion::Derived(derived)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::test_utils::{centimeters, grams, seconds};

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_zero_exponent_is_neutral() {
    let conversion = AffineConversion::scaling(1000.0);
    assert_eq!(conversion.convert(42.0, 0), 1.0);
    let conversion = AffineConversion::new(Some(459.67), Some(5.0 / 9.0), None);
    assert_eq!(conversion.convert(-17.0, 0), 1.0);
  }

  #[test]
  fn test_scaling_with_positive_exponent() {
    let conversion = AffineConversion::scaling(1000.0);
    assert_eq!(conversion.convert(2.0, 1), 2_000.0);
    assert_eq!(conversion.convert(2.0, 3), 2_000_000_000.0);
  }

  #[test]
  fn test_scaling_with_negative_exponent() {
    // 2 per kilometer is 0.002 per meter.
    let conversion = AffineConversion::scaling(1000.0);
    assert_abs_diff_eq!(conversion.convert(2.0, -1), 0.002, epsilon = 1e-15);
    assert_abs_diff_eq!(conversion.convert(2_000_000.0, -2), 2.0, epsilon = 1e-9);
  }

  #[test]
  fn test_offsets_apply_in_order() {
    let conversion = AffineConversion::new(Some(1.0), Some(10.0), Some(3.0));
    assert_eq!(conversion.convert(2.0, 1), 33.0);
    assert_eq!(conversion.convert(2.0, 2), 343.0);
  }

  #[test]
  fn test_fahrenheit_to_kelvin_and_back() {
    let to_base = AffineConversion::new(Some(459.67), Some(5.0 / 9.0), None);
    let from_base = to_base.inverse();
    assert_abs_diff_eq!(to_base.convert(32.0, 1), 273.15, epsilon = 1e-9);
    assert_abs_diff_eq!(from_base.convert(373.15, 1), 212.0, epsilon = 1e-9);
    assert_abs_diff_eq!(from_base.convert(to_base.convert(-40.0, 1), 1), -40.0, epsilon = 1e-9);
  }

  #[test]
  fn test_identity_detection() {
    assert!(AffineConversion::IDENTITY.is_identity());
    assert!(AffineConversion::scaling(1.0).is_identity());
    assert!(AffineConversion::new(Some(0.0), Some(1.0), Some(0.0)).is_identity());
    assert!(!AffineConversion::scaling(0.3048).is_identity());
    assert!(!AffineConversion::shifting(273.15).is_identity());
  }

  #[test]
  fn test_derived_conversion_uses_constituent_exponents() {
    // g cm s^-2, i.e. the dyne.
    let constituents: Arc<[Dimension]> = vec![grams(), centimeters(), seconds().pow(-2)].into();
    let to_base = DerivedConversion::new(Arc::clone(&constituents), Direction::ToBase);
    let from_base = DerivedConversion::new(constituents, Direction::FromBase);
    assert_abs_diff_eq!(to_base.convert(1.0, 1), 1e-5, epsilon = 1e-18);
    assert_abs_diff_eq!(from_base.convert(1.0, 1), 1e5, epsilon = 1e-6);
    assert!(!to_base.is_identity());
  }

  #[test]
  fn test_derived_conversion_with_outer_exponent() {
    let constituents: Arc<[Dimension]> = vec![grams(), centimeters()].into();
    let to_base = DerivedConversion::new(constituents, Direction::ToBase);
    // (g cm)^2 -> (kg m)^2
    assert_abs_diff_eq!(to_base.convert(1.0, 2), 1e-10, epsilon = 1e-22);
    // (g cm)^-1 -> (kg m)^-1
    assert_abs_diff_eq!(to_base.convert(1.0, -1), 1e5, epsilon = 1e-6);
  }

  #[test]
  fn test_derived_of_base_units_is_identity() {
    let constituents: Arc<[Dimension]> = vec![seconds(), seconds().invert()].into();
    let to_base = DerivedConversion::new(constituents, Direction::ToBase);
    assert!(to_base.is_identity());
    assert_eq!(Conversion::from(to_base).convert(7.5, 1), 7.5);
  }
}
