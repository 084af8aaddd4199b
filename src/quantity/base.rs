use super::error::QuantityError;
use crate::units::{Dimension, Dimensions, Family, UnitSystem};

use approx::{AbsDiffEq, RelativeEq};
use num::pow::Pow;
use tracing::trace;

use std::cmp::Ordering;
use std::fmt::{self, Formatter, Display};

/// A magnitude tagged with a set of dimensions, at most one per
/// family.
///
/// Quantities are immutable values. Every operation produces a new
/// quantity, and conversions never touch the dimensions they were
/// given.
#[derive(Debug, Clone)]
pub struct Quantity {
  value: f64,
  dimensions: Dimensions,
}

impl Quantity {
  /// Constructs a quantity as the product of `value` and every given
  /// dimension. Dimensions of a repeated family are combined into the
  /// first concrete unit given for that family, adjusting the
  /// magnitude accordingly, so `Quantity::new(1.0, [meters, feet])`
  /// is `0.3048 m^2`.
  pub fn new(value: f64, dimensions: impl IntoIterator<Item = Dimension>) -> Self {
    dimensions.into_iter().fold(Quantity::dimensionless(value), |acc, dim| {
      acc.multiply(&Quantity::from_parts(1.0, Dimensions::from(dim)))
    })
  }

  /// Constructs a quantity from a dimension set which is already
  /// known to be well-formed.
  pub fn from_parts(value: f64, dimensions: Dimensions) -> Self {
    Self { value, dimensions }
  }

  pub fn dimensionless(value: f64) -> Self {
    Self::from_parts(value, Dimensions::dimensionless())
  }

  /// `value` radians.
  pub fn radians(value: f64) -> Self {
    Self::from_parts(value, Dimensions::from(Family::Angle.base().clone()))
  }

  pub fn value(&self) -> f64 {
    self.value
  }

  pub fn dimensions(&self) -> &Dimensions {
    &self.dimensions
  }

  pub fn into_parts(self) -> (f64, Dimensions) {
    (self.value, self.dimensions)
  }

  pub fn is_dimensionless(&self) -> bool {
    self.dimensions.is_empty()
  }

  /// Whether this quantity is a plain angle: a single angle family at
  /// exponent 1.
  pub fn is_angle(&self) -> bool {
    self.dimensions.len() == 1 && self.dimensions.exponent_for(Family::Angle) == 1
  }

  /// Re-expresses every family `self` shares with `basis` in the
  /// concrete unit `basis` uses for that family, keeping `self`'s
  /// exponents. Families absent from `basis` are left alone.
  fn realign_onto(&self, basis: &Dimensions) -> Quantity {
    let mut value = self.value;
    let dimensions: Vec<_> = self.dimensions.iter()
      .map(|dim| match basis.get(dim.family_id()) {
        Some(target) if !target.same_unit(dim) => {
          let target = target.with_exponent(dim.exponent());
          trace!(from = %dim, to = %target, "realigning shared family");
          value = target.from_base(dim.to_base(value));
          target
        }
        _ => dim.clone(),
      })
      .collect();
    Quantity::from_parts(value, Dimensions::new(dimensions))
  }

  /// The product of `self` and `rhs`. Families shared by both
  /// operands are first brought into `self`'s concrete units, so a
  /// family which cancels leaves the magnitude correct.
  pub fn multiply(&self, rhs: &Quantity) -> Quantity {
    let rhs = rhs.realign_onto(&self.dimensions);
    Quantity::from_parts(self.value * rhs.value, self.dimensions.multiply(&rhs.dimensions))
  }

  /// The quotient of `self` and `rhs`, realigned as in
  /// [`Quantity::multiply`].
  pub fn divide(&self, rhs: &Quantity) -> Quantity {
    let rhs = rhs.realign_onto(&self.dimensions);
    Quantity::from_parts(self.value / rhs.value, self.dimensions.divide(&rhs.dimensions))
  }

  /// As [`Quantity::multiply`], but returns `None` if an exponent
  /// overflows rather than saturating it.
  pub fn checked_multiply(&self, rhs: &Quantity) -> Option<Quantity> {
    let rhs = rhs.realign_onto(&self.dimensions);
    let dimensions = self.dimensions.checked_multiply(&rhs.dimensions)?;
    Some(Quantity::from_parts(self.value * rhs.value, dimensions))
  }

  /// As [`Quantity::divide`], but returns `None` if an exponent
  /// overflows rather than saturating it.
  pub fn checked_divide(&self, rhs: &Quantity) -> Option<Quantity> {
    let rhs = rhs.realign_onto(&self.dimensions);
    let dimensions = self.dimensions.checked_divide(&rhs.dimensions)?;
    Some(Quantity::from_parts(self.value / rhs.value, dimensions))
  }

  fn require_compatible(&self, rhs: &Quantity) -> Result<(), QuantityError> {
    if self.dimensions.is_compatible(&rhs.dimensions, false) {
      Ok(())
    } else {
      Err(QuantityError::IncompatibleDimensions { left: self.clone(), right: rhs.clone() })
    }
  }

  /// Applies `op` to the magnitudes after converting `rhs` into
  /// `self`'s units. The result is in `self`'s units.
  fn combine_compatible(&self, rhs: &Quantity, op: impl FnOnce(f64, f64) -> f64) -> Result<Quantity, QuantityError> {
    self.require_compatible(rhs)?;
    let rhs = rhs.convert_unchecked(&self.dimensions);
    Ok(Quantity::from_parts(op(self.value, rhs.value), self.dimensions.clone()))
  }

  pub fn try_add(&self, rhs: &Quantity) -> Result<Quantity, QuantityError> {
    self.combine_compatible(rhs, |a, b| a + b)
  }

  pub fn try_sub(&self, rhs: &Quantity) -> Result<Quantity, QuantityError> {
    self.combine_compatible(rhs, |a, b| a - b)
  }

  /// Floating-point remainder, with the sign of `self`.
  pub fn try_rem(&self, rhs: &Quantity) -> Result<Quantity, QuantityError> {
    self.combine_compatible(rhs, |a, b| a % b)
  }

  /// Converts into `target`, which must already cover the same
  /// families. Each family is converted to its base unit at this
  /// quantity's exponent and from there to the target's unit at the
  /// target's exponent.
  pub(crate) fn convert_unchecked(&self, target: &Dimensions) -> Quantity {
    let value = self.dimensions.iter()
      .zip(target.iter())
      .fold(self.value, |value, (from, to)| {
        if from == to {
          value
        } else {
          to.from_base(from.to_base(value))
        }
      });
    Quantity::from_parts(value, target.clone())
  }

  fn convert_checked(&self, target: &Dimensions, ignore_exponent: bool) -> Result<Quantity, QuantityError> {
    if self.dimensions.is_compatible(target, ignore_exponent) {
      Ok(self.convert_unchecked(target))
    } else {
      Err(QuantityError::IncompatibleTarget { quantity: self.clone(), target: target.clone() })
    }
  }

  /// Converts into the given units. The target must cover the same
  /// families at the same exponents.
  pub fn convert_to(&self, target: &Dimensions) -> Result<Quantity, QuantityError> {
    self.convert_checked(target, false)
  }

  /// Converts into the given units, which must cover the same
  /// families but may carry different exponents. Each side is
  /// converted at its own exponent.
  pub fn convert_to_ignoring_exponent(&self, target: &Dimensions) -> Result<Quantity, QuantityError> {
    self.convert_checked(target, true)
  }

  /// Converts the family of `unit` into `unit`, keeping this
  /// quantity's exponent for that family. Fails if this quantity has
  /// no such family.
  pub fn to_unit(&self, unit: &Dimension) -> Result<Quantity, QuantityError> {
    let Some(current) = self.dimensions.get(unit.family_id()) else {
      return Err(QuantityError::IncompatibleTarget {
        quantity: self.clone(),
        target: Dimensions::from(unit.clone()),
      });
    };
    let replacement = unit.pow(current.exponent().saturating_mul(unit.declared_exponent().signum()));
    let target: Dimensions = self.dimensions.iter()
      .map(|dim| if dim.family_id() == unit.family_id() { replacement.clone() } else { dim.clone() })
      .collect();
    Ok(self.convert_unchecked(&target))
  }

  /// Converts every family into its canonical base unit.
  pub fn to_base(&self) -> Quantity {
    self.convert_unchecked(&self.dimensions.base())
  }

  /// Converts every family into the unit the given system prefers for
  /// it. Families the system has no preference for keep their unit.
  pub fn to_system(&self, system: UnitSystem) -> Quantity {
    let target: Dimensions = self.dimensions.iter()
      .map(|dim| {
        system.preferred(dim.family_id())
          .map_or_else(|| dim.clone(), |unit| unit.with_exponent(dim.exponent()))
      })
      .collect();
    trace!(%system, from = %self.dimensions, to = %target, "migrating unit system");
    self.convert_unchecked(&target)
  }

  /// Replaces every derived dimension with its constituents, combining
  /// any families that then repeat.
  pub fn expand(&self) -> Quantity {
    Quantity::new(self.value, self.dimensions.expanded())
  }

  /// Raises the quantity to an integer power. Exponents beyond the
  /// range of `i32` saturate.
  pub fn pow(&self, exponent: i32) -> Quantity {
    Quantity::from_parts(self.value.powi(exponent), Dimensions::pow(&self.dimensions, exponent))
  }

  pub fn checked_pow(&self, exponent: i32) -> Option<Quantity> {
    let dimensions = self.dimensions.checked_pow(exponent)?;
    Some(Quantity::from_parts(self.value.powi(exponent), dimensions))
  }

  pub fn squared(&self) -> Quantity {
    Quantity::pow(self, 2)
  }

  pub fn cubed(&self) -> Quantity {
    Quantity::pow(self, 3)
  }

  /// The reciprocal, with every exponent negated.
  pub fn invert(&self) -> Quantity {
    Quantity::from_parts(self.value.recip(), Dimensions::invert(&self.dimensions))
  }

  /// Unary plus. Returns the quantity unchanged.
  pub fn plus(&self) -> Quantity {
    self.clone()
  }

  /// The quantity one of its own units larger.
  pub fn increment(&self) -> Quantity {
    Quantity::from_parts(self.value + 1.0, self.dimensions.clone())
  }

  /// The quantity one of its own units smaller.
  pub fn decrement(&self) -> Quantity {
    Quantity::from_parts(self.value - 1.0, self.dimensions.clone())
  }

  /// Orders two quantities by their magnitude in base units. Unlike
  /// [`PartialOrd`], incompatible operands are an error rather than
  /// unordered. `Ok(None)` only arises from NaN magnitudes.
  pub fn try_partial_cmp(&self, other: &Quantity) -> Result<Option<Ordering>, QuantityError> {
    self.require_compatible(other)?;
    Ok(self.to_base().value.partial_cmp(&other.to_base().value))
  }

  /// Both operands in base units, if their families and exponents
  /// agree.
  fn base_values(&self, other: &Quantity) -> Option<(f64, f64)> {
    self.dimensions.is_compatible(&other.dimensions, false)
      .then(|| (self.to_base().value, other.to_base().value))
  }
}

impl PartialEq for Quantity {
  /// Quantities are equal when they denote the same amount in base
  /// units. Quantities of different families are simply unequal.
  fn eq(&self, other: &Quantity) -> bool {
    let left = self.to_base();
    let right = other.to_base();
    left.dimensions.is_equivalent(&right.dimensions) && left.value == right.value
  }
}

impl PartialOrd for Quantity {
  fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
    let (left, right) = self.base_values(other)?;
    left.partial_cmp(&right)
  }
}

impl AbsDiffEq for Quantity {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Quantity, epsilon: f64) -> bool {
    self.base_values(other)
      .map_or(false, |(left, right)| left.abs_diff_eq(&right, epsilon))
  }
}

impl RelativeEq for Quantity {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Quantity, epsilon: f64, max_relative: f64) -> bool {
    self.base_values(other)
      .map_or(false, |(left, right)| left.relative_eq(&right, epsilon, max_relative))
  }
}

impl<'a> Pow<i32> for &'a Quantity {
  type Output = Quantity;

  fn pow(self, rhs: i32) -> Quantity {
    Quantity::pow(self, rhs)
  }
}

impl From<f64> for Quantity {
  fn from(value: f64) -> Self {
    Quantity::dimensionless(value)
  }
}

impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.dimensions.is_empty() {
      write!(f, "{}", self.value)
    } else {
      write!(f, "{} {}", self.value, self.dimensions)
    }
  }
}
