use super::dimension::Dimension;
use super::family::Family;

use itertools::Itertools;
use num::One;
use num::pow::Pow;

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A set of dimensions with at most one entry per [`Family`]. This is
/// the formal product of its members. The empty set is the dimension
/// set of a dimensionless quantity.
///
/// The set algebra here never fails, and never looks at magnitudes.
/// When two members of the same family are combined, the first
/// concrete unit wins; it is up to the caller to re-express the
/// magnitude beforehand (see [`crate::quantity::Quantity`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
  // Internally, we store the set as a vector sorted by family. A
  // family appears at most once, and never with a zero exponent.
  elements: Vec<Dimension>,
}

impl Dimensions {
  /// Constructs the product of all of the inputs. Exponents of
  /// members sharing a family are summed, and families whose exponent
  /// sums to zero are dropped. Sums beyond the range of `i32`
  /// saturate; see [`Dimensions::checked_new`] to detect them.
  pub fn new(inputs: impl IntoIterator<Item = Dimension>) -> Self {
    Self::combine(inputs, |a, b| Some(a.saturating_add(b))).unwrap_or_default()
  }

  /// As [`Dimensions::new`], but returns `None` if any family's
  /// exponent overflows.
  pub fn checked_new(inputs: impl IntoIterator<Item = Dimension>) -> Option<Self> {
    Self::combine(inputs, i32::checked_add)
  }

  fn combine(
    inputs: impl IntoIterator<Item = Dimension>,
    add: impl Fn(i32, i32) -> Option<i32>,
  ) -> Option<Self> {
    let groups = inputs.into_iter().into_group_map_by(|dim| dim.family_id());
    let mut elements = Vec::with_capacity(groups.len());
    for group in groups.into_values() {
      let exponent = group.iter().map(Dimension::exponent).try_fold(0, &add)?;
      if exponent == 0 {
        continue;
      }
      if let Some(first) = group.into_iter().next() {
        elements.push(first.with_exponent(exponent));
      }
    }
    elements.sort_by_key(Dimension::family_id);
    Some(Self { elements })
  }

  /// The empty dimension set.
  pub fn dimensionless() -> Self {
    Self { elements: Vec::new() }
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  /// The members of the set, sorted by family.
  pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
    self.elements.iter()
  }

  pub fn as_slice(&self) -> &[Dimension] {
    &self.elements
  }

  pub fn into_inner(self) -> Vec<Dimension> {
    self.elements
  }

  pub fn families(&self) -> impl Iterator<Item = Family> + '_ {
    self.elements.iter().map(Dimension::family_id)
  }

  pub fn get(&self, family: Family) -> Option<&Dimension> {
    self.elements
      .binary_search_by_key(&family, Dimension::family_id)
      .ok()
      .map(|index| &self.elements[index])
  }

  /// The exponent of the given family, or zero if the family is
  /// absent.
  pub fn exponent_for(&self, family: Family) -> i32 {
    self.get(family).map_or(0, Dimension::exponent)
  }

  pub fn multiply(&self, other: &Dimensions) -> Dimensions {
    Self::new(self.elements.iter().chain(&other.elements).cloned())
  }

  pub fn checked_multiply(&self, other: &Dimensions) -> Option<Dimensions> {
    Self::checked_new(self.elements.iter().chain(&other.elements).cloned())
  }

  pub fn divide(&self, other: &Dimensions) -> Dimensions {
    self.multiply(&other.invert())
  }

  pub fn checked_divide(&self, other: &Dimensions) -> Option<Dimensions> {
    self.checked_multiply(&other.checked_pow(-1)?)
  }

  /// Negates every exponent.
  pub fn invert(&self) -> Dimensions {
    Dimensions::pow(self, -1)
  }

  pub fn pow(&self, power: i32) -> Dimensions {
    Self::new(self.elements.iter().map(|dim| dim.pow(power)))
  }

  /// As [`Dimensions::pow`], but returns `None` if any exponent
  /// overflows.
  pub fn checked_pow(&self, power: i32) -> Option<Dimensions> {
    let elements: Option<Vec<_>> = self.elements.iter().map(|dim| dim.checked_pow(power)).collect();
    Self::checked_new(elements?)
  }

  /// True iff both sets contain exactly the same concrete units at the
  /// same exponents.
  pub fn is_equivalent(&self, other: &Dimensions) -> bool {
    self.len() == other.len() &&
      self.elements.iter().zip(&other.elements).all(|(a, b)| a == b)
  }

  /// True iff both sets cover the same families. Unless
  /// `ignore_exponent` is set, each family must also carry the same
  /// exponent on both sides. The concrete units may differ.
  pub fn is_compatible(&self, other: &Dimensions, ignore_exponent: bool) -> bool {
    self.len() == other.len() &&
      self.elements.iter().zip(&other.elements).all(|(a, b)| {
        a.family_id() == b.family_id() && (ignore_exponent || a.exponent() == b.exponent())
      })
  }

  /// Converts a magnitude expressed in this set of units into the base
  /// units of the same families.
  pub fn to_base(&self, value: f64) -> f64 {
    self.elements.iter().fold(value, |acc, dim| dim.to_base(acc))
  }

  /// Converts a magnitude expressed in base units into this set of
  /// units.
  pub fn from_base(&self, value: f64) -> f64 {
    self.elements.iter().fold(value, |acc, dim| dim.from_base(acc))
  }

  /// The same families and exponents, in base units.
  pub fn base(&self) -> Dimensions {
    Self { elements: self.elements.iter().map(Dimension::base).collect() }
  }

  pub fn is_base(&self) -> bool {
    self.elements.iter().all(Dimension::is_base_unit)
  }

  /// The members of the set with every derived dimension replaced by
  /// its constituents, raised to the derived dimension's exponent.
  /// The result is deliberately not recombined, since combining
  /// constituents of different concrete units requires adjusting the
  /// magnitude.
  pub fn expanded(&self) -> Vec<Dimension> {
    self.elements.iter()
      .flat_map(|dim| {
        if dim.is_derived() {
          dim.constituents().iter().map(|c| c.pow(dim.exponent())).collect()
        } else {
          vec![dim.clone()]
        }
      })
      .collect()
  }
}

impl From<Dimension> for Dimensions {
  fn from(dim: Dimension) -> Self {
    Dimensions::new([dim])
  }
}

impl FromIterator<Dimension> for Dimensions {
  fn from_iter<I: IntoIterator<Item = Dimension>>(iter: I) -> Self {
    Dimensions::new(iter)
  }
}

impl<'a> IntoIterator for &'a Dimensions {
  type Item = &'a Dimension;
  type IntoIter = std::slice::Iter<'a, Dimension>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.iter()
  }
}

impl Display for Dimensions {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.elements.is_empty() {
      write!(f, "1")
    } else {
      write!(f, "{}", self.elements.iter().join(" "))
    }
  }
}

impl Mul for Dimensions {
  type Output = Dimensions;

  fn mul(self, rhs: Self) -> Dimensions {
    self.multiply(&rhs)
  }
}

impl Div for Dimensions {
  type Output = Dimensions;

  fn div(self, rhs: Self) -> Dimensions {
    self.divide(&rhs)
  }
}

impl<'a> Pow<i32> for &'a Dimensions {
  type Output = Dimensions;

  fn pow(self, rhs: i32) -> Dimensions {
    Dimensions::pow(self, rhs)
  }
}

impl One for Dimensions {
  fn one() -> Self {
    Dimensions::dimensionless()
  }

  fn is_one(&self) -> bool {
    self.elements.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::test_utils::{meters, kilometers, feet, seconds, minutes, hertz,
                                 kilograms, grams, dynes};

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_new_sorts_by_family() {
    let dims = Dimensions::new([seconds().invert(), kilometers().cubed()]);
    assert_eq!(dims.into_inner(), vec![kilometers().cubed(), seconds().invert()]);
  }

  #[test]
  fn test_new_with_repeated_families() {
    let dims = Dimensions::new([
      kilometers().squared(),
      seconds().invert(),
      kilometers(),
      seconds().invert(),
    ]);
    assert_eq!(dims.into_inner(), vec![kilometers().cubed(), seconds().pow(-2)]);
  }

  #[test]
  fn test_new_keeps_first_unit_of_family() {
    let dims = Dimensions::new([feet(), meters()]);
    assert_eq!(dims.into_inner(), vec![feet().squared()]);
  }

  #[test]
  fn test_new_drops_canceled_families() {
    let dims = Dimensions::new([seconds(), meters(), seconds().invert()]);
    assert_eq!(dims.into_inner(), vec![meters()]);
    let dims = Dimensions::new([seconds(), hertz()]);
    assert!(dims.is_empty());
  }

  #[test]
  fn test_multiply_sums_exponents() {
    let a = Dimensions::new([meters(), seconds().invert()]);
    let b = Dimensions::new([meters(), kilograms()]);
    let product = a.multiply(&b);
    assert_eq!(product.exponent_for(Family::Length), 2);
    assert_eq!(product.exponent_for(Family::Time), -1);
    assert_eq!(product.exponent_for(Family::Mass), 1);
    assert_eq!(product.exponent_for(Family::Angle), 0);
  }

  #[test]
  fn test_multiply_is_commutative_per_family() {
    let a = Dimensions::new([kilometers().squared(), seconds().invert(), grams()]);
    let b = Dimensions::new([meters().invert(), minutes().pow(3)]);
    let ab = a.multiply(&b);
    let ba = b.multiply(&a);
    for family in Family::ALL {
      assert_eq!(ab.exponent_for(family), ba.exponent_for(family));
    }
  }

  #[test]
  fn test_divide_to_dimensionless() {
    let a = Dimensions::new([meters(), seconds().invert()]);
    assert!(a.divide(&a).is_empty());
    assert!(a.divide(&a).is_one());
  }

  #[test]
  fn test_invert() {
    let a = Dimensions::new([kilometers().cubed(), seconds().pow(-2)]);
    assert_eq!(a.invert(), Dimensions::new([kilometers().pow(-3), seconds().squared()]));
    assert_eq!(a.invert().invert(), a);
  }

  #[test]
  fn test_pow_zero_is_dimensionless() {
    let a = Dimensions::new([kilometers(), seconds()]);
    assert!(a.pow(0).is_empty());
    assert_eq!(Pow::pow(&a, 2), Dimensions::new([kilometers().squared(), seconds().squared()]));
  }

  #[test]
  fn test_pow_borrows_receiver() {
    let a = Dimensions::new([kilometers(), seconds().invert()]);
    let squared = a.pow(2);
    let inverse = a.invert();
    assert_eq!(squared, Dimensions::new([kilometers().squared(), seconds().pow(-2)]));
    assert_eq!(inverse, Dimensions::new([kilometers().invert(), seconds()]));
    assert_eq!(a.len(), 2);
  }

  #[test]
  fn test_exponent_overflow_saturates() {
    let huge = meters().with_exponent(i32::MAX);
    let dims = Dimensions::new([huge.clone(), meters()]);
    assert_eq!(dims.exponent_for(Family::Length), i32::MAX);
    assert_eq!(Dimensions::checked_new([huge.clone(), meters()]), None);
    let a = Dimensions::from(huge);
    assert_eq!(a.checked_multiply(&Dimensions::from(meters())), None);
    assert_eq!(a.checked_pow(2), None);
    assert_eq!(a.checked_pow(-1).map(|d| d.exponent_for(Family::Length)), Some(-i32::MAX));
    let min = Dimensions::from(meters().with_exponent(i32::MIN));
    assert_eq!(min.checked_pow(-1), None);
    assert_eq!(min.invert().exponent_for(Family::Length), i32::MAX);
  }

  #[test]
  fn test_equivalence_is_order_independent() {
    let a = Dimensions::new([meters(), seconds().invert()]);
    let b = Dimensions::new([seconds().invert(), meters()]);
    assert!(a.is_equivalent(&b));
    let c = Dimensions::new([feet(), seconds().invert()]);
    assert!(!a.is_equivalent(&c));
  }

  #[test]
  fn test_compatibility() {
    let a = Dimensions::new([meters(), seconds().invert()]);
    let b = Dimensions::new([feet(), minutes().invert()]);
    let c = Dimensions::new([feet().squared(), minutes().invert()]);
    let d = Dimensions::new([feet(), kilograms()]);
    assert!(a.is_compatible(&b, false));
    assert!(!a.is_compatible(&c, false));
    assert!(a.is_compatible(&c, true));
    assert!(!a.is_compatible(&d, true));
    assert!(!a.is_compatible(&Dimensions::dimensionless(), true));
    assert!(Dimensions::dimensionless().is_compatible(&Dimensions::dimensionless(), false));
  }

  #[test]
  fn test_get() {
    let a = Dimensions::new([feet(), minutes().invert()]);
    assert_eq!(a.get(Family::Length), Some(&feet()));
    assert_eq!(a.get(Family::Time), Some(&minutes().invert()));
    assert_eq!(a.get(Family::Mass), None);
  }

  #[test]
  fn test_to_base_and_from_base() {
    let kpm = Dimensions::new([kilometers(), minutes().invert()]);
    assert_abs_diff_eq!(kpm.to_base(18_000.0), 300_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(kpm.from_base(300_000.0), 18_000.0, epsilon = 1e-6);
  }

  #[test]
  fn test_base() {
    let a = Dimensions::new([feet().squared(), minutes().invert()]);
    assert_eq!(a.base(), Dimensions::new([meters().squared(), seconds().invert()]));
    assert!(a.base().is_base());
    assert!(!a.is_base());
  }

  #[test]
  fn test_expanded() {
    let a = Dimensions::new([dynes().squared(), seconds()]);
    let expanded = a.expanded();
    // Members are visited in family order, so time comes before force.
    assert_eq!(expanded, vec![
      seconds(),
      grams().squared(),
      crate::units::test_utils::centimeters().squared(),
      seconds().pow(-4),
    ]);
  }

  #[test]
  fn test_display() {
    assert_eq!(Dimensions::dimensionless().to_string(), "1");
    let a = Dimensions::new([seconds().pow(-2), kilograms(), meters()]);
    assert_eq!(a.to_string(), "m s^-2 kg");
  }
}
