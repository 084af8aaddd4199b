use super::conversion::{AffineConversion, Conversion, DerivedConversion, Direction, UnitConversion};
use super::family::{Family, FamilyKind, UnitSystem};

use std::collections::BTreeMap;
use std::fmt::{self, Formatter, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A concrete unit of measure within one [`Family`], raised to an
/// integer power.
///
/// A dimension is either a base dimension, whose conversion to the
/// family's base unit is a single [`AffineConversion`], or a derived
/// dimension, whose conversion folds the conversions of an ordered
/// list of constituent dimensions (the newton is kilograms times
/// meters times seconds to the `-2`).
///
/// Dimensions are immutable. Changing the exponent always produces a
/// new dimension that shares the conversion strategies of the old
/// one.
#[derive(Debug, Clone)]
pub struct Dimension {
  family: Family,
  system: UnitSystem,
  abbreviation: Arc<str>,
  exponent: i32,
  // The power of the family this unit was declared as. Hertz, for
  // instance, is declared as a unit of time to the -1.
  declared_exponent: i32,
  to_base: Conversion,
  from_base: Conversion,
}

impl Dimension {
  /// Constructs a base dimension from an explicit pair of
  /// conversions. `from_base` is expected to be the inverse of
  /// `to_base`.
  pub fn base_unit(
    family: Family,
    system: UnitSystem,
    abbreviation: impl Into<Arc<str>>,
    to_base: AffineConversion,
    from_base: AffineConversion,
  ) -> Self {
    Self {
      family,
      system,
      abbreviation: abbreviation.into(),
      exponent: 1,
      declared_exponent: 1,
      to_base: to_base.into(),
      from_base: from_base.into(),
    }
  }

  /// Constructs a base dimension whose `from_base` conversion is the
  /// inverse of `to_base`.
  pub fn affine(
    family: Family,
    system: UnitSystem,
    abbreviation: impl Into<Arc<str>>,
    to_base: AffineConversion,
  ) -> Self {
    Self::base_unit(family, system, abbreviation, to_base, to_base.inverse())
  }

  /// Constructs a base dimension equal to `amount_of_base` of the
  /// family's base unit.
  pub fn scaled(
    family: Family,
    system: UnitSystem,
    abbreviation: impl Into<Arc<str>>,
    amount_of_base: f64,
  ) -> Self {
    Self::affine(family, system, abbreviation, AffineConversion::scaling(amount_of_base))
  }

  /// Constructs a derived dimension as the product of the given
  /// constituents. Constituents with a zero exponent contribute
  /// nothing and are dropped.
  ///
  /// The constituents must multiply out to the composition of
  /// `family`. This is checked in debug builds.
  pub fn derived(
    family: Family,
    system: UnitSystem,
    abbreviation: impl Into<Arc<str>>,
    constituents: impl IntoIterator<Item = Dimension>,
  ) -> Self {
    let constituents: Arc<[Dimension]> = constituents.into_iter()
      .filter(|d| d.exponent != 0)
      .collect();
    debug_assert_eq!(
      fundamental_exponents(constituents.iter()),
      family_exponents(family, 1),
      "constituents of a derived {family} unit must multiply out to its composition",
    );
    Self {
      family,
      system,
      abbreviation: abbreviation.into(),
      exponent: 1,
      declared_exponent: 1,
      to_base: DerivedConversion::new(Arc::clone(&constituents), Direction::ToBase).into(),
      from_base: DerivedConversion::new(constituents, Direction::FromBase).into(),
    }
  }

  /// Declares this unit as the given power of its family. The
  /// abbreviation then names the unit at that power, so hertz is
  /// declared as `seconds().raised(-1)` with abbreviation `Hz`.
  ///
  /// A zero exponent declares nothing and returns the unit unchanged.
  pub fn raised(mut self, exponent: i32) -> Self {
    if exponent != 0 {
      self.exponent = exponent;
      self.declared_exponent = exponent;
    }
    self
  }

  pub fn family_id(&self) -> Family {
    self.family
  }

  pub fn family_marker(&self) -> FamilyKind {
    self.family.kind()
  }

  pub fn system(&self) -> UnitSystem {
    self.system
  }

  pub fn abbreviation(&self) -> &str {
    &self.abbreviation
  }

  pub fn exponent(&self) -> i32 {
    self.exponent
  }

  pub fn declared_exponent(&self) -> i32 {
    self.declared_exponent
  }

  pub fn is_base_unit(&self) -> bool {
    self.to_base.is_identity() && self.from_base.is_identity()
  }

  pub fn is_derived(&self) -> bool {
    matches!(self.to_base, Conversion::Derived(_))
  }

  /// The constituents of a derived dimension, each at its own
  /// exponent. Empty for base dimensions.
  pub fn constituents(&self) -> &[Dimension] {
    match &self.to_base {
      Conversion::Derived(derived) => derived.constituents(),
      Conversion::Affine(_) => &[],
    }
  }

  /// The fundamental families this dimension stands for, with their
  /// exponents. A derived family is expanded through its composition,
  /// so newtons squared give `{Mass: 2, Length: 2, Time: -4}`.
  pub fn fundamental_exponents(&self) -> BTreeMap<Family, i32> {
    family_exponents(self.family, self.exponent)
  }

  pub fn to_base_conversion(&self) -> &Conversion {
    &self.to_base
  }

  pub fn from_base_conversion(&self) -> &Conversion {
    &self.from_base
  }

  /// Converts a magnitude in this unit (at this dimension's exponent)
  /// to the base unit of the family.
  pub fn to_base(&self, value: f64) -> f64 {
    self.to_base.convert(value, self.exponent)
  }

  /// Converts a magnitude in the base unit of the family to this unit
  /// (at this dimension's exponent).
  pub fn from_base(&self, value: f64) -> f64 {
    self.from_base.convert(value, self.exponent)
  }

  /// The canonical base dimension of this family, at this dimension's
  /// exponent.
  pub fn base(&self) -> Dimension {
    self.family.base().pow(self.exponent)
  }

  /// Whether `self` and `other` are the same concrete unit, possibly
  /// at different exponents. The declaring unit system is not
  /// considered, so the centimeter of CGS is the centimeter of SI.
  pub fn same_unit(&self, other: &Dimension) -> bool {
    self.family == other.family &&
      self.declared_exponent == other.declared_exponent &&
      self.abbreviation == other.abbreviation
  }

  pub fn with_exponent(&self, exponent: i32) -> Dimension {
    let mut result = self.clone();
    result.exponent = exponent;
    result
  }

  pub fn squared(&self) -> Dimension {
    self.pow(2)
  }

  pub fn cubed(&self) -> Dimension {
    self.pow(3)
  }

  pub fn invert(&self) -> Dimension {
    self.pow(-1)
  }

  /// Raises this dimension to `power`. An exponent beyond the range
  /// of `i32` saturates.
  pub fn pow(&self, power: i32) -> Dimension {
    self.with_exponent(self.exponent.saturating_mul(power))
  }

  pub fn checked_pow(&self, power: i32) -> Option<Dimension> {
    self.exponent.checked_mul(power).map(|exponent| self.with_exponent(exponent))
  }
}

/// The fundamental exponents of a product of dimensions. Families
/// which cancel are omitted.
pub(crate) fn fundamental_exponents<'a>(
  dims: impl IntoIterator<Item = &'a Dimension>,
) -> BTreeMap<Family, i32> {
  let mut exponents = BTreeMap::new();
  for dim in dims {
    for (family, exponent) in dim.fundamental_exponents() {
      let entry = exponents.entry(family).or_insert(0i32);
      *entry = entry.saturating_add(exponent);
    }
  }
  exponents.retain(|_, exponent| *exponent != 0);
  exponents
}

fn family_exponents(family: Family, exponent: i32) -> BTreeMap<Family, i32> {
  match family.composition() {
    [] => BTreeMap::from([(family, exponent)]),
    composition => composition.iter()
      .map(|&(component, power)| (component, power.saturating_mul(exponent)))
      .collect(),
  }
}

impl PartialEq for Dimension {
  fn eq(&self, other: &Self) -> bool {
    self.same_unit(other) && self.exponent == other.exponent
  }
}

impl Eq for Dimension {}

impl Hash for Dimension {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.family.hash(state);
    self.abbreviation.hash(state);
    self.declared_exponent.hash(state);
    self.exponent.hash(state);
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let declared = self.declared_exponent;
    if self.exponent == declared {
      return write!(f, "{}", self.abbreviation);
    }
    match (self.exponent.checked_div(declared), self.exponent.checked_rem(declared)) {
      (Some(power), Some(0)) => write!(f, "{}^{}", self.abbreviation, power),
      _ => write!(f, "{}^({}/{})", self.abbreviation, self.exponent, declared),
    }
  }
}
