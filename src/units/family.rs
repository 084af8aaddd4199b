//! Physical families of units, and the unit systems that declare
//! concrete units for them.

use super::conversion::AffineConversion;
use super::dimension::Dimension;

use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// A kind of physical quantity, independent of the concrete unit it
/// is measured in. Every concrete unit of length shares
/// `Family::Length`, regardless of the unit system that declared it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
  Length,
  Time,
  Mass,
  Temperature,
  Current,
  LuminousIntensity,
  AmountOfSubstance,
  Angle,
  Volume,
  Velocity,
  Acceleration,
  Force,
  Energy,
  Power,
  Pressure,
}

/// Whether a family is measured directly or composed from others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKind {
  Fundamental,
  Derived,
}

/// The unit system a concrete unit was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
  Si,
  Us,
  Cgs,
  Commons,
}

pub const NFAMILIES: usize = 15;

static BASES: Lazy<Vec<Dimension>> = Lazy::new(|| {
  Family::ALL.iter()
    .map(|&family| match family.kind() {
      FamilyKind::Fundamental => fundamental_base(family),
      FamilyKind::Derived => {
        // Compositions only ever name fundamental families, so we
        // never need to recurse into BASES while it is being built.
        let constituents = family.composition()
          .iter()
          .map(|&(component, exponent)| fundamental_base(component).pow(exponent));
        Dimension::derived(family, UnitSystem::Si, family.base_abbreviation(), constituents)
      }
    })
    .collect()
});

fn fundamental_base(family: Family) -> Dimension {
  Dimension::base_unit(
    family,
    UnitSystem::Si,
    family.base_abbreviation(),
    AffineConversion::IDENTITY,
    AffineConversion::IDENTITY,
  )
}

impl Family {
  pub const ALL: [Family; NFAMILIES] = [
    Family::Length,
    Family::Time,
    Family::Mass,
    Family::Temperature,
    Family::Current,
    Family::LuminousIntensity,
    Family::AmountOfSubstance,
    Family::Angle,
    Family::Volume,
    Family::Velocity,
    Family::Acceleration,
    Family::Force,
    Family::Energy,
    Family::Power,
    Family::Pressure,
  ];

  fn index(self) -> usize {
    self as usize
  }

  /// A stable, human-readable identifier for the family.
  pub fn id(self) -> &'static str {
    match self {
      Family::Length => "length",
      Family::Time => "time",
      Family::Mass => "mass",
      Family::Temperature => "temperature",
      Family::Current => "current",
      Family::LuminousIntensity => "luminous_intensity",
      Family::AmountOfSubstance => "amount_of_substance",
      Family::Angle => "angle",
      Family::Volume => "volume",
      Family::Velocity => "velocity",
      Family::Acceleration => "acceleration",
      Family::Force => "force",
      Family::Energy => "energy",
      Family::Power => "power",
      Family::Pressure => "pressure",
    }
  }

  pub fn kind(self) -> FamilyKind {
    if self.composition().is_empty() {
      FamilyKind::Fundamental
    } else {
      FamilyKind::Derived
    }
  }

  /// The fundamental families (and their powers) this family is made
  /// of. Empty for fundamental families.
  pub fn composition(self) -> &'static [(Family, i32)] {
    use Family::*;
    match self {
      Volume => &[(Length, 3)],
      Velocity => &[(Length, 1), (Time, -1)],
      Acceleration => &[(Length, 1), (Time, -2)],
      Force => &[(Mass, 1), (Length, 1), (Time, -2)],
      Energy => &[(Mass, 1), (Length, 2), (Time, -2)],
      Power => &[(Mass, 1), (Length, 2), (Time, -3)],
      Pressure => &[(Mass, 1), (Length, -1), (Time, -2)],
      Length | Time | Mass | Temperature | Current |
      LuminousIntensity | AmountOfSubstance | Angle => &[],
    }
  }

  /// The canonical base unit of the family, at exponent 1. Every
  /// conversion between two concrete units of the family pivots
  /// through this unit.
  ///
  /// Base units follow SI, with the radian as the base unit of
  /// angle.
  pub fn base(self) -> &'static Dimension {
    &Lazy::force(&BASES)[self.index()]
  }

  fn base_abbreviation(self) -> &'static str {
    match self {
      Family::Length => "m",
      Family::Time => "s",
      Family::Mass => "kg",
      Family::Temperature => "K",
      Family::Current => "A",
      Family::LuminousIntensity => "cd",
      Family::AmountOfSubstance => "mol",
      Family::Angle => "rad",
      Family::Volume => "m^3",
      Family::Velocity => "m/s",
      Family::Acceleration => "m/s^2",
      Family::Force => "N",
      Family::Energy => "J",
      Family::Power => "W",
      Family::Pressure => "Pa",
    }
  }
}

impl UnitSystem {
  pub const ALL: [UnitSystem; 4] = [
    UnitSystem::Si,
    UnitSystem::Us,
    UnitSystem::Cgs,
    UnitSystem::Commons,
  ];
}

impl Display for Family {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.id())
  }
}

impl Display for UnitSystem {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      UnitSystem::Si => write!(f, "SI"),
      UnitSystem::Us => write!(f, "US"),
      UnitSystem::Cgs => write!(f, "CGS"),
      UnitSystem::Commons => write!(f, "Commons"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_index_matches_all() {
    for (index, family) in Family::ALL.iter().enumerate() {
      assert_eq!(family.index(), index);
    }
  }

  #[test]
  fn test_kind() {
    assert_eq!(Family::Length.kind(), FamilyKind::Fundamental);
    assert_eq!(Family::Angle.kind(), FamilyKind::Fundamental);
    assert_eq!(Family::Force.kind(), FamilyKind::Derived);
    assert_eq!(Family::Volume.kind(), FamilyKind::Derived);
  }

  #[test]
  fn test_compositions_only_name_fundamental_families() {
    for family in Family::ALL {
      for (component, exponent) in family.composition() {
        assert_eq!(component.kind(), FamilyKind::Fundamental);
        assert_ne!(*exponent, 0);
      }
    }
  }

  #[test]
  fn test_bases_are_identity_units_of_their_family() {
    for family in Family::ALL {
      let base = family.base();
      assert_eq!(base.family_id(), family);
      assert_eq!(base.exponent(), 1);
      assert!(base.is_base_unit(), "{} should be a base unit", base);
    }
  }

  #[test]
  fn test_derived_base_constituents() {
    let newton = Family::Force.base();
    assert_eq!(newton.abbreviation(), "N");
    let constituents: Vec<_> = newton.constituents()
      .iter()
      .map(|d| (d.family_id(), d.exponent()))
      .collect();
    assert_eq!(constituents, vec![(Family::Mass, 1), (Family::Length, 1), (Family::Time, -2)]);
  }

  #[test]
  fn test_display() {
    assert_eq!(Family::LuminousIntensity.to_string(), "luminous_intensity");
    assert_eq!(UnitSystem::Cgs.to_string(), "CGS");
  }

  #[test]
  fn test_serde_tags() {
    assert_eq!(serde_json::to_string(&Family::AmountOfSubstance).unwrap(), "\"amount_of_substance\"");
    assert_eq!(serde_json::from_str::<UnitSystem>("\"commons\"").unwrap(), UnitSystem::Commons);
  }
}
