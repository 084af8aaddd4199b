//! Tables of concrete units for each [`UnitSystem`]. Every unit in
//! these tables is declared through the public [`Dimension`]
//! constructors; the tables themselves are plain data.
//!
//! All units are once-initialized statics and are never mutated after
//! initialization.

pub mod cgs;
pub mod commons;
pub mod si;
pub mod us;

mod parser;

pub use parser::{parse_units, UnitParseError};

use crate::units::dimension::Dimension;
use crate::units::family::{Family, UnitSystem};

use once_cell::sync::Lazy;

use std::collections::HashMap;

static TABLE: Lazy<HashMap<&'static str, &'static Dimension>> = Lazy::new(|| {
  let mut table = HashMap::new();
  // Earlier systems win when two systems declare the same
  // abbreviation (the SI and CGS centimeter, for instance).
  for system in UnitSystem::ALL {
    for unit in system.units() {
      table.entry(unit.abbreviation()).or_insert(unit);
    }
  }
  table
});

/// Looks up a unit by abbreviation across every unit system.
pub fn find(abbreviation: &str) -> Option<&'static Dimension> {
  Lazy::force(&TABLE).get(abbreviation).copied()
}

impl UnitSystem {
  /// All units declared by this system.
  pub fn units(self) -> Vec<&'static Dimension> {
    match self {
      UnitSystem::Si => si::units(),
      UnitSystem::Us => us::units(),
      UnitSystem::Cgs => cgs::units(),
      UnitSystem::Commons => commons::units(),
    }
  }

  /// The unit this system prefers for the given family, at exponent
  /// 1, if the system has one.
  pub fn preferred(self, family: Family) -> Option<&'static Dimension> {
    match self {
      UnitSystem::Si => si::preferred(family),
      UnitSystem::Us => us::preferred(family),
      UnitSystem::Cgs => cgs::preferred(family),
      UnitSystem::Commons => commons::preferred(family),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::fundamental_exponents;

  use approx::assert_abs_diff_eq;
  use itertools::Itertools;

  #[test]
  fn test_abbreviations_unique_within_system() {
    for system in UnitSystem::ALL {
      let units = system.units();
      let unique = units.iter().map(|u| u.abbreviation()).unique().count();
      assert_eq!(unique, units.len(), "duplicate abbreviation in {}", system);
    }
  }

  #[test]
  fn test_units_are_declared_at_exponent_one_or_as_inverses() {
    for system in UnitSystem::ALL {
      for unit in system.units() {
        assert!(unit.exponent() == 1 || unit.exponent() == -1, "{}", unit);
      }
    }
  }

  #[test]
  fn test_derived_units_match_family_composition() {
    let mut count = 0;
    for system in UnitSystem::ALL {
      for unit in system.units().into_iter().filter(|unit| unit.is_derived()) {
        assert_eq!(
          fundamental_exponents(unit.constituents()),
          unit.fundamental_exponents(),
          "{} ({:?})", unit, system,
        );
        count += 1;
      }
    }
    // m^3, m/s, m/s^2, N, J, W, Pa, mph, ft/s, Gal, dyn, erg, Ba, km/h
    assert!(count >= 14, "only {} derived units checked", count);
  }

  #[test]
  fn test_find() {
    assert_eq!(find("ft").map(Dimension::abbreviation), Some("ft"));
    assert_eq!(find("wk").map(Dimension::family_id), Some(Family::Time));
    assert_eq!(find("Hz").map(Dimension::exponent), Some(-1));
    assert!(find("furlong").is_none());
  }

  #[test]
  fn test_find_prefers_earlier_systems() {
    assert_eq!(find("cm").map(Dimension::system), Some(UnitSystem::Si));
  }

  #[test]
  fn test_preferred_units_belong_to_family() {
    for system in UnitSystem::ALL {
      for family in Family::ALL {
        if let Some(unit) = system.preferred(family) {
          assert_eq!(unit.family_id(), family);
          assert_eq!(unit.exponent(), 1);
        }
      }
    }
  }

  #[test]
  fn test_cgs_derived_units() {
    assert_abs_diff_eq!(cgs::DYNE.to_base(1.0), 1e-5, epsilon = 1e-18);
    assert_abs_diff_eq!(cgs::ERG.to_base(1.0), 1e-7, epsilon = 1e-20);
    assert_abs_diff_eq!(cgs::GAL.to_base(1.0), 0.01, epsilon = 1e-15);
    assert_abs_diff_eq!(cgs::BARYE.to_base(1.0), 0.1, epsilon = 1e-15);
  }

  #[test]
  fn test_velocity_units() {
    assert_abs_diff_eq!(us::MILE_PER_HOUR.to_base(1.0), 0.44704, epsilon = 1e-12);
    assert_abs_diff_eq!(commons::KILOMETER_PER_HOUR.to_base(36.0), 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(commons::KILOMETER_PER_HOUR.from_base(10.0), 36.0, epsilon = 1e-12);
  }

  #[test]
  fn test_temperature_units() {
    assert_abs_diff_eq!(us::FAHRENHEIT.to_base(212.0), 373.15, epsilon = 1e-9);
    assert_abs_diff_eq!(commons::CELSIUS.from_base(373.15), 100.0, epsilon = 1e-9);
  }

  #[test]
  fn test_frequency_units() {
    assert_abs_diff_eq!(si::KILOHERTZ.to_base(5.0), 5_000.0, epsilon = 1e-9);
    assert_eq!(si::HERTZ.to_base(5.0), 5.0);
  }
}
