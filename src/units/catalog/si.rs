//! International System of Units. The SI units of each family are
//! that family's canonical base units.

use crate::units::conversion::AffineConversion;
use crate::units::dimension::Dimension;
use crate::units::family::{Family, UnitSystem};

use once_cell::sync::Lazy;

fn base(family: Family) -> Dimension {
  family.base().clone()
}

fn scaled(family: Family, abbreviation: &str, amount_of_base: f64) -> Dimension {
  Dimension::scaled(family, UnitSystem::Si, abbreviation, amount_of_base)
}

// Length
pub static METER: Lazy<Dimension> = Lazy::new(|| base(Family::Length));
pub static KILOMETER: Lazy<Dimension> = Lazy::new(|| scaled(Family::Length, "km", 1_000.0));
pub static CENTIMETER: Lazy<Dimension> = Lazy::new(|| scaled(Family::Length, "cm", 0.01));
pub static MILLIMETER: Lazy<Dimension> = Lazy::new(|| scaled(Family::Length, "mm", 0.001));

// Time
pub static SECOND: Lazy<Dimension> = Lazy::new(|| base(Family::Time));
pub static MILLISECOND: Lazy<Dimension> = Lazy::new(|| scaled(Family::Time, "ms", 0.001));
pub static HERTZ: Lazy<Dimension> = Lazy::new(|| {
  Dimension::base_unit(
    Family::Time,
    UnitSystem::Si,
    "Hz",
    AffineConversion::IDENTITY,
    AffineConversion::IDENTITY,
  ).raised(-1)
});
pub static KILOHERTZ: Lazy<Dimension> = Lazy::new(|| scaled(Family::Time, "kHz", 0.001).raised(-1));

// Mass
pub static KILOGRAM: Lazy<Dimension> = Lazy::new(|| base(Family::Mass));
pub static GRAM: Lazy<Dimension> = Lazy::new(|| scaled(Family::Mass, "g", 0.001));

// Remaining fundamental families
pub static KELVIN: Lazy<Dimension> = Lazy::new(|| base(Family::Temperature));
pub static AMPERE: Lazy<Dimension> = Lazy::new(|| base(Family::Current));
pub static CANDELA: Lazy<Dimension> = Lazy::new(|| base(Family::LuminousIntensity));
pub static MOLE: Lazy<Dimension> = Lazy::new(|| base(Family::AmountOfSubstance));
pub static RADIAN: Lazy<Dimension> = Lazy::new(|| base(Family::Angle));

// Derived
pub static CUBIC_METER: Lazy<Dimension> = Lazy::new(|| base(Family::Volume));
pub static METER_PER_SECOND: Lazy<Dimension> = Lazy::new(|| base(Family::Velocity));
pub static METER_PER_SECOND_SQUARED: Lazy<Dimension> = Lazy::new(|| base(Family::Acceleration));
pub static NEWTON: Lazy<Dimension> = Lazy::new(|| base(Family::Force));
pub static JOULE: Lazy<Dimension> = Lazy::new(|| base(Family::Energy));
pub static WATT: Lazy<Dimension> = Lazy::new(|| base(Family::Power));
pub static PASCAL: Lazy<Dimension> = Lazy::new(|| base(Family::Pressure));

pub fn units() -> Vec<&'static Dimension> {
  vec![
    &*METER, &*KILOMETER, &*CENTIMETER, &*MILLIMETER,
    &*SECOND, &*MILLISECOND, &*HERTZ, &*KILOHERTZ,
    &*KILOGRAM, &*GRAM,
    &*KELVIN, &*AMPERE, &*CANDELA, &*MOLE, &*RADIAN,
    &*CUBIC_METER, &*METER_PER_SECOND, &*METER_PER_SECOND_SQUARED,
    &*NEWTON, &*JOULE, &*WATT, &*PASCAL,
  ]
}

/// Every family has an SI unit: its base unit.
pub fn preferred(family: Family) -> Option<&'static Dimension> {
  Some(family.base())
}
