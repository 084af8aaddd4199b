//! Units in common everyday use which belong to no single formal
//! system: calendar time, degrees of arc, degrees Celsius, liters.

use super::si;
use crate::units::conversion::AffineConversion;
use crate::units::dimension::Dimension;
use crate::units::family::{Family, UnitSystem};

use once_cell::sync::Lazy;

use std::f64::consts::PI;

fn scaled(family: Family, abbreviation: &str, amount_of_base: f64) -> Dimension {
  Dimension::scaled(family, UnitSystem::Commons, abbreviation, amount_of_base)
}

// Time
pub static MINUTE: Lazy<Dimension> = Lazy::new(|| scaled(Family::Time, "min", 60.0));
pub static HOUR: Lazy<Dimension> = Lazy::new(|| scaled(Family::Time, "h", 3_600.0));
pub static DAY: Lazy<Dimension> = Lazy::new(|| scaled(Family::Time, "day", 86_400.0));
pub static WEEK: Lazy<Dimension> = Lazy::new(|| scaled(Family::Time, "wk", 604_800.0));

// Angle
pub static DEGREE: Lazy<Dimension> = Lazy::new(|| scaled(Family::Angle, "deg", PI / 180.0));
pub static REVOLUTION: Lazy<Dimension> = Lazy::new(|| scaled(Family::Angle, "rev", 2.0 * PI));

// Temperature: K = degC + 273.15
pub static CELSIUS: Lazy<Dimension> = Lazy::new(|| {
  Dimension::affine(Family::Temperature, UnitSystem::Commons, "degC", AffineConversion::shifting(273.15))
});

// Volume
pub static LITER: Lazy<Dimension> = Lazy::new(|| scaled(Family::Volume, "L", 0.001));

// Velocity
pub static KILOMETER_PER_HOUR: Lazy<Dimension> = Lazy::new(|| {
  Dimension::derived(
    Family::Velocity,
    UnitSystem::Commons,
    "km/h",
    [Dimension::clone(&si::KILOMETER), HOUR.invert()],
  )
});

// Energy
pub static KILOWATT_HOUR: Lazy<Dimension> = Lazy::new(|| scaled(Family::Energy, "kWh", 3_600_000.0));

pub fn units() -> Vec<&'static Dimension> {
  vec![
    &*MINUTE, &*HOUR, &*DAY, &*WEEK,
    &*DEGREE, &*REVOLUTION,
    &*CELSIUS,
    &*LITER,
    &*KILOMETER_PER_HOUR,
    &*KILOWATT_HOUR,
  ]
}

pub fn preferred(family: Family) -> Option<&'static Dimension> {
  match family {
    Family::Time => Some(&*HOUR),
    Family::Angle => Some(&*DEGREE),
    Family::Temperature => Some(&*CELSIUS),
    Family::Volume => Some(&*LITER),
    Family::Velocity => Some(&*KILOMETER_PER_HOUR),
    Family::Energy => Some(&*KILOWATT_HOUR),
    _ => None,
  }
}
