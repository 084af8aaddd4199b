//! Sample units for tests, declared directly through the public
//! constructors so that tests do not depend on the catalogs.

use super::conversion::AffineConversion;
use super::dimension::Dimension;
use super::family::{Family, UnitSystem};

use std::f64::consts::PI;

pub fn meters() -> Dimension {
  Family::Length.base().clone()
}

pub fn kilometers() -> Dimension {
  Dimension::scaled(Family::Length, UnitSystem::Si, "km", 1000.0)
}

pub fn centimeters() -> Dimension {
  Dimension::scaled(Family::Length, UnitSystem::Cgs, "cm", 0.01)
}

pub fn feet() -> Dimension {
  Dimension::scaled(Family::Length, UnitSystem::Us, "ft", 0.3048)
}

pub fn seconds() -> Dimension {
  Family::Time.base().clone()
}

pub fn milliseconds() -> Dimension {
  Dimension::scaled(Family::Time, UnitSystem::Si, "ms", 0.001)
}

pub fn minutes() -> Dimension {
  Dimension::scaled(Family::Time, UnitSystem::Commons, "min", 60.0)
}

pub fn hertz() -> Dimension {
  Dimension::base_unit(
    Family::Time,
    UnitSystem::Si,
    "Hz",
    AffineConversion::IDENTITY,
    AffineConversion::IDENTITY,
  ).raised(-1)
}

pub fn kilograms() -> Dimension {
  Family::Mass.base().clone()
}

pub fn grams() -> Dimension {
  Dimension::scaled(Family::Mass, UnitSystem::Cgs, "g", 0.001)
}

pub fn celsius() -> Dimension {
  Dimension::affine(Family::Temperature, UnitSystem::Commons, "degC", AffineConversion::shifting(273.15))
}

pub fn radians() -> Dimension {
  Family::Angle.base().clone()
}

pub fn degrees() -> Dimension {
  Dimension::scaled(Family::Angle, UnitSystem::Commons, "deg", PI / 180.0)
}

pub fn dynes() -> Dimension {
  Dimension::derived(
    Family::Force,
    UnitSystem::Cgs,
    "dyn",
    [grams(), centimeters(), seconds().pow(-2)],
  )
}
