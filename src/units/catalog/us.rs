//! United States customary units.

use super::{commons, si};
use crate::units::conversion::AffineConversion;
use crate::units::dimension::Dimension;
use crate::units::family::{Family, UnitSystem};

use once_cell::sync::Lazy;

fn scaled(family: Family, abbreviation: &str, amount_of_base: f64) -> Dimension {
  Dimension::scaled(family, UnitSystem::Us, abbreviation, amount_of_base)
}

// Length
pub static INCH: Lazy<Dimension> = Lazy::new(|| scaled(Family::Length, "in", 0.0254));
pub static FOOT: Lazy<Dimension> = Lazy::new(|| scaled(Family::Length, "ft", 0.3048));
pub static YARD: Lazy<Dimension> = Lazy::new(|| scaled(Family::Length, "yd", 0.9144));
pub static MILE: Lazy<Dimension> = Lazy::new(|| scaled(Family::Length, "mi", 1_609.344));

// Mass
pub static POUND: Lazy<Dimension> = Lazy::new(|| scaled(Family::Mass, "lb", 0.453_592_37));
pub static OUNCE: Lazy<Dimension> = Lazy::new(|| scaled(Family::Mass, "oz", 0.028_349_523_125));

// Temperature: K = (degF + 459.67) * 5/9
pub static FAHRENHEIT: Lazy<Dimension> = Lazy::new(|| {
  let to_base = AffineConversion::new(Some(459.67), Some(5.0 / 9.0), None);
  Dimension::affine(Family::Temperature, UnitSystem::Us, "degF", to_base)
});

// Volume
pub static GALLON: Lazy<Dimension> = Lazy::new(|| scaled(Family::Volume, "gal_us", 0.003_785_411_784));

// Velocity
pub static MILE_PER_HOUR: Lazy<Dimension> = Lazy::new(|| {
  Dimension::derived(
    Family::Velocity,
    UnitSystem::Us,
    "mph",
    [Dimension::clone(&MILE), commons::HOUR.invert()],
  )
});
pub static FOOT_PER_SECOND: Lazy<Dimension> = Lazy::new(|| {
  Dimension::derived(
    Family::Velocity,
    UnitSystem::Us,
    "ft/s",
    [Dimension::clone(&FOOT), si::SECOND.invert()],
  )
});

// Force and pressure have no tidy constituent form in this system,
// so they are declared against the SI base directly.
pub static POUND_FORCE: Lazy<Dimension> = Lazy::new(|| scaled(Family::Force, "lbf", 4.448_221_615_260_5));
pub static POUND_PER_SQUARE_INCH: Lazy<Dimension> = Lazy::new(|| scaled(Family::Pressure, "psi", 6_894.757_293_168));

pub fn units() -> Vec<&'static Dimension> {
  vec![
    &*INCH, &*FOOT, &*YARD, &*MILE,
    &*POUND, &*OUNCE,
    &*FAHRENHEIT,
    &*GALLON,
    &*MILE_PER_HOUR, &*FOOT_PER_SECOND,
    &*POUND_FORCE, &*POUND_PER_SQUARE_INCH,
  ]
}

pub fn preferred(family: Family) -> Option<&'static Dimension> {
  match family {
    Family::Length => Some(&*FOOT),
    Family::Mass => Some(&*POUND),
    Family::Temperature => Some(&*FAHRENHEIT),
    Family::Volume => Some(&*GALLON),
    Family::Velocity => Some(&*MILE_PER_HOUR),
    Family::Force => Some(&*POUND_FORCE),
    Family::Pressure => Some(&*POUND_PER_SQUARE_INCH),
    _ => None,
  }
}
