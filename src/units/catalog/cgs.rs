//! Centimeter-gram-second units. Derived CGS units are declared from
//! their CGS constituents, so their conversion factors fall out of the
//! constituents' own factors.

use crate::units::conversion::AffineConversion;
use crate::units::dimension::Dimension;
use crate::units::family::{Family, UnitSystem};

use once_cell::sync::Lazy;

fn derived<const N: usize>(family: Family, abbreviation: &str, constituents: [Dimension; N]) -> Dimension {
  Dimension::derived(family, UnitSystem::Cgs, abbreviation, constituents)
}

pub static CENTIMETER: Lazy<Dimension> = Lazy::new(|| {
  Dimension::scaled(Family::Length, UnitSystem::Cgs, "cm", 0.01)
});
pub static GRAM: Lazy<Dimension> = Lazy::new(|| {
  Dimension::scaled(Family::Mass, UnitSystem::Cgs, "g", 0.001)
});
pub static SECOND: Lazy<Dimension> = Lazy::new(|| {
  Dimension::base_unit(
    Family::Time,
    UnitSystem::Cgs,
    "s",
    AffineConversion::IDENTITY,
    AffineConversion::IDENTITY,
  )
});

pub static GAL: Lazy<Dimension> = Lazy::new(|| {
  derived(Family::Acceleration, "Gal", [Dimension::clone(&CENTIMETER), SECOND.pow(-2)])
});
pub static DYNE: Lazy<Dimension> = Lazy::new(|| {
  derived(Family::Force, "dyn", [Dimension::clone(&GRAM), Dimension::clone(&CENTIMETER), SECOND.pow(-2)])
});
pub static ERG: Lazy<Dimension> = Lazy::new(|| {
  derived(Family::Energy, "erg", [Dimension::clone(&GRAM), CENTIMETER.squared(), SECOND.pow(-2)])
});
pub static BARYE: Lazy<Dimension> = Lazy::new(|| {
  derived(Family::Pressure, "Ba", [Dimension::clone(&GRAM), CENTIMETER.invert(), SECOND.pow(-2)])
});

pub fn units() -> Vec<&'static Dimension> {
  vec![&*CENTIMETER, &*GRAM, &*SECOND, &*GAL, &*DYNE, &*ERG, &*BARYE]
}

pub fn preferred(family: Family) -> Option<&'static Dimension> {
  match family {
    Family::Length => Some(&*CENTIMETER),
    Family::Mass => Some(&*GRAM),
    Family::Time => Some(&*SECOND),
    Family::Acceleration => Some(&*GAL),
    Family::Force => Some(&*DYNE),
    Family::Energy => Some(&*ERG),
    Family::Pressure => Some(&*BARYE),
    _ => None,
  }
}
