//! Plain angle magnitudes, tagged with the unit they are measured in.

use std::f64::consts::{PI, TAU};
use std::ops::{Add, Sub, Mul, Div};

/// A number representing degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees(pub f64);

/// A number representing radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
  pub const FULL_TURN: Degrees = Degrees(360.0);

  pub fn into_radians(self) -> Radians {
    Radians(self.0 * PI / 180.0)
  }

  /// The equivalent angle in `[0, 360)`.
  pub fn normalized(self) -> Degrees {
    Degrees(self.0.rem_euclid(360.0))
  }

  /// The shortest distance around the circle between two angles.
  /// Always in `[0, 180]`.
  pub fn circular_distance(self, other: Degrees) -> f64 {
    let diff = (self - other).normalized().0;
    diff.min(360.0 - diff)
  }
}

impl Radians {
  pub const FULL_TURN: Radians = Radians(TAU);

  pub fn into_degrees(self) -> Degrees {
    Degrees(self.0 * 180.0 / PI)
  }

  /// The equivalent angle in `[0, 2pi)`.
  pub fn normalized(self) -> Radians {
    Radians(self.0.rem_euclid(TAU))
  }

  pub fn sin(self) -> f64 {
    self.0.sin()
  }

  pub fn cos(self) -> f64 {
    self.0.cos()
  }

  pub fn tan(self) -> f64 {
    self.0.tan()
  }

  pub fn asin(value: f64) -> Self {
    Radians(value.asin())
  }

  pub fn acos(value: f64) -> Self {
    Radians(value.acos())
  }

  pub fn atan(value: f64) -> Self {
    Radians(value.atan())
  }

  pub fn atan2(y: f64, x: f64) -> Self {
    Radians(y.atan2(x))
  }
}

macro_rules! newtype_impl {
  (impl $trait_: ident for $type_: ident { fn $method: ident };) => {
    impl $trait_ for $type_ {
      type Output = $type_;

      fn $method(self, rhs: Self) -> $type_ {
        $type_(self.0.$method(rhs.0))
      }
    }
  };

  (impl $trait_: ident <f64> for $type_: ident { fn $method: ident };) => {
    impl $trait_<f64> for $type_ {
      type Output = $type_;

      fn $method(self, rhs: f64) -> $type_ {
        $type_(self.0.$method(rhs))
      }
    }
  };
}

newtype_impl! { impl Add for Degrees { fn add }; }
newtype_impl! { impl Add for Radians { fn add }; }
newtype_impl! { impl Sub for Degrees { fn sub }; }
newtype_impl! { impl Sub for Radians { fn sub }; }

newtype_impl! { impl Mul<f64> for Degrees { fn mul }; }
newtype_impl! { impl Mul<f64> for Radians { fn mul }; }
newtype_impl! { impl Div<f64> for Degrees { fn div }; }
newtype_impl! { impl Div<f64> for Radians { fn div }; }
