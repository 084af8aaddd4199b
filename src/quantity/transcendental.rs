//! Trigonometric, hyperbolic, and logarithmic functions on
//! quantities.
//!
//! Direct trigonometric functions take an angle in any unit and
//! return a dimensionless quantity. Inverse trigonometric functions
//! take a dimensionless quantity and return radians. Logarithms take
//! and return dimensionless quantities.

use super::base::Quantity;
use super::error::{ExpectedDimension, QuantityError};
use crate::util::angles::{Degrees, Radians};

use phf::phf_map;

use std::fmt::{self, Formatter, Display};

/// Angles within this many degrees of a pole of tangent or cotangent
/// are treated as exactly on the pole.
const POLE_TOLERANCE_DEGREES: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transcendental {
  Sin,
  Cos,
  Tan,
  Sec,
  Csc,
  Cot,
  Sinh,
  Cosh,
  Tanh,
  Asin,
  Acos,
  Atan,
  Atan2,
  Log,
  Log10,
  LogBase,
}

static FUNCTIONS: phf::Map<&'static str, Transcendental> = phf_map! {
  "sin" => Transcendental::Sin,
  "cos" => Transcendental::Cos,
  "tan" => Transcendental::Tan,
  "sec" => Transcendental::Sec,
  "csc" => Transcendental::Csc,
  "cot" => Transcendental::Cot,
  "sinh" => Transcendental::Sinh,
  "cosh" => Transcendental::Cosh,
  "tanh" => Transcendental::Tanh,
  "asin" => Transcendental::Asin,
  "acos" => Transcendental::Acos,
  "atan" => Transcendental::Atan,
  "atan2" => Transcendental::Atan2,
  "log" => Transcendental::Log,
  "log10" => Transcendental::Log10,
  "logb" => Transcendental::LogBase,
};

impl Transcendental {
  pub fn from_name(name: &str) -> Option<Transcendental> {
    FUNCTIONS.get(name).copied()
  }

  pub fn name(self) -> &'static str {
    match self {
      Transcendental::Sin => "sin",
      Transcendental::Cos => "cos",
      Transcendental::Tan => "tan",
      Transcendental::Sec => "sec",
      Transcendental::Csc => "csc",
      Transcendental::Cot => "cot",
      Transcendental::Sinh => "sinh",
      Transcendental::Cosh => "cosh",
      Transcendental::Tanh => "tanh",
      Transcendental::Asin => "asin",
      Transcendental::Acos => "acos",
      Transcendental::Atan => "atan",
      Transcendental::Atan2 => "atan2",
      Transcendental::Log => "log",
      Transcendental::Log10 => "log10",
      Transcendental::LogBase => "logb",
    }
  }

  pub fn arity(self) -> usize {
    match self {
      Transcendental::Atan2 | Transcendental::LogBase => 2,
      _ => 1,
    }
  }

  pub fn evaluate(self, args: &[Quantity]) -> Result<Quantity, QuantityError> {
    QuantityError::check_arity(self.name(), self.arity(), args.len())?;
    let arg = &args[0];
    match self {
      Transcendental::Sin => arg.sin(),
      Transcendental::Cos => arg.cos(),
      Transcendental::Tan => arg.tan(),
      Transcendental::Sec => arg.sec(),
      Transcendental::Csc => arg.csc(),
      Transcendental::Cot => arg.cot(),
      Transcendental::Sinh => arg.sinh(),
      Transcendental::Cosh => arg.cosh(),
      Transcendental::Tanh => arg.tanh(),
      Transcendental::Asin => arg.asin(),
      Transcendental::Acos => arg.acos(),
      Transcendental::Atan => arg.atan(),
      Transcendental::Atan2 => arg.atan2(&args[1]),
      Transcendental::Log => arg.log(),
      Transcendental::Log10 => arg.log10(),
      Transcendental::LogBase => arg.log_base(&args[1]),
    }
  }
}

impl Display for Transcendental {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl Quantity {
  /// The angle in radians, if this quantity is an angle.
  fn expect_angle(&self, function: &'static str) -> Result<Radians, QuantityError> {
    if !self.is_angle() {
      return Err(unexpected(function, ExpectedDimension::Angle, self));
    }
    Ok(Radians(self.to_base().value()))
  }

  fn expect_dimensionless(&self, function: &'static str) -> Result<f64, QuantityError> {
    if !self.is_dimensionless() {
      return Err(unexpected(function, ExpectedDimension::Dimensionless, self));
    }
    Ok(self.value())
  }

  /// Hyperbolic functions accept either an angle, taken in radians,
  /// or a plain number.
  fn expect_hyperbolic_argument(&self, function: &'static str) -> Result<f64, QuantityError> {
    if self.is_dimensionless() {
      Ok(self.value())
    } else {
      self.expect_angle(function).map(|r| r.0)
    }
  }

  pub fn sin(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_angle("sin")?.sin()))
  }

  pub fn cos(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_angle("cos")?.cos()))
  }

  /// Tangent, which is exactly `+inf` at 90 degrees and `-inf` at 270
  /// degrees (modulo full turns).
  pub fn tan(&self) -> Result<Quantity, QuantityError> {
    let angle = self.expect_angle("tan")?;
    let value = pole_value(angle, Degrees(90.0), Degrees(270.0))
      .unwrap_or_else(|| angle.tan());
    Ok(Quantity::dimensionless(value))
  }

  pub fn sec(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_angle("sec")?.cos().recip()))
  }

  pub fn csc(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_angle("csc")?.sin().recip()))
  }

  /// Cotangent, which is exactly `+inf` at 0 degrees and `-inf` at
  /// 180 degrees (modulo full turns).
  pub fn cot(&self) -> Result<Quantity, QuantityError> {
    let angle = self.expect_angle("cot")?;
    let value = pole_value(angle, Degrees(0.0), Degrees(180.0))
      .unwrap_or_else(|| angle.cos() / angle.sin());
    Ok(Quantity::dimensionless(value))
  }

  pub fn sinh(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_hyperbolic_argument("sinh")?.sinh()))
  }

  pub fn cosh(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_hyperbolic_argument("cosh")?.cosh()))
  }

  pub fn tanh(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_hyperbolic_argument("tanh")?.tanh()))
  }

  /// Arcsine, in radians. Arguments outside `[-1, 1]` produce NaN.
  pub fn asin(&self) -> Result<Quantity, QuantityError> {
    Ok(radians(Radians::asin(self.expect_dimensionless("asin")?)))
  }

  /// Arccosine, in radians. Arguments outside `[-1, 1]` produce NaN.
  pub fn acos(&self) -> Result<Quantity, QuantityError> {
    Ok(radians(Radians::acos(self.expect_dimensionless("acos")?)))
  }

  pub fn atan(&self) -> Result<Quantity, QuantityError> {
    Ok(radians(Radians::atan(self.expect_dimensionless("atan")?)))
  }

  /// The angle of the point `(x, y)`, in radians, where `self` is the
  /// `y` coordinate. Both coordinates must be compatible with each
  /// other, but may be of any dimension.
  pub fn atan2(&self, x: &Quantity) -> Result<Quantity, QuantityError> {
    if !self.dimensions().is_compatible(x.dimensions(), false) {
      return Err(QuantityError::IncompatibleDimensions { left: self.clone(), right: x.clone() });
    }
    let x = x.convert_unchecked(self.dimensions());
    Ok(radians(Radians::atan2(self.value(), x.value())))
  }

  /// Natural logarithm.
  pub fn log(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_dimensionless("log")?.ln()))
  }

  pub fn log10(&self) -> Result<Quantity, QuantityError> {
    Ok(Quantity::dimensionless(self.expect_dimensionless("log10")?.log10()))
  }

  /// Logarithm in an arbitrary base. Both arguments must be
  /// dimensionless.
  pub fn log_base(&self, base: &Quantity) -> Result<Quantity, QuantityError> {
    let value = self.expect_dimensionless("logb")?;
    let base = base.expect_dimensionless("logb")?;
    Ok(Quantity::dimensionless(value.log(base)))
  }
}

fn unexpected(function: &'static str, expected: ExpectedDimension, argument: &Quantity) -> QuantityError {
  QuantityError::UnexpectedDimension { function, expected, argument: argument.clone() }
}

fn radians(angle: Radians) -> Quantity {
  Quantity::radians(angle.0)
}

/// `+inf` if `angle` lies on `positive`, `-inf` if it lies on
/// `negative`, otherwise `None`.
fn pole_value(angle: Radians, positive: Degrees, negative: Degrees) -> Option<f64> {
  let degrees = angle.into_degrees();
  if degrees.circular_distance(positive) < POLE_TOLERANCE_DEGREES {
    Some(f64::INFINITY)
  } else if degrees.circular_distance(negative) < POLE_TOLERANCE_DEGREES {
    Some(f64::NEG_INFINITY)
  } else {
    None
  }
}
