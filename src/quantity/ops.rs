//! Operator overloads for [`Quantity`]. Multiplication and division
//! always succeed; addition, subtraction, and remainder require
//! compatible operands and so produce a [`Result`].

use super::base::Quantity;
use super::error::QuantityError;

use std::ops::{Add, Sub, Mul, Div, Rem, Neg};

macro_rules! impl_quantity_arith {
  (impl $trait: ident for Quantity { fn $method: ident => $inner: ident -> $output: ty };) => {
    impl $trait<Quantity> for Quantity {
      type Output = $output;

      fn $method(self, rhs: Quantity) -> Self::Output {
        Quantity::$inner(&self, &rhs)
      }
    }

    impl<'a> $trait<&'a Quantity> for Quantity {
      type Output = $output;

      fn $method(self, rhs: &'a Quantity) -> Self::Output {
        Quantity::$inner(&self, rhs)
      }
    }

    impl<'a> $trait<Quantity> for &'a Quantity {
      type Output = $output;

      fn $method(self, rhs: Quantity) -> Self::Output {
        Quantity::$inner(self, &rhs)
      }
    }

    impl<'a, 'b> $trait<&'b Quantity> for &'a Quantity {
      type Output = $output;

      fn $method(self, rhs: &'b Quantity) -> Self::Output {
        Quantity::$inner(self, rhs)
      }
    }
  }
}

impl_quantity_arith! { impl Mul for Quantity { fn mul => multiply -> Quantity }; }
impl_quantity_arith! { impl Div for Quantity { fn div => divide -> Quantity }; }
impl_quantity_arith! { impl Add for Quantity { fn add => try_add -> Result<Quantity, QuantityError> }; }
impl_quantity_arith! { impl Sub for Quantity { fn sub => try_sub -> Result<Quantity, QuantityError> }; }
impl_quantity_arith! { impl Rem for Quantity { fn rem => try_rem -> Result<Quantity, QuantityError> }; }

impl Mul<f64> for Quantity {
  type Output = Quantity;

  fn mul(self, rhs: f64) -> Quantity {
    let (value, dimensions) = self.into_parts();
    Quantity::from_parts(value * rhs, dimensions)
  }
}

impl Div<f64> for Quantity {
  type Output = Quantity;

  fn div(self, rhs: f64) -> Quantity {
    let (value, dimensions) = self.into_parts();
    Quantity::from_parts(value / rhs, dimensions)
  }
}

impl Neg for Quantity {
  type Output = Quantity;

  fn neg(self) -> Quantity {
    self * -1.0
  }
}

impl<'a> Neg for &'a Quantity {
  type Output = Quantity;

  fn neg(self) -> Quantity {
    -self.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::Dimensions;
  use crate::units::test_utils::{meters, feet, seconds, kilograms};

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_mul_and_div_operators() {
    let distance = Quantity::new(10.0, [meters()]);
    let time = Quantity::new(2.0, [seconds()]);
    let speed = &distance / &time;
    assert_eq!(speed.value(), 5.0);
    assert_eq!(speed.dimensions(), &Dimensions::new([meters(), seconds().invert()]));
    let back = speed * time;
    assert_eq!(back, distance);
  }

  #[test]
  fn test_add_operator_returns_result() {
    let a = Quantity::new(1.0, [feet()]);
    let b = Quantity::new(1.0, [meters()]);
    let sum = (&b + &a).unwrap();
    assert_abs_diff_eq!(sum.value(), 1.3048, epsilon = 1e-12);
    let diff = (b.clone() - a).unwrap();
    assert_abs_diff_eq!(diff.value(), 0.6952, epsilon = 1e-12);
    assert!((b + Quantity::new(1.0, [kilograms()])).is_err());
  }

  #[test]
  fn test_rem_operator() {
    let a = Quantity::new(7.0, [meters()]);
    let b = Quantity::new(2.0, [meters()]);
    assert_eq!((&a % &b).unwrap().value(), 1.0);
    assert_eq!((-a % b).unwrap().value(), -1.0);
  }

  #[test]
  fn test_scalar_operators() {
    let a = Quantity::new(3.0, [meters()]);
    assert_eq!((a.clone() * 2.0).value(), 6.0);
    assert_eq!((a.clone() / 2.0).value(), 1.5);
    assert_eq!((-&a).value(), -3.0);
    assert_eq!((-&a).dimensions(), a.dimensions());
  }
}
