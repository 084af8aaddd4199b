use super::base::Quantity;
use crate::units::Dimensions;

use thiserror::Error;

use std::fmt::{self, Formatter, Display};

/// The kind of argument a function expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedDimension {
  /// A single angle family at exponent 1.
  Angle,
  /// An empty dimension set.
  Dimensionless,
}

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum QuantityError {
  #[error("Incompatible dimensions: {left} and {right}")]
  IncompatibleDimensions { left: Quantity, right: Quantity },
  #[error("Cannot convert {quantity} to {target}")]
  IncompatibleTarget { quantity: Quantity, target: Dimensions },
  #[error("{function} expected {expected} argument, got {argument}")]
  UnexpectedDimension { function: &'static str, expected: ExpectedDimension, argument: Quantity },
  #[error("{operator} expects {expected} argument(s), got {actual}")]
  MissingArgument { operator: &'static str, expected: usize, actual: usize },
  #[error("{operator} expects {expected} argument(s), got {actual}")]
  UnexpectedArgument { operator: &'static str, expected: usize, actual: usize },
}

impl QuantityError {
  /// The quantities which caused the error, for diagnostics.
  pub fn operands(&self) -> Vec<&Quantity> {
    match self {
      QuantityError::IncompatibleDimensions { left, right } => vec![left, right],
      QuantityError::IncompatibleTarget { quantity, .. } => vec![quantity],
      QuantityError::UnexpectedDimension { argument, .. } => vec![argument],
      QuantityError::MissingArgument { .. } | QuantityError::UnexpectedArgument { .. } => vec![],
    }
  }

  /// Checks the number of arguments handed to an operator or function
  /// of the given arity.
  pub(crate) fn check_arity(operator: &'static str, expected: usize, actual: usize) -> Result<(), QuantityError> {
    if actual < expected {
      Err(QuantityError::MissingArgument { operator, expected, actual })
    } else if actual > expected {
      Err(QuantityError::UnexpectedArgument { operator, expected, actual })
    } else {
      Ok(())
    }
  }
}

impl Display for ExpectedDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      ExpectedDimension::Angle => write!(f, "angle"),
      ExpectedDimension::Dimensionless => write!(f, "dimensionless"),
    }
  }
}
