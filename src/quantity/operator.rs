//! Operators over quantities, keyed by enum rather than by name, with
//! a compile-time symbol table for callers that start from text.

use super::base::Quantity;
use super::error::QuantityError;

use phf::phf_map;

use std::cmp::Ordering;
use std::fmt::{self, Formatter, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
  /// Returns the operand unchanged.
  Plus,
  /// Negates the magnitude. Dimensions are unchanged.
  Negate,
  /// Adds one of the operand's own unit.
  Increment,
  /// Subtracts one of the operand's own unit.
  Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
  /// Requires compatible operands. The result is in the left
  /// operand's units.
  Add,
  /// Requires compatible operands. The result is in the left
  /// operand's units.
  Subtract,
  /// Always defined. Exponents of shared families add.
  Multiply,
  /// Always defined. Exponents of shared families subtract.
  Divide,
  /// Requires compatible operands. The result is in the left
  /// operand's units.
  Modulus,
  /// Incompatible operands are unequal.
  Equal,
  /// Incompatible operands are unequal.
  NotEqual,
  /// Requires compatible operands.
  Less,
  /// Requires compatible operands.
  LessEqual,
  /// Requires compatible operands.
  Greater,
  /// Requires compatible operands.
  GreaterEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Unary(UnaryOperator),
  Binary(BinaryOperator),
}

/// The result of evaluating an [`Operator`]. Arithmetic produces a
/// quantity, while equality and ordering produce a truth value.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluated {
  Quantity(Quantity),
  Bool(bool),
}

static UNARY_OPERATORS: phf::Map<&'static str, UnaryOperator> = phf_map! {
  "+" => UnaryOperator::Plus,
  "-" => UnaryOperator::Negate,
  "++" => UnaryOperator::Increment,
  "--" => UnaryOperator::Decrement,
};

static BINARY_OPERATORS: phf::Map<&'static str, BinaryOperator> = phf_map! {
  "+" => BinaryOperator::Add,
  "-" => BinaryOperator::Subtract,
  "*" => BinaryOperator::Multiply,
  "/" => BinaryOperator::Divide,
  "%" => BinaryOperator::Modulus,
  "==" => BinaryOperator::Equal,
  "!=" => BinaryOperator::NotEqual,
  "<" => BinaryOperator::Less,
  "<=" => BinaryOperator::LessEqual,
  ">" => BinaryOperator::Greater,
  ">=" => BinaryOperator::GreaterEqual,
};

impl UnaryOperator {
  pub const ALL: [UnaryOperator; 4] = [
    UnaryOperator::Plus,
    UnaryOperator::Negate,
    UnaryOperator::Increment,
    UnaryOperator::Decrement,
  ];

  pub fn from_symbol(symbol: &str) -> Option<UnaryOperator> {
    UNARY_OPERATORS.get(symbol).copied()
  }

  pub fn symbol(self) -> &'static str {
    match self {
      UnaryOperator::Plus => "+",
      UnaryOperator::Negate => "-",
      UnaryOperator::Increment => "++",
      UnaryOperator::Decrement => "--",
    }
  }

  pub fn apply(self, operand: &Quantity) -> Quantity {
    match self {
      UnaryOperator::Plus => operand.plus(),
      UnaryOperator::Negate => -operand,
      UnaryOperator::Increment => operand.increment(),
      UnaryOperator::Decrement => operand.decrement(),
    }
  }
}

impl BinaryOperator {
  pub const ALL: [BinaryOperator; 11] = [
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Modulus,
    BinaryOperator::Equal,
    BinaryOperator::NotEqual,
    BinaryOperator::Less,
    BinaryOperator::LessEqual,
    BinaryOperator::Greater,
    BinaryOperator::GreaterEqual,
  ];

  pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
    BINARY_OPERATORS.get(symbol).copied()
  }

  pub fn symbol(self) -> &'static str {
    match self {
      BinaryOperator::Add => "+",
      BinaryOperator::Subtract => "-",
      BinaryOperator::Multiply => "*",
      BinaryOperator::Divide => "/",
      BinaryOperator::Modulus => "%",
      BinaryOperator::Equal => "==",
      BinaryOperator::NotEqual => "!=",
      BinaryOperator::Less => "<",
      BinaryOperator::LessEqual => "<=",
      BinaryOperator::Greater => ">",
      BinaryOperator::GreaterEqual => ">=",
    }
  }

  pub fn is_comparison(self) -> bool {
    !matches!(
      self,
      BinaryOperator::Add | BinaryOperator::Subtract | BinaryOperator::Multiply |
        BinaryOperator::Divide | BinaryOperator::Modulus,
    )
  }

  pub fn apply(self, left: &Quantity, right: &Quantity) -> Result<Evaluated, QuantityError> {
    let result = match self {
      BinaryOperator::Add => Evaluated::Quantity(left.try_add(right)?),
      BinaryOperator::Subtract => Evaluated::Quantity(left.try_sub(right)?),
      BinaryOperator::Multiply => Evaluated::Quantity(left.multiply(right)),
      BinaryOperator::Divide => Evaluated::Quantity(left.divide(right)),
      BinaryOperator::Modulus => Evaluated::Quantity(left.try_rem(right)?),
      BinaryOperator::Equal => Evaluated::Bool(left == right),
      BinaryOperator::NotEqual => Evaluated::Bool(left != right),
      BinaryOperator::Less => Evaluated::Bool(ordered(left, right, Ordering::is_lt)?),
      BinaryOperator::LessEqual => Evaluated::Bool(ordered(left, right, Ordering::is_le)?),
      BinaryOperator::Greater => Evaluated::Bool(ordered(left, right, Ordering::is_gt)?),
      BinaryOperator::GreaterEqual => Evaluated::Bool(ordered(left, right, Ordering::is_ge)?),
    };
    Ok(result)
  }
}

/// NaN operands are unordered, and so satisfy no ordering predicate.
fn ordered(left: &Quantity, right: &Quantity, pred: fn(Ordering) -> bool) -> Result<bool, QuantityError> {
  Ok(left.try_partial_cmp(right)?.map_or(false, pred))
}

impl Operator {
  /// Looks up an operator by its symbol. Symbols such as `-` name
  /// both a unary and a binary operator, so the arity disambiguates.
  pub fn parse(symbol: &str, arity: usize) -> Option<Operator> {
    match arity {
      1 => UnaryOperator::from_symbol(symbol).map(Operator::Unary),
      2 => BinaryOperator::from_symbol(symbol).map(Operator::Binary),
      _ => None,
    }
  }

  pub fn arity(self) -> usize {
    match self {
      Operator::Unary(_) => 1,
      Operator::Binary(_) => 2,
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      Operator::Unary(op) => op.symbol(),
      Operator::Binary(op) => op.symbol(),
    }
  }

  /// Applies the operator to a slice of operands, which must have
  /// exactly the operator's arity.
  pub fn evaluate(self, args: &[Quantity]) -> Result<Evaluated, QuantityError> {
    QuantityError::check_arity(self.symbol(), self.arity(), args.len())?;
    match self {
      Operator::Unary(op) => Ok(Evaluated::Quantity(op.apply(&args[0]))),
      Operator::Binary(op) => op.apply(&args[0], &args[1]),
    }
  }
}

impl Evaluated {
  pub fn as_quantity(&self) -> Option<&Quantity> {
    match self {
      Evaluated::Quantity(q) => Some(q),
      Evaluated::Bool(_) => None,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Evaluated::Quantity(_) => None,
      Evaluated::Bool(b) => Some(*b),
    }
  }
}

impl From<UnaryOperator> for Operator {
  fn from(op: UnaryOperator) -> Self {
    Operator::Unary(op)
  }
}

impl From<BinaryOperator> for Operator {
  fn from(op: BinaryOperator) -> Self {
    Operator::Binary(op)
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
