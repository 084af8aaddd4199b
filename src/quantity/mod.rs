//! Magnitudes tagged with dimensions, and the arithmetic over them.

pub mod base;
pub mod comparer;
pub mod error;
pub mod operator;
pub mod transcendental;

mod ops;

pub use base::Quantity;
pub use comparer::{ComparerConfig, QuantityComparer};
pub use error::{ExpectedDimension, QuantityError};
pub use operator::{BinaryOperator, Evaluated, Operator, UnaryOperator};
pub use transcendental::Transcendental;
