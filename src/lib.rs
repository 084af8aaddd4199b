//! Runtime dimensional analysis: magnitudes tagged with units, and
//! arithmetic which keeps those units consistent.

pub mod quantity;
pub mod units;
pub mod util;

pub use quantity::{Quantity, QuantityComparer, QuantityError};
pub use units::{Dimension, Dimensions, Family, UnitSystem};
