//! Subsystem for describing units of measure and the algebra over
//! sets of them.
//!
//! A [`Dimension`] is one concrete unit of one [`Family`], raised to
//! an integer power. A [`Dimensions`] value is a set of those, at
//! most one per family, and is the unit of a
//! [`Quantity`](crate::quantity::Quantity). Conversions between
//! concrete units of a family always pivot through the family's base
//! unit, using the strategies in [`conversion`].

pub mod catalog;
pub mod conversion;
pub mod dimension;
pub mod dimensions;
pub mod family;

#[cfg(test)]
pub(crate) mod test_utils;

pub use conversion::{AffineConversion, Conversion, DerivedConversion, Direction, UnitConversion};
pub use dimension::Dimension;
pub use dimensions::Dimensions;
pub use family::{Family, FamilyKind, UnitSystem};
