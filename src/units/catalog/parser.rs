//! Parsing of unit expressions such as `kg m s^-2`.

use super::find;
use crate::units::dimension::Dimension;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnitParseError {
  #[error("Unknown unit '{0}'")]
  UnknownUnit(String),
  #[error("Invalid exponent in '{0}'")]
  InvalidExponent(String),
}

/// The largest power, in absolute value, a single term may carry.
pub const MAX_POWER: i32 = 64;

static POWER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+)\^(-?\d+)$").unwrap());

/// Parses a whitespace-separated product of unit terms. Each term is
/// either a unit abbreviation known to [`find`] or an abbreviation
/// followed by `^` and an integer power. An abbreviation which itself
/// contains `^` (such as `m^3`) is matched whole before any power is
/// split off. Powers beyond [`MAX_POWER`] in absolute value are
/// rejected.
///
/// The result is the list of terms in input order, not yet combined.
/// Pass it to [`crate::quantity::Quantity::new`] to combine repeated
/// families with the correct magnitude.
pub fn parse_units(input: &str) -> Result<Vec<Dimension>, UnitParseError> {
  input.split_whitespace().map(parse_term).collect()
}

fn parse_term(term: &str) -> Result<Dimension, UnitParseError> {
  if let Some(unit) = find(term) {
    return Ok(unit.clone());
  }
  let Some(captures) = POWER_RE.captures(term) else {
    return Err(UnitParseError::UnknownUnit(term.to_owned()));
  };
  let name = &captures[1];
  let power = captures[2].parse::<i32>()
    .ok()
    .filter(|power| power.unsigned_abs() <= MAX_POWER.unsigned_abs())
    .ok_or_else(|| UnitParseError::InvalidExponent(term.to_owned()))?;
  let unit = find(name).ok_or_else(|| UnitParseError::UnknownUnit(name.to_owned()))?;
  Ok(unit.pow(power))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::catalog::{si, us};
  use crate::units::family::Family;

  #[test]
  fn test_parse_simple() {
    assert_eq!(parse_units("m"), Ok(vec![si::METER.clone()]));
    assert_eq!(parse_units("  ft  "), Ok(vec![us::FOOT.clone()]));
    assert_eq!(parse_units(""), Ok(vec![]));
  }

  #[test]
  fn test_parse_powers() {
    let units = parse_units("kg m s^-2").unwrap();
    assert_eq!(units, vec![si::KILOGRAM.clone(), si::METER.clone(), si::SECOND.pow(-2)]);
  }

  #[test]
  fn test_parse_power_of_inverse_unit() {
    // Hz is already time^-1, so Hz^2 is time^-2.
    let units = parse_units("Hz^2").unwrap();
    assert_eq!(units[0].family_id(), Family::Time);
    assert_eq!(units[0].exponent(), -2);
    assert_eq!(units[0].to_string(), "Hz^2");
  }

  #[test]
  fn test_parse_abbreviation_containing_caret() {
    let units = parse_units("m^3").unwrap();
    assert_eq!(units, vec![si::CUBIC_METER.clone()]);
    let units = parse_units("m/s^2").unwrap();
    assert_eq!(units, vec![si::METER_PER_SECOND_SQUARED.clone()]);
  }

  #[test]
  fn test_parse_errors() {
    assert_eq!(parse_units("m furlong"), Err(UnitParseError::UnknownUnit("furlong".to_owned())));
    assert_eq!(parse_units("furlong^2"), Err(UnitParseError::UnknownUnit("furlong".to_owned())));
    assert_eq!(
      parse_units("m^99999999999"),
      Err(UnitParseError::InvalidExponent("m^99999999999".to_owned())),
    );
  }

  #[test]
  fn test_parse_power_bounds() {
    assert_eq!(parse_units("m^64").unwrap()[0].exponent(), 64);
    assert_eq!(parse_units("s^-64").unwrap()[0].exponent(), -64);
    assert_eq!(parse_units("m^65"), Err(UnitParseError::InvalidExponent("m^65".to_owned())));
    assert_eq!(
      parse_units("m^2147483647 m"),
      Err(UnitParseError::InvalidExponent("m^2147483647".to_owned())),
    );
    assert_eq!(
      parse_units("m^-2147483648"),
      Err(UnitParseError::InvalidExponent("m^-2147483648".to_owned())),
    );
  }
}
