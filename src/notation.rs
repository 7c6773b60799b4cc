//! Engineering notation for resistor values.
//!
//! Formatting uses the schematic-label convention: `R` for plain ohms,
//! `K` for kilohms, `M` for megohms, one decimal place with trailing
//! zero/point trimmed (`4.7K`, `470R`, `1M`). Parsing accepts the same
//! suffixes (case-insensitive for `R`/`K`) plus bare numbers.

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{opt, value},
    number::complete::double,
    IResult,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotationError {
    #[error("not a resistor value: {0:?}")]
    Invalid(String),
    #[error("resistor value must be positive and finite, got {0}")]
    OutOfRange(f64),
}

/// Format a resistance in unit-suffix notation.
///
/// `1000 → "1K"`, `1e6 → "1M"`, `470 → "470R"`, `4700 → "4.7K"`.
pub fn format_resistor(ohms: f64) -> String {
    let (scaled, suffix) = if ohms >= 1e6 {
        (ohms / 1e6, "M")
    } else if ohms >= 1e3 {
        (ohms / 1e3, "K")
    } else {
        (ohms, "R")
    };
    let digits = format!("{scaled:.1}");
    let digits = digits.trim_end_matches('0').trim_end_matches('.');
    format!("{digits}{suffix}")
}

/// Multiplier suffix. `M` before `m` would matter if milliohms were a thing
/// here; they are not, so only `R`/`K`/`M` are recognized.
fn suffix(input: &str) -> IResult<&str, f64> {
    alt((
        value(1e6, tag("M")),
        value(1e3, tag("K")),
        value(1e3, tag("k")),
        value(1.0, tag("R")),
        value(1.0, tag("r")),
    ))(input)
}

fn resistor_value(input: &str) -> IResult<&str, f64> {
    let (input, num) = double(input)?;
    let (input, mult) = opt(suffix)(input)?;
    Ok((input, num * mult.unwrap_or(1.0)))
}

/// Parse a resistance from notation, e.g. `"4.7k"`, `"470R"`, `"1M"`, `"220"`.
pub fn parse_resistor(input: &str) -> Result<f64, NotationError> {
    let trimmed = input.trim();
    let (rest, ohms) =
        resistor_value(trimmed).map_err(|_| NotationError::Invalid(input.to_string()))?;
    if !rest.is_empty() {
        return Err(NotationError::Invalid(input.to_string()));
    }
    if !ohms.is_finite() || ohms <= 0.0 {
        return Err(NotationError::OutOfRange(ohms));
    }
    Ok(ohms)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
