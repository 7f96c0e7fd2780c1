//! Parsing of CSS length strings such as `16px`, `1.5rem` or `0`.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

/// A CSS length: a number with an optional unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Option<LengthUnit>,
}

/// Length units that appear in design foundations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Pt,
    Rem,
    Em,
    Percent,
    Vw,
    Vh,
    Ch,
}

impl Length {
    /// Convert to pixels, assuming a 16px root font size for `rem` and `em`.
    ///
    /// Unitless values are treated as pixels. Viewport and percentage units
    /// have no fixed pixel size.
    pub fn to_px(&self) -> Option<f64> {
        match self.unit {
            None | Some(LengthUnit::Px) => Some(self.value),
            Some(LengthUnit::Pt) => Some(self.value * 96.0 / 72.0),
            Some(LengthUnit::Rem) | Some(LengthUnit::Em) => Some(self.value * 16.0),
            Some(LengthUnit::Percent)
            | Some(LengthUnit::Vw)
            | Some(LengthUnit::Vh)
            | Some(LengthUnit::Ch) => None,
        }
    }
}

/// Parse a number (integer or float, optionally negative).
fn number(input: &str) -> IResult<&str, f64> {
    map(
        recognize(tuple((
            opt(alt((char('-'), char('+')))),
            take_while1(|c: char| c.is_ascii_digit()),
            opt(pair(char('.'), take_while1(|c: char| c.is_ascii_digit()))),
        ))),
        |s: &str| s.parse().unwrap_or(0.0),
    )(input)
}

/// Parse a unit suffix.
fn unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        map(tag("px"), |_| LengthUnit::Px),
        map(tag("pt"), |_| LengthUnit::Pt),
        map(tag("rem"), |_| LengthUnit::Rem),
        map(tag("em"), |_| LengthUnit::Em),
        map(tag("%"), |_| LengthUnit::Percent),
        map(tag("vw"), |_| LengthUnit::Vw),
        map(tag("vh"), |_| LengthUnit::Vh),
        map(tag("ch"), |_| LengthUnit::Ch),
    ))(input)
}

fn length(input: &str) -> IResult<&str, Length> {
    map(
        tuple((multispace0, number, opt(unit))),
        |(_, value, unit)| Length { value, unit },
    )(input)
}

/// Parse a complete CSS length. Trailing input other than whitespace is rejected.
pub fn parse_length(input: &str) -> Option<Length> {
    match length(input) {
        Ok((rest, len)) if rest.trim().is_empty() => Some(len),
        _ => None,
    }
}

/// The leading integer of a length string, ignoring whatever follows it.
///
/// `"16px"` gives 16, `"1.5rem"` gives 1, `"abc"` gives `None`.
pub fn leading_integer(input: &str) -> Option<i64> {
    let (_, len) = length(input).ok()?;
    Some(len.value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        let len = parse_length("16px").unwrap();
        assert_eq!(len.value, 16.0);
        assert_eq!(len.unit, Some(LengthUnit::Px));
        assert_eq!(len.to_px(), Some(16.0));
    }

    #[test]
    fn test_parse_rem_and_unitless() {
        let len = parse_length("1.5rem").unwrap();
        assert_eq!(len.unit, Some(LengthUnit::Rem));
        assert_eq!(len.to_px(), Some(24.0));

        let zero = parse_length("0").unwrap();
        assert_eq!(zero.unit, None);
        assert_eq!(zero.value, 0.0);
    }

    #[test]
    fn test_parse_negative_em() {
        let len = parse_length("-0.025em").unwrap();
        assert_eq!(len.value, -0.025);
        assert_eq!(len.unit, Some(LengthUnit::Em));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_length("px").is_none());
        assert!(parse_length("16 pixels").is_none());
        assert!(parse_length("").is_none());
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("16px"), Some(16));
        assert_eq!(leading_integer("1.5rem"), Some(1));
        assert_eq!(leading_integer("24 whatever"), Some(24));
        assert_eq!(leading_integer("large"), None);
    }
}
