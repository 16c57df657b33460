use crate::program_config::program_constants::HEX_MARKER;
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

#[cfg(test)]
#[path = "integer_literal_tests.rs"]
mod integer_literal_tests;

/// Parses the value to encode. Literals containing `0x` are hexadecimal,
/// everything else is decimal.
pub fn parse_value(literal: &str) -> Result<u128, LiteralError> {
    let (negative, magnitude) = if literal.contains(HEX_MARKER) {
        let (negative, magnitude) = parse_hex(literal)?;
        info!("{} = {}", literal.trim(), magnitude);
        (negative, magnitude)
    } else {
        parse_decimal(literal)?
    };

    if negative && magnitude != 0 {
        return Err(LiteralError::Negative(literal.to_owned()));
    }
    Ok(magnitude)
}

/// Parses the prefix width. Range checking is left to `PrefixWidth`, so
/// negative widths come back as negative numbers.
pub fn parse_prefix_bits(literal: &str) -> Result<i64, LiteralError> {
    let (negative, magnitude) = parse_decimal(literal)?;
    let bits = i64::try_from(magnitude).map_err(|_| LiteralError::TooLarge(literal.to_owned()))?;
    Ok(if negative { -bits } else { bits })
}

fn parse_decimal(literal: &str) -> Result<(bool, u128), LiteralError> {
    lazy_static! {
        static ref DECIMAL_RE: Regex = Regex::new(r"^\s*([+-]?)([0-9](?:_?[0-9])*)\s*$").unwrap();
    }

    parse_with(&DECIMAL_RE, literal, 10)
}

fn parse_hex(literal: &str) -> Result<(bool, u128), LiteralError> {
    lazy_static! {
        static ref HEX_RE: Regex =
            Regex::new(r"^\s*([+-]?)0x_?([0-9a-fA-F](?:_?[0-9a-fA-F])*)\s*$").unwrap();
    }

    parse_with(&HEX_RE, literal, 16)
}

/// Matches `literal` against a pattern capturing the sign and the digits,
/// then converts the digits in the given radix.
fn parse_with(re: &Regex, literal: &str, radix: u32) -> Result<(bool, u128), LiteralError> {
    if literal.trim().is_empty() {
        return Err(LiteralError::Empty);
    }

    let captures = re
        .captures(literal)
        .ok_or_else(|| LiteralError::Malformed(literal.to_owned()))?;
    let negative = &captures[1] == "-";
    // digit group separators are allowed, as in Rust literals
    let digits = captures[2].replace('_', "");

    let magnitude = u128::from_str_radix(&digits, radix)
        .map_err(|_| LiteralError::TooLarge(literal.to_owned()))?;
    Ok((negative, magnitude))
}

#[derive(Debug, PartialEq, Eq)]
pub enum LiteralError {
    Empty,
    Negative(String),
    Malformed(String),
    /// The literal doesn't fit in 128 bits
    TooLarge(String),
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::Empty => write!(f, "Empty integer literal"),
            LiteralError::Negative(literal) => {
                write!(f, "Value must not be negative: \"{}\"", literal)
            }
            LiteralError::Malformed(literal) => {
                write!(f, "Invalid integer literal: \"{}\"", literal)
            }
            LiteralError::TooLarge(literal) => {
                write!(f, "Integer literal out of range: \"{}\"", literal)
            }
        }
    }
}

impl Error for LiteralError {}
