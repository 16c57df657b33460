use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, PartialEq, Eq)]
pub enum EncodingError {
    /// Prefix widths must be between 1 and 8 bits
    InvalidPrefixWidth(i64),
    PatternOverlapsPrefix { pattern: u8, prefix_width: u8 },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::InvalidPrefixWidth(bits) => {
                write!(
                    f,
                    "Invalid prefix width: {} (must be between 1 and 8 bits)",
                    bits
                )
            }
            EncodingError::PatternOverlapsPrefix {
                pattern,
                prefix_width,
            } => {
                write!(
                    f,
                    "Pattern {:#010b} overlaps the {}-bit prefix",
                    pattern, prefix_width
                )
            }
        }
    }
}

impl Error for EncodingError {}
