use crate::encoding::encoding_error::EncodingError;
use std::fmt;
use std::fmt::Formatter;

#[cfg(test)]
#[path = "prefix_width_tests.rs"]
mod prefix_width_tests;

pub const MIN_PREFIX_BITS: u8 = 1;
pub const MAX_PREFIX_BITS: u8 = 8;

/// The number of low bits of the first encoded byte that carry the value
/// directly. The bits above the prefix are free for a representation pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PrefixWidth(u8);

impl PrefixWidth {
    pub fn new(bits: i64) -> Result<Self, EncodingError> {
        match u8::try_from(bits) {
            Ok(b) if (MIN_PREFIX_BITS..=MAX_PREFIX_BITS).contains(&b) => Ok(PrefixWidth(b)),
            _ => Err(EncodingError::InvalidPrefixWidth(bits)),
        }
    }

    /// For widths fixed at compile time, e.g. the HPACK representations.
    pub(crate) const fn fixed(bits: u8) -> Self {
        assert!(bits >= MIN_PREFIX_BITS && bits <= MAX_PREFIX_BITS);
        PrefixWidth(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// The saturated prefix, `2^N - 1`. A first byte holding this value
    /// means continuation bytes follow.
    pub fn max_prefix(&self) -> u8 {
        ((1u16 << self.0) - 1) as u8
    }
}

impl fmt::Display for PrefixWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}
