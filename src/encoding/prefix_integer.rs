use crate::encoding::continuation::{continuation_len, encode_continuation};
use crate::encoding::encoding_error::EncodingError;
use crate::encoding::prefix_width::PrefixWidth;
use crate::encoding::representation::Representation;
use log::trace;

#[cfg(test)]
#[path = "prefix_integer_tests.rs"]
mod prefix_integer_tests;

/// Encodes `value` as an N-bit prefix integer (RFC 7541 §5.1).
///
/// Values below the saturated prefix `2^N - 1` take a single byte. Anything
/// else saturates the prefix and the remainder follows as continuation bytes.
pub fn encode(prefix_width: PrefixWidth, value: u128) -> Vec<u8> {
    encode_prefixed(prefix_width, 0, value)
}

/// Like [`encode`], with `pattern` OR'd into the first byte. The pattern must
/// only use the bits above the prefix.
pub fn encode_with_pattern(
    prefix_width: PrefixWidth,
    pattern: u8,
    value: u128,
) -> Result<Vec<u8>, EncodingError> {
    if pattern & prefix_width.max_prefix() != 0 {
        return Err(EncodingError::PatternOverlapsPrefix {
            pattern,
            prefix_width: prefix_width.bits(),
        });
    }
    Ok(encode_prefixed(prefix_width, pattern, value))
}

pub fn encode_representation(representation: Representation, value: u128) -> Vec<u8> {
    // representation patterns never reach into their own prefix
    encode_prefixed(
        representation.prefix_width(),
        representation.pattern(),
        value,
    )
}

/// Number of bytes [`encode`] produces, without building them.
pub fn encoded_len(prefix_width: PrefixWidth, value: u128) -> usize {
    let saturated = u128::from(prefix_width.max_prefix());
    if value < saturated {
        1
    } else {
        1 + continuation_len(value - saturated)
    }
}

fn encode_prefixed(prefix_width: PrefixWidth, pattern: u8, value: u128) -> Vec<u8> {
    let max_prefix = prefix_width.max_prefix();
    let saturated = u128::from(max_prefix);

    if value < saturated {
        trace!("{} fits in the {} prefix", value, prefix_width);
        // value < max_prefix, so the cast can't truncate
        return vec![pattern | value as u8];
    }

    let remainder = value - saturated;
    trace!(
        "{} saturates the {} prefix, continuing with {}",
        value,
        prefix_width,
        remainder
    );

    let mut bytes = Vec::with_capacity(1 + continuation_len(remainder));
    bytes.push(pattern | max_prefix);
    bytes.append(&mut encode_continuation(remainder));
    bytes
}
