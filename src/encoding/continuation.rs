use log::trace;

#[cfg(test)]
#[path = "continuation_tests.rs"]
mod continuation_tests;

const PAYLOAD_MASK: u128 = 0b0111_1111;
const PAYLOAD_BITS: u32 = 7;
const CONTINUATION_FLAG: u8 = 0b1000_0000;

/// Encodes what is left of a value once the prefix is saturated, as a
/// little-endian base-128 sequence (unsigned LEB128).
pub fn encode_continuation(mut remainder: u128) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(continuation_len(remainder));

    loop {
        // take lowest 7 bits
        let mut byte = (remainder & PAYLOAD_MASK) as u8;
        remainder >>= PAYLOAD_BITS;
        if remainder != 0 {
            // flag every byte except the last one
            byte |= CONTINUATION_FLAG;
        }
        trace!("continuation byte: {:#010b}", byte);
        bytes.push(byte);
        if remainder == 0 {
            break;
        }
    }

    bytes
}

/// Number of bytes `encode_continuation` produces for `remainder`.
pub fn continuation_len(remainder: u128) -> usize {
    let significant_bits = u128::BITS - remainder.leading_zeros();
    // zero still needs a terminating byte
    let len = (significant_bits + PAYLOAD_BITS - 1) / PAYLOAD_BITS;
    len.max(1) as usize
}
