//! Human-readable renderings of an encoded integer, kept apart from the
//! encoder itself.

#[cfg(test)]
#[path = "display_tests.rs"]
mod display_tests;

const BINARY_FIELD_WIDTH: usize = 10;

/// Each byte as a two-digit hex literal, comma separated: `0x1f, 0x9a, 0x0a`.
pub fn hex_line(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:#04x}", byte))
        .collect::<Vec<String>>()
        .join(", ")
}

/// One line per byte, binary digits right-justified in a 10 character field.
pub fn binary_lines(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:>width$b}", byte, width = BINARY_FIELD_WIDTH))
        .collect::<Vec<String>>()
        .join("\n")
}
