/// Used in the usage message when the OS doesn't report how we were invoked.
pub const DEFAULT_PROGRAM_NAME: &str = "encode";

/// The positional arguments, as listed in the usage message.
pub const USAGE_ARGUMENTS: &str = "prefix_bits number";

/// A literal containing this is read as hexadecimal.
pub const HEX_MARKER: &str = "0x";

pub fn usage_message(program_name: &str) -> String {
    format!("usage: {} {}", program_name, USAGE_ARGUMENTS)
}
