//! Hex rendering for printed random values.

use alloc::string::String;

/// Uppercase hex, two digits per byte, no separators, newline-terminated.
pub fn to_hex_line(bytes: &[u8]) -> String {
    let mut line = hex::encode_upper(bytes);
    line.push('\n');
    line
}
