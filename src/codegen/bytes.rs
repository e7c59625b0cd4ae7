//! Byte array initializer encoding.

use std::fmt::Write;

/// Byte literals per output line.
pub const BYTES_PER_LINE: usize = 12;

/// Encode bytes as the body of a C array initializer.
///
/// Each byte is `0x%02x`; lines hold [`BYTES_PER_LINE`] literals, are indented
/// four spaces and end with a trailing comma. Lines are joined by `\n`
/// without a final newline. Empty input yields an empty string, so the
/// declaration gets an empty initializer.
///
/// ```text
///     0x3c, 0x68, 0x31, 0x3e, 0x68, 0x69, 0x3c, 0x2f, 0x68, 0x31, 0x3e, 0x0a,
///     0x00,
/// ```
pub fn encode_bytes(data: &[u8]) -> String {
    // "0xNN, " per byte plus indentation and newline per line
    let lines = data.len().div_ceil(BYTES_PER_LINE);
    let mut out = String::with_capacity(data.len() * 6 + lines * 5);

    for (i, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("    ");
        for (j, byte) in chunk.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            // Writing to a String cannot fail
            let _ = write!(out, "0x{byte:02x}");
        }
        out.push(',');
    }

    out
}
