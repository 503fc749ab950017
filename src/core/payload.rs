/// Payload primitives for hex captures
///
/// This module contains the building blocks shared by the analyzer and the
/// converter: locating the frame markers the capture firmware prints around
/// the pixel data, stripping a capture down to its hex digits, and decoding
/// digit pairs into bytes.

use crate::utils::error::Result;

/// Literal marker printed immediately before the hex payload
pub const START_MARKER: &str = "DATA_START";

/// Literal marker printed immediately after the hex payload
pub const END_MARKER: &str = "DATA_END";

/// Extract the payload region from a capture.
///
/// Searches for the first occurrence of each marker. When both are present
/// the payload is the text strictly between the end of the start marker and
/// the beginning of the end marker; otherwise the whole capture is treated
/// as payload so that marker-less dumps still convert.
///
/// # Arguments
///
/// * `content` - Full text of the capture file
///
/// # Returns
///
/// The payload slice and whether marker mode was used
pub fn extract_payload(content: &str) -> (&str, bool) {
    match (content.find(START_MARKER), content.find(END_MARKER)) {
        (Some(start), Some(end)) => {
            let payload_start = start + START_MARKER.len();
            // A garbled capture can have the first end marker ahead of the
            // first start marker; the region between them is then empty.
            if payload_start <= end {
                (&content[payload_start..end], true)
            } else {
                ("", true)
            }
        }
        _ => (content, false),
    }
}

/// Keep only hexadecimal digit characters, preserving their order.
///
/// Whitespace, commas, log prefixes and every other non-hex character are
/// discarded silently.
pub fn filter_hex_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_hexdigit).collect()
}

/// Count the hexadecimal digit characters in a capture.
pub fn count_hex_digits(text: &str) -> usize {
    text.chars().filter(char::is_ascii_hexdigit).count()
}

/// Decode a sequence of hex digits into bytes.
///
/// Digits are consumed in pairs, first digit as the high nibble, second as
/// the low nibble, case-insensitively. The input must already be filtered
/// down to an even number of hex digits; anything else is reported as a
/// decode error rather than a panic.
///
/// # Arguments
///
/// * `digits` - Even-length sequence of hex digit characters
///
/// # Returns
///
/// The decoded bytes
pub fn decode_hex_pairs(digits: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(digits)?)
}
