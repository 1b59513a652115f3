//! Hexadecimal encoding of RGB colors.
//!
//! Colors are written as six hex digits, two per channel in R, G, B order,
//! with no `#` prefix. Output is always lowercase and zero-padded.

use crate::types::ColorError;
use heapless::String;
use palette::Srgb;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Parses a six-digit hex string into an RGB color.
///
/// Both lowercase and uppercase digits are accepted. Prefixes (`#`, `0x`),
/// shorthand forms and trailing characters are rejected.
///
/// # Errors
/// * `InvalidLength` - Input is not exactly 6 bytes
/// * `InvalidDigit` - Input contains a non-hex byte
pub fn hex_to_rgb(hex: &str) -> Result<Srgb<u8>, ColorError> {
    let bytes = hex.as_bytes();
    if bytes.len() != 6 {
        return Err(ColorError::InvalidLength {
            length: bytes.len(),
        });
    }

    // `from_str_radix` alone would accept a leading '+'.
    if let Some(position) = bytes.iter().position(|b| !b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit { position });
    }

    let channel = |offset: usize| (nibble(bytes[offset]) << 4) | nibble(bytes[offset + 1]);

    Ok(Srgb::new(channel(0), channel(2), channel(4)))
}

/// Encodes an RGB color as six lowercase hex digits.
pub fn rgb_to_hex(rgb: Srgb<u8>) -> String<6> {
    let mut hex = String::new();
    for channel in [rgb.red, rgb.green, rgb.blue] {
        for digit in [channel >> 4, channel & 0x0f] {
            let pushed = hex.push(char::from(HEX_DIGITS[usize::from(digit)]));
            debug_assert!(pushed.is_ok(), "3 channels x 2 digits fills String<6> exactly");
        }
    }
    hex
}

/// Returns `true` if `value` is a six-digit hex color.
///
/// Intended for callers scanning documents for color values: anything this
/// accepts can be passed to [`hex_to_rgb`] without error.
#[inline]
pub fn is_color_value(value: &str) -> bool {
    hex_to_rgb(value).is_ok()
}

/// Value of a single ASCII hex digit. Caller guarantees `byte` is one.
#[inline]
fn nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}
