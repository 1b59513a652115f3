//! Hex-to-hex color shifting.
//!
//! Provides [`ColorShifter`], which runs the full pipeline for one color:
//! hex to RGB to HSL, adjustment, then back to RGB and hex. A shifter is a
//! plain value holding its [`Adjustment`]; colors are shifted independently
//! and the shifter can be shared freely.

use crate::adjust::{Adjustment, adjust};
use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::hex::{hex_to_rgb, rgb_to_hex};
use crate::types::{ColorError, Hsl};
use heapless::String;
use palette::Srgb;

/// Applies a fixed [`Adjustment`] to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorShifter {
    adjustment: Adjustment,
}

impl ColorShifter {
    /// Creates a shifter for the given adjustment.
    #[inline]
    pub const fn new(adjustment: Adjustment) -> Self {
        Self { adjustment }
    }

    /// Returns the adjustment this shifter applies.
    #[inline]
    pub const fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// Shifts an HSL color.
    #[inline]
    pub fn shift_hsl(&self, hsl: Hsl) -> Hsl {
        adjust(hsl, self.adjustment)
    }

    /// Shifts an RGB color.
    pub fn shift_rgb(&self, rgb: Srgb<u8>) -> Srgb<u8> {
        hsl_to_rgb(self.shift_hsl(rgb_to_hsl(rgb)))
    }

    /// Shifts a six-digit hex color, returning the new color as lowercase hex.
    ///
    /// # Errors
    /// Returns a [`ColorError`] if `hex` is not exactly six hex digits.
    pub fn shift_hex(&self, hex: &str) -> Result<String<6>, ColorError> {
        let rgb = hex_to_rgb(hex)?;
        let shifted = rgb_to_hex(self.shift_rgb(rgb));

        #[cfg(feature = "defmt")]
        defmt::debug!("shifted {=str} -> {=str}", hex, shifted.as_str());

        Ok(shifted)
    }
}

/// Shifts a single hex color by `adjustment`.
///
/// Shorthand for `ColorShifter::new(adjustment).shift_hex(hex)`.
///
/// # Errors
/// Returns a [`ColorError`] if `hex` is not exactly six hex digits.
#[inline]
pub fn shift_hex(hex: &str, adjustment: Adjustment) -> Result<String<6>, ColorError> {
    ColorShifter::new(adjustment).shift_hex(hex)
}
