//! Shared test infrastructure for hsl-shift integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hsl_shift::{Hsl, Srgb};

// ============================================================================
// Reference Colors
// ============================================================================

pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const YELLOW: Srgb<u8> = Srgb::new(255, 255, 0);
pub const CYAN: Srgb<u8> = Srgb::new(0, 255, 255);
pub const MAGENTA: Srgb<u8> = Srgb::new(255, 0, 255);

/// A handful of Solarized palette entries, a typical theme input.
pub const SOLARIZED: [&str; 8] = [
    "002b36", "073642", "586e75", "839496", "fdf6e3", "b58900", "dc322f", "2aa198",
];

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    const EPSILON: f64 = 1e-6;
    (a - b).abs() < EPSILON
}

/// Compare two HSL colors with floating-point tolerance
pub fn hsl_equal(a: Hsl, b: Hsl) -> bool {
    approx_eq(a.hue, b.hue)
        && approx_eq(a.saturation, b.saturation)
        && approx_eq(a.lightness, b.lightness)
}

/// Compare two RGB colors allowing each channel to differ by `tolerance`
pub fn channels_within(a: Srgb<u8>, b: Srgb<u8>, tolerance: u8) -> bool {
    a.red.abs_diff(b.red) <= tolerance
        && a.green.abs_diff(b.green) <= tolerance
        && a.blue.abs_diff(b.blue) <= tolerance
}
