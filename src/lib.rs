#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Hsl`**: A color as hue (degrees), saturation and lightness (percent)
//! - **`Adjustment`**: Optional saturation and lightness deltas, built with chained calls
//! - **`ColorShifter`**: Applies one `Adjustment` to hex, RGB or HSL colors
//! - **`ColorError`**: Why a string was not accepted as a six-digit hex color
//!
//! RGB colors are `Srgb<u8>` (0-255 per channel). Hex colors are six
//! lowercase digits with no prefix, returned as `heapless::String<6>` so the
//! crate works without an allocator.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod adjust;
pub mod convert;
pub mod hex;
pub mod shifter;
pub mod types;

pub use adjust::{Adjustment, adjust};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use hex::{hex_to_rgb, is_color_value, rgb_to_hex};
pub use shifter::{ColorShifter, shift_hex};
pub use types::{ColorError, Hsl};
