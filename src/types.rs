//! Core color types.

/// A color in the HSL (Hue, Saturation, Lightness) model.
///
/// Hue is in degrees, saturation and lightness are percentages. Values
/// produced by [`rgb_to_hsl`](crate::convert::rgb_to_hsl) always have hue in
/// 0.0-360.0 and saturation/lightness in 0.0-100.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    /// Hue in degrees.
    pub hue: f64,

    /// Saturation in percent.
    pub saturation: f64,

    /// Lightness in percent.
    pub lightness: f64,
}

impl Hsl {
    /// Creates a new HSL color.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Hex color parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Input is not exactly six bytes long.
    InvalidLength {
        /// Length of the rejected input in bytes.
        length: usize,
    },

    /// Input contains a byte that is not a hex digit.
    InvalidDigit {
        /// Zero-based byte offset of the first offending byte.
        position: usize,
    },
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::InvalidLength { length } => {
                write!(
                    f,
                    "hex color must be exactly 6 digits, got {} bytes",
                    length
                )
            }
            ColorError::InvalidDigit { position } => {
                write!(f, "invalid hex digit at position {}", position)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
