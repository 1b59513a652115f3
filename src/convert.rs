//! Color space conversion between RGB and HSL.
//!
//! [`rgb_to_hsl`] and [`hsl_to_rgb`] form an approximate inverse pair: a
//! round trip through both reproduces each RGB channel to within one unit.
//! The small bias comes from [`hsl_to_rgb`] rounding channels up rather than
//! to nearest.

use crate::types::Hsl;
use palette::Srgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Float noise tolerated above an integer before rounding up past it.
const ROUNDING_EPSILON: f64 = 1e-9;

/// Converts an RGB color to HSL.
///
/// Achromatic colors (all channels equal) have hue and saturation 0.
/// Saturation and lightness are clamped to 0-100 to absorb float noise.
pub fn rgb_to_hsl(rgb: Srgb<u8>) -> Hsl {
    let r = f64::from(rgb.red) / 255.0;
    let g = f64::from(rgb.green) / 255.0;
    let b = f64::from(rgb.blue) / 255.0;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let lightness = (cmax + cmin) / 2.0;

    // Integer comparison keeps the achromatic check exact.
    if rgb.red == rgb.green && rgb.green == rgb.blue {
        return Hsl::new(0.0, 0.0, to_percent(lightness));
    }

    let saturation = delta / (1.0 - libm::fabs(2.0 * lightness - 1.0));

    let max_channel = rgb.red.max(rgb.green).max(rgb.blue);
    let hue = if max_channel == rgb.red {
        60.0 * floored_mod((g - b) / delta, 6.0)
    } else if max_channel == rgb.green {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsl::new(hue, to_percent(saturation), to_percent(lightness))
}

/// Converts an HSL color to RGB.
///
/// Channels are rounded up and clamped to 0-255. Values less than 1e-9
/// above an integer count as that integer rather than rounding past it.
/// Inputs outside the documented ranges are not validated.
pub fn hsl_to_rgb(hsl: Hsl) -> Srgb<u8> {
    let h = hsl.hue / 360.0;
    let s = hsl.saturation / 100.0;
    let l = hsl.lightness / 100.0;

    if s == 0.0 {
        let gray = round_up_channel(l * 255.0);
        return Srgb::new(gray, gray, gray);
    }

    let var1 = if l < 0.5 {
        l * (1.0 + s)
    } else {
        (l + s) - l * s
    };
    let var2 = 2.0 * l - var1;

    Srgb::new(
        round_up_channel(255.0 * hue_to_channel(var1, var2, h + ONE_THIRD)),
        round_up_channel(255.0 * hue_to_channel(var1, var2, h)),
        round_up_channel(255.0 * hue_to_channel(var1, var2, h - ONE_THIRD)),
    )
}

/// Evaluates one RGB channel from the HSL intermediates at a shifted hue.
fn hue_to_channel(v1: f64, v2: f64, mut hue: f64) -> f64 {
    if hue < 0.0 {
        hue += 1.0;
    }
    if hue > 1.0 {
        hue -= 1.0;
    }

    if 6.0 * hue < 1.0 {
        v2 + (v1 - v2) * 6.0 * hue
    } else if 2.0 * hue < 1.0 {
        v1
    } else if 3.0 * hue < 2.0 {
        v2 + (v1 - v2) * (TWO_THIRDS - hue) * 6.0
    } else {
        v2
    }
}

/// Rounds a channel value up to the next integer and clamps it to 0-255.
///
/// Not a plain ceiling: noise up to 1e-9 above an integer is dropped first.
#[inline]
fn round_up_channel(value: f64) -> u8 {
    libm::ceil(value - ROUNDING_EPSILON).clamp(0.0, 255.0) as u8
}

/// Scales a 0.0-1.0 fraction to a percentage clamped to 0-100.
#[inline]
fn to_percent(fraction: f64) -> f64 {
    (fraction * 100.0).clamp(0.0, 100.0)
}

/// Modulo with the sign of the divisor, so the result is in `[0, divisor)`.
#[inline]
fn floored_mod(value: f64, divisor: f64) -> f64 {
    let rem = libm::fmod(value, divisor);
    if rem < 0.0 { rem + divisor } else { rem }
}
