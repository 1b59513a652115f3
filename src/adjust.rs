//! Bounded saturation and lightness adjustment.
//!
//! A delta is applied additively to its channel. If the result would fall
//! outside 0-100 the delta is rejected and the channel keeps its original
//! value; it is never clamped to the boundary. Hue is never touched.

use crate::types::Hsl;

const CHANNEL_MIN: f64 = 0.0;
const CHANNEL_MAX: f64 = 100.0;

/// Saturation and lightness deltas to apply to a color.
///
/// A `None` delta leaves its channel unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Adjustment {
    saturation: Option<i32>,
    lightness: Option<i32>,
}

impl Adjustment {
    /// Creates an adjustment that changes nothing.
    #[inline]
    pub const fn new() -> Self {
        Self {
            saturation: None,
            lightness: None,
        }
    }

    /// Sets the saturation delta in percentage points.
    #[inline]
    pub const fn saturation(mut self, delta: i32) -> Self {
        self.saturation = Some(delta);
        self
    }

    /// Sets the lightness delta in percentage points.
    #[inline]
    pub const fn lightness(mut self, delta: i32) -> Self {
        self.lightness = Some(delta);
        self
    }

    /// Returns the saturation delta, if any.
    #[inline]
    pub const fn saturation_delta(&self) -> Option<i32> {
        self.saturation
    }

    /// Returns the lightness delta, if any.
    #[inline]
    pub const fn lightness_delta(&self) -> Option<i32> {
        self.lightness
    }

    /// Returns `true` if neither delta is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.saturation.is_none() && self.lightness.is_none()
    }
}

/// Applies an adjustment to an HSL color.
pub fn adjust(hsl: Hsl, adjustment: Adjustment) -> Hsl {
    Hsl {
        hue: hsl.hue,
        saturation: apply_delta(hsl.saturation, adjustment.saturation),
        lightness: apply_delta(hsl.lightness, adjustment.lightness),
    }
}

fn apply_delta(value: f64, delta: Option<i32>) -> f64 {
    let Some(delta) = delta else {
        return value;
    };

    let candidate = value + f64::from(delta);
    if (CHANNEL_MIN..=CHANNEL_MAX).contains(&candidate) {
        candidate
    } else {
        value
    }
}
