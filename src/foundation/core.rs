//! Core value types shared across the engine.
//!
//! Playback time is an integer millisecond count ([`TimeMs`]) and every timed
//! thing in the model carries a half-open [`TimeRange`]. Geometry reuses
//! [`kurbo`] so positioned output plugs straight into vector pipelines.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{MelismaError, MelismaResult};

pub use kurbo::{Point, Rect, Vec2};

/// Absolute playback position in milliseconds from the start of the track.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeMs(pub u64);

impl TimeMs {
    /// Time zero, the start of the track.
    pub const ZERO: Self = Self(0);

    /// Milliseconds elapsed since `earlier`, or zero if `earlier` is later.
    #[must_use]
    pub const fn saturating_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// This time advanced by `ms` milliseconds.
    #[must_use]
    pub const fn advanced_by(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

impl From<u64> for TimeMs {
    fn from(ms: u64) -> Self {
        Self(ms)
    }
}

/// Half-open time span `[start, end)` in milliseconds.
///
/// Zero-length spans are legal; they are "already over" at their own start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive start of the span.
    pub start: TimeMs,
    /// Exclusive end of the span.
    pub end: TimeMs,
}

impl TimeRange {
    /// Creates a validated range. `start` must not exceed `end`.
    pub fn new(start: TimeMs, end: TimeMs) -> MelismaResult<Self> {
        if start > end {
            return Err(MelismaError::validation(format!(
                "time range start {} exceeds end {}",
                start.0, end.0
            )));
        }
        Ok(Self { start, end })
    }

    /// Convenience constructor from raw millisecond values.
    pub fn from_ms(start: u64, end: u64) -> MelismaResult<Self> {
        Self::new(TimeMs(start), TimeMs(end))
    }

    /// Range starting at `start` and lasting `len_ms` milliseconds.
    #[must_use]
    pub const fn with_len(start: TimeMs, len_ms: u64) -> Self {
        Self {
            start,
            end: TimeMs(start.0.saturating_add(len_ms)),
        }
    }

    /// Length of the span in milliseconds.
    #[must_use]
    pub const fn len_ms(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// True when the span covers no time at all.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.end.0 <= self.start.0
    }

    /// True when `t` falls inside the half-open span.
    #[must_use]
    pub const fn contains(self, t: TimeMs) -> bool {
        self.start.0 <= t.0 && t.0 < self.end.0
    }

    /// Smallest range covering both spans.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            start: TimeMs(self.start.0.min(other.start.0)),
            end: TimeMs(self.end.0.max(other.end.0)),
        }
    }

    /// Linear progress of `t` through the span, clamped to `[0, 1]`.
    ///
    /// Returns `0.0` strictly before `start` and `1.0` at or after `end`.
    /// A zero-length span therefore reports `1.0` from its own start onward,
    /// which keeps reveal edges monotone across degenerate syllables.
    #[must_use]
    pub fn progress(self, t: TimeMs) -> f64 {
        if t.0 >= self.end.0 {
            return 1.0;
        }
        if t.0 <= self.start.0 {
            return 0.0;
        }
        (t.0 - self.start.0) as f64 / (self.end.0 - self.start.0) as f64
    }
}

/// Horizontal flow direction of a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextDirection {
    /// Left to right (Latin, CJK, and most scripts).
    #[default]
    Ltr,
    /// Right to left (Arabic, Hebrew).
    Rtl,
}

impl TextDirection {
    /// True for right-to-left flow.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Straight-alpha RGBA color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` fully opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with the alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
