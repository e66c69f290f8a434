//! The text measurement seam.
//!
//! Layout needs pixel widths but must not care where they come from, so all
//! measurement goes through the [`TextMeasurer`] trait. Production callers
//! implement it over their shaping stack; tests and headless callers use the
//! deterministic [`FixedAdvanceMeasurer`].

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::core::Rect;
use crate::measure::script::is_cjk_char;

/// Font parameters a measurer resolves text against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family name, passed through to the backend untouched.
    pub family: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Weight on the usual 100..=900 scale.
    pub weight: u16,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size_px: 32.0,
            weight: 400,
        }
    }
}

/// Measured extents of a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphMetrics {
    /// Advance width of the run in pixels.
    pub width: f64,
    /// Height of the run's bounding box in pixels.
    pub height: f64,
    /// Distance from the top of the bounding box to the baseline.
    pub baseline: f64,
}

impl GlyphMetrics {
    /// Metrics of empty text.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
        baseline: 0.0,
    };
}

/// Measures text for layout.
///
/// Implementations must be deterministic for a given `(text, style)` pair;
/// the layout cache assumes re-measuring is a pure function.
pub trait TextMeasurer {
    /// Measures the full extents of `text`.
    fn measure(&self, text: &str, style: &TextStyle) -> GlyphMetrics;

    /// Per-grapheme bounding boxes of `text`, positioned relative to the
    /// run's own origin, in logical order.
    fn char_bounds(&self, text: &str, style: &TextStyle) -> Vec<Rect>;

    /// Advance width of a single space in `style`.
    fn space_width(&self, style: &TextStyle) -> f64 {
        self.measure(" ", style).width
    }
}

/// Deterministic measurer with a fixed per-grapheme advance.
///
/// Narrow graphemes advance by `advance_em` of the font size; CJK graphemes
/// advance by a full em. Good enough to exercise every layout path without a
/// font stack behind it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedAdvanceMeasurer {
    /// Advance of a narrow grapheme as a fraction of the font size.
    pub advance_em: f64,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl FixedAdvanceMeasurer {
    fn advance_for(&self, grapheme: &str, size: f64) -> f64 {
        let wide = grapheme.chars().next().is_some_and(is_cjk_char);
        if wide { size } else { size * self.advance_em }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> GlyphMetrics {
        if text.is_empty() {
            return GlyphMetrics::ZERO;
        }
        let size = f64::from(style.size_px);
        let width = text
            .graphemes(true)
            .map(|g| self.advance_for(g, size))
            .sum();
        GlyphMetrics {
            width,
            height: size * 1.2,
            baseline: size,
        }
    }

    fn char_bounds(&self, text: &str, style: &TextStyle) -> Vec<Rect> {
        let size = f64::from(style.size_px);
        let height = size * 1.2;
        let mut x = 0.0;
        text.graphemes(true)
            .map(|g| {
                let advance = self.advance_for(g, size);
                let rect = Rect::new(x, 0.0, x + advance, height);
                x += advance;
                rect
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/measure/backend.rs"]
mod tests;
