//! Row paint assembly.
//!
//! [`paint_row`] is the per-frame entry point renderers call: it folds the
//! reveal state and all animation sampling for one row at one instant into a
//! flat [`RowPaint`] instruction that any backend can draw without knowing
//! syllable timing exists.

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, Rgba8, TimeMs, Vec2};
use crate::layout::positioner::PositionedRow;
use crate::paint::emphasis::{CharTransform, char_transforms, drive_timing, float_in_offset};
use crate::paint::reveal::{RowReveal, reveal_row};

/// Color pair a row renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowColors {
    /// Color of sung text.
    pub active: Rgba8,
    /// Color of not-yet-sung text.
    pub inactive: Rgba8,
}

impl Default for RowColors {
    fn default() -> Self {
        Self {
            active: Rgba8::WHITE,
            inactive: Rgba8::WHITE.with_alpha(96),
        }
    }
}

/// Horizontal gradient mask over a row, in row-fraction coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientMask {
    /// Color on the sung side of the band.
    pub active: Rgba8,
    /// Color on the unsung side of the band.
    pub inactive: Rgba8,
    /// Fraction where the soft band begins.
    pub start: f64,
    /// Fraction where the soft band ends.
    pub end: f64,
    /// True when fractions run right-to-left across the row.
    pub reversed: bool,
}

/// One drawable run of text with its sampled animation state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GlyphRun {
    /// Text to draw.
    pub text: String,
    /// Top-left origin in viewport space, before `offset`.
    pub origin: Point,
    /// Whole-run translation from the float-in, zero once settled.
    pub offset: Vec2,
    /// Per-character transforms for emphasized runs; `None` draws the run
    /// as-is.
    pub char_transforms: Option<Vec<CharTransform>>,
}

/// Everything a renderer needs to draw one row at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowPaint {
    /// Runs in logical order.
    pub glyphs: Vec<GlyphRun>,
    /// Flat color to draw runs with when no mask applies, or beneath it.
    pub base_color: Rgba8,
    /// Reveal mask, absent once the row is fully sung.
    pub mask: Option<GradientMask>,
}

/// Assembles the paint instruction for `row` at time `t`.
///
/// Emphasized fragments carry per-character transforms and no float offset;
/// their entrance is the first pulse. Everything else gets the shared
/// float-in, with punctuation borrowing its neighbor's timing so it moves
/// with the word it trails.
pub fn paint_row(row: &PositionedRow, t: TimeMs, colors: &RowColors) -> RowPaint {
    let (base_color, mask) = match reveal_row(row, t) {
        RowReveal::Complete => (colors.active, None),
        RowReveal::Gradient {
            band_start,
            band_end,
            ..
        } => (
            colors.inactive,
            Some(GradientMask {
                active: colors.active,
                inactive: colors.inactive,
                start: band_start,
                end: band_end,
                reversed: row.direction.is_rtl(),
            }),
        ),
    };

    let glyphs = row
        .syllables
        .iter()
        .enumerate()
        .map(|(index, syl)| {
            if syl.emphasis && syl.word_anim.is_some() {
                GlyphRun {
                    text: syl.text.clone(),
                    origin: syl.position,
                    offset: Vec2::ZERO,
                    char_transforms: Some(char_transforms(syl, t)),
                }
            } else {
                let drive = drive_timing(row, index);
                GlyphRun {
                    text: syl.text.clone(),
                    origin: syl.position,
                    offset: Vec2::new(0.0, float_in_offset(drive, t)),
                    char_transforms: None,
                }
            }
        })
        .collect();

    RowPaint {
        glyphs,
        base_color,
        mask,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/plan.rs"]
mod tests;
