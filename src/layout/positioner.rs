//! Absolute positioning of wrapped rows.
//!
//! Rows are stacked top to bottom on a fixed row pitch and every syllable
//! gets a viewport-space position. Mixed-size runs share a common baseline
//! per row. After placement, syllables are regrouped by word across rows so
//! emphasis animation can scale a whole word around one pivot even when a
//! hard split pushed part of it onto the next row.

use std::collections::HashMap;

use serde::Serialize;

use crate::foundation::core::{Point, Rect, TextDirection, TimeRange};
use crate::layout::breaker::WrappedLine;
use crate::measure::backend::GlyphMetrics;
use crate::measure::syllable::grapheme_count;
use crate::model::line::LineAlignment;

/// Timing and content of a whole word, shared by all its fragments.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WordAnimationInfo {
    /// Span from the word's first fragment start to its last fragment end.
    pub timing: TimeRange,
    /// Concatenated text of the word's fragments.
    pub text: String,
}

/// A syllable with its final viewport-space placement.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionedSyllable {
    /// Text of the fragment.
    pub text: String,
    /// Singing span of the fragment.
    pub timing: TimeRange,
    /// Measured extents.
    pub metrics: GlyphMetrics,
    /// Word id within the source line.
    pub word_id: usize,
    /// True when the enclosing word animates per character.
    pub emphasis: bool,
    /// Per-grapheme boxes relative to `position`, for emphasized fragments.
    pub char_boxes: Option<Vec<Rect>>,
    /// Top-left corner of the fragment in viewport space.
    pub position: Point,
    /// Scale pivot of the enclosing word: horizontal center of the word's
    /// extent, vertical bottom. Present only on emphasized fragments.
    pub word_pivot: Option<Point>,
    /// Whole-word timing and text. Present only on emphasized fragments.
    pub word_anim: Option<WordAnimationInfo>,
    /// Grapheme offset of this fragment within its word, for mapping
    /// fragment-local character boxes onto word-global pulse timing.
    pub char_offset_in_word: usize,
}

/// A fully positioned display row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionedRow {
    /// Positioned syllables in logical order.
    pub syllables: Vec<PositionedSyllable>,
    /// Top-left corner of the row box.
    pub origin: Point,
    /// Advance width of the row.
    pub width: f64,
    /// Union of the row's syllable spans.
    pub timing: TimeRange,
    /// Flow direction the row was laid out in.
    pub direction: TextDirection,
}

/// Positions wrapped rows inside a viewport.
///
/// A row is right-aligned when the source asks for its end edge, or asks for
/// nothing and the script is right-to-left; `Start` on a right-to-left line
/// also means the right edge, since start follows the writing direction.
/// Within a right-to-left row the logically first syllable sits rightmost.
///
/// Vertically, each syllable sits at `row_index * row_height` pushed down by
/// the difference between the row's tallest baseline and its own, so mixed
/// sizes share a baseline instead of a top edge.
pub fn position_lines(
    wrapped: &[WrappedLine],
    alignment: LineAlignment,
    direction: TextDirection,
    viewport_width: f64,
    row_height: f64,
) -> Vec<PositionedRow> {
    let right_aligned = match alignment {
        LineAlignment::Start | LineAlignment::Unspecified => direction.is_rtl(),
        LineAlignment::End => !direction.is_rtl(),
    };

    let mut rows = Vec::with_capacity(wrapped.len());
    for (row_index, line) in wrapped.iter().enumerate() {
        let start_x = if right_aligned {
            viewport_width - line.width
        } else {
            0.0
        };
        let top = row_index as f64 * row_height;
        let max_baseline = line
            .syllables
            .iter()
            .map(|s| s.metrics.baseline)
            .fold(0.0, f64::max);

        let mut syllables = Vec::with_capacity(line.syllables.len());
        let mut cursor = if direction.is_rtl() {
            start_x + line.width
        } else {
            start_x
        };
        let mut timing: Option<TimeRange> = None;
        for syl in &line.syllables {
            let x = if direction.is_rtl() {
                cursor -= syl.metrics.width;
                cursor
            } else {
                let x = cursor;
                cursor += syl.metrics.width;
                x
            };
            let y = top + (max_baseline - syl.metrics.baseline);
            timing = Some(timing.map_or(syl.timing, |t| t.union(syl.timing)));
            syllables.push(PositionedSyllable {
                text: syl.text.clone(),
                timing: syl.timing,
                metrics: syl.metrics,
                word_id: syl.word_id,
                emphasis: syl.emphasis,
                char_boxes: syl.char_boxes.clone(),
                position: Point::new(x, y),
                word_pivot: None,
                word_anim: None,
                char_offset_in_word: 0,
            });
        }
        rows.push(PositionedRow {
            syllables,
            origin: Point::new(start_x, top),
            width: line.width,
            timing: timing.unwrap_or_default(),
            direction,
        });
    }

    annotate_words(&mut rows);
    rows
}

/// Regroups syllables by word across rows and attaches word-level animation
/// data: running grapheme offsets for every word, plus pivot and whole-word
/// timing for emphasized ones.
fn annotate_words(rows: &mut [PositionedRow]) {
    let mut words: HashMap<usize, Vec<(usize, usize)>> = HashMap::new();
    for (r, row) in rows.iter().enumerate() {
        for (s, syl) in row.syllables.iter().enumerate() {
            words.entry(syl.word_id).or_default().push((r, s));
        }
    }

    for members in words.values() {
        let mut running = 0usize;
        for &(r, s) in members {
            rows[r].syllables[s].char_offset_in_word = running;
            running += grapheme_count(&rows[r].syllables[s].text);
        }

        let emphasized = members.iter().any(|&(r, s)| rows[r].syllables[s].emphasis);
        if !emphasized {
            continue;
        }

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut bottom = f64::NEG_INFINITY;
        let mut timing: Option<TimeRange> = None;
        let mut text = String::new();
        for &(r, s) in members {
            let syl = &rows[r].syllables[s];
            min_x = min_x.min(syl.position.x);
            max_x = max_x.max(syl.position.x + syl.metrics.width);
            bottom = bottom.max(syl.position.y + syl.metrics.height);
            timing = Some(timing.map_or(syl.timing, |t| t.union(syl.timing)));
            text.push_str(&syl.text);
        }
        let pivot = Point::new((min_x + max_x) / 2.0, bottom);
        let info = WordAnimationInfo {
            timing: timing.unwrap_or_default(),
            text,
        };
        for &(r, s) in members {
            let syl = &mut rows[r].syllables[s];
            syl.word_pivot = Some(pivot);
            syl.word_anim = Some(info.clone());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/positioner.rs"]
mod tests;
