//! Progressive reveal state of a row.
//!
//! The reveal is the karaoke wipe: sung text renders in the active color,
//! unsung text in the inactive color, with a soft gradient band at the
//! moving boundary. The boundary's position is a pure function of time
//! derived from syllable timing, no accumulated per-frame state.

use serde::Serialize;

use crate::foundation::core::TimeMs;
use crate::layout::positioner::PositionedRow;

/// Width of the soft edge between sung and unsung text, in pixels. Rows
/// narrower than this get a band capped at the full row.
pub const REVEAL_FADE_PX: f64 = 100.0;

/// Reveal state of one row at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum RowReveal {
    /// Row is fully sung; paint it flat in the active color with no mask.
    /// Reported only once the row's span has actually ended, so the final
    /// frames of the gradient are never short-circuited.
    Complete,
    /// Row is mid-reveal.
    Gradient {
        /// Fraction of the row width already sung, in `[0, 1]`, measured
        /// from the writing-direction start edge.
        progress: f64,
        /// Start of the soft band, in row fractions.
        band_start: f64,
        /// End of the soft band, in row fractions.
        band_end: f64,
    },
}

/// Computes the reveal state of `row` at time `t`.
///
/// While some syllable is active, the boundary sits inside it at its linear
/// progress. Between syllables (an intra-row gap) the boundary holds at the
/// trailing edge of the last completed syllable, and reported progress is
/// floored at that edge. For rows whose syllables sit in start-time order
/// (the only kind the layout pipeline produces) progress never moves
/// backward, even when neighboring windows overlap.
///
/// On right-to-left rows progress is measured from the right edge and the
/// consumer draws the gradient mirrored.
pub fn reveal_row(row: &PositionedRow, t: TimeMs) -> RowReveal {
    if row.syllables.is_empty() || t.0 >= row.timing.end.0 {
        return RowReveal::Complete;
    }
    let width = row.width;
    if width <= 0.0 {
        return RowReveal::Complete;
    }
    let rtl = row.direction.is_rtl();
    let start_px = if rtl { row.origin.x + width } else { row.origin.x };

    let completed_edge = row
        .syllables
        .iter()
        .filter(|s| s.timing.end.0 <= t.0)
        .last()
        .map(|s| {
            if rtl {
                s.position.x
            } else {
                s.position.x + s.metrics.width
            }
        });
    let active_edge = row
        .syllables
        .iter()
        .find(|s| s.timing.contains(t))
        .map(|s| {
            let p = s.timing.progress(t);
            if rtl {
                s.position.x + s.metrics.width * (1.0 - p)
            } else {
                s.position.x + s.metrics.width * p
            }
        });

    let to_fraction = |edge: f64| {
        let advanced = if rtl { start_px - edge } else { edge - start_px };
        (advanced / width).clamp(0.0, 1.0)
    };
    let completed = completed_edge.map(to_fraction).unwrap_or(0.0);
    let active = active_edge.map(to_fraction).unwrap_or(0.0);
    let progress = completed.max(active);

    let half_band = (REVEAL_FADE_PX / width).min(1.0) / 2.0;
    RowReveal::Gradient {
        progress,
        band_start: (progress - half_band).clamp(0.0, 1.0),
        band_end: (progress + half_band).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/reveal.rs"]
mod tests;
