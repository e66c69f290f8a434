//! Focus tracking across the whole lyric.
//!
//! Exactly one line holds focus at any instant: the line the listener should
//! be reading. Hosts may pass their own highlighted set (players often track
//! this upstream); without one, focus derives from line timing alone.

use crate::foundation::core::TimeMs;
use crate::model::line::LyricLine;

/// Blur added per line of distance from the focused line.
pub const BLUR_WEIGHT_STEP: f64 = 0.25;

/// Indices of all lines active at `t`, in line order.
#[must_use]
pub fn active_lines(lines: &[LyricLine], t: TimeMs) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_active(t))
        .map(|(index, _)| index)
        .collect()
}

/// Index of the focused line at `t`, or `None` for an empty lyric.
///
/// The first active non-accompaniment line wins. When only accompaniment is
/// active, focus holds on the nearest preceding main line, so backing vocals
/// never steal the reader's place; with no preceding main line the first
/// active line takes focus after all. When nothing is active, focus sits on
/// the last main line before the next upcoming line (or that upcoming line
/// at the very start of the song), and once the lyric is exhausted it rests
/// on the final line.
///
/// `highlighted` overrides timing-based derivation; out-of-range indices in
/// it are ignored.
#[must_use]
pub fn focused_line(lines: &[LyricLine], t: TimeMs, highlighted: Option<&[usize]>) -> Option<usize> {
    if lines.is_empty() {
        return None;
    }
    let derived;
    let active: &[usize] = match highlighted {
        Some(h) => h,
        None => {
            derived = active_lines(lines, t);
            &derived
        }
    };

    let mut first_active = None;
    for &i in active {
        if i >= lines.len() {
            continue;
        }
        if first_active.is_none() {
            first_active = Some(i);
        }
        if !lines[i].accompaniment {
            return Some(i);
        }
    }
    if let Some(first) = first_active {
        return Some(
            lines[..first]
                .iter()
                .rposition(|l| !l.accompaniment)
                .unwrap_or(first),
        );
    }

    match lines.iter().position(|l| l.time_range().start.0 > t.0) {
        Some(upcoming) => Some(
            lines[..upcoming]
                .iter()
                .rposition(|l| !l.accompaniment)
                .unwrap_or(upcoming),
        ),
        None => Some(lines.len() - 1),
    }
}

/// Blur weight of line `index` at `t`: [`BLUR_WEIGHT_STEP`] per line of
/// distance from the focused line, capped at `1.0`. Zero for every line when
/// the lyric is empty.
#[must_use]
pub fn blur_weight(
    lines: &[LyricLine],
    index: usize,
    t: TimeMs,
    highlighted: Option<&[usize]>,
) -> f64 {
    let Some(focused) = focused_line(lines, t, highlighted) else {
        return 0.0;
    };
    (focused.abs_diff(index) as f64 * BLUR_WEIGHT_STEP).min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/focus.rs"]
mod tests;
