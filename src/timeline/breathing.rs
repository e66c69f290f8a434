//! Breathing indicator for instrumental gaps.
//!
//! During a long gap between lines the view shows three dots that fade in,
//! breathe on a slow cycle while waking one by one, dip once as the next
//! line approaches, hold still for a beat, and exit just before the vocals
//! return. Like everything else, a frame of the indicator is a pure function
//! of the playback clock and the gap's span.

use serde::Serialize;

use crate::animation::curve;
use crate::animation::ease::Ease;
use crate::foundation::core::{TextDirection, TimeMs, TimeRange};
use crate::measure::script::line_direction;
use crate::model::line::LyricLine;

/// Gaps must be strictly longer than this to earn an indicator.
pub const BREATHING_MIN_GAP_MS: u64 = 5000;

const ENTER_MS: u64 = 3000;
const PRE_EXIT_DIP_MS: u64 = 3000;
const STILL_MS: u64 = 200;
const EXIT_MS: u64 = 200;
const FIXED_PHASES_MS: u64 = ENTER_MS + PRE_EXIT_DIP_MS + STILL_MS + EXIT_MS;

/// One full breath every three seconds.
const BREATH_CYCLE_MS: u64 = 3000;
/// The breath dips scale to `1.0 - BREATH_DEPTH` at the bottom of a cycle.
const BREATH_DEPTH: f64 = 0.1;
/// Depth of the single dip before the indicator leaves.
const PRE_EXIT_DIP_DEPTH: f64 = 0.15;
/// Alpha of a dot that has not woken yet.
const DOT_DIM_ALPHA: f64 = 0.25;
/// Share of a compact gap spent entering and exiting.
const COMPACT_EDGE_FRACTION: f64 = 0.3;

/// Phase of the indicator's life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BreathingPhase {
    /// Not inside a qualifying gap; draw nothing.
    Idle,
    /// Fading and scaling in.
    Enter,
    /// The long middle hold, breathing on [`BREATH_CYCLE_MS`].
    Breathing,
    /// One deeper dip announcing the upcoming line.
    PreExitDip,
    /// Brief motionless beat after the dip.
    Still,
    /// Fading and scaling out.
    Exit,
}

/// Sampled indicator state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BreathingFrame {
    /// Current life-cycle phase.
    pub phase: BreathingPhase,
    /// Uniform scale of the whole indicator, `0.0..=1.0`.
    pub scale: f64,
    /// Opacity of the whole indicator, `0.0..=1.0`.
    pub alpha: f64,
    /// Per-dot opacity in reading order, dimmed until each dot wakes.
    pub dot_alpha: [f64; 3],
}

impl BreathingFrame {
    /// The do-not-draw frame reported outside qualifying gaps.
    pub const IDLE: Self = Self {
        phase: BreathingPhase::Idle,
        scale: 0.0,
        alpha: 0.0,
        dot_alpha: [0.0; 3],
    };
}

/// A qualifying gap and the line it precedes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BreathingGap {
    /// Index of the line the gap leads into.
    pub before_line: usize,
    /// Span of the gap, from the previous line's end (or the track start)
    /// to this line's start.
    pub timing: TimeRange,
}

/// True when a gap is long enough to show the indicator.
#[must_use]
pub fn gap_qualifies(gap: TimeRange) -> bool {
    gap.len_ms() > BREATHING_MIN_GAP_MS
}

/// Finds every qualifying gap in a lyric, including the intro before the
/// first line. Overlapping lines never produce a gap: the running edge is
/// the latest end seen so far.
#[must_use]
pub fn breathing_gaps(lines: &[LyricLine]) -> Vec<BreathingGap> {
    let mut out = Vec::new();
    let mut prev_end = TimeMs::ZERO;
    for (index, line) in lines.iter().enumerate() {
        let range = line.time_range();
        if range.start.0 > prev_end.0 {
            let gap = TimeRange {
                start: prev_end,
                end: range.start,
            };
            if gap_qualifies(gap) {
                out.push(BreathingGap {
                    before_line: index,
                    timing: gap,
                });
            }
        }
        prev_end = TimeMs(prev_end.0.max(range.end.0));
    }
    out
}

/// Flow direction the indicator should adopt: the previous line's, falling
/// back to the upcoming line's, then left-to-right.
#[must_use]
pub fn breathing_direction(prev: Option<&LyricLine>, next: Option<&LyricLine>) -> TextDirection {
    prev.or(next).map(line_direction).unwrap_or_default()
}

/// Samples the indicator inside `gap` at time `t`.
///
/// Outside a qualifying gap this returns [`BreathingFrame::IDLE`]. The exit,
/// still, and dip phases are anchored backward from the gap's end so the
/// indicator always lands exactly as the next line starts; the enter phase
/// is anchored at the front; whatever time remains in the middle breathes.
/// Gaps too short for the full choreography (under 6.4 s) collapse to a
/// compact enter, hold, exit split at 30 / 40 / 30 percent; a gap of exactly
/// 6.4 s runs the full phases with an empty breathing window.
#[must_use]
pub fn breathing_frame(gap: TimeRange, t: TimeMs) -> BreathingFrame {
    if !gap_qualifies(gap) || !gap.contains(t) {
        return BreathingFrame::IDLE;
    }
    let len = gap.len_ms();
    let elapsed = t.saturating_since(gap.start);
    if len < FIXED_PHASES_MS {
        return compact_frame(len, elapsed);
    }
    let remaining = len - elapsed;

    if remaining <= EXIT_MS {
        let p = 1.0 - remaining as f64 / EXIT_MS as f64;
        let v = 1.0 - Ease::InOutQuad.apply(p);
        return BreathingFrame {
            phase: BreathingPhase::Exit,
            scale: v,
            alpha: v,
            dot_alpha: [1.0; 3],
        };
    }
    if remaining <= EXIT_MS + STILL_MS {
        return BreathingFrame {
            phase: BreathingPhase::Still,
            scale: 1.0,
            alpha: 1.0,
            dot_alpha: [1.0; 3],
        };
    }
    if remaining <= EXIT_MS + STILL_MS + PRE_EXIT_DIP_MS {
        let into = (EXIT_MS + STILL_MS + PRE_EXIT_DIP_MS - remaining) as f64;
        let p = into / PRE_EXIT_DIP_MS as f64;
        return BreathingFrame {
            phase: BreathingPhase::PreExitDip,
            scale: 1.0 - PRE_EXIT_DIP_DEPTH * curve::swell(p),
            alpha: 1.0,
            dot_alpha: [1.0; 3],
        };
    }
    if elapsed < ENTER_MS {
        let v = Ease::OutCubic.apply(elapsed as f64 / ENTER_MS as f64);
        return BreathingFrame {
            phase: BreathingPhase::Enter,
            scale: v,
            alpha: v,
            dot_alpha: [1.0; 3],
        };
    }

    let window = len - FIXED_PHASES_MS;
    let into = elapsed - ENTER_MS;
    let scale = (1.0 - BREATH_DEPTH) + BREATH_DEPTH * curve::breath_cycle(into, BREATH_CYCLE_MS);
    BreathingFrame {
        phase: BreathingPhase::Breathing,
        scale,
        alpha: 1.0,
        dot_alpha: dot_wake(into as f64, window as f64),
    }
}

/// Compact choreography for gaps that qualify but cannot fit the full fixed
/// phases: eased enter, motionless hold, eased exit.
fn compact_frame(len: u64, elapsed: u64) -> BreathingFrame {
    let p = elapsed as f64 / len as f64;
    if p < COMPACT_EDGE_FRACTION {
        let v = Ease::OutCubic.apply(p / COMPACT_EDGE_FRACTION);
        BreathingFrame {
            phase: BreathingPhase::Enter,
            scale: v,
            alpha: v,
            dot_alpha: [1.0; 3],
        }
    } else if p < 1.0 - COMPACT_EDGE_FRACTION {
        let hold_len = len as f64 * (1.0 - 2.0 * COMPACT_EDGE_FRACTION);
        let into = elapsed as f64 - len as f64 * COMPACT_EDGE_FRACTION;
        BreathingFrame {
            phase: BreathingPhase::Breathing,
            scale: 1.0,
            alpha: 1.0,
            dot_alpha: dot_wake(into, hold_len),
        }
    } else {
        let q = (p - (1.0 - COMPACT_EDGE_FRACTION)) / COMPACT_EDGE_FRACTION;
        let v = 1.0 - Ease::InOutQuad.apply(q);
        BreathingFrame {
            phase: BreathingPhase::Exit,
            scale: v,
            alpha: v,
            dot_alpha: [1.0; 3],
        }
    }
}

/// Dots wake in reading order, one per third of the hold window, each
/// ramping from dim to full over its own third.
fn dot_wake(elapsed_ms: f64, window_ms: f64) -> [f64; 3] {
    let slice = window_ms / 3.0;
    let mut out = [1.0; 3];
    for (i, dot) in out.iter_mut().enumerate() {
        let p = if slice > 0.0 {
            ((elapsed_ms - i as f64 * slice) / slice).clamp(0.0, 1.0)
        } else {
            1.0
        };
        *dot = DOT_DIM_ALPHA + (1.0 - DOT_DIM_ALPHA) * p;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/breathing.rs"]
mod tests;
