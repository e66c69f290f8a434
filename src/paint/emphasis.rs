//! Per-character emphasis animation and the float-in for everything else.
//!
//! Emphasized words animate one character at a time: staggered pulse windows
//! cover the word's span, and across its window a character falls from a full
//! lift back to rest with a dip below it, swells around the word pivot, and
//! passes through a glow blur peak. Non-emphasized syllables get a single
//! downward-offset float-in at activation. All of it is sampled from the
//! clock; seeking backwards replays identically.

use serde::Serialize;

use crate::animation::curve;
use crate::animation::ease::Ease;
use crate::foundation::core::{Point, TimeMs, TimeRange, Vec2};
use crate::layout::positioner::{PositionedRow, PositionedSyllable, WordAnimationInfo};
use crate::measure::script::is_pure_punctuation;
use crate::measure::syllable::grapheme_count;

/// Fraction of the word span that one character's pulse occupies.
pub const EMPHASIS_PULSE_RATIO: f64 = 0.8;

/// Duration of the float-in applied to non-emphasized syllables, in
/// milliseconds from syllable start.
pub const FLOAT_IN_MS: u64 = 700;

/// Peak lift of an emphasized character, in pixels, reached by words at or
/// above the reference duration.
const MAX_LIFT_PX: f64 = 4.0;

/// Word duration at which lift and swell reach full amplitude. Shorter words
/// scale down proportionally so quick words shimmer rather than bounce.
const AMPLITUDE_REF_MS: f64 = 2000.0;

/// Peak scale gain of an emphasized character at full amplitude.
const MAX_SWELL: f64 = 0.1;

/// Peak glow blur radius, in pixels.
const MAX_BLUR_PX: f64 = 6.0;

/// Starting depth of the float-in below rest, in pixels.
const FLOAT_IN_RISE_PX: f64 = 4.0;

/// Lift profile over one pulse, [`curve::dip_rise`] sampled backward: full
/// displacement at pulse start, a fall through rest with an undershoot below
/// it, and exactly rest from pulse end on.
fn settle_pulse(p: f64) -> f64 {
    curve::dip_rise(1.0 - p)
}

/// Sampled transform of one character of an emphasized word.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CharTransform {
    /// Translation to apply, in pixels. Negative y is a lift.
    pub offset: Vec2,
    /// Uniform scale around `pivot`.
    pub scale: f64,
    /// Scale pivot shared by the whole word.
    pub pivot: Point,
    /// Glow blur radius in pixels, zero outside the pulse.
    pub blur: f64,
}

/// Pulse window of character `char_index` out of `char_total` in a word.
///
/// Pulses last [`EMPHASIS_PULSE_RATIO`] of the word span and their starts
/// spread evenly across the remaining slack, so the first character's pulse
/// opens at the word start, the last character's pulse closes at the word
/// end, and neighbors overlap heavily for a wave rather than a ripple.
#[must_use]
pub fn pulse_window(word: &WordAnimationInfo, char_index: usize, char_total: usize) -> TimeRange {
    let span = word.timing.len_ms();
    let pulse = (span as f64 * EMPHASIS_PULSE_RATIO).round() as u64;
    let slack = span.saturating_sub(pulse);
    let fraction = if char_total > 1 {
        (char_index as f64 / (char_total - 1) as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let offset = (slack as f64 * fraction).round() as u64;
    TimeRange::with_len(word.timing.start.advanced_by(offset), pulse)
}

/// Samples the per-character transforms of one emphasized fragment at `t`.
///
/// Returns one transform per character box, in logical order. Fragments
/// without word animation data or character boxes yield an empty vec, which
/// a renderer treats as "draw untransformed".
pub fn char_transforms(syl: &PositionedSyllable, t: TimeMs) -> Vec<CharTransform> {
    let (Some(word), Some(boxes)) = (&syl.word_anim, &syl.char_boxes) else {
        return Vec::new();
    };
    let pivot = syl.word_pivot.unwrap_or(syl.position);
    let total = grapheme_count(&word.text);
    let span_ms = word.timing.len_ms() as f64;
    let amplitude = (span_ms / AMPLITUDE_REF_MS).min(1.0);
    let lift_amp = MAX_LIFT_PX * amplitude;
    let swell_amp = MAX_SWELL * amplitude;

    boxes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let k = syl.char_offset_in_word + i;
            let p = pulse_window(word, k, total).progress(t);
            let lift = -lift_amp * settle_pulse(p);
            CharTransform {
                offset: Vec2::new(0.0, lift),
                scale: 1.0 + swell_amp * curve::swell(p),
                pivot,
                blur: MAX_BLUR_PX * curve::bell(p),
            }
        })
        .collect()
}

/// Downward offset of the float-in at time `t`, in pixels.
///
/// A syllable enters [`FLOAT_IN_RISE_PX`] below rest at its start and eases
/// up to rest over [`FLOAT_IN_MS`]. Before the start the full offset holds
/// (the syllable is invisible under the reveal anyway); after the window it
/// is exactly zero.
#[must_use]
pub fn float_in_offset(timing: TimeRange, t: TimeMs) -> f64 {
    let window = TimeRange::with_len(timing.start, FLOAT_IN_MS);
    let p = Ease::OutCubic.apply(window.progress(t));
    (1.0 - p) * FLOAT_IN_RISE_PX
}

/// Timing that drives animation for the syllable at `index` in `row`.
///
/// Punctuation-only fragments often carry degenerate timing in real lyric
/// data, so they borrow the nearest preceding non-punctuation syllable's
/// timing and move with it. Everything else drives itself.
#[must_use]
pub fn drive_timing(row: &PositionedRow, index: usize) -> TimeRange {
    let Some(syl) = row.syllables.get(index) else {
        return TimeRange::default();
    };
    if !is_pure_punctuation(&syl.text) {
        return syl.timing;
    }
    row.syllables[..index]
        .iter()
        .rev()
        .find(|s| !is_pure_punctuation(&s.text))
        .map(|s| s.timing)
        .unwrap_or(syl.timing)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/emphasis.rs"]
mod tests;
