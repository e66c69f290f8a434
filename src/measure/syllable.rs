//! Per-syllable measurement and word grouping.
//!
//! This is the first pipeline stage: it turns model [`Syllable`]s into
//! [`SyllableLayout`]s carrying pixel metrics, a word id, and the emphasis
//! classification that decides whether the word later animates per character.

use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::core::{Rect, TimeMs, TimeRange};
use crate::measure::backend::{GlyphMetrics, TextMeasurer, TextStyle};
use crate::measure::script::is_simple_script;
use crate::model::line::Syllable;

/// Slowest per-character pace that still counts as normal singing, in
/// milliseconds. Words sung slower than this qualify for emphasis.
const EMPHASIS_MIN_PER_CHAR_MS: f64 = 200.0;

/// Words shorter than this never qualify for emphasis, regardless of pace.
const EMPHASIS_MIN_WORD_MS: u64 = 1000;

/// A measured syllable, ready for line breaking.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SyllableLayout {
    /// Text of the fragment, still including trailing whitespace.
    pub text: String,
    /// Singing span of the fragment.
    pub timing: TimeRange,
    /// Measured extents.
    pub metrics: GlyphMetrics,
    /// Id of the word this fragment belongs to, counted from zero within the
    /// line. Fragments of one word never wrap apart unless the word alone is
    /// wider than the viewport.
    pub word_id: usize,
    /// True when the enclosing word qualifies for per-character emphasis.
    pub emphasis: bool,
    /// Per-grapheme boxes relative to the fragment origin. Populated only for
    /// emphasized fragments; everything else animates as a whole run.
    pub char_boxes: Option<Vec<Rect>>,
}

/// Number of extended grapheme clusters in `text`. The engine's definition of
/// "character" everywhere a character is counted or animated.
pub(crate) fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Measures `text`, compensating for backends that collapse trailing spaces.
///
/// Shaping engines routinely report `"lo "` no wider than `"lo"`. When that
/// happens the missing advance is restored from the backend's space width so
/// inter-word gaps survive into layout. Empty text measures as zero without
/// consulting the backend.
pub(crate) fn corrected_metrics<M: TextMeasurer + ?Sized>(
    text: &str,
    style: &TextStyle,
    measurer: &M,
) -> GlyphMetrics {
    if text.is_empty() {
        return GlyphMetrics::ZERO;
    }
    let mut metrics = measurer.measure(text, style);
    let trimmed = text.trim_end();
    let trailing = text[trimmed.len()..].chars().count();
    if trailing > 0 {
        let base = if trimmed.is_empty() {
            GlyphMetrics::ZERO
        } else {
            measurer.measure(trimmed, style)
        };
        if metrics.width <= base.width {
            metrics.width = base.width + measurer.space_width(style) * trailing as f64;
        }
    }
    metrics
}

fn classify_emphasis(word: &[Syllable], accompaniment: bool) -> bool {
    if accompaniment {
        return false;
    }
    let (Some(first), Some(last)) = (word.first(), word.last()) else {
        return false;
    };
    let duration = last.timing.end.saturating_since(first.timing.start);
    if duration < EMPHASIS_MIN_WORD_MS {
        return false;
    }
    let chars: usize = word.iter().map(|s| grapheme_count(&s.text)).sum();
    if chars == 0 {
        return false;
    }
    if duration as f64 / chars as f64 <= EMPHASIS_MIN_PER_CHAR_MS {
        return false;
    }
    let text: String = word.iter().map(|s| s.text.as_str()).collect();
    !is_simple_script(&text)
}

/// Measures a karaoke line and groups its syllables into words.
///
/// Word ids are assigned by scanning for trailing-whitespace boundaries, then
/// each whole word is classified for emphasis: a word qualifies when it is
/// sung slower than 200 ms per character, lasts at least a second, is not in
/// a script where per-character animation misreads, and the line is not
/// accompaniment. Emphasized fragments get per-grapheme boxes up front so
/// frame sampling never re-shapes text.
pub fn measure_line<M: TextMeasurer + ?Sized>(
    syllables: &[Syllable],
    style: &TextStyle,
    measurer: &M,
    accompaniment: bool,
) -> Vec<SyllableLayout> {
    let mut word_ids = Vec::with_capacity(syllables.len());
    let mut next_id = 0usize;
    for syl in syllables {
        word_ids.push(next_id);
        if syl.ends_word() {
            next_id += 1;
        }
    }

    let mut emphasis_by_word = Vec::new();
    let mut start = 0usize;
    while start < syllables.len() {
        let id = word_ids[start];
        let mut end = start;
        while end < syllables.len() && word_ids[end] == id {
            end += 1;
        }
        emphasis_by_word.push(classify_emphasis(&syllables[start..end], accompaniment));
        start = end;
    }

    syllables
        .iter()
        .zip(word_ids)
        .map(|(syl, word_id)| {
            let metrics = corrected_metrics(&syl.text, style, measurer);
            let emphasis = emphasis_by_word[word_id];
            let char_boxes = if emphasis {
                Some(measurer.char_bounds(&syl.text, style))
            } else {
                None
            };
            SyllableLayout {
                text: syl.text.clone(),
                timing: syl.timing,
                metrics,
                word_id,
                emphasis,
                char_boxes,
            }
        })
        .collect()
}

/// Expands a synced line into measured word runs with interpolated timing.
///
/// The text splits into runs of non-whitespace plus any whitespace that
/// follows it, and the line's span is divided among the runs in proportion to
/// their grapheme counts, with boundaries computed cumulatively so the final
/// run ends exactly at the line's end. Synced runs never qualify for
/// emphasis; whole-line timing is too coarse to say anything about a single
/// word's pace.
pub fn measure_synced<M: TextMeasurer + ?Sized>(
    text: &str,
    timing: TimeRange,
    style: &TextStyle,
    measurer: &M,
) -> Vec<SyllableLayout> {
    let runs = split_word_runs(text);
    let total: usize = runs.iter().map(|r| grapheme_count(r)).sum();
    if total == 0 {
        return Vec::new();
    }
    let len = timing.len_ms();
    let mut out = Vec::with_capacity(runs.len());
    let mut covered = 0usize;
    let mut cursor = timing.start;
    for (word_id, run) in runs.into_iter().enumerate() {
        covered += grapheme_count(&run);
        let end = TimeMs(timing.start.0 + len * covered as u64 / total as u64);
        let metrics = corrected_metrics(&run, style, measurer);
        out.push(SyllableLayout {
            text: run,
            timing: TimeRange { start: cursor, end },
            metrics,
            word_id,
            emphasis: false,
            char_boxes: None,
        });
        cursor = end;
    }
    out
}

/// Splits text into word runs, each keeping the whitespace that follows it.
fn split_word_runs(text: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut seen_trailing_ws = false;
    for c in text.chars() {
        if c.is_whitespace() {
            seen_trailing_ws = true;
        } else if seen_trailing_ws {
            runs.push(std::mem::take(&mut current));
            seen_trailing_ws = false;
        }
        current.push(c);
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
#[path = "../../tests/unit/measure/syllable.rs"]
mod tests;
