//! Timed lyric data as parsed from a lyric source.
//!
//! The model is deliberately renderer-agnostic: plain text plus millisecond
//! timing. Two line variants exist. Karaoke lines carry per-syllable timing
//! and drive the full reveal and emphasis pipeline. Synced lines carry one
//! time span for the whole line, the common case for plain LRC sources, and
//! are expanded into proportionally timed word runs at measure time.

use serde::{Deserialize, Serialize};

use crate::foundation::core::{TimeMs, TimeRange};

/// One timed fragment of a karaoke line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Raw text of the fragment, including any trailing whitespace.
    pub text: String,
    /// Span during which this fragment is being sung.
    pub timing: TimeRange,
}

impl Syllable {
    /// Creates a syllable from text and timing.
    pub fn new(text: impl Into<String>, timing: TimeRange) -> Self {
        Self {
            text: text.into(),
            timing,
        }
    }

    /// Linear progress of `t` through this syllable, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, t: TimeMs) -> f64 {
        self.timing.progress(t)
    }

    /// True when this syllable closes a word.
    ///
    /// A word is a maximal run of consecutive syllables none of which, except
    /// possibly the last, ends in whitespace. Trailing whitespace on a
    /// syllable therefore marks the boundary after it.
    #[must_use]
    pub fn ends_word(&self) -> bool {
        self.text.trim_end().len() < self.text.len()
    }
}

/// Horizontal alignment requested by the lyric source for a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineAlignment {
    /// Align to the writing-direction start edge.
    Start,
    /// Align to the writing-direction end edge.
    End,
    /// No explicit preference; follows the script's natural edge.
    #[default]
    Unspecified,
}

/// A line with per-syllable timing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KaraokeLine {
    /// Syllables in singing order.
    pub syllables: Vec<Syllable>,
}

impl KaraokeLine {
    /// Overall span of the line: earliest syllable start to latest end.
    ///
    /// An empty line reports a zero-length span at time zero.
    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        self.syllables
            .iter()
            .map(|s| s.timing)
            .reduce(TimeRange::union)
            .unwrap_or_default()
    }
}

/// A line with a single time span and no internal syllable timing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncedLine {
    /// Full text of the line.
    pub text: String,
    /// Span during which the line is active.
    pub timing: TimeRange,
}

/// The two supported timing granularities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineVariant {
    /// Per-syllable timing.
    Karaoke(KaraokeLine),
    /// Whole-line timing.
    Synced(SyncedLine),
}

/// One display line of the lyric, with its metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Timed content of the line.
    pub variant: LineVariant,
    /// Requested horizontal alignment.
    #[serde(default)]
    pub alignment: LineAlignment,
    /// True for background or backing-vocal lines. Accompaniment lines never
    /// receive emphasis animation and never win focus over main lines.
    #[serde(default)]
    pub accompaniment: bool,
    /// Optional translation shown alongside the line. Carried through
    /// untouched; the engine lays out only the primary text.
    #[serde(default)]
    pub translation: Option<String>,
}

impl LyricLine {
    /// Creates a karaoke line with default metadata.
    pub fn karaoke(syllables: Vec<Syllable>) -> Self {
        Self {
            variant: LineVariant::Karaoke(KaraokeLine { syllables }),
            alignment: LineAlignment::default(),
            accompaniment: false,
            translation: None,
        }
    }

    /// Creates a synced line with default metadata.
    pub fn synced(text: impl Into<String>, timing: TimeRange) -> Self {
        Self {
            variant: LineVariant::Synced(SyncedLine {
                text: text.into(),
                timing,
            }),
            alignment: LineAlignment::default(),
            accompaniment: false,
            translation: None,
        }
    }

    /// Overall span of the line.
    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        match &self.variant {
            LineVariant::Karaoke(k) => k.time_range(),
            LineVariant::Synced(s) => s.timing,
        }
    }

    /// True while `t` falls inside the line's span.
    #[must_use]
    pub fn is_active(&self, t: TimeMs) -> bool {
        self.time_range().contains(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/line.rs"]
mod tests;
