//! # melisma
//!
//! Deterministic layout and animation engine for time-synchronized lyrics.
//!
//! `melisma` turns timed lyric lines into paint instructions. Given a line of
//! syllables with millisecond timing, a viewport width, and a text measurer,
//! it measures and groups syllables into words, wraps them into balanced rows,
//! positions every syllable on a shared baseline, and then answers per-frame
//! queries: how far the progressive reveal has advanced, how each character of
//! an emphasized word is lifted and swollen, which line holds focus, where the
//! viewport should scroll, and what the between-lines breathing indicator is
//! doing.
//!
//! Everything is a pure function of the playback clock. Sampling a row at time
//! `t` yields the same [`RowPaint`] every time; there are no internal
//! animation timers to tick and no hidden state to invalidate beyond the
//! explicit [`LayoutCache`] epoch.
//!
//! The engine does not shape or rasterize text. Callers supply a
//! [`TextMeasurer`] backed by whatever shaping stack they render with, and
//! consume the positioned output with their own renderer.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod layout;
mod measure;
mod model;
mod paint;
mod timeline;

pub use animation::curve::{bell, breath_cycle, dip_rise, swell};
pub use animation::ease::Ease;
pub use foundation::core::{Point, Rect, Rgba8, TextDirection, TimeMs, TimeRange, Vec2};
pub use foundation::error::{MelismaError, MelismaResult};
pub use layout::breaker::{WrappedLine, break_line};
pub use layout::cache::{
    LayoutCache, LayoutParams, LineLayout, compute_line_layout, populate_cache,
};
pub use layout::positioner::{
    PositionedRow, PositionedSyllable, WordAnimationInfo, position_lines,
};
pub use measure::backend::{FixedAdvanceMeasurer, GlyphMetrics, TextMeasurer, TextStyle};
pub use measure::script::{is_pure_punctuation, is_rtl_text, is_simple_script, line_direction};
pub use measure::syllable::{SyllableLayout, measure_line, measure_synced};
pub use model::line::{KaraokeLine, LineAlignment, LineVariant, LyricLine, Syllable, SyncedLine};
pub use paint::emphasis::{
    CharTransform, EMPHASIS_PULSE_RATIO, FLOAT_IN_MS, char_transforms, drive_timing,
    float_in_offset, pulse_window,
};
pub use paint::plan::{GlyphRun, GradientMask, RowColors, RowPaint, paint_row};
pub use paint::reveal::{REVEAL_FADE_PX, RowReveal, reveal_row};
pub use timeline::breathing::{
    BREATHING_MIN_GAP_MS, BreathingFrame, BreathingGap, BreathingPhase, breathing_direction,
    breathing_frame, breathing_gaps, gap_qualifies,
};
pub use timeline::focus::{BLUR_WEIGHT_STEP, active_lines, blur_weight, focused_line};
pub use timeline::scroll::{AutoScroller, SCROLL_ANIM_MS, ScrollCommand, ViewportHost};
