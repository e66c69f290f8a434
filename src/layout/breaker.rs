//! Balanced line breaking with word atomicity.
//!
//! Wrapping minimizes total badness, the squared leftover width summed over
//! rows, via the classic dynamic program over break positions. Break points
//! are only legal between words, so syllables of one word always land on one
//! row together. When even that is impossible, a word or single syllable
//! wider than the viewport, wrapping degrades to a greedy pass that splits
//! words at syllable boundaries and, as a last resort, splits syllables at
//! grapheme boundaries with timing interpolated across the pieces.

use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::core::{TimeMs, TimeRange};
use crate::measure::backend::{TextMeasurer, TextStyle};
use crate::measure::syllable::{SyllableLayout, corrected_metrics};

/// One wrapped display row.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WrappedLine {
    /// Syllables on this row, in logical order.
    pub syllables: Vec<SyllableLayout>,
    /// Total advance width of the row after trailing-space trimming.
    pub width: f64,
}

/// Wraps a measured line into rows no wider than `available_width`.
///
/// Every produced row is passed through trailing trimming: wholly blank
/// trailing syllables are dropped and trailing whitespace on the last
/// syllable is removed with its metrics re-measured, so no row ends in
/// invisible width. Timing is untouched by trimming. Apart from trimming and
/// hard splits, syllables come back exactly as given, in order.
///
/// Never fails: degenerate widths produce one-grapheme rows rather than an
/// error, and an empty input produces no rows.
#[tracing::instrument(level = "debug", skip_all, fields(syllables = layouts.len()))]
pub fn break_line<M: TextMeasurer + ?Sized>(
    layouts: &[SyllableLayout],
    available_width: f64,
    style: &TextStyle,
    measurer: &M,
) -> Vec<WrappedLine> {
    if layouts.is_empty() {
        return Vec::new();
    }
    let available = if available_width.is_nan() {
        0.0
    } else {
        available_width.clamp(0.0, f64::MAX)
    };

    let n = layouts.len();
    let mut costs = vec![f64::INFINITY; n + 1];
    let mut breaks = vec![0usize; n + 1];
    costs[0] = 0.0;
    for i in 1..=n {
        let mut width = 0.0;
        let mut j = i;
        while j > 0 {
            j -= 1;
            width += layouts[j].metrics.width;
            if width > available {
                break;
            }
            // a row may only start at a word boundary
            let boundary_ok = j == 0 || layouts[j].word_id != layouts[j - 1].word_id;
            if !boundary_ok || !costs[j].is_finite() {
                continue;
            }
            let leftover = available - width;
            let total = costs[j] + leftover * leftover;
            if total < costs[i] {
                costs[i] = total;
                breaks[i] = j;
            }
        }
    }

    let rows = if costs[n].is_finite() {
        let mut spans = Vec::new();
        let mut i = n;
        while i > 0 {
            let j = breaks[i];
            spans.push(j..i);
            i = j;
        }
        spans.reverse();
        spans.into_iter().map(|span| layouts[span].to_vec()).collect()
    } else {
        warn!(
            syllables = n,
            available_width = available,
            "no feasible balanced wrap, falling back to greedy"
        );
        greedy_wrap(layouts, available, style, measurer)
    };

    rows.into_iter()
        .filter_map(|row| trim_row(row, style, measurer))
        .collect()
}

/// First-fit wrap used when the balanced solver has no feasible solution.
fn greedy_wrap<M: TextMeasurer + ?Sized>(
    layouts: &[SyllableLayout],
    available: f64,
    style: &TextStyle,
    measurer: &M,
) -> Vec<Vec<SyllableLayout>> {
    fn flush(rows: &mut Vec<Vec<SyllableLayout>>, row: &mut Vec<SyllableLayout>, width: &mut f64) {
        if !row.is_empty() {
            rows.push(std::mem::take(row));
        }
        *width = 0.0;
    }

    let mut rows = Vec::new();
    let mut row: Vec<SyllableLayout> = Vec::new();
    let mut row_width = 0.0;

    let mut start = 0usize;
    while start < layouts.len() {
        let id = layouts[start].word_id;
        let mut end = start;
        while end < layouts.len() && layouts[end].word_id == id {
            end += 1;
        }
        let word = &layouts[start..end];
        let word_width: f64 = word.iter().map(|s| s.metrics.width).sum();

        if word_width <= available {
            if !row.is_empty() && row_width + word_width > available {
                flush(&mut rows, &mut row, &mut row_width);
            }
            row.extend_from_slice(word);
            row_width += word_width;
        } else {
            // the word alone overflows the viewport: flow its syllables, and
            // split any syllable that still overflows on its own
            for syl in word {
                if syl.metrics.width <= available {
                    if !row.is_empty() && row_width + syl.metrics.width > available {
                        flush(&mut rows, &mut row, &mut row_width);
                    }
                    row_width += syl.metrics.width;
                    row.push(syl.clone());
                } else {
                    for piece in split_syllable(syl, available, style, measurer) {
                        if !row.is_empty() && row_width + piece.metrics.width > available {
                            flush(&mut rows, &mut row, &mut row_width);
                        }
                        row_width += piece.metrics.width;
                        row.push(piece);
                    }
                }
            }
        }
        start = end;
    }
    flush(&mut rows, &mut row, &mut row_width);
    rows
}

/// Splits one oversized syllable at grapheme boundaries.
///
/// Each piece keeps the syllable's word id and emphasis flag, and the
/// syllable's span is divided among pieces in proportion to grapheme count
/// with cumulative boundaries, so reveal progress stays monotone across the
/// split. Pieces always hold at least one grapheme, which bounds rows at one
/// grapheme minimum and guarantees termination even when a single grapheme
/// overflows the viewport.
fn split_syllable<M: TextMeasurer + ?Sized>(
    syl: &SyllableLayout,
    available: f64,
    style: &TextStyle,
    measurer: &M,
) -> Vec<SyllableLayout> {
    let graphemes: Vec<&str> = syl.text.graphemes(true).collect();
    let total = graphemes.len();
    if total <= 1 {
        return vec![syl.clone()];
    }

    let mut chunks: Vec<(String, usize)> = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    for g in &graphemes {
        if count > 0 {
            let mut candidate = current.clone();
            candidate.push_str(g);
            if measurer.measure(&candidate, style).width > available {
                chunks.push((std::mem::take(&mut current), count));
                count = 0;
            }
        }
        current.push_str(g);
        count += 1;
    }
    if count > 0 {
        chunks.push((current, count));
    }

    let len = syl.timing.len_ms();
    let mut out = Vec::with_capacity(chunks.len());
    let mut covered = 0usize;
    let mut cursor = syl.timing.start;
    for (text, chunk_count) in chunks {
        covered += chunk_count;
        let end = TimeMs(syl.timing.start.0 + len * covered as u64 / total as u64);
        let metrics = corrected_metrics(&text, style, measurer);
        let char_boxes = if syl.emphasis {
            Some(measurer.char_bounds(&text, style))
        } else {
            None
        };
        out.push(SyllableLayout {
            text,
            timing: TimeRange { start: cursor, end },
            metrics,
            word_id: syl.word_id,
            emphasis: syl.emphasis,
            char_boxes,
        });
        cursor = end;
    }
    out
}

/// Drops blank trailing syllables, strips trailing whitespace from the last
/// survivor, and totals the row width. Rows that were nothing but whitespace
/// vanish entirely.
fn trim_row<M: TextMeasurer + ?Sized>(
    mut row: Vec<SyllableLayout>,
    style: &TextStyle,
    measurer: &M,
) -> Option<WrappedLine> {
    while row.last().is_some_and(|s| s.text.trim().is_empty()) {
        row.pop();
    }
    let last = row.last_mut()?;
    let trimmed = last.text.trim_end();
    if trimmed.len() < last.text.len() {
        let text = trimmed.to_string();
        last.metrics = measurer.measure(&text, style);
        if last.emphasis {
            last.char_boxes = Some(measurer.char_bounds(&text, style));
        }
        last.text = text;
    }
    let width = row.iter().map(|s| s.metrics.width).sum();
    Some(WrappedLine {
        syllables: row,
        width,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/breaker.rs"]
mod tests;
