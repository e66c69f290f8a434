use super::*;
use crate::{FixedAdvanceMeasurer, Syllable, measure_line};

/// Unit-width measurer: every narrow grapheme is exactly 1 px wide, so the
/// numbers below read as character counts.
fn unit_measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer { advance_em: 1.0 }
}

fn unit_style() -> TextStyle {
    TextStyle {
        size_px: 1.0,
        ..TextStyle::default()
    }
}

fn syl(text: &str, start: u64, end: u64) -> Syllable {
    Syllable::new(text, TimeRange::from_ms(start, end).unwrap())
}

fn layouts(syllables: &[Syllable]) -> Vec<SyllableLayout> {
    measure_line(syllables, &unit_style(), &unit_measurer(), false)
}

fn wrap(syllables: &[Syllable], available: f64) -> Vec<WrappedLine> {
    break_line(&layouts(syllables), available, &unit_style(), &unit_measurer())
}

#[test]
fn balanced_breaks_beat_greedy_packing() {
    // word widths 50 / 25 / 45 / 20 into 70: greedy packs [50][25 45][20]
    // for a badness of 2900, while [50][25][45 20] costs 2450
    let w1 = format!("{} ", "a".repeat(49));
    let w2 = format!("{} ", "b".repeat(24));
    let w3 = format!("{} ", "c".repeat(44));
    let w4 = "d".repeat(20);
    let rows = wrap(
        &[syl(&w1, 0, 100), syl(&w2, 100, 200), syl(&w3, 200, 300), syl(&w4, 300, 400)],
        70.0,
    );
    let shape: Vec<usize> = rows.iter().map(|r| r.syllables.len()).collect();
    assert_eq!(shape, vec![1, 1, 2]);
    assert_eq!(rows[0].syllables[0].text, "a".repeat(49));
    assert_eq!(rows[2].syllables[0].text, w3);
    assert!((rows[2].width - 65.0).abs() < 1e-9);
}

#[test]
fn words_never_split_across_rows() {
    // "aa"+"bb " form one five-wide word; it must move to a row whole
    let rows = wrap(
        &[syl("aa", 0, 100), syl("bb ", 100, 200), syl("cc", 200, 300)],
        5.0,
    );
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].syllables.len(), 2);
    assert_eq!(rows[0].syllables[0].word_id, rows[0].syllables[1].word_id);
    assert_eq!(rows[1].syllables[0].text, "cc");
}

#[test]
fn exact_fit_stays_on_one_row() {
    let rows = wrap(&[syl("aaaa ", 0, 100), syl("bbbb", 100, 200)], 9.0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].syllables.len(), 2);
    assert!((rows[0].width - 9.0).abs() < 1e-9);
}

#[test]
fn oversized_syllable_hard_splits_with_interpolated_timing() {
    let rows = wrap(&[syl("abcdefghij", 0, 1000)], 3.0);
    assert!(rows.len() >= 2);
    let pieces: Vec<&SyllableLayout> =
        rows.iter().flat_map(|r| r.syllables.iter()).collect();
    let rebuilt: String = pieces.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(rebuilt, "abcdefghij");
    assert!(pieces.iter().all(|p| p.word_id == 0));
    assert!(pieces.iter().all(|p| p.metrics.width <= 3.0 + 1e-9));
    // pieces tile the syllable's span in order
    assert_eq!(pieces[0].timing.start, TimeMs(0));
    assert_eq!(pieces.last().unwrap().timing.end, TimeMs(1000));
    for pair in pieces.windows(2) {
        assert_eq!(pair[0].timing.end, pair[1].timing.start);
    }
}

#[test]
fn split_pieces_fill_the_viewport_before_overflowing() {
    // a 400 px word against 300 px: the first piece fills the row exactly
    let rows = wrap(&[syl(&"x".repeat(400), 0, 4000)], 300.0);
    assert_eq!(rows.len(), 2);
    assert!((rows[0].width - 300.0).abs() < 1e-9);
    assert!((rows[1].width - 100.0).abs() < 1e-9);
    assert_eq!(rows[0].syllables[0].timing.end, TimeMs(3000));
}

#[test]
fn hard_split_pieces_keep_flowing_after_the_giant() {
    // an 8-wide word into 5 splits "abcde" + "fg "; the following short
    // word then shares the last piece's row
    let rows = wrap(&[syl("abcdefg ", 0, 700), syl("hi", 700, 900)], 5.0);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].syllables.len(), 2);
    assert_eq!(rows[1].syllables[1].text, "hi");
    for row in &rows {
        assert!(row.width <= 5.0 + 1e-9);
    }
}

#[test]
fn trailing_blank_syllables_are_dropped() {
    let rows = wrap(&[syl("hi ", 0, 300), syl(" ", 300, 400)], 100.0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].syllables.len(), 1);
    assert_eq!(rows[0].syllables[0].text, "hi");
    assert!((rows[0].width - 2.0).abs() < 1e-9);
}

#[test]
fn trimming_keeps_timing_intact() {
    let rows = wrap(&[syl("Hel", 0, 300), syl("lo ", 300, 600)], 100.0);
    let last = rows[0].syllables.last().unwrap();
    assert_eq!(last.text, "lo");
    assert_eq!(last.timing, TimeRange::from_ms(300, 600).unwrap());
}

#[test]
fn all_whitespace_line_produces_no_rows() {
    assert!(wrap(&[syl(" ", 0, 100), syl("  ", 100, 200)], 50.0).is_empty());
}

#[test]
fn empty_input_produces_no_rows() {
    assert!(wrap(&[], 100.0).is_empty());
}

#[test]
fn zero_width_viewport_still_terminates() {
    let rows = wrap(&[syl("ab", 0, 100)], 0.0);
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.syllables.len(), 1);
        assert_eq!(row.syllables[0].text.chars().count(), 1);
    }
}

#[test]
fn syllable_count_is_conserved_without_splits() {
    let input = [syl("in ", 0, 100), syl("the ", 100, 200), syl("end", 200, 300)];
    let rows = wrap(&input, 4.0);
    let total: usize = rows.iter().map(|r| r.syllables.len()).sum();
    assert_eq!(total, input.len());
}
