use super::*;
use crate::{
    FixedAdvanceMeasurer, GlyphMetrics, LineAlignment, Syllable, TextDirection, TextStyle,
    break_line, measure_line, position_lines,
};

fn pipeline_row(syllables: &[Syllable]) -> PositionedRow {
    let style = TextStyle {
        size_px: 10.0,
        ..TextStyle::default()
    };
    let m = FixedAdvanceMeasurer::default();
    let layouts = measure_line(syllables, &style, &m, false);
    let wrapped = break_line(&layouts, 400.0, &style, &m);
    let mut rows = position_lines(
        &wrapped,
        LineAlignment::Unspecified,
        TextDirection::Ltr,
        400.0,
        24.0,
    );
    rows.remove(0)
}

/// One emphasized nine-character word sung over 2250 ms.
fn beautiful_row() -> PositionedRow {
    pipeline_row(&[Syllable::new(
        "beautiful",
        TimeRange::from_ms(0, 2250).unwrap(),
    )])
}

fn word_info(row: &PositionedRow) -> WordAnimationInfo {
    row.syllables[0].word_anim.clone().unwrap()
}

#[test]
fn pulse_windows_stagger_across_the_word() {
    let row = beautiful_row();
    let word = word_info(&row);
    // pulses last 80 percent of 2250 ms; starts spread over the 450 ms slack
    assert_eq!(pulse_window(&word, 0, 9), TimeRange::from_ms(0, 1800).unwrap());
    assert_eq!(pulse_window(&word, 4, 9), TimeRange::from_ms(225, 2025).unwrap());
    assert_eq!(pulse_window(&word, 8, 9), TimeRange::from_ms(450, 2250).unwrap());
}

#[test]
fn single_char_word_pulses_from_its_start() {
    let word = WordAnimationInfo {
        timing: TimeRange::from_ms(1000, 2000).unwrap(),
        text: "\u{5e9}".to_string(),
    };
    assert_eq!(pulse_window(&word, 0, 1), TimeRange::from_ms(1000, 1800).unwrap());
}

#[test]
fn characters_enter_lifted_and_land_at_rest() {
    let row = beautiful_row();
    // at pulse start the character carries the full lift, unswollen and
    // unblurred
    let at_start = char_transforms(&row.syllables[0], TimeMs(0));
    assert_eq!(at_start.len(), 9);
    assert!((at_start[0].offset.y + 4.0).abs() < 1e-9);
    assert_eq!(at_start[0].offset.x, 0.0);
    assert_eq!(at_start[0].scale, 1.0);
    assert_eq!(at_start[0].blur, 0.0);

    // first character's pulse ends at 1800 while the last is still settling
    let late = char_transforms(&row.syllables[0], TimeMs(1800));
    assert_eq!(late[0].offset, Vec2::ZERO);
    assert!(late[8].offset.y.abs() > 0.0);
}

#[test]
fn mid_pulse_swells_glows_and_undershoots() {
    let row = beautiful_row();
    // 900 ms is halfway through the first pulse: swell and glow peak while
    // the lift has already fallen through rest into the undershoot
    let transforms = char_transforms(&row.syllables[0], TimeMs(900));
    let mid = &transforms[0];
    assert!((mid.scale - 1.1).abs() < 1e-9);
    assert!((mid.blur - 6.0).abs() < 1e-9);
    assert!((mid.offset.y - 0.85).abs() < 1e-9);
}

#[test]
fn later_characters_lag_earlier_ones() {
    let row = beautiful_row();
    // the first character has nearly settled at 540 ms while the last,
    // 90 ms into its own pulse, is still high
    let transforms = char_transforms(&row.syllables[0], TimeMs(540));
    assert!(transforms[8].offset.y.abs() > transforms[0].offset.y.abs());
    assert!(transforms[8].offset.y < 0.0);
}

#[test]
fn every_character_scales_around_the_word_pivot() {
    let row = beautiful_row();
    let pivot = row.syllables[0].word_pivot.unwrap();
    for transform in char_transforms(&row.syllables[0], TimeMs(700)) {
        assert_eq!(transform.pivot, pivot);
    }
}

#[test]
fn settle_starts_displaced_and_lands_exactly_at_rest() {
    assert!((settle_pulse(0.0) - 1.0).abs() < 1e-9);
    assert_eq!(settle_pulse(1.0), 0.0);
    assert!(settle_pulse(0.1) > 0.0);
    // the fall crosses rest and stays slightly below until landing
    assert!(settle_pulse(0.5) < 0.0);
    assert!(settle_pulse(0.97) < 0.0);
}

#[test]
fn shorter_words_get_shallower_lifts() {
    let row = pipeline_row(&[Syllable::new(
        "soulful",
        TimeRange::from_ms(0, 1500).unwrap(),
    )]);
    assert!(row.syllables[0].emphasis);
    // amplitude scales by 1500 / 2000; the full lift shows at pulse start
    let transforms = char_transforms(&row.syllables[0], TimeMs(0));
    assert!((transforms[0].offset.y + 3.0).abs() < 1e-9);
}

#[test]
fn plain_syllables_have_no_char_transforms() {
    let row = pipeline_row(&[Syllable::new("hi ", TimeRange::from_ms(0, 200).unwrap())]);
    assert!(char_transforms(&row.syllables[0], TimeMs(100)).is_empty());
}

#[test]
fn float_in_eases_up_from_below() {
    let timing = TimeRange::from_ms(1000, 1500).unwrap();
    assert_eq!(float_in_offset(timing, TimeMs(0)), 4.0);
    assert_eq!(float_in_offset(timing, TimeMs(1000)), 4.0);
    assert!((float_in_offset(timing, TimeMs(1350)) - 0.5).abs() < 1e-9);
    assert_eq!(float_in_offset(timing, TimeMs(1700)), 0.0);
    assert_eq!(float_in_offset(timing, TimeMs(9000)), 0.0);
}

fn bare_syl(text: &str, start: u64, end: u64) -> PositionedSyllable {
    PositionedSyllable {
        text: text.to_string(),
        timing: TimeRange::from_ms(start, end).unwrap(),
        metrics: GlyphMetrics::ZERO,
        word_id: 0,
        emphasis: false,
        char_boxes: None,
        position: Point::new(0.0, 0.0),
        word_pivot: None,
        word_anim: None,
        char_offset_in_word: 0,
    }
}

#[test]
fn punctuation_borrows_the_preceding_syllable_timing() {
    let row = PositionedRow {
        syllables: vec![
            bare_syl("wait", 0, 500),
            bare_syl("!!", 500, 501),
            bare_syl("go", 600, 900),
        ],
        origin: Point::new(0.0, 0.0),
        width: 0.0,
        timing: TimeRange::from_ms(0, 900).unwrap(),
        direction: TextDirection::Ltr,
    };
    assert_eq!(drive_timing(&row, 1), TimeRange::from_ms(0, 500).unwrap());
    assert_eq!(drive_timing(&row, 0), TimeRange::from_ms(0, 500).unwrap());
    assert_eq!(drive_timing(&row, 2), TimeRange::from_ms(600, 900).unwrap());
}

#[test]
fn leading_punctuation_drives_itself() {
    let row = PositionedRow {
        syllables: vec![bare_syl("...", 100, 200), bare_syl("oh", 200, 400)],
        origin: Point::new(0.0, 0.0),
        width: 0.0,
        timing: TimeRange::from_ms(100, 400).unwrap(),
        direction: TextDirection::Ltr,
    };
    assert_eq!(drive_timing(&row, 0), TimeRange::from_ms(100, 200).unwrap());
}
