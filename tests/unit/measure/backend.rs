use super::*;

fn style() -> TextStyle {
    TextStyle {
        size_px: 10.0,
        ..TextStyle::default()
    }
}

#[test]
fn narrow_and_wide_graphemes_advance_differently() {
    let m = FixedAdvanceMeasurer::default();
    let s = style();
    assert!((m.measure("ab", &s).width - 12.0).abs() < 1e-9);
    assert!((m.measure("\u{65e5}\u{672c}", &s).width - 20.0).abs() < 1e-9);
    assert!((m.measure("a\u{65e5}", &s).width - 16.0).abs() < 1e-9);
}

#[test]
fn empty_text_measures_zero() {
    let m = FixedAdvanceMeasurer::default();
    assert_eq!(m.measure("", &style()), GlyphMetrics::ZERO);
}

#[test]
fn metrics_scale_with_font_size() {
    let m = FixedAdvanceMeasurer::default();
    let s = style();
    let metrics = m.measure("a", &s);
    assert!((metrics.height - 12.0).abs() < 1e-9);
    assert!((metrics.baseline - 10.0).abs() < 1e-9);
}

#[test]
fn char_bounds_tile_the_run() {
    let m = FixedAdvanceMeasurer::default();
    let s = style();
    let boxes = m.char_bounds("abc", &s);
    assert_eq!(boxes.len(), 3);
    assert!((boxes[0].x0 - 0.0).abs() < 1e-9);
    assert!((boxes[1].x0 - boxes[0].x1).abs() < 1e-9);
    assert!((boxes[2].x1 - m.measure("abc", &s).width).abs() < 1e-9);
}

#[test]
fn combining_sequences_count_as_one_grapheme() {
    let m = FixedAdvanceMeasurer::default();
    let s = style();
    // "e" plus combining acute is a single cluster
    assert_eq!(m.char_bounds("e\u{301}", &s).len(), 1);
    assert!((m.measure("e\u{301}", &s).width - 6.0).abs() < 1e-9);
}

#[test]
fn space_width_defaults_to_measuring_a_space() {
    let m = FixedAdvanceMeasurer::default();
    assert!((m.space_width(&style()) - 6.0).abs() < 1e-9);
}
