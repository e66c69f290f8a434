use super::*;

fn syl(text: &str, start: u64, end: u64) -> Syllable {
    Syllable::new(text, TimeRange::from_ms(start, end).unwrap())
}

#[test]
fn trailing_whitespace_closes_a_word() {
    assert!(!syl("Hel", 0, 300).ends_word());
    assert!(syl("lo ", 300, 600).ends_word());
    assert!(syl("tab\t", 0, 1).ends_word());
    assert!(!syl("", 0, 1).ends_word());
}

#[test]
fn syllable_progress_matches_timing() {
    // "Hel"[0,300) "lo "[300,600) "world"[800,1200): at t=450 the second
    // syllable is active at half progress
    let line = LyricLine::karaoke(vec![
        syl("Hel", 0, 300),
        syl("lo ", 300, 600),
        syl("world", 800, 1200),
    ]);
    let LineVariant::Karaoke(k) = &line.variant else {
        panic!("expected karaoke variant");
    };
    let t = TimeMs(450);
    let active: Vec<usize> = k
        .syllables
        .iter()
        .enumerate()
        .filter(|(_, s)| s.timing.contains(t))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(active, vec![1]);
    assert!((k.syllables[1].progress(t) - 0.5).abs() < 1e-9);
}

#[test]
fn line_range_spans_first_start_to_last_end() {
    let line = LyricLine::karaoke(vec![syl("Hel", 0, 300), syl("world", 800, 1200)]);
    assert_eq!(line.time_range(), TimeRange::from_ms(0, 1200).unwrap());
    assert!(line.is_active(TimeMs(700)));
    assert!(!line.is_active(TimeMs(1200)));
}

#[test]
fn empty_karaoke_line_has_zero_range() {
    let line = LyricLine::karaoke(vec![]);
    assert_eq!(line.time_range(), TimeRange::default());
    assert!(!line.is_active(TimeMs(0)));
}

#[test]
fn synced_line_uses_its_own_span() {
    let line = LyricLine::synced("warming up now", TimeRange::from_ms(1000, 2400).unwrap());
    assert_eq!(line.time_range(), TimeRange::from_ms(1000, 2400).unwrap());
}

#[test]
fn line_metadata_defaults_survive_serde() {
    let json = r#"{
        "variant": { "Synced": { "text": "la", "timing": { "start": 0, "end": 100 } } }
    }"#;
    let line: LyricLine = serde_json::from_str(json).unwrap();
    assert_eq!(line.alignment, LineAlignment::Unspecified);
    assert!(!line.accompaniment);
    assert!(line.translation.is_none());

    let round: LyricLine = serde_json::from_str(&serde_json::to_string(&line).unwrap()).unwrap();
    assert_eq!(round, line);
}
