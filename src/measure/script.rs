//! Script classification heuristics.
//!
//! These are coarse Unicode-block checks, not a full script itemizer. They
//! answer the three questions the layout pipeline actually asks: does this
//! text read right-to-left, is it a script where per-character emphasis reads
//! as noise, and is it nothing but punctuation.

use crate::foundation::core::TextDirection;
use crate::model::line::{LineVariant, LyricLine};

/// CJK ideographs, kana, Hangul, and their punctuation and fullwidth forms.
pub(crate) const fn is_cjk_char(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x11FF        // Hangul jamo
        | 0x2E80..=0x303F      // CJK radicals, Kangxi, CJK punctuation
        | 0x3040..=0x30FF      // hiragana, katakana
        | 0x3130..=0x318F      // Hangul compatibility jamo
        | 0x3400..=0x4DBF      // CJK extension A
        | 0x4E00..=0x9FFF      // CJK unified ideographs
        | 0xA960..=0xA97F      // Hangul jamo extended A
        | 0xAC00..=0xD7FF      // Hangul syllables, jamo extended B
        | 0xF900..=0xFAFF      // CJK compatibility ideographs
        | 0xFE30..=0xFE4F      // CJK compatibility forms
        | 0xFF00..=0xFFEF      // halfwidth and fullwidth forms
        | 0x20000..=0x2FA1F    // CJK extensions B..F
    )
}

const fn is_arabic_char(c: char) -> bool {
    matches!(c as u32,
        0x0600..=0x06FF
        | 0x0750..=0x077F      // Arabic supplement
        | 0x08A0..=0x08FF      // Arabic extended A
        | 0xFB50..=0xFDFF      // presentation forms A
        | 0xFE70..=0xFEFF      // presentation forms B
    )
}

const fn is_hebrew_char(c: char) -> bool {
    matches!(c as u32, 0x0590..=0x05FF | 0xFB1D..=0xFB4F)
}

const fn is_devanagari_char(c: char) -> bool {
    matches!(c as u32, 0x0900..=0x097F)
}

/// True for scripts where per-character emphasis animation is suppressed.
///
/// CJK text is syllable-per-glyph already, and Arabic and Devanagari shape
/// across joins, so animating individual characters tears the word apart.
/// Whitespace is ignored; text with no significant characters is not simple.
#[must_use]
pub fn is_simple_script(text: &str) -> bool {
    let mut significant = text.chars().filter(|c| !c.is_whitespace()).peekable();
    if significant.peek().is_none() {
        return false;
    }
    let mut all_cjk = true;
    let mut any_joining = false;
    for c in significant {
        if !is_cjk_char(c) {
            all_cjk = false;
        }
        if is_arabic_char(c) || is_devanagari_char(c) {
            any_joining = true;
        }
    }
    all_cjk || any_joining
}

/// True when the text contains any right-to-left script character.
#[must_use]
pub fn is_rtl_text(text: &str) -> bool {
    text.chars().any(|c| is_arabic_char(c) || is_hebrew_char(c))
}

/// Dominant flow direction for a whole line.
#[must_use]
pub fn line_direction(line: &LyricLine) -> TextDirection {
    let rtl = match &line.variant {
        LineVariant::Karaoke(k) => k.syllables.iter().any(|s| is_rtl_text(&s.text)),
        LineVariant::Synced(s) => is_rtl_text(&s.text),
    };
    if rtl {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}

/// True for non-empty text whose significant characters are all punctuation
/// or symbols. Such fragments carry no timing of their own worth animating
/// and borrow their neighbor's instead.
#[must_use]
pub fn is_pure_punctuation(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

#[cfg(test)]
#[path = "../../tests/unit/measure/script.rs"]
mod tests;
