//! Half-width katakana to full-width conversion
//!
//! The postal datasets store kana names in the JIS X 0201 half-width block
//! (U+FF61..=U+FF9F). Runs of those glyphs are NFKC-normalized so a trailing
//! voiced or semi-voiced sound mark composes with the kana before it
//! (ｶﾞ -> ガ, ﾊﾟ -> パ). Every other character is copied through untouched.

use unicode_normalization::UnicodeNormalization;

/// Signature of an injectable kana normalizer
pub type KanaNormalizer = fn(&str) -> String;

fn is_half_width_kana(ch: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&ch)
}

/// Convert every half-width katakana glyph in `text` to its full-width form
pub fn to_full_width_kana(text: &str) -> String {
    if !text.chars().any(is_half_width_kana) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut run = String::new();

    for ch in text.chars() {
        if is_half_width_kana(ch) {
            run.push(ch);
            continue;
        }
        flush_run(&mut run, &mut out);
        out.push(ch);
    }
    flush_run(&mut run, &mut out);

    out
}

fn flush_run(run: &mut String, out: &mut String) {
    if run.is_empty() {
        return;
    }
    for ch in run.nfkc() {
        // A sound mark with nothing to combine with stays a spacing glyph.
        out.push(match ch {
            '\u{3099}' => '\u{309B}',
            '\u{309A}' => '\u{309C}',
            other => other,
        });
    }
    run.clear();
}

/// Identity normalizer, for callers that want raw field values
pub fn keep_as_is(text: &str) -> String {
    text.to_string()
}
