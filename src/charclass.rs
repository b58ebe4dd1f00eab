//! Character classification for the spacing rules.
//!
//! Every rule that talks about "CJK", "word" or "all-range" characters goes
//! through these predicates, so the classifications stay consistent across
//! the whole pipeline. The ranges mirror the rule pattern constants in
//! [`crate::spacing`].

/// Check if character is a CJK ideograph, kana or compatibility ideograph.
///
/// Covered ranges: Hiragana/Katakana (U+3040-U+30FF), CJK Extension A
/// (U+3400-U+4DBF), CJK Unified Ideographs (U+4E00-U+9FFF) and CJK
/// Compatibility Ideographs (U+F900-U+FAFF).
pub fn is_cjk(c: char) -> bool {
    let code = c as u32;
    (0x3040..=0x30FF).contains(&code)
        || (0x3400..=0x4DBF).contains(&code)
        || (0x4E00..=0x9FFF).contains(&code)
        || (0xF900..=0xFAFF).contains(&code)
}

/// Check if character is an ASCII Latin letter or decimal digit.
pub fn is_latin_or_digit(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Check if character belongs to the fixed operator/punctuation symbol set.
pub fn is_symbol(c: char) -> bool {
    matches!(
        c,
        '!' | '@' | '#' | '$' | '%' | '^' | '&' | '+' | '-' | '=' | '/' | '|' | '<' | '>'
    )
}

/// Check if character is "word-like": Latin, digit or CJK.
///
/// This is the boundary class used by the bracket, hyphen and slash rules.
pub fn is_word(c: char) -> bool {
    is_latin_or_digit(c) || is_cjk(c)
}

/// Check if character is in the all-range: word-like or symbol.
///
/// The punctuation and operator rules use this as their "is this adjacent to
/// real content" test.
pub fn is_all_range(c: char) -> bool {
    is_word(c) || is_symbol(c)
}

/// Check if character counts as sentence punctuation for the spacing rules.
pub fn is_sentence_punctuation(c: char) -> bool {
    matches!(c, '!' | ';' | ',' | '?' | ':')
}
