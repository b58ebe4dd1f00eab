//! # Spacing Engine
//!
//! Rule-based spacing normalization for mixed-script text: CJK ideographs
//! interleaved with Latin letters, digits, punctuation, brackets, quotes and
//! operators.
//!
//! ## Rule pipeline
//!
//! Categories are applied in a fixed order regardless of how the caller
//! ordered the selection, because later rules see the output of earlier ones:
//!
//! 1. **BRACKET** - spacing around enclosures, plus inner-edge trimming
//! 2. **QUOTE** - spacing between word characters and quote marks
//! 3. **PUNCTUATION** - trailing space after sentence punctuation
//! 4. **OPERATOR** - spaces around `+ - * / = &` between all-range characters
//! 5. **HYPHEN_SLASH** - spaces around internal hyphens/slashes, edge hyphens
//! 6. **CJK_WITH_ENGLISH_NUMBER** - spaces at CJK/Latin-digit transitions
//!
//! Two final passes always run: collapsing runs of plain spaces and
//! re-trimming whitespace just inside enclosures.

use crate::charclass;
use rayon::prelude::*;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// A selectable class of spacing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpaceCategory {
    /// Expands to every other category.
    All,
    /// Space after `! ; , ? :` between all-range characters.
    Punctuation,
    /// Spacing around `()[]{}<>` enclosures and inner-edge trimming.
    Bracket,
    /// Spacing between word characters and `"`, backtick or curly quotes.
    Quote,
    /// Spaces around `+ - * / = &` between all-range characters.
    Operator,
    /// Spaces at CJK/Latin-or-digit transitions, both directions.
    CjkWithEnglishNumber,
    /// Spaces around internal hyphens and slashes; edge hyphens stay attached.
    HyphenSlash,
}

impl SpaceCategory {
    /// Every concrete category, in pipeline-independent declaration order.
    pub const ALL_CATEGORIES: [SpaceCategory; 6] = [
        SpaceCategory::Punctuation,
        SpaceCategory::Bracket,
        SpaceCategory::Quote,
        SpaceCategory::Operator,
        SpaceCategory::CjkWithEnglishNumber,
        SpaceCategory::HyphenSlash,
    ];

    /// Returns the canonical name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceCategory::All => "ALL",
            SpaceCategory::Punctuation => "PUNCTUATION",
            SpaceCategory::Bracket => "BRACKET",
            SpaceCategory::Quote => "QUOTE",
            SpaceCategory::Operator => "OPERATOR",
            SpaceCategory::CjkWithEnglishNumber => "CJK_WITH_ENGLISH_NUMBER",
            SpaceCategory::HyphenSlash => "HYPHEN_SLASH",
        }
    }
}

impl fmt::Display for SpaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(SpaceCategory::All),
            "PUNCTUATION" => Ok(SpaceCategory::Punctuation),
            "BRACKET" => Ok(SpaceCategory::Bracket),
            "QUOTE" => Ok(SpaceCategory::Quote),
            "OPERATOR" => Ok(SpaceCategory::Operator),
            "CJK_WITH_ENGLISH_NUMBER" => Ok(SpaceCategory::CjkWithEnglishNumber),
            "HYPHEN_SLASH" => Ok(SpaceCategory::HyphenSlash),
            _ => Err(crate::Error::UnknownCategory(s.to_string())),
        }
    }
}

/// Parses category names, silently dropping unrecognized ones.
///
/// Unknown names are treated as absent rather than fatal; an empty result
/// falls back to the full rule set when passed to the engine.
pub fn parse_categories<S: AsRef<str>>(names: &[S]) -> Vec<SpaceCategory> {
    names
        .iter()
        .filter_map(|name| name.as_ref().parse().ok())
        .collect()
}

// ============================================================================
// Rule patterns
// ============================================================================

/// CJK code-point ranges as a regex character-class fragment.
///
/// Must stay in sync with [`charclass::is_cjk`].
const CJK_RANGE: &str = r"\x{3040}-\x{30FF}\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}";
const ENGLISH_NUMBER_RANGE: &str = "A-Za-z0-9";
const SYMBOL_RANGE: &str = r"!@#$%^&+\-=/|<>";

fn word_range() -> String {
    format!("{ENGLISH_NUMBER_RANGE}{CJK_RANGE}")
}

fn all_range() -> String {
    format!("{ENGLISH_NUMBER_RANGE}{SYMBOL_RANGE}{CJK_RANGE}")
}

// Regex patterns (compiled once using LazyLock)
static RE_TRIM_INSIDE_SYMBOLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([<\[\{\("“‘])\s*([^<>\[\]\{\}\(\)"“‘”’]*?)\s*([>\]\}\)"”’])"#).unwrap()
});

static RE_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    let w = word_range();
    Regex::new(&format!("([{w}])(-)([{w}])")).unwrap()
});

static RE_SLASH: LazyLock<Regex> = LazyLock::new(|| {
    let w = word_range();
    Regex::new(&format!("([{w}])(/)([{w}])")).unwrap()
});

static RE_CJK_WITH_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("([{CJK_RANGE}])([{ENGLISH_NUMBER_RANGE}])")).unwrap()
});

static RE_EN_WITH_CJK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("([{ENGLISH_NUMBER_RANGE}])([{CJK_RANGE}])")).unwrap()
});

static RE_QUOTE_BEFORE: LazyLock<Regex> = LazyLock::new(|| {
    let w = word_range();
    Regex::new(&format!(r#"([{w}])(["`“‘])"#)).unwrap()
});

static RE_QUOTE_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    let w = word_range();
    Regex::new(&format!(r#"(["`”’])([{w}])"#)).unwrap()
});

static RE_OPERATOR: LazyLock<Regex> = LazyLock::new(|| {
    let a = all_range();
    Regex::new(&format!(r"([{a}])([+\-*/=&])([{a}])")).unwrap()
});

static RE_BRACKET_OUTSIDE_BEFORE: LazyLock<Regex> = LazyLock::new(|| {
    let w = word_range();
    Regex::new(&format!(r"([{w}])([\[\({{<])")).unwrap()
});

static RE_BRACKET_OUTSIDE_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    let w = word_range();
    Regex::new(&format!(r"([\]\)}}>])([{w}])")).unwrap()
});

static RE_BRACKET_INSIDE_OPERATOR: LazyLock<Regex> = LazyLock::new(|| {
    let w = word_range();
    Regex::new(&format!(r"([{w}])([+\-*/=&])([{w}])")).unwrap()
});

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ ]{2,}").unwrap());

static RE_ALL_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// ============================================================================
// Whitespace helpers
// ============================================================================

/// Strips every whitespace character from the text.
pub fn remove_text_space_all(content: &str) -> String {
    RE_ALL_SPACE.replace_all(content, "").trim().to_string()
}

/// Collapses runs of two or more plain spaces into one and trims the result.
pub fn remove_text_space_to_one(content: &str) -> String {
    RE_MULTI_SPACE.replace_all(content, " ").trim().to_string()
}

// ============================================================================
// Rule application
// ============================================================================

/// Trims whitespace immediately inside bracket/quote enclosures.
fn trim_inside_symbols(text: &str) -> String {
    RE_TRIM_INSIDE_SYMBOLS
        .replace_all(text, |caps: &Captures| {
            format!("{}{}{}", &caps[1], caps[2].trim(), &caps[3])
        })
        .into_owned()
}

/// Operator/hyphen/slash spacing for content captured inside an enclosure.
fn process_bracket_content(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let result = RE_BRACKET_INSIDE_OPERATOR.replace_all(content, "$1 $2 $3");
    let result = RE_HYPHEN.replace_all(&result, "$1 $2 $3");
    RE_SLASH.replace_all(&result, "$1 $2 $3").into_owned()
}

fn apply_bracket_rules(text: &str) -> String {
    let result = RE_BRACKET_OUTSIDE_BEFORE.replace_all(text, "$1 $2");
    let result = RE_BRACKET_OUTSIDE_AFTER.replace_all(&result, "$1 $2");
    RE_TRIM_INSIDE_SYMBOLS
        .replace_all(&result, |caps: &Captures| {
            format!(
                "{}{}{}",
                &caps[1],
                process_bracket_content(caps[2].trim()),
                &caps[3]
            )
        })
        .into_owned()
}

fn apply_quote_rules(text: &str) -> String {
    let result = RE_QUOTE_BEFORE.replace_all(text, "$1 $2");
    RE_QUOTE_AFTER.replace_all(&result, "$1 $2").into_owned()
}

/// Inserts a space after sentence punctuation sitting between two all-range
/// characters.
///
/// The character after the punctuation is a lookahead: it stays available as
/// the left neighbor of the next match, while the matched pair itself is
/// consumed by the scan.
fn apply_punctuation_rules(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len()
            && charclass::is_all_range(chars[i])
            && charclass::is_sentence_punctuation(chars[i + 1])
            && charclass::is_all_range(chars[i + 2])
        {
            out.push(chars[i]);
            out.push(chars[i + 1]);
            out.push(' ');
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn apply_operator_rules(text: &str) -> String {
    RE_OPERATOR.replace_all(text, "$1 $2 $3").into_owned()
}

/// Edge-hyphen handling: a prefix hyphen (`-1`) keeps no leading space but
/// gains a trailing one, a suffix hyphen (`100-`) keeps no trailing space but
/// gains a leading one.
fn apply_hyphen_edge_rule(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;
    while i < len {
        let c = chars[i];

        // Hyphen at the very start, followed by a word character
        if i == 0 && c == '-' && len > 1 && charclass::is_word(chars[1]) {
            out.push('-');
            out.push(' ');
            i += 1;
            continue;
        }

        // Whitespace, hyphen, word character
        if c.is_whitespace()
            && i + 2 < len
            && chars[i + 1] == '-'
            && charclass::is_word(chars[i + 2])
        {
            out.push(c);
            out.push('-');
            out.push(' ');
            i += 2;
            continue;
        }

        // Word character, hyphen, then whitespace or end of string
        if charclass::is_word(c)
            && i + 1 < len
            && chars[i + 1] == '-'
            && (i + 2 >= len || chars[i + 2].is_whitespace())
        {
            out.push(c);
            out.push(' ');
            out.push('-');
            i += 2;
            continue;
        }

        out.push(c);
        i += 1;
    }
    out
}

fn apply_hyphen_slash_rules(text: &str) -> String {
    let result = RE_HYPHEN.replace_all(text, "$1 $2 $3");
    let result = RE_SLASH.replace_all(&result, "$1 $2 $3");
    apply_hyphen_edge_rule(&result)
}

fn apply_cjk_with_english_number(text: &str) -> String {
    let result = RE_CJK_WITH_EN.replace_all(text, "$1 $2");
    RE_EN_WITH_CJK.replace_all(&result, "$1 $2").into_owned()
}

// ============================================================================
// Engine entry points
// ============================================================================

/// Normalizes spacing in `text` with every rule category enabled.
///
/// Equivalent to [`insert_text_space_with`] with an empty category slice.
///
/// # Example
///
/// ```
/// use respace::insert_text_space;
///
/// assert_eq!(insert_text_space("中文abc"), "中文 abc");
/// assert_eq!(insert_text_space("word(arg)"), "word (arg)");
/// ```
pub fn insert_text_space(text: &str) -> String {
    insert_text_space_with(text, &[])
}

/// Normalizes spacing in `text`, applying only the selected rule categories.
///
/// An empty selection, or one containing [`SpaceCategory::All`], enables the
/// full rule set. Text that is empty after trimming is returned unchanged;
/// this is a normalization no-op, not a failure.
///
/// # Example
///
/// ```
/// use respace::{insert_text_space_with, SpaceCategory};
///
/// let spaced = insert_text_space_with("a-b", &[SpaceCategory::HyphenSlash]);
/// assert_eq!(spaced, "a - b");
/// ```
pub fn insert_text_space_with(text: &str, categories: &[SpaceCategory]) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let all = categories.is_empty() || categories.contains(&SpaceCategory::All);
    let has = |category: SpaceCategory| all || categories.contains(&category);

    let mut result = text.to_string();

    if has(SpaceCategory::Bracket) {
        result = apply_bracket_rules(&result);
    }
    if has(SpaceCategory::Quote) {
        result = apply_quote_rules(&result);
    }
    if has(SpaceCategory::Punctuation) {
        result = apply_punctuation_rules(&result);
    }
    if has(SpaceCategory::Operator) {
        result = apply_operator_rules(&result);
    }
    if has(SpaceCategory::HyphenSlash) {
        result = apply_hyphen_slash_rules(&result);
    }
    if has(SpaceCategory::CjkWithEnglishNumber) {
        result = apply_cjk_with_english_number(&result);
    }

    // Earlier rules can stack spaces or push them against an inner edge
    result = remove_text_space_to_one(&result);
    result = trim_inside_symbols(&result);

    result.trim().to_string()
}

/// Applies [`insert_text_space`] to every element of the list.
pub fn insert_space_batch<S: AsRef<str> + Sync>(list: &[S]) -> Vec<String> {
    insert_space_batch_with(list, &[])
}

/// Applies [`insert_text_space_with`] to every element of the list.
///
/// Elements are independent, so the batch runs in parallel; output order
/// matches input order.
pub fn insert_space_batch_with<S: AsRef<str> + Sync>(
    list: &[S],
    categories: &[SpaceCategory],
) -> Vec<String> {
    list.par_iter()
        .map(|item| insert_text_space_with(item.as_ref(), categories))
        .collect()
}
