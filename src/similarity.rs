//! Percentage-based text matching against a rule list.
//!
//! Content is normalized (control characters and whitespace stripped,
//! lowercased) before any rule runs, so rules match against a compact form of
//! the text. Each rule's matches contribute `matched_len / total_len` percent
//! and consume the matched text, so overlapping rules cannot double-count the
//! same characters.

use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// A matching rule: a pattern source compiled case-insensitively on use, or
/// a prebuilt [`Regex`] applied as-is.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// Pattern source; compiled case-insensitively, skipped if invalid.
    Pattern(String),
    /// Prebuilt regex, used with its own flags.
    Regex(Regex),
}

impl MatchRule {
    /// Creates a rule from a pattern source.
    ///
    /// Compilation is deferred; an invalid pattern is skipped at match time
    /// rather than reported.
    pub fn pattern(source: impl Into<String>) -> Self {
        MatchRule::Pattern(source.into())
    }

    /// Compiles a pattern eagerly, case-insensitively.
    ///
    /// Unlike [`MatchRule::pattern`], an invalid pattern surfaces as
    /// [`crate::Error::Pattern`].
    pub fn regex(source: &str) -> Result<Self> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(MatchRule::Regex(regex))
    }

    fn compile(&self) -> Option<Regex> {
        match self {
            MatchRule::Pattern(source) => RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .ok(),
            MatchRule::Regex(regex) => Some(regex.clone()),
        }
    }
}

impl From<Regex> for MatchRule {
    fn from(regex: Regex) -> Self {
        MatchRule::Regex(regex)
    }
}

impl From<&str> for MatchRule {
    fn from(source: &str) -> Self {
        MatchRule::pattern(source)
    }
}

/// Strips control characters and whitespace and lowercases the content.
///
/// Returns `None` when nothing remains after trimming.
fn normalize_text(content: &str) -> Option<String> {
    if content.trim().is_empty() {
        return None;
    }

    let processed: String = content
        .chars()
        .filter(|c| {
            let code = *c as u32;
            !(code <= 0x1F || code == 0x7F) && !c.is_whitespace()
        })
        .flat_map(char::to_lowercase)
        .collect();

    if processed.is_empty() {
        None
    } else {
        Some(processed)
    }
}

/// Scores how much of `content` the rules cover, as a percentage 0-100.
///
/// Matched text is consumed as it is counted, and the score saturates at 100.
/// Invalid rules are skipped, never fatal. `quick` is a quick-reject list of
/// normalized substrings checked before the rules.
///
/// When `only_check_is_has` is set, every path resolves to 0: the quick list
/// and the rules are still evaluated, but a hit returns 0 just like the final
/// fallthrough does. Callers of this mode rely on the evaluation side effects
/// being cheap, not on the score.
pub fn check_text_match_with_rule(
    content: &str,
    rules: &[MatchRule],
    quick: &[String],
    only_check_is_has: bool,
) -> u8 {
    let normalize = match normalize_text(content) {
        Some(n) => n,
        None => return 0,
    };

    if only_check_is_has {
        for word in quick {
            if word.chars().count() > normalize.chars().count() {
                continue;
            }
            if normalize.contains(word.as_str()) {
                return 0;
            }
        }

        for rule in rules {
            let regex = match rule.compile() {
                Some(r) => r,
                None => continue,
            };
            if regex.is_match(&normalize) {
                return 0;
            }
        }

        return 0;
    }

    let total = normalize.chars().count();
    let mut percentage: u32 = 0;
    let mut process = normalize.clone();

    for rule in rules {
        let regex = match rule.compile() {
            Some(r) => r,
            None => continue,
        };

        // Snapshot the matches before consuming; removals must not shift the
        // scan for this rule
        let matches: Vec<String> = regex
            .find_iter(&process)
            .map(|m| m.as_str().to_string())
            .collect();

        for matched in matches {
            let match_percentage = (matched.chars().count() * 100 / total) as u32;
            percentage += match_percentage;
            process = process.replacen(&matched, "", 1);

            if percentage >= 100 {
                return 100;
            }
        }
    }

    percentage.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_match() {
        let rules = [MatchRule::pattern("hello")];
        // Normalized content is "helloworld" (10 chars), match covers 5
        assert_eq!(check_text_match_with_rule("Hello World", &rules, &[], false), 50);
    }

    #[test]
    fn test_full_match() {
        let rules = [MatchRule::pattern("helloworld")];
        assert_eq!(
            check_text_match_with_rule("Hello World", &rules, &[], false),
            100
        );
    }

    #[test]
    fn test_no_match() {
        let rules = [MatchRule::pattern("absent")];
        assert_eq!(check_text_match_with_rule("Hello World", &rules, &[], false), 0);
    }

    #[test]
    fn test_empty_content() {
        let rules = [MatchRule::pattern(".*")];
        assert_eq!(check_text_match_with_rule("   ", &rules, &[], false), 0);
        // Control characters vanish during normalization too
        assert_eq!(check_text_match_with_rule("\u{0007}", &rules, &[], false), 0);
    }

    #[test]
    fn test_case_insensitive_pattern() {
        let rules = [MatchRule::pattern("HELLO")];
        assert_eq!(check_text_match_with_rule("hello", &rules, &[], false), 100);
    }

    #[test]
    fn test_invalid_pattern_skipped() {
        let rules = [MatchRule::pattern("(unclosed"), MatchRule::pattern("ok")];
        assert_eq!(check_text_match_with_rule("ok", &rules, &[], false), 100);
    }

    #[test]
    fn test_matched_text_consumed_once() {
        // Both rules match "aa", but the second runs against consumed text
        let rules = [MatchRule::pattern("aabb"), MatchRule::pattern("aa")];
        // "aabbcc" (6 chars): "aabb" scores 66 and is removed; "aa" no longer
        // matches
        assert_eq!(
            check_text_match_with_rule("aabbcc", &rules, &[], false),
            66
        );
    }

    #[test]
    fn test_score_saturates_at_100() {
        let rules = [MatchRule::pattern("a"), MatchRule::pattern("b")];
        assert_eq!(check_text_match_with_rule("ab", &rules, &[], false), 100);
    }

    #[test]
    fn test_has_mode_always_zero() {
        // The has-only mode resolves to 0 on every path, including rule hits
        let rules = [MatchRule::pattern("hello")];
        assert_eq!(check_text_match_with_rule("hello", &rules, &[], true), 0);
        assert_eq!(check_text_match_with_rule("other", &rules, &[], true), 0);

        let quick = vec!["spam".to_string()];
        assert_eq!(check_text_match_with_rule("spam here", &[], &quick, true), 0);
    }

    #[test]
    fn test_prebuilt_regex_rule() {
        let rule = MatchRule::regex(r"\d+").unwrap();
        assert_eq!(
            check_text_match_with_rule("12345", &[rule], &[], false),
            100
        );
        assert!(MatchRule::regex("(bad").is_err());
    }

    #[test]
    fn test_normalization_strips_controls_and_whitespace() {
        let rules = [MatchRule::pattern("abc")];
        assert_eq!(
            check_text_match_with_rule("A\u{0007} B\tC", &rules, &[], false),
            100
        );
    }
}
