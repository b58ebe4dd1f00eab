//! Rule-driven text replacement.

use crate::similarity::MatchRule;

/// Replaces every match of each rule with `target`, applying rules in order.
///
/// Invalid patterns are skipped. Capture references in `target` (`$1`,
/// `${name}`) are expanded against each rule's captures; use `$$` for a
/// literal dollar sign.
///
/// # Example
///
/// ```
/// use respace::{replace_text_with_rule, MatchRule};
///
/// let rules = [MatchRule::pattern("foo")];
/// assert_eq!(replace_text_with_rule("foo bar FOO", "baz", &rules), "baz bar baz");
/// ```
pub fn replace_text_with_rule(text: &str, target: &str, rules: &[MatchRule]) -> String {
    let mut result = text.to_string();

    for rule in rules {
        let regex = match rule {
            MatchRule::Pattern(source) => {
                match regex::RegexBuilder::new(source).case_insensitive(true).build() {
                    Ok(r) => r,
                    Err(_) => continue,
                }
            }
            MatchRule::Regex(regex) => regex.clone(),
        };
        result = regex.replace_all(&result, target).into_owned();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_all_occurrences() {
        let rules = [MatchRule::pattern("foo")];
        assert_eq!(
            replace_text_with_rule("foo bar foo", "baz", &rules),
            "baz bar baz"
        );
    }

    #[test]
    fn test_case_insensitive() {
        let rules = [MatchRule::pattern("foo")];
        assert_eq!(replace_text_with_rule("FOO Foo", "x", &rules), "x x");
    }

    #[test]
    fn test_rules_applied_in_order() {
        let rules = [MatchRule::pattern("a"), MatchRule::pattern("bb")];
        // First rule turns "ab" into "bb", which the second then rewrites
        assert_eq!(replace_text_with_rule("ab", "b", &rules), "b");
    }

    #[test]
    fn test_invalid_rule_skipped() {
        let rules = [MatchRule::pattern("(bad"), MatchRule::pattern("x")];
        assert_eq!(replace_text_with_rule("x", "y", &rules), "y");
    }

    #[test]
    fn test_capture_expansion() {
        let rules = [MatchRule::pattern(r"(\d+)-(\d+)")];
        assert_eq!(replace_text_with_rule("10-20", "${2}..${1}", &rules), "20..10");
    }
}
