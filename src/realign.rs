//! # Fragment Realigner
//!
//! Runs the spacing engine over the concatenation of an ordered fragment
//! sequence, then re-cuts the rewritten text along the original fragment
//! boundaries. Rewriting only inserts, removes or shifts whitespace, so each
//! fragment's non-whitespace content survives verbatim; the realigner locates
//! it with a single forward scan and emits engine-inserted spacing as
//! separate single-space entries.
//!
//! The scan is deliberately not a general sequence aligner: it never
//! backtracks past a failed partial match, and an unlocatable fragment falls
//! back to verbatim emission rather than re-synchronizing. Content is never
//! dropped; spacing alignment is best-effort.

use crate::spacing::{insert_text_space_with, SpaceCategory};

/// Per-fragment record used while walking the rewritten text.
struct FragmentInfo {
    /// The fragment's content with every whitespace character removed.
    stripped: Vec<char>,
    /// Char length of the original fragment, for cursor advance on fallback.
    original_len: usize,
}

/// Respaces an ordered fragment sequence while preserving its boundaries.
///
/// Concatenating the output reproduces [`crate::insert_text_space`] applied
/// to the concatenated input. Every non-whitespace input fragment appears as
/// exactly one contiguous output entry; spacing inserted by the engine
/// arrives as separate `" "` entries. Whitespace-only fragments contribute no
/// content and do not break alignment.
///
/// # Example
///
/// ```
/// use respace::insert_text_space_with_words;
///
/// let fragments = ["中文", "abc"];
/// let spaced = insert_text_space_with_words(&fragments);
/// assert_eq!(spaced, vec!["中文", " ", "abc"]);
/// ```
pub fn insert_text_space_with_words<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    insert_text_space_with_words_categories(fragments, &[])
}

/// Like [`insert_text_space_with_words`], applying only the selected rule
/// categories.
pub fn insert_text_space_with_words_categories<S: AsRef<str>>(
    fragments: &[S],
    categories: &[SpaceCategory],
) -> Vec<String> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let full: String = fragments.iter().map(|f| f.as_ref()).collect();
    let processed = insert_text_space_with(&full, categories);

    realign_fragments(fragments, &processed)
}

/// Re-cuts `processed` along the boundaries of the original fragments.
///
/// Split out from the public entry point so the fallback path can be
/// exercised directly: the real engine never deletes non-space characters,
/// which makes an unmatched fragment unreachable through
/// [`insert_text_space_with_words`].
fn realign_fragments<S: AsRef<str>>(fragments: &[S], processed: &str) -> Vec<String> {
    let processed: Vec<char> = processed.chars().collect();

    let infos: Vec<FragmentInfo> = fragments
        .iter()
        .filter_map(|fragment| {
            let fragment = fragment.as_ref();
            let stripped: Vec<char> = fragment.chars().filter(|c| !c.is_whitespace()).collect();
            if stripped.is_empty() {
                None
            } else {
                Some(FragmentInfo {
                    stripped,
                    original_len: fragment.chars().count(),
                })
            }
        })
        .collect();

    let mut result: Vec<String> = Vec::new();
    let mut cursor = 0;

    // Leading spacing before the first fragment
    while cursor < processed.len() && processed[cursor] == ' ' {
        result.push(" ".to_string());
        cursor += 1;
    }

    for info in &infos {
        let mut match_start: Option<usize> = None;
        let mut match_end: Option<usize> = None;
        let mut search = cursor;
        let mut matched = 0;

        while search < processed.len() && matched < info.stripped.len() {
            if processed[search] == ' ' {
                search += 1;
                continue;
            }

            if processed[search] == info.stripped[matched] {
                if matched == 0 {
                    match_start = Some(search);
                }
                matched += 1;
                search += 1;
                if matched == info.stripped.len() {
                    match_end = Some(search - 1);
                }
            } else if match_start.is_some() {
                // Discard the partial match; the current character is retried
                // as a fresh start on the next iteration
                matched = 0;
                match_start = None;
            } else {
                search += 1;
            }
        }

        match (match_start, match_end) {
            (Some(start), Some(end)) => {
                // Only spacing survives from the gap before the match
                for i in cursor..start {
                    if processed[i] == ' ' {
                        result.push(" ".to_string());
                    }
                }

                // The literal matched span, including any spaces the engine
                // inserted between the fragment's first and last character
                result.push(processed[start..=end].iter().collect());
                cursor = end + 1;

                while cursor < processed.len() && processed[cursor] == ' ' {
                    result.push(" ".to_string());
                    cursor += 1;
                }
            }
            _ => {
                // Unlocatable fragment: emit its content verbatim and keep
                // walking from where it would have ended
                result.push(info.stripped.iter().collect());
                cursor += info.original_len;
            }
        }
    }

    // Trailing spacing past the last fragment
    while cursor < processed.len() {
        if processed[cursor] == ' ' {
            result.push(" ".to_string());
        }
        cursor += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spacing::insert_text_space;

    #[test]
    fn test_empty_input() {
        let empty: Vec<String> = Vec::new();
        assert!(insert_text_space_with_words(&empty).is_empty());
    }

    #[test]
    fn test_cjk_boundary_split() {
        let result = insert_text_space_with_words(&["中文", "abc"]);
        assert_eq!(result, vec!["中文", " ", "abc"]);
    }

    #[test]
    fn test_plain_fragments_keep_spacing() {
        let result = insert_text_space_with_words(&["hello", " ", "world"]);
        assert_eq!(result, vec!["hello", " ", "world"]);
    }

    #[test]
    fn test_whitespace_only_fragment_does_not_break_alignment() {
        let result = insert_text_space_with_words(&["中文", "  ", "abc"]);
        // The engine collapses the double space; alignment still holds
        assert_eq!(result, vec!["中文", " ", "abc"]);
    }

    #[test]
    fn test_concatenation_invariant() {
        let cases: Vec<Vec<&str>> = vec![
            vec!["中文", "abc"],
            vec!["word", "(arg)"],
            vec!["a", "-", "b"],
            vec!["你好,", "世界"],
            vec!["  ", "中文abc", " "],
            vec!["说\"", "hello", "\"里"],
        ];
        for fragments in cases {
            let joined: String = fragments.concat();
            let expected = insert_text_space(&joined);
            let output = insert_text_space_with_words(&fragments);
            assert_eq!(output.concat(), expected, "fragments: {fragments:?}");
        }
    }

    #[test]
    fn test_content_preserved_per_fragment() {
        let fragments = ["中文abc", "词典", "(note)"];
        let output = insert_text_space_with_words(&fragments);
        let non_space: Vec<&String> =
            output.iter().filter(|s| !s.trim().is_empty()).collect();
        assert_eq!(non_space.len(), 3);
        for (fragment, entry) in fragments.iter().zip(non_space) {
            let stripped: String = fragment.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(entry.replace(' ', ""), stripped);
        }
    }

    #[test]
    fn test_fragment_split_mid_word() {
        // Boundary falls inside what the engine treats as one run; the
        // second fragment's matched span carries the inserted space
        let result = insert_text_space_with_words(&["中", "文abc"]);
        assert_eq!(result.concat(), "中文 abc");
        assert_eq!(result, vec!["中", "文 abc"]);
    }

    #[test]
    fn test_categories_restricted() {
        // The hyphen is part of the fragment's non-whitespace content, so
        // the whole spaced span comes back as one entry
        let result =
            insert_text_space_with_words_categories(&["a-b"], &[SpaceCategory::HyphenSlash]);
        assert_eq!(result, vec!["a - b"]);
    }

    #[test]
    fn test_fallback_emits_verbatim_content() {
        // Adversarial rewritten text missing the middle fragment entirely;
        // unreachable via the engine, which never deletes non-space chars
        let output = realign_fragments(&["abc", "xyz", "def"], "abc def");
        assert!(output.contains(&"xyz".to_string()), "output: {output:?}");
        assert_eq!(output.iter().filter(|s| *s == "xyz").count(), 1);
        assert!(output.contains(&"abc".to_string()));
    }

    #[test]
    fn test_fallback_never_drops_content() {
        let output = realign_fragments(&["one", "two"], "");
        assert_eq!(output, vec!["one", "two"]);
    }

    #[test]
    fn test_forward_scan_does_not_rewind() {
        // The partial match on "ab" dies at 'x' and scanning resumes at the
        // same character; skipped characters are never revisited
        let output = realign_fragments(&["aba"], "abx aba");
        assert_eq!(output, vec![" ", "aba"]);
    }

    #[test]
    fn test_spaces_skipped_during_matching() {
        // Spaces are transparent to the matcher, so the leftmost span wins
        // even when a tighter one exists later
        let output = realign_fragments(&["aba"], "ab aba");
        assert_eq!(output, vec!["ab a"]);
    }

    #[test]
    fn test_trailing_spaces_emitted() {
        let output = realign_fragments(&["abc"], "abc  ");
        assert_eq!(output, vec!["abc", " ", " "]);
    }
}
