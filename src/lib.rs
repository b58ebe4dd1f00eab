//! # respace
//!
//! Spacing normalization for mixed-script text: CJK ideographs interleaved
//! with Latin letters, digits, punctuation, brackets, quotes and operators.
//!
//! The crate has two primitives:
//!
//! - **Spacing engine** ([`insert_text_space`]): an ordered pipeline of
//!   pattern-based rewrites that inserts single spaces at category-specific
//!   boundaries, collapses repeated spaces and trims whitespace just inside
//!   enclosures. A pure `text -> text` function.
//! - **Fragment realigner** ([`insert_text_space_with_words`]): runs the
//!   engine over the concatenation of an ordered fragment sequence (tokens
//!   from an upstream tokenizer, say) and re-cuts the result along the
//!   original fragment boundaries, so segment structure survives respacing.
//!
//! Both are total functions: malformed input degrades to a best-effort
//! result, never an error.
//!
//! ## Quick Start
//!
//! ```
//! use respace::{insert_text_space, insert_text_space_with_words};
//!
//! assert_eq!(insert_text_space("中文abc测试"), "中文 abc 测试");
//!
//! let fragments = ["中文", "abc"];
//! assert_eq!(insert_text_space_with_words(&fragments), vec!["中文", " ", "abc"]);
//! ```
//!
//! Rule categories can be restricted:
//!
//! ```
//! use respace::{insert_text_space_with, SpaceCategory};
//!
//! let spaced = insert_text_space_with("a-b", &[SpaceCategory::HyphenSlash]);
//! assert_eq!(spaced, "a - b");
//! ```

pub mod charclass;
pub mod error;
pub mod realign;
pub mod replace;
pub mod similarity;
pub mod spacing;
pub mod timecode;

// Re-exports
pub use error::{Error, Result};
pub use realign::{insert_text_space_with_words, insert_text_space_with_words_categories};
pub use replace::replace_text_with_rule;
pub use similarity::{check_text_match_with_rule, MatchRule};
pub use spacing::{
    insert_space_batch, insert_space_batch_with, insert_text_space, insert_text_space_with,
    parse_categories, remove_text_space_all, remove_text_space_to_one, SpaceCategory,
};
pub use timecode::{check_time, format_time, parse_time};

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED_SAMPLES: &[&str] = &[
        "中文abc",
        "系统需要5GB内存",
        "word(arg)",
        "你好,世界!见\"注\"里",
        "a-b和c/d",
        "-1 is negative",
        "价格=100元",
    ];

    #[test]
    fn test_join_matches_plain_engine() {
        // Realigner output concatenates to exactly the engine output
        for sample in MIXED_SAMPLES {
            let fragments: Vec<String> = sample
                .chars()
                .collect::<Vec<_>>()
                .chunks(2)
                .map(|chunk| chunk.iter().collect())
                .collect();
            let expected = insert_text_space(sample);
            let output = insert_text_space_with_words(&fragments);
            assert_eq!(output.concat(), expected, "sample: {sample}");
        }
    }

    #[test]
    fn test_fragment_content_survives_in_order() {
        for sample in MIXED_SAMPLES {
            let fragments: Vec<String> = sample
                .split_inclusive(char::is_whitespace)
                .map(str::to_string)
                .collect();
            let output = insert_text_space_with_words(&fragments);
            let joined_stripped: String = output
                .concat()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let input_stripped: String =
                sample.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(joined_stripped, input_stripped, "sample: {sample}");
        }
    }

    #[test]
    fn test_engine_is_stable_after_one_pass() {
        for sample in MIXED_SAMPLES {
            let once = insert_text_space(sample);
            assert_eq!(insert_text_space(&once), once, "sample: {sample}");
        }
    }

    #[test]
    fn test_selection_order_is_irrelevant() {
        let forward = insert_text_space_with(
            "中文abc,词(x)",
            &[SpaceCategory::Bracket, SpaceCategory::CjkWithEnglishNumber],
        );
        let backward = insert_text_space_with(
            "中文abc,词(x)",
            &[SpaceCategory::CjkWithEnglishNumber, SpaceCategory::Bracket],
        );
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_categories_from_json_config() {
        let categories: Vec<SpaceCategory> =
            serde_json::from_str("[\"BRACKET\", \"HYPHEN_SLASH\"]").unwrap();
        assert_eq!(insert_text_space_with("word(a-b)", &categories), "word (a - b)");
    }

    #[test]
    fn test_batch_matches_single() {
        let batch = insert_space_batch(MIXED_SAMPLES);
        for (input, output) in MIXED_SAMPLES.iter().zip(&batch) {
            assert_eq!(output, &insert_text_space(input));
        }
    }
}
