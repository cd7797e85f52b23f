//! # Description Patterns Module
//!
//! This module contains the compiled regex patterns used across the
//! description-parsing pipeline. Keeping them in one place avoids
//! recompilation and keeps the extraction modules focused on logic.
//!
//! All size/count patterns assume they run against cleaned text
//! (uppercased, punctuation reduced, whitespace collapsed), so they only
//! need to handle uppercase letters and single spaces.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters outside the allowed set (word chars, whitespace, '.', '-', '|', '/').
    pub static ref DISALLOWED_CHARS: Regex =
        Regex::new(r"[^\w\s.\-|/]").expect("Disallowed-character pattern should be valid");

    /// Runs of whitespace, collapsed to a single space during cleaning.
    pub static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("Whitespace-run pattern should be valid");

    /// Combo size form: "<count> [-|X|/] <size> <unit>", e.g. "8 X 500 ML", "8-500ML".
    ///
    /// The unit may span one or two letter tokens ("ML", "FL OZ"); the second
    /// token is captured separately so the extractor can try the joined form
    /// first and fall back to the first token alone.
    pub static ref COMBO_SIZE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*[-X/]\s*(\d+(?:\.\d+)?)\s*([A-Z.\-]+)(?:\s+([A-Z.\-]+))?")
            .expect("Combo size pattern should be valid");

    /// Simple size form: "<size> <unit>", e.g. "16.9OZ", "2 L", "12 FL OZ".
    pub static ref SIMPLE_SIZE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*([A-Z.\-]+)(?:\s+([A-Z.\-]+))?")
            .expect("Simple size pattern should be valid");

    /// Inline count form: "<digits> [-] <keyword>", e.g. "12-PK", "10 CT", "6PK/".
    ///
    /// Keywords are word-boundary guarded ("PK/" delimits itself with the
    /// slash) so that "2 PACKS" or "12 PEPSI" do not produce a count.
    pub static ref INLINE_COUNT: Regex =
        Regex::new(r"(\d+)\s*-?\s*(PK/|COUNT\b|CT\b|PACK\b|PK\b|P\b)")
            .expect("Inline count pattern should be valid");

    /// Phrase count form: "PACK OF <digits>".
    pub static ref PACK_OF: Regex =
        Regex::new(r"PACK OF (\d+)").expect("Pack-of pattern should be valid");

    /// Separator runs removed during name derivation.
    pub static ref SEPARATOR_RUN: Regex =
        Regex::new(r"[\-|*]+").expect("Separator-run pattern should be valid");

    /// Whitespace-delimited tokens, with byte offsets, for the token-adjacency
    /// count fallback.
    pub static ref TOKEN: Regex = Regex::new(r"\S+").expect("Token pattern should be valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(!DISALLOWED_CHARS.as_str().is_empty());
        assert!(!COMBO_SIZE.as_str().is_empty());
        assert!(!SIMPLE_SIZE.as_str().is_empty());
        assert!(!INLINE_COUNT.as_str().is_empty());
    }

    #[test]
    fn test_inline_count_word_boundaries() {
        assert!(INLINE_COUNT.is_match("12-PK"));
        assert!(INLINE_COUNT.is_match("10 CT"));
        assert!(INLINE_COUNT.is_match("6PK/"));
        assert!(!INLINE_COUNT.is_match("12 PEPSI"));
        assert!(!INLINE_COUNT.is_match("2 PACKS"));
    }

    #[test]
    fn test_combo_size_shapes() {
        assert!(COMBO_SIZE.is_match("8 X 500 ML"));
        assert!(COMBO_SIZE.is_match("8-500ML"));
        assert!(COMBO_SIZE.is_match("12/16.9 OZ"));
        assert!(!COMBO_SIZE.is_match("16.9 OZ"));
    }
}
