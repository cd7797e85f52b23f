//! # Name Derivation Module
//!
//! Derives the product name from cleaned description text by removing the
//! matched count and size substrings and title-casing what remains.
//!
//! Removal works on explicit byte-offset spans rather than
//! replace-by-value: the matched text could recur elsewhere in the
//! description ("12-PK 12 FL OZ ..."), and span removal only ever deletes
//! the occurrence that actually matched.

use crate::description_patterns::{SEPARATOR_RUN, WHITESPACE_RUN};
use log::trace;

/// Derive the product name from cleaned text and the matched spans.
///
/// Spans are removed back to front so earlier offsets stay valid; a span
/// that no longer lands on valid boundaries after a prior removal (which
/// can only happen when spans overlap) is skipped rather than sliced
/// mid-match. After removal, runs of `-`, `|` and `*` become a single
/// space, whitespace is collapsed and trimmed, and each remaining
/// whitespace-delimited word is title-cased.
///
/// An empty result is valid: a description consumed entirely by its count
/// and size matches simply has no name.
pub fn derive_name(
    cleaned: &str,
    count_span: Option<(usize, usize)>,
    size_span: Option<(usize, usize)>,
) -> String {
    let mut spans: Vec<(usize, usize)> = count_span.into_iter().chain(size_span).collect();
    spans.sort_by(|a, b| b.0.cmp(&a.0));

    let mut text = cleaned.to_string();
    for (start, end) in spans {
        if let (Some(head), Some(tail)) = (text.get(..start), text.get(end..)) {
            text = format!("{}{}", head, tail);
        } else {
            trace!("Skipping invalid span {}..{} in '{}'", start, end, text);
        }
    }

    let text = SEPARATOR_RUN.replace_all(&text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    title_case(text.trim())
}

/// Title-case each whitespace-delimited word: first character uppercased,
/// the rest lowercased. Acronyms are not specially preserved.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_count_and_size_spans() {
        let cleaned = "12-PK 12 FL OZ COCA COLA CANS";
        // "12-PK" is 0..5, "12 FL OZ" is 6..14.
        let name = derive_name(cleaned, Some((0, 5)), Some((6, 14)));
        assert_eq!(name, "Coca Cola Cans");
    }

    #[test]
    fn test_removes_first_occurrence_only() {
        // The count text "12" recurs later in the description; only the
        // matched span is removed.
        let cleaned = "12 CT COLA 12 RACK";
        let name = derive_name(cleaned, Some((0, 5)), None);
        assert_eq!(name, "Cola 12 Rack");
    }

    #[test]
    fn test_no_spans_keeps_whole_text() {
        assert_eq!(derive_name("GENERIC SNACK BAG", None, None), "Generic Snack Bag");
    }

    #[test]
    fn test_separator_runs_become_spaces() {
        assert_eq!(derive_name("COLA--ZERO|SUGAR**PACK", None, None), "Cola Zero Sugar Pack");
    }

    #[test]
    fn test_fully_consumed_text_yields_empty_name() {
        let cleaned = "2 L";
        assert_eq!(derive_name(cleaned, None, Some((0, 3))), "");
    }

    #[test]
    fn test_overlapping_spans_are_skipped_not_sliced() {
        let cleaned = "12 CT SODA";
        // Removing 6..10 first leaves 0..8 out of range, so it is skipped.
        let name = derive_name(cleaned, Some((0, 8)), Some((6, 10)));
        assert_eq!(name, "12 Ct");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("COCA COLA CANS"), "Coca Cola Cans");
        assert_eq!(title_case("a"), "A");
        assert_eq!(title_case(""), "");
    }
}
