//! # Count Extraction Module
//!
//! Locates an explicit pack/count quantity in cleaned description text,
//! independent of the fill size. Recognition runs through an ordered chain
//! of strategies, loosest last, first success wins:
//!
//! 1. inline `<digits> [-] <keyword>` ("12-PK", "10 CT", "6PK/");
//! 2. the phrase `PACK OF <digits>`;
//! 3. a whitespace token of digits adjacent to a keyword token in either
//!    order ("PK 6"), catching shapes the inline pattern misses.
//!
//! When nothing matches, the caller applies the default count of 1 with no
//! matched substring, so nothing is stripped from the product name.

use crate::description_patterns::{INLINE_COUNT, PACK_OF, TOKEN};
use log::{debug, trace};

/// Count keywords that mark an adjacent number as a pack count.
const COUNT_KEYWORDS: [&str; 6] = ["COUNT", "CT", "PACK", "PK", "P", "PK/"];

/// An explicit pack-count match within cleaned description text.
#[derive(Debug, Clone, PartialEq)]
pub struct CountMatch {
    /// The pack count value.
    pub value: u32,
    /// The keyword that marked the number as a count (e.g. "PK", "CT").
    pub keyword: String,
    /// Start byte offset of the matched substring in the cleaned text.
    pub start: usize,
    /// End byte offset (exclusive) of the matched substring.
    pub end: usize,
}

impl CountMatch {
    /// The matched substring within the cleaned text.
    pub fn text<'a>(&self, cleaned: &'a str) -> &'a str {
        &cleaned[self.start..self.end]
    }
}

/// A single count-recognition strategy.
type Strategy = fn(&str) -> Option<CountMatch>;

/// Strategies in precedence order; reordering this list is the only change
/// needed to reprioritize recognition.
const STRATEGIES: [Strategy; 3] = [inline_keyword, pack_of_phrase, adjacent_tokens];

/// Extract an explicit pack count from cleaned description text.
///
/// Returns `None` when no strategy matches; absence of an explicit count is
/// a normal outcome and resolves to a default of 1 at the record level.
pub fn extract_count(cleaned: &str) -> Option<CountMatch> {
    let found = STRATEGIES.iter().find_map(|strategy| strategy(cleaned));

    match &found {
        Some(count) => debug!(
            "Extracted count '{}' -> {} ({})",
            count.text(cleaned),
            count.value,
            count.keyword
        ),
        None => trace!("No explicit count in '{}'", cleaned),
    }
    found
}

/// Inline form: digits directly adjacent to a count keyword, optionally
/// separated by space and/or a hyphen.
fn inline_keyword(cleaned: &str) -> Option<CountMatch> {
    let caps = INLINE_COUNT.captures(cleaned)?;
    let whole = caps.get(0)?;
    let value = caps.get(1)?.as_str().parse().ok()?;
    let keyword = caps.get(2)?.as_str().to_string();

    Some(CountMatch {
        value,
        keyword,
        start: whole.start(),
        end: whole.end(),
    })
}

/// Phrase form: "PACK OF <digits>".
fn pack_of_phrase(cleaned: &str) -> Option<CountMatch> {
    let caps = PACK_OF.captures(cleaned)?;
    let whole = caps.get(0)?;
    let value = caps.get(1)?.as_str().parse().ok()?;

    Some(CountMatch {
        value,
        keyword: "PACK".to_string(),
        start: whole.start(),
        end: whole.end(),
    })
}

/// Token-adjacency fallback: a digits token next to a keyword token in
/// either order.
fn adjacent_tokens(cleaned: &str) -> Option<CountMatch> {
    let tokens: Vec<(usize, usize, &str)> = TOKEN
        .find_iter(cleaned)
        .map(|m| (m.start(), m.end(), m.as_str()))
        .collect();

    for pair in tokens.windows(2) {
        let (first, second) = (pair[0], pair[1]);

        let (digits, keyword) = if is_digits(first.2) && is_count_keyword(second.2) {
            (first.2, second.2)
        } else if is_count_keyword(first.2) && is_digits(second.2) {
            (second.2, first.2)
        } else {
            continue;
        };

        let Ok(value) = digits.parse::<u32>() else {
            continue;
        };

        return Some(CountMatch {
            value,
            keyword: keyword.to_string(),
            start: first.0,
            end: second.1,
        });
    }
    None
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn is_count_keyword(token: &str) -> bool {
    COUNT_KEYWORDS.contains(&token)
}
