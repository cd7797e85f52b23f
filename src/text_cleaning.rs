//! # Text Cleaning Module
//!
//! Normalizes raw catalog description text into the working form the
//! extractors operate on: uppercase, punctuation reduced to an allowed set,
//! whitespace collapsed.

use crate::description_patterns::{DISALLOWED_CHARS, WHITESPACE_RUN};
use log::trace;

/// Clean a raw description into normalized working text.
///
/// Uppercases the input, replaces every character outside the allowed set
/// (word characters, whitespace, `.`, `-`, `|`, `/`) with a space, collapses
/// whitespace runs, and trims. Replacing rather than deleting keeps
/// punctuation from fusing adjacent tokens, while decimal points and
/// hyphenated pack markers survive intact.
///
/// Cleaning is a projection: applying it twice is a no-op.
///
/// # Examples
///
/// ```rust
/// use packparse::text_cleaning::clean_description;
///
/// assert_eq!(clean_description("16.9oz, Soda!"), "16.9OZ SODA");
/// assert_eq!(clean_description("  12-PK  Cola "), "12-PK COLA");
/// ```
pub fn clean_description(description: &str) -> String {
    let upper = description.to_uppercase();
    let spaced = DISALLOWED_CHARS.replace_all(&upper, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&spaced, " ");
    let cleaned = collapsed.trim().to_string();

    trace!("Cleaned description: '{}' -> '{}'", description, cleaned);
    cleaned
}
