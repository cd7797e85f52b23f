//! # Size Extraction Module
//!
//! Locates the fill-size quantity and unit within cleaned description text.
//! Two shapes are recognized:
//!
//! - **Combo form**: `<count> [-|X|/] <size> <unit>`, e.g. "8 X 500 ML",
//!   "8-500ML". The first number is a pack multiplier, the second the size
//!   value. A combo match anywhere in the text takes precedence over a
//!   simple match and additionally supplies the pack count.
//! - **Simple form**: `<size> <unit>`, e.g. "16.9OZ", "2 L".
//!
//! Candidates are scanned left to right and the first one whose trailing
//! letters normalize to a recognized unit wins. The normalization gate is
//! what keeps a bare number followed by a flavor code or brand word from
//! being misread as a size: when the letters are not a unit, the scan just
//! moves on to the next candidate.

use crate::description_patterns::{COMBO_SIZE, SIMPLE_SIZE};
use crate::unit_normalizer::{CanonicalUnit, UnitNormalizer};
use log::{debug, trace};
use regex::Match;

/// A fill-size match within cleaned description text.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeMatch {
    /// Pack multiplier supplied by the combo form, if that form matched.
    pub pack_count: Option<u32>,
    /// The size value (e.g. 500.0 for "500 ML").
    pub value: f64,
    /// The canonical unit the raw unit text normalized to.
    pub unit: CanonicalUnit,
    /// Start byte offset of the matched substring in the cleaned text.
    pub start: usize,
    /// End byte offset (exclusive) of the matched substring.
    pub end: usize,
}

impl SizeMatch {
    /// The matched substring within the cleaned text.
    pub fn text<'a>(&self, cleaned: &'a str) -> &'a str {
        &cleaned[self.start..self.end]
    }
}

/// Extract the fill size from cleaned description text.
///
/// The combo form is tried over the whole text before the simple form, so
/// "8 X 500ML" yields a 500 ML size with a pack count of 8 even though
/// "8 X" alone would also parse as a bare number. Returns `None` when no
/// candidate's unit text normalizes.
pub fn extract_size(cleaned: &str, normalizer: &UnitNormalizer) -> Option<SizeMatch> {
    let found = combo_match(cleaned, normalizer).or_else(|| simple_match(cleaned, normalizer));

    match &found {
        Some(size) => debug!(
            "Extracted size '{}' -> {} {}",
            size.text(cleaned),
            size.value,
            size.unit
        ),
        None => trace!("No size found in '{}'", cleaned),
    }
    found
}

/// Scan for the first combo-form candidate with a recognizable unit.
fn combo_match(cleaned: &str, normalizer: &UnitNormalizer) -> Option<SizeMatch> {
    for caps in COMBO_SIZE.captures_iter(cleaned) {
        let (Some(whole), Some(pack_m), Some(value_m), Some(unit_m)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };

        let Some((unit, end)) = resolve_unit(unit_m, caps.get(4), normalizer) else {
            trace!("Combo candidate '{}' has no recognizable unit", whole.as_str());
            continue;
        };
        let Ok(value) = value_m.as_str().parse::<f64>() else {
            continue;
        };
        let Ok(pack) = pack_m.as_str().parse::<u32>() else {
            continue;
        };

        return Some(SizeMatch {
            pack_count: Some(pack),
            value,
            unit,
            start: whole.start(),
            end,
        });
    }
    None
}

/// Scan for the first simple-form candidate with a recognizable unit.
fn simple_match(cleaned: &str, normalizer: &UnitNormalizer) -> Option<SizeMatch> {
    for caps in SIMPLE_SIZE.captures_iter(cleaned) {
        let (Some(whole), Some(value_m), Some(unit_m)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        let Some((unit, end)) = resolve_unit(unit_m, caps.get(3), normalizer) else {
            trace!("Size candidate '{}' has no recognizable unit", whole.as_str());
            continue;
        };
        let Ok(value) = value_m.as_str().parse::<f64>() else {
            continue;
        };

        return Some(SizeMatch {
            pack_count: None,
            value,
            unit,
            start: whole.start(),
            end,
        });
    }
    None
}

/// Resolve the unit text of a candidate, preferring the two-token join.
///
/// Trying "FL OZ" before "FL" makes the matched span cover the whole unit,
/// so name derivation strips it completely. Returns the canonical unit and
/// the end offset of the token(s) that produced it.
fn resolve_unit(
    first: Match<'_>,
    second: Option<Match<'_>>,
    normalizer: &UnitNormalizer,
) -> Option<(CanonicalUnit, usize)> {
    if let Some(second) = second {
        let joined = format!("{} {}", first.as_str(), second.as_str());
        if let Some(unit) = normalizer.normalize(&joined) {
            return Some((unit, second.end()));
        }
    }
    normalizer.normalize(first.as_str()).map(|unit| (unit, first.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(cleaned: &str) -> Option<SizeMatch> {
        extract_size(cleaned, &UnitNormalizer::new())
    }

    #[test]
    fn test_simple_size_with_space() {
        let size = extract("2 L SODA").unwrap();
        assert_eq!(size.value, 2.0);
        assert_eq!(size.unit, CanonicalUnit::Liter);
        assert_eq!(size.pack_count, None);
        assert_eq!(size.text("2 L SODA"), "2 L");
    }

    #[test]
    fn test_simple_size_without_space() {
        let size = extract("16.9OZ WATER").unwrap();
        assert_eq!(size.value, 16.9);
        assert_eq!(size.unit, CanonicalUnit::FluidOunce);
        assert_eq!(size.text("16.9OZ WATER"), "16.9OZ");
    }

    #[test]
    fn test_two_token_unit_matches_whole_span() {
        let cleaned = "12 FL OZ COCA COLA CANS";
        let size = extract(cleaned).unwrap();
        assert_eq!(size.value, 12.0);
        assert_eq!(size.unit, CanonicalUnit::FluidOunce);
        assert_eq!(size.text(cleaned), "12 FL OZ");
    }

    #[test]
    fn test_combo_form_supplies_pack_count() {
        let size = extract("8 X 500 ML").unwrap();
        assert_eq!(size.pack_count, Some(8));
        assert_eq!(size.value, 500.0);
        assert_eq!(size.unit, CanonicalUnit::Milliliter);
    }

    #[test]
    fn test_combo_form_with_hyphen_and_no_spaces() {
        let cleaned = "8-500ML PEPSI";
        let size = extract(cleaned).unwrap();
        assert_eq!(size.pack_count, Some(8));
        assert_eq!(size.value, 500.0);
        assert_eq!(size.text(cleaned), "8-500ML");
    }

    #[test]
    fn test_combo_precedes_simple() {
        // "4 X 12 FL OZ" should win over any later simple-form size.
        let cleaned = "SPARKLING 4 X 12 FL OZ CANS 1 L DISPLAY";
        let size = extract(cleaned).unwrap();
        assert_eq!(size.pack_count, Some(4));
        assert_eq!(size.value, 12.0);
        assert_eq!(size.text(cleaned), "4 X 12 FL OZ");
    }

    #[test]
    fn test_flavor_code_is_not_a_size() {
        // "7UP"-style runs of digits and letters must not register when the
        // letters are not a unit.
        assert_eq!(extract("COLA 12 ABC"), None);
        assert_eq!(extract("3 MUSKETEERS BAR"), None);
    }

    #[test]
    fn test_scan_continues_past_non_unit_candidate() {
        let cleaned = "35 NESTLE WATER BOTTLES 16.9 OZ";
        let size = extract(cleaned).unwrap();
        assert_eq!(size.value, 16.9);
        assert_eq!(size.unit, CanonicalUnit::FluidOunce);
        assert_eq!(size.text(cleaned), "16.9 OZ");
    }

    #[test]
    fn test_no_digits_yields_none() {
        assert_eq!(extract("GENERIC SNACK BAG"), None);
        assert_eq!(extract(""), None);
    }
}
