//! # Unit Normalizer Module
//!
//! Maps raw fill-size unit tokens (possibly misspelled or variant) onto a
//! small closed set of canonical units. Normalization is the gate the size
//! extractor uses to tell a real size apart from a bare number followed by
//! unrelated letters: a token that fails to normalize is simply not a unit.
//!
//! Two matching strategies are available:
//!
//! - [`UnitMatching::Exact`] (default): lookup against an exhaustively
//!   enumerated key set. No false positives.
//! - [`UnitMatching::Fuzzy`] (opt-in): nearest-key lookup with a similarity
//!   floor, tolerating minor misspellings such as "GALON". Risky on very
//!   short tokens (a one-letter typo can land within the floor of a
//!   two-letter key), which is why it is not the default.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Default similarity floor for fuzzy unit matching.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.8;

/// Canonical fill-size units every recognized raw spelling resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalUnit {
    /// Fluid ounces ("FL OZ", "OZ", "OUNCE", ...)
    #[serde(rename = "FLUID OUNCE")]
    FluidOunce,
    /// Milliliters ("ML", "MILLILITRE", ...)
    #[serde(rename = "ML")]
    Milliliter,
    /// Liters ("L", "LTR", "LITRE", ...)
    #[serde(rename = "L")]
    Liter,
    /// Gallons ("GAL", "GALLON", ...)
    #[serde(rename = "GAL")]
    Gallon,
}

impl CanonicalUnit {
    /// The fixed output label for this unit.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalUnit::FluidOunce => "FLUID OUNCE",
            CanonicalUnit::Milliliter => "ML",
            CanonicalUnit::Liter => "L",
            CanonicalUnit::Gallon => "GAL",
        }
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Recognized raw unit spellings and the canonical unit each maps to.
///
/// Keys are stored pre-normalized (uppercase, no spaces or periods), so the
/// table is looked up after the same normalization is applied to the input
/// token.
static UNIT_TABLE: LazyLock<HashMap<&'static str, CanonicalUnit>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Fluid ounces
    map.insert("FLOZ", CanonicalUnit::FluidOunce);
    map.insert("FLUIDOUNCE", CanonicalUnit::FluidOunce);
    map.insert("FL", CanonicalUnit::FluidOunce);
    map.insert("OZ", CanonicalUnit::FluidOunce);
    map.insert("OUNCE", CanonicalUnit::FluidOunce);
    map.insert("OUNCES", CanonicalUnit::FluidOunce);
    map.insert("OZCANS", CanonicalUnit::FluidOunce);

    // Milliliters
    map.insert("ML", CanonicalUnit::Milliliter);
    map.insert("MILLILITRE", CanonicalUnit::Milliliter);
    map.insert("MILLILITRES", CanonicalUnit::Milliliter);
    map.insert("MILLILITER", CanonicalUnit::Milliliter);
    map.insert("MILLILITERS", CanonicalUnit::Milliliter);

    // Liters
    map.insert("L", CanonicalUnit::Liter);
    map.insert("LT", CanonicalUnit::Liter);
    map.insert("LTR", CanonicalUnit::Liter);
    map.insert("LITRE", CanonicalUnit::Liter);
    map.insert("LITRES", CanonicalUnit::Liter);
    map.insert("LITER", CanonicalUnit::Liter);
    map.insert("LITERS", CanonicalUnit::Liter);

    // Gallons
    map.insert("GAL", CanonicalUnit::Gallon);
    map.insert("GALLON", CanonicalUnit::Gallon);
    map.insert("GALLONS", CanonicalUnit::Gallon);

    map
});

/// Matching strategy for unit lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitMatching {
    /// Exact lookup against the recognized key set.
    Exact,
    /// Nearest-key lookup by Levenshtein similarity ratio; candidates below
    /// the floor are rejected. Ties are broken by the lexicographically
    /// smallest key so the result never depends on table iteration order.
    Fuzzy {
        /// Minimum similarity ratio in `0.0..=1.0` for a key to qualify.
        min_similarity: f64,
    },
}

impl Default for UnitMatching {
    fn default() -> Self {
        UnitMatching::Exact
    }
}

/// Normalizes raw unit tokens to canonical units under a configured
/// matching strategy.
///
/// # Examples
///
/// ```rust
/// use packparse::unit_normalizer::{CanonicalUnit, UnitNormalizer};
///
/// let normalizer = UnitNormalizer::new();
/// assert_eq!(normalizer.normalize("fl. oz"), Some(CanonicalUnit::FluidOunce));
/// assert_eq!(normalizer.normalize("XYZ"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnitNormalizer {
    matching: UnitMatching,
}

impl UnitNormalizer {
    /// Create a normalizer with exact matching (the default).
    pub fn new() -> Self {
        Self {
            matching: UnitMatching::Exact,
        }
    }

    /// Create a normalizer with an explicit matching strategy.
    pub fn with_matching(matching: UnitMatching) -> Self {
        Self { matching }
    }

    /// Normalize a raw unit token to its canonical unit.
    ///
    /// Internal spaces and periods are stripped and the token uppercased
    /// before lookup, so "fl. oz", "FL OZ" and "floz" all resolve the same
    /// way. Returns `None` when no recognized unit qualifies; this is the
    /// normal "not a unit" outcome, not an error.
    pub fn normalize(&self, raw: &str) -> Option<CanonicalUnit> {
        let key: String = raw
            .chars()
            .filter(|c| *c != ' ' && *c != '.')
            .collect::<String>()
            .to_uppercase();

        if key.is_empty() {
            return None;
        }

        if let Some(unit) = UNIT_TABLE.get(key.as_str()) {
            trace!("Unit token '{}' matched exactly as {}", raw, unit);
            return Some(*unit);
        }

        match self.matching {
            UnitMatching::Exact => None,
            UnitMatching::Fuzzy { min_similarity } => {
                let matched = closest_key(&key, min_similarity).map(|k| UNIT_TABLE[k]);
                if let Some(unit) = matched {
                    debug!("Unit token '{}' fuzzy-matched as {}", raw, unit);
                }
                matched
            }
        }
    }

    /// The configured matching strategy.
    pub fn matching(&self) -> UnitMatching {
        self.matching
    }
}

/// All recognized raw spellings with their canonical units.
pub fn known_units() -> impl Iterator<Item = (&'static str, CanonicalUnit)> {
    UNIT_TABLE.iter().map(|(k, v)| (*k, *v))
}

/// Find the most similar table key at or above the similarity floor.
fn closest_key(key: &str, min_similarity: f64) -> Option<&'static str> {
    let mut best: Option<(&'static str, f64)> = None;

    for candidate in UNIT_TABLE.keys() {
        let score = similarity(key, candidate);
        if score < min_similarity {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_key, best_score)) => {
                score > best_score || (score == best_score && *candidate < best_key)
            }
        };
        if better {
            best = Some((candidate, score));
        }
    }

    best.map(|(k, _)| k)
}

/// Similarity ratio in `0.0..=1.0` based on Levenshtein distance over the
/// longer string's length.
fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Levenshtein edit distance between two strings.
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    #[allow(clippy::needless_range_loop)]
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] { 0 } else { 1 };

            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[len1][len2]
}
