//! # Description Parser
//!
//! The orchestrator of the parsing pipeline: clean the raw text, extract
//! the fill size (which may carry a combo-form pack count), extract the
//! standalone count, resolve precedence between the two, derive the name,
//! and assemble the output record.
//!
//! Parsing is a pure function of the input string and the parser
//! configuration. There is no shared mutable state, so a batch of
//! descriptions can be parsed in any order.
//!
//! ## Usage
//!
//! ```rust
//! use packparse::description_parser::DescriptionParser;
//!
//! let parser = DescriptionParser::new();
//! let record = parser.parse("12-PK 12 FL OZ Coca Cola Cans");
//!
//! assert_eq!(record.product_name, "Coca Cola Cans");
//! assert_eq!(record.product_count.value, 12);
//! assert_eq!(record.product_size.unwrap().to_string(), "12 FLUID OUNCE");
//! ```

use crate::count_extraction::extract_count;
use crate::name_derivation::derive_name;
use crate::product_model::{ParsedRecord, ProductCount, ProductSize};
use crate::size_extraction::extract_size;
use crate::text_cleaning::clean_description;
use crate::unit_normalizer::{UnitMatching, UnitNormalizer};
use log::debug;

/// Configuration options for the description parser.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Unit matching strategy for size extraction. Exact matching is the
    /// default; fuzzy matching tolerates misspelled units at the cost of
    /// possible false positives on short tokens.
    pub unit_matching: UnitMatching,
}

/// Parses free-text product descriptions into structured records.
pub struct DescriptionParser {
    normalizer: UnitNormalizer,
}

impl DescriptionParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            normalizer: UnitNormalizer::with_matching(config.unit_matching),
        }
    }

    /// Parse one product description into a structured record.
    ///
    /// Never fails: a description with no recognizable count parses with a
    /// default count of 1, and one with no recognizable size parses with an
    /// absent size.
    pub fn parse(&self, description: &str) -> ParsedRecord {
        let cleaned = clean_description(description);

        let size = extract_size(&cleaned, &self.normalizer);
        let count = extract_count(&cleaned);

        // The combo form ("8 X 500 ML") is the stronger signal: its leading
        // number is unambiguously the pack count, so it overrides whatever
        // the standalone count extractor found. The standalone match's span
        // is still stripped from the name either way.
        let count_value = size
            .as_ref()
            .and_then(|s| s.pack_count)
            .or_else(|| count.as_ref().map(|c| c.value))
            .unwrap_or(1);

        let product_name = derive_name(
            &cleaned,
            count.as_ref().map(|c| (c.start, c.end)),
            size.as_ref().map(|s| (s.start, s.end)),
        );

        let record = ParsedRecord {
            original_description: description.to_string(),
            product_name,
            product_size: size.map(|s| ProductSize {
                value: s.value,
                unit: s.unit,
            }),
            product_count: ProductCount { value: count_value },
        };

        debug!("Parsed '{}' -> {}", description, record);
        record
    }

    /// Parse a batch of descriptions, order-preserving, one record per
    /// input.
    pub fn parse_all<'a, I>(&self, descriptions: I) -> Vec<ParsedRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        descriptions.into_iter().map(|d| self.parse(d)).collect()
    }
}

impl Default for DescriptionParser {
    fn default() -> Self {
        Self::new()
    }
}
