//! # Packparse
//!
//! Extracts structured product attributes (name, pack count, fill size)
//! from free-text retail product descriptions, e.g.
//! "12-PK 12 FL OZ Coca Cola Cans" -> name "Coca Cola Cans", count 12,
//! size 12 FLUID OUNCE.
//!
//! The pipeline is a layered set of heuristic text-pattern matchers:
//! cleaning, unit normalization, count and size extraction with precedence
//! between combo and standalone matches, and name derivation. How rows
//! arrive and where output goes is the caller's concern; the library core
//! does no I/O.

pub mod count_extraction;
pub mod description_parser;
pub mod description_patterns;
pub mod name_derivation;
pub mod product_model;
pub mod size_extraction;
pub mod text_cleaning;
pub mod unit_normalizer;

pub use description_parser::{DescriptionParser, ParserConfig};
pub use product_model::{ParsedRecord, ProductCount, ProductSize};
pub use unit_normalizer::{CanonicalUnit, UnitMatching, UnitNormalizer};
