//! # Product Record Data Model
//!
//! Defines the output of one description parse: the verbatim input, the
//! derived product name, the optional fill size, and the pack count.
//!
//! ## Core Concepts
//!
//! - **ParsedRecord**: one row of output per input description
//! - **ProductSize**: numeric fill value plus canonical unit; absent when
//!   no recognizable size span was found
//! - **ProductCount**: pack count with the fixed unit label `COUNT`; never
//!   absent, defaults to 1
//!
//! Records serialize with spreadsheet-style column names
//! (`OriginalDescription`, `ProductName`, `ProductSize`, `ProductCount`)
//! so callers can feed them straight into tabular export.

use crate::unit_normalizer::CanonicalUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The structured result of parsing one product description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedRecord {
    /// The verbatim input description.
    pub original_description: String,

    /// The derived, title-cased product name. May be empty when the count
    /// and size matches consumed the whole description.
    pub product_name: String,

    /// The fill size, if a valid size span was found.
    pub product_size: Option<ProductSize>,

    /// The pack count; defaults to 1 when no explicit count was found.
    pub product_count: ProductCount,
}

/// A fill size: numeric value plus canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSize {
    /// The size value (e.g. 16.9 for "16.9 FLUID OUNCE").
    pub value: f64,
    /// The canonical unit.
    pub unit: CanonicalUnit,
}

/// A pack count. The unit label is always `COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCount {
    /// The count value.
    pub value: u32,
}

impl ProductCount {
    /// The fixed unit label for counts.
    pub const UNIT: &'static str = "COUNT";
}

impl Default for ProductCount {
    fn default() -> Self {
        Self { value: 1 }
    }
}

/// Write a numeric value without a trailing ".0" when it is integral.
fn fmt_value(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{}", value)
    }
}

impl fmt::Display for ProductSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_value(f, self.value)?;
        write!(f, " {}", self.unit)
    }
}

impl fmt::Display for ProductCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, Self::UNIT)
    }
}

impl fmt::Display for ParsedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.product_name, self.product_count)?;
        match &self.product_size {
            Some(size) => write!(f, " | {}", size),
            None => write!(f, " | -"),
        }
    }
}
