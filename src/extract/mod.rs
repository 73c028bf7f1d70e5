//! Measurement extraction core
//!
//! Scans free text (typically OCR output) for numeric values followed by a
//! unit recognized for the requested category, and reports each one in
//! canonical "number canonical-unit" form. Pure and deterministic: the alias
//! table and regex are rebuilt from the read-only registry on every call, so
//! there is no shared mutable state between extractions.

pub mod aliases;
pub mod registry;

use std::fmt;

use regex::RegexBuilder;
use thiserror::Error;
use tracing::debug;

pub use aliases::{expand_units, validate_aliases};
pub use registry::{Category, UnitRegistry};

/// Errors surfaced by the extraction core
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The requested category is not one of the eight supported names
    #[error("unknown category '{0}' (expected one of: width, depth, height, item_weight, maximum_weight_recommendation, voltage, wattage, item_volume)")]
    UnknownCategory(String),

    /// Two canonical units in one category claim the same alias spelling
    #[error("alias '{alias}' maps to both '{first}' and '{second}'")]
    AliasCollision {
        alias: String,
        first: String,
        second: String,
    },

    /// The alias alternation failed to compile (should not happen for the
    /// built-in table since every alias is escaped)
    #[error("failed to build unit pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A single extracted measurement: the number as it appeared in the text and
/// the canonical unit it was resolved to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Measurement {
    /// Numeric text exactly as matched (e.g. "2.31", "500")
    pub value: String,
    /// Canonical unit name (e.g. "pound", "millilitre")
    pub unit: String,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Measurement extractor over a [`UnitRegistry`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    registry: UnitRegistry,
}

impl Extractor {
    /// Create an extractor and validate the alias tables of every category.
    ///
    /// Validation catches a future table edit that maps one spelling to two
    /// different canonical units within the same category.
    pub fn new() -> Result<Self, ExtractError> {
        let registry = UnitRegistry::new();
        for category in Category::ALL {
            validate_aliases(registry.units_for(category))?;
        }
        Ok(Self { registry })
    }

    /// Access the underlying registry
    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Extract all measurements for `category` from `text`, by category name.
    ///
    /// Fails with [`ExtractError::UnknownCategory`] when the name is not
    /// registered. An empty result means no measurement was found, which is
    /// not an error.
    pub fn extract(&self, text: &str, category: &str) -> Result<Vec<Measurement>, ExtractError> {
        let category = self.registry.category(category)?;
        self.extract_category(text, category)
    }

    /// Extract all measurements for an already-resolved category.
    ///
    /// Matches are returned in source order, without deduplication or unit
    /// conversion.
    pub fn extract_category(
        &self,
        text: &str,
        category: Category,
    ) -> Result<Vec<Measurement>, ExtractError> {
        let expanded = expand_units(self.registry.units_for(category));

        // Longest alias first, so "fluid ounce" beats "ounce" and "inch"
        // beats "in" at the same position. The regex crate prefers the
        // leftmost alternation branch, which makes this ordering load-bearing.
        let mut unit_names: Vec<&str> = expanded.keys().map(|k| k.as_str()).collect();
        unit_names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        // Every alias is escaped; the symbolic forms (ft³, in³) and any
        // future punctuation-bearing alias must match as literal text.
        let alternation = unit_names
            .iter()
            .map(|u| regex::escape(u))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = format!(r"(\d+(?:\.\d+)?)\s*({})", alternation);
        let matcher = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

        let results: Vec<Measurement> = matcher
            .captures_iter(text)
            .filter_map(|caps| {
                let value = caps.get(1)?.as_str().to_string();
                let alias = caps.get(2)?.as_str().to_lowercase();
                let unit = expanded.get(&alias)?.clone();
                Some(Measurement { value, unit })
            })
            .collect();

        debug!(
            "Extracted {} measurement(s) for category {} from {} chars of text",
            results.len(),
            category,
            text.len()
        );

        Ok(results)
    }
}
