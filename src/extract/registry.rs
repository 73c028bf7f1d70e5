//! Measurement category registry
//!
//! Maps each supported product attribute (width, item_weight, voltage, ...)
//! to the closed set of canonical units that are valid for it.

use std::fmt;
use std::str::FromStr;

use super::ExtractError;

/// Product attribute categories that can be extracted from a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Width,
    Depth,
    Height,
    ItemWeight,
    MaximumWeightRecommendation,
    Voltage,
    Wattage,
    ItemVolume,
}

impl Category {
    /// All supported categories, in display order
    pub const ALL: [Category; 8] = [
        Category::Width,
        Category::Depth,
        Category::Height,
        Category::ItemWeight,
        Category::MaximumWeightRecommendation,
        Category::Voltage,
        Category::Wattage,
        Category::ItemVolume,
    ];

    /// The snake_case name used on the CLI and in config files
    pub fn name(&self) -> &'static str {
        match self {
            Category::Width => "width",
            Category::Depth => "depth",
            Category::Height => "height",
            Category::ItemWeight => "item_weight",
            Category::MaximumWeightRecommendation => "maximum_weight_recommendation",
            Category::Voltage => "voltage",
            Category::Wattage => "wattage",
            Category::ItemVolume => "item_volume",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| ExtractError::UnknownCategory(s.to_string()))
    }
}

// Length units are shared by the three dimension categories
const DIMENSION_UNITS: &[&str] = &["centimetre", "foot", "inch", "metre", "millimetre", "yard"];

const WEIGHT_UNITS: &[&str] = &[
    "gram",
    "kilogram",
    "microgram",
    "milligram",
    "ounce",
    "pound",
    "ton",
];

const VOLTAGE_UNITS: &[&str] = &["kilovolt", "millivolt", "volt"];

const WATTAGE_UNITS: &[&str] = &["kilowatt", "watt"];

const VOLUME_UNITS: &[&str] = &[
    "centilitre",
    "cubic foot",
    "cubic inch",
    "cup",
    "decilitre",
    "fluid ounce",
    "gallon",
    "imperial gallon",
    "litre",
    "microlitre",
    "millilitre",
    "pint",
    "quart",
];

/// Read-only mapping from category to its canonical unit set.
///
/// Constructed once at startup and never mutated. The per-call alias tables
/// ([`super::aliases::expand_units`]) are derived from these sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitRegistry;

impl UnitRegistry {
    pub fn new() -> Self {
        UnitRegistry
    }

    /// Canonical units valid for `category`. Non-empty for every category.
    pub fn units_for(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Width | Category::Depth | Category::Height => DIMENSION_UNITS,
            Category::ItemWeight | Category::MaximumWeightRecommendation => WEIGHT_UNITS,
            Category::Voltage => VOLTAGE_UNITS,
            Category::Wattage => WATTAGE_UNITS,
            Category::ItemVolume => VOLUME_UNITS,
        }
    }

    /// Resolve a category by its snake_case name
    pub fn category(&self, name: &str) -> Result<Category, ExtractError> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_have_units() {
        let registry = UnitRegistry::new();
        for category in Category::ALL {
            assert!(
                !registry.units_for(category).is_empty(),
                "category {} has no units",
                category
            );
        }
    }

    #[test]
    fn test_category_name_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.name().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_name() {
        let result: Result<Category, _> = "temperature".parse();
        assert!(matches!(result, Err(ExtractError::UnknownCategory(_))));
    }

    #[test]
    fn test_dimension_categories_share_units() {
        let registry = UnitRegistry::new();
        assert_eq!(
            registry.units_for(Category::Width),
            registry.units_for(Category::Height)
        );
        assert_eq!(
            registry.units_for(Category::Depth),
            registry.units_for(Category::Width)
        );
    }

    #[test]
    fn test_volume_units_contain_multiword_entries() {
        let registry = UnitRegistry::new();
        let units = registry.units_for(Category::ItemVolume);
        assert!(units.contains(&"fluid ounce"));
        assert!(units.contains(&"imperial gallon"));
    }
}
