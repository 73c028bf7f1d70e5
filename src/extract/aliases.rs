//! Unit alias expansion
//!
//! Product labels abbreviate units in many ways ("lb", "lbs", "fl oz",
//! "milliliter"). This module maps every recognized spelling back to its
//! canonical unit. The table is declarative so the full set of accepted
//! spellings is auditable in one place.

use std::collections::HashMap;

use super::ExtractError;

/// Aliases for canonical units that have more than just their own name.
///
/// Units absent from this table (cup, pint, quart, centimetre, millivolt,
/// microlitre) are matched by their canonical spelling only.
const ALIAS_TABLE: &[(&str, &[&str])] = &[
    ("pound", &["lb", "lbs"]),
    ("ounce", &["oz"]),
    ("gram", &["g"]),
    ("kilogram", &["kg"]),
    ("ton", &["tons"]),
    ("milligram", &["mg"]),
    ("microgram", &["mcg"]),
    ("volt", &["v"]),
    ("kilovolt", &["kv"]),
    ("watt", &["w"]),
    ("kilowatt", &["kw"]),
    ("litre", &["l", "liter"]),
    ("millilitre", &["ml", "milliliter"]),
    ("centilitre", &["cl", "centiliter"]),
    ("cubic foot", &["ft\u{b3}"]),
    ("cubic inch", &["in\u{b3}"]),
    ("decilitre", &["dl", "deciliter"]),
    ("fluid ounce", &["fl oz"]),
    ("gallon", &["gal"]),
    ("imperial gallon", &["imperial gal"]),
    ("foot", &["ft"]),
    ("inch", &["in"]),
    ("metre", &["m", "meter"]),
    ("millimetre", &["mm", "millimeter"]),
    ("yard", &["yd"]),
];

/// Expand a set of canonical units into the full alias -> canonical map.
///
/// Every canonical unit maps to at least itself (identity alias), so no unit
/// is ever dropped. Keys are stored lowercase; lookups are expected to
/// lowercase first.
pub fn expand_units(units: &[&str]) -> HashMap<String, String> {
    let mut expanded = HashMap::new();

    for &unit in units {
        expanded.insert(unit.to_lowercase(), unit.to_string());

        if let Some((_, aliases)) = ALIAS_TABLE.iter().find(|(canonical, _)| *canonical == unit) {
            for &alias in *aliases {
                expanded.insert(alias.to_lowercase(), unit.to_string());
            }
        }
    }

    expanded
}

/// Check that no alias within one unit set resolves to two different
/// canonical units.
///
/// The declarative table makes a collision a configuration error rather than
/// a silent last-writer-wins, so this runs once at startup against every
/// category's unit set. Alias tables are never merged across categories.
pub fn validate_aliases(units: &[&str]) -> Result<(), ExtractError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for &unit in units {
        let mut spellings = vec![unit];
        if let Some((_, aliases)) = ALIAS_TABLE.iter().find(|(canonical, _)| *canonical == unit) {
            spellings.extend_from_slice(aliases);
        }

        for spelling in spellings {
            let key = spelling.to_lowercase();
            if let Some(&other) = seen.get(&key) {
                if other != unit {
                    return Err(ExtractError::AliasCollision {
                        alias: key,
                        first: other.to_string(),
                        second: unit.to_string(),
                    });
                }
            }
            seen.insert(key, unit);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::registry::{Category, UnitRegistry};

    #[test]
    fn test_identity_alias_always_present() {
        let expanded = expand_units(&["pound", "cup", "millivolt"]);
        assert_eq!(expanded.get("pound").unwrap(), "pound");
        assert_eq!(expanded.get("cup").unwrap(), "cup");
        assert_eq!(expanded.get("millivolt").unwrap(), "millivolt");
    }

    #[test]
    fn test_abbreviations_resolve_to_canonical() {
        let expanded = expand_units(&["pound", "kilogram"]);
        assert_eq!(expanded.get("lb").unwrap(), "pound");
        assert_eq!(expanded.get("lbs").unwrap(), "pound");
        assert_eq!(expanded.get("kg").unwrap(), "kilogram");
    }

    #[test]
    fn test_locale_spellings() {
        let expanded = expand_units(&["litre", "metre", "millimetre"]);
        assert_eq!(expanded.get("liter").unwrap(), "litre");
        assert_eq!(expanded.get("meter").unwrap(), "metre");
        assert_eq!(expanded.get("millimeter").unwrap(), "millimetre");
    }

    #[test]
    fn test_symbolic_aliases() {
        let expanded = expand_units(&["cubic foot", "cubic inch"]);
        assert_eq!(expanded.get("ft\u{b3}").unwrap(), "cubic foot");
        assert_eq!(expanded.get("in\u{b3}").unwrap(), "cubic inch");
    }

    #[test]
    fn test_multiword_aliases() {
        let expanded = expand_units(&["fluid ounce", "imperial gallon"]);
        assert_eq!(expanded.get("fl oz").unwrap(), "fluid ounce");
        assert_eq!(expanded.get("imperial gal").unwrap(), "imperial gallon");
    }

    #[test]
    fn test_units_without_table_entry_get_identity_only() {
        let expanded = expand_units(&["cup"]);
        assert_eq!(expanded.len(), 1);
    }

    #[test]
    fn test_no_collisions_in_any_category() {
        let registry = UnitRegistry::new();
        for category in Category::ALL {
            validate_aliases(registry.units_for(category))
                .unwrap_or_else(|e| panic!("collision in {}: {}", category, e));
        }
    }

    #[test]
    fn test_collision_detected_for_conflicting_set() {
        // "in" is an alias of inch; a hypothetical unit literally named "in"
        // would collide with it.
        let result = validate_aliases(&["inch", "in"]);
        assert!(matches!(result, Err(ExtractError::AliasCollision { .. })));
    }
}
