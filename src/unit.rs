//! The area-unit catalog - the 18 units the converter offers

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// A land-area unit known to the converter.
///
/// Serializes for catalog listings; units are static configuration
/// data, never deserialized back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Stable key used in requests (e.g. "sqft")
    pub key: &'static str,
    /// Display name (e.g. "Square Feet")
    pub name: &'static str,
    /// Square feet per one unit, when the unit has a universal size.
    /// Regional units (bigha, katha, ...) have none and resolve only
    /// through a state override.
    pub sqft_per_unit: Option<f64>,
}

/// Global unit catalog
pub static UNITS: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Unit definitions in display order
const UNIT_DEFS: [Unit; 18] = [
    Unit { key: "sqft", name: "Square Feet", sqft_per_unit: Some(1.0) },
    Unit { key: "sqm", name: "Square Meters", sqft_per_unit: Some(10.76391041671) },
    Unit { key: "sqyd", name: "Square Yards", sqft_per_unit: Some(9.0) },
    Unit { key: "acre", name: "Acres", sqft_per_unit: Some(43560.0) },
    Unit { key: "hectare", name: "Hectares", sqft_per_unit: Some(107639.104167) },
    Unit { key: "cent", name: "Cents", sqft_per_unit: Some(435.6) },
    Unit { key: "guntha", name: "Guntha", sqft_per_unit: Some(1089.0) },
    Unit { key: "gaj", name: "Gaj (Gajam)", sqft_per_unit: Some(9.0) },
    Unit { key: "ankanam", name: "Ankanam", sqft_per_unit: Some(72.0) },
    Unit { key: "lecha", name: "Lecha", sqft_per_unit: Some(144.0) },
    Unit { key: "kanal", name: "Kanal", sqft_per_unit: Some(5445.0) },
    Unit { key: "marla", name: "Marla", sqft_per_unit: Some(272.25) },
    Unit { key: "bigha", name: "Bigha", sqft_per_unit: None },
    Unit { key: "pucca_bigha", name: "Pucca Bigha", sqft_per_unit: None },
    Unit { key: "kachha_bigha", name: "Kachha Bigha", sqft_per_unit: None },
    Unit { key: "katha", name: "Katha", sqft_per_unit: None },
    Unit { key: "biswa", name: "Biswa", sqft_per_unit: None },
    Unit { key: "vigha", name: "Vigha", sqft_per_unit: None },
];

/// Registry of all known units
pub struct UnitCatalog {
    by_key: HashMap<&'static str, Unit>,
}

impl UnitCatalog {
    fn new() -> Self {
        let mut by_key = HashMap::new();
        for unit in UNIT_DEFS {
            by_key.insert(unit.key, unit);
        }
        UnitCatalog { by_key }
    }

    /// Get a unit by key. Keys are case-sensitive, exact-match.
    pub fn get(&self, key: &str) -> Option<&Unit> {
        self.by_key.get(key)
    }

    /// Global square-feet-per-unit factor, if the unit has one
    pub fn global_factor(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|u| u.sqft_per_unit)
    }

    /// All units, in display order
    pub fn all(&self) -> &'static [Unit] {
        &UNIT_DEFS
    }

    /// All unit keys, in display order
    pub fn keys(&self) -> Vec<&'static str> {
        UNIT_DEFS.iter().map(|u| u.key).collect()
    }
}
