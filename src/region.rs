//! States and state-specific factor overrides
//!
//! Several regional units (bigha, katha, biswa, ...) have no universal
//! size; their square-feet factor depends on which state's customary
//! measure applies. Overrides take precedence per unit, not per state:
//! a state with overrides still falls back to the global catalog for
//! any unit it does not list.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Placeholder entry shown before a state is chosen
pub const UNSELECTED: &str = "Please Select State";

/// Selectable regions in form order; the first entry is the placeholder
pub const REGIONS: [&str; 37] = [
    UNSELECTED,
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// State-specific overrides (square feet per unit)
static OVERRIDES: LazyLock<HashMap<&'static str, HashMap<&'static str, f64>>> =
    LazyLock::new(|| {
        let entries: [(&str, &[(&str, f64)]); 13] = [
            ("Uttar Pradesh", &[("bigha", 27225.0), ("katha", 1361.25)]),
            ("Bihar", &[("bigha", 27211.0), ("katha", 1360.5)]),
            ("West Bengal", &[("bigha", 14400.0), ("katha", 720.0)]),
            ("Assam", &[("bigha", 14400.0), ("katha", 2880.0), ("lecha", 144.0)]),
            ("Punjab", &[("bigha", 9070.0), ("kanal", 5445.0), ("marla", 272.25)]),
            ("Haryana", &[("bigha", 9070.0), ("kanal", 5445.0), ("marla", 272.25)]),
            ("Rajasthan", &[
                ("pucca_bigha", 27225.0),
                ("kachha_bigha", 17424.0),
                ("bigha", 27225.0),
                ("katha", 1361.25),
            ]),
            ("Madhya Pradesh", &[("bigha", 12000.0), ("katha", 750.0)]),
            ("Himachal Pradesh", &[("bigha", 8712.0), ("katha", 1089.0), ("biswa", 436.0)]),
            ("Uttarakhand", &[("bigha", 6804.0), ("katha", 1360.8)]),
            ("Gujarat", &[("bigha", 17424.0), ("vigha", 17424.0)]),
            ("Andhra Pradesh", &[("ankanam", 72.0), ("bigha", 17424.0), ("katha", 3025.0)]),
            ("Telangana", &[("ankanam", 72.0), ("bigha", 17424.0), ("katha", 3025.0)]),
        ];

        entries
            .into_iter()
            .map(|(region, factors)| (region, factors.iter().copied().collect()))
            .collect()
    });

/// Is this the "no selection yet" sentinel?
pub fn is_placeholder(region: &str) -> bool {
    region == UNSELECTED
}

/// Is this a concrete region from the closed set?
pub fn is_known_region(region: &str) -> bool {
    !is_placeholder(region) && REGIONS.contains(&region)
}

/// The override table for a region, if it has one
pub fn overrides_for(region: &str) -> Option<&'static HashMap<&'static str, f64>> {
    OVERRIDES.get(region)
}

/// The override factor for a unit under a region, if defined
pub fn override_factor(region: &str, unit: &str) -> Option<f64> {
    OVERRIDES.get(region).and_then(|table| table.get(unit)).copied()
}
