//! Unit tables, classification and spelling normalization
//!
//! Every lookup goes through [`normalize_unit`] first, so "Cup", " cups " and
//! "CUP" all resolve to the same table entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Class of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitClass {
    /// Volume units, pivoting through milliliters
    Volume,
    /// Weight units, pivoting through grams
    Weight,
    /// Discrete units (pieces, each, whole, slices)
    Count,
}

impl UnitClass {
    /// The base unit same-class conversions route through
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            UnitClass::Volume => Some("ml"),
            UnitClass::Weight => Some("g"),
            UnitClass::Count => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitClass::Volume => "volume",
            UnitClass::Weight => "weight",
            UnitClass::Count => "count",
        }
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Canonical count units
pub const COUNT_UNITS: [&str; 4] = ["pieces", "each", "whole", "slices"];

// ============================================================================
// Normalization
// ============================================================================

/// Lowercase, trim and map spelling variants to the canonical table key.
///
/// Unknown spellings come back lowercased and trimmed but otherwise untouched.
pub fn normalize_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();

    let canonical = match lower.as_str() {
        // volume
        "cup" | "cups" | "c" => "cups",
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => "ml",
        "l" | "liter" | "liters" | "litre" | "litres" => "l",
        "tsp" | "teaspoon" | "teaspoons" => "tsp",
        "tbsp" | "tablespoon" | "tablespoons" | "tbs" => "tbsp",
        "fl oz" | "floz" | "fl. oz" | "fluid ounce" | "fluid ounces" => "fl oz",
        "pint" | "pints" | "pt" => "pint",
        "quart" | "quarts" | "qt" => "quart",
        "gallon" | "gallons" | "gal" => "gallon",

        // weight
        "g" | "gram" | "grams" | "gr" => "g",
        "mg" | "milligram" | "milligrams" => "mg",
        "kg" | "kilogram" | "kilograms" | "kgs" => "kg",
        "oz" | "ounce" | "ounces" => "oz",
        "lb" | "lbs" | "pound" | "pounds" => "lbs",

        // count
        "piece" | "pieces" | "pc" | "pcs" => "pieces",
        "slice" | "slices" => "slices",
        "each" | "ea" => "each",
        "whole" => "whole",

        _ => return lower,
    };

    canonical.to_string()
}

// ============================================================================
// Unit Recognition
// ============================================================================

/// Conversion factor to milliliters for a volume unit
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    match normalize_unit(unit).as_str() {
        "ml" => Some(1.0),
        "l" => Some(ML_PER_LITER),
        "tsp" => Some(ML_PER_TSP),
        "tbsp" => Some(ML_PER_TBSP),
        "fl oz" => Some(ML_PER_FL_OZ),
        "cups" => Some(ML_PER_CUP),
        "pint" => Some(ML_PER_PINT),
        "quart" => Some(ML_PER_QUART),
        "gallon" => Some(ML_PER_GALLON),
        _ => None,
    }
}

/// Conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    match normalize_unit(unit).as_str() {
        "g" => Some(1.0),
        "mg" => Some(G_PER_MG),
        "kg" => Some(G_PER_KG),
        "oz" => Some(G_PER_OZ),
        "lbs" => Some(G_PER_LB),
        _ => None,
    }
}

pub fn is_volume_unit(unit: &str) -> bool {
    ml_per_unit(unit).is_some()
}

pub fn is_weight_unit(unit: &str) -> bool {
    grams_per_unit(unit).is_some()
}

/// Count units are enumerated; anything outside [`COUNT_UNITS`] is not a count
pub fn is_count_unit(unit: &str) -> bool {
    let normalized = normalize_unit(unit);
    COUNT_UNITS.contains(&normalized.as_str())
}

/// Classify a unit, or `None` when it appears in no table
pub fn unit_class(unit: &str) -> Option<UnitClass> {
    if is_volume_unit(unit) {
        Some(UnitClass::Volume)
    } else if is_weight_unit(unit) {
        Some(UnitClass::Weight)
    } else if is_count_unit(unit) {
        Some(UnitClass::Count)
    } else {
        None
    }
}

/// Round to 4 decimal places to suppress floating-point noise
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
