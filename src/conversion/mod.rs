//! Unit conversion engine
//!
//! Unit normalization and classification, same-class conversion through base
//! units, and density-based volume/weight conversion.

pub mod converter;
pub mod density;
pub mod units;

pub use converter::{
    calculate_ingredient_percentage, convert, convert_same_type, to_grams, volume_to_weight,
    weight_to_volume,
};
pub use density::{density_for, known_density, DEFAULT_DENSITY};
pub use units::{
    grams_per_unit, is_count_unit, is_volume_unit, is_weight_unit, ml_per_unit, normalize_unit,
    round4, unit_class, UnitClass,
};
