//! Unit conversion tools
//!
//! Wrap the conversion engine for the MCP surface.

use serde::Serialize;

use crate::conversion::{
    self, calculate_ingredient_percentage, density_for, known_density, normalize_unit, unit_class,
    UnitClass,
};
use crate::models::ConversionResult;

/// Response for normalize_unit
#[derive(Debug, Serialize)]
pub struct NormalizedUnitResponse {
    pub input: String,
    pub normalized: String,
    /// None when the unit is in no table
    pub class: Option<UnitClass>,
    /// Base unit for volume/weight (ml or g)
    pub base_unit: Option<&'static str>,
}

/// Response for ingredient_density
#[derive(Debug, Serialize)]
pub struct DensityResponse {
    pub ingredient: String,
    pub grams_per_ml: f64,
    /// False when the default density was substituted
    pub known: bool,
}

/// Response for ingredient_percentage
#[derive(Debug, Serialize)]
pub struct PercentageResponse {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub total_recipe_grams: f64,
    pub percentage: f64,
}

fn check_amount(amount: f64) -> Result<(), String> {
    if !amount.is_finite() {
        return Err(format!("Quantity must be a finite number, got {}", amount));
    }
    Ok(())
}

pub fn normalize(unit: &str) -> NormalizedUnitResponse {
    let class = unit_class(unit);
    NormalizedUnitResponse {
        input: unit.to_string(),
        normalized: normalize_unit(unit),
        class,
        base_unit: class.and_then(|c| c.base_unit()),
    }
}

/// Convert between any two units, using the ingredient density across classes
pub fn convert_units(
    quantity: f64,
    from_unit: &str,
    to_unit: &str,
    ingredient: Option<&str>,
) -> Result<ConversionResult, String> {
    check_amount(quantity)?;

    conversion::convert(quantity, from_unit, to_unit, ingredient)
        .map_err(|e| format!("Conversion failed: {}", e))
}

pub fn volume_to_weight(
    quantity: f64,
    volume_unit: &str,
    ingredient: &str,
    weight_unit: &str,
) -> Result<ConversionResult, String> {
    check_amount(quantity)?;

    conversion::volume_to_weight(quantity, volume_unit, ingredient, weight_unit)
        .map_err(|e| format!("Conversion failed: {}", e))
}

pub fn weight_to_volume(
    quantity: f64,
    weight_unit: &str,
    ingredient: &str,
    volume_unit: &str,
) -> Result<ConversionResult, String> {
    check_amount(quantity)?;

    conversion::weight_to_volume(quantity, weight_unit, ingredient, volume_unit)
        .map_err(|e| format!("Conversion failed: {}", e))
}

pub fn ingredient_density(ingredient: &str) -> DensityResponse {
    DensityResponse {
        ingredient: ingredient.to_string(),
        grams_per_ml: density_for(ingredient),
        known: known_density(ingredient).is_some(),
    }
}

/// Percentage of total recipe mass; never fails, gives 0 when it can't compute
pub fn ingredient_percentage(
    quantity: f64,
    unit: &str,
    ingredient: &str,
    total_recipe_grams: f64,
) -> PercentageResponse {
    PercentageResponse {
        ingredient: ingredient.to_string(),
        quantity,
        unit: unit.to_string(),
        total_recipe_grams,
        percentage: calculate_ingredient_percentage(quantity, unit, ingredient, total_recipe_grams),
    }
}
