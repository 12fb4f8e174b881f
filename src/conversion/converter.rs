//! Unit conversion functions
//!
//! Same-class conversion pivots through the base unit (ml or g). Crossing
//! between volume and weight needs an ingredient density and only happens
//! through [`volume_to_weight`] / [`weight_to_volume`].

use super::density::density_for;
use super::units::{
    grams_per_unit, is_count_unit, ml_per_unit, normalize_unit, round4, unit_class, UnitClass,
};
use crate::error::{CalcError, CalcResult};
use crate::models::ConversionResult;

fn unsupported(from: &str, to: &str) -> CalcError {
    CalcError::UnsupportedConversion {
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn wrong_class(unit: &str, expected: UnitClass) -> CalcError {
    CalcError::WrongUnitClass {
        unit: unit.to_string(),
        expected,
    }
}

/// Convert between two units of the same class.
///
/// Converting a unit to itself (after normalization) returns the amount
/// untouched, labelled with the requested `to_unit`. Volume against weight
/// is rejected; use the density functions for that.
pub fn convert_same_type(amount: f64, from_unit: &str, to_unit: &str) -> CalcResult<ConversionResult> {
    if normalize_unit(from_unit) == normalize_unit(to_unit) {
        return Ok(ConversionResult::new(amount, to_unit, amount, from_unit));
    }

    let factors = match (ml_per_unit(from_unit), ml_per_unit(to_unit)) {
        (Some(from), Some(to)) => Some((from, to)),
        _ => match (grams_per_unit(from_unit), grams_per_unit(to_unit)) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        },
    };

    let Some((from_factor, to_factor)) = factors else {
        return Err(unsupported(from_unit, to_unit));
    };

    let converted = round4(amount * from_factor / to_factor);
    Ok(ConversionResult::new(converted, to_unit, amount, from_unit))
}

/// Convert a volume of an ingredient to a weight using its density
pub fn volume_to_weight(
    amount: f64,
    volume_unit: &str,
    ingredient: &str,
    weight_unit: &str,
) -> CalcResult<ConversionResult> {
    let ml_factor = ml_per_unit(volume_unit).ok_or_else(|| wrong_class(volume_unit, UnitClass::Volume))?;
    let g_factor = grams_per_unit(weight_unit).ok_or_else(|| wrong_class(weight_unit, UnitClass::Weight))?;

    let ml = amount * ml_factor;
    let grams = ml * density_for(ingredient);
    let converted = round4(grams / g_factor);

    Ok(ConversionResult::new(converted, weight_unit, amount, volume_unit))
}

/// Convert a weight of an ingredient to a volume using its density
pub fn weight_to_volume(
    amount: f64,
    weight_unit: &str,
    ingredient: &str,
    volume_unit: &str,
) -> CalcResult<ConversionResult> {
    let g_factor = grams_per_unit(weight_unit).ok_or_else(|| wrong_class(weight_unit, UnitClass::Weight))?;
    let ml_factor = ml_per_unit(volume_unit).ok_or_else(|| wrong_class(volume_unit, UnitClass::Volume))?;

    let grams = amount * g_factor;
    let ml = grams / density_for(ingredient);
    let converted = round4(ml / ml_factor);

    Ok(ConversionResult::new(converted, volume_unit, amount, weight_unit))
}

/// Convert between any two units, taking the density path when the classes differ.
///
/// Without an ingredient name the default density applies to cross-class
/// conversions. Count and unknown units only convert to themselves.
pub fn convert(
    amount: f64,
    from_unit: &str,
    to_unit: &str,
    ingredient: Option<&str>,
) -> CalcResult<ConversionResult> {
    let ingredient = ingredient.unwrap_or("");

    match (unit_class(from_unit), unit_class(to_unit)) {
        (Some(UnitClass::Volume), Some(UnitClass::Weight)) => {
            volume_to_weight(amount, from_unit, ingredient, to_unit)
        }
        (Some(UnitClass::Weight), Some(UnitClass::Volume)) => {
            weight_to_volume(amount, from_unit, ingredient, to_unit)
        }
        _ => convert_same_type(amount, from_unit, to_unit),
    }
}

/// Mass of an ingredient amount in grams
pub fn to_grams(amount: f64, unit: &str, ingredient: &str) -> CalcResult<f64> {
    match unit_class(unit) {
        Some(UnitClass::Weight) => Ok(convert_same_type(amount, unit, "g")?.quantity),
        Some(UnitClass::Volume) => Ok(volume_to_weight(amount, unit, ingredient, "g")?.quantity),
        _ => Err(unsupported(unit, "g")),
    }
}

/// Share of a recipe's total mass contributed by one ingredient, in percent.
///
/// Never fails. Count units carry no mass and give `0`; a non-positive
/// total gives `0`; any conversion error is logged and gives `0`.
pub fn calculate_ingredient_percentage(
    amount: f64,
    unit: &str,
    ingredient: &str,
    total_recipe_grams: f64,
) -> f64 {
    if is_count_unit(unit) {
        return 0.0;
    }

    if total_recipe_grams <= 0.0 {
        tracing::warn!(
            "Percentage of '{}' requested against a total of {} g; returning 0",
            ingredient,
            total_recipe_grams
        );
        return 0.0;
    }

    match to_grams(amount, unit, ingredient) {
        Ok(grams) => round4(grams / total_recipe_grams * 100.0),
        Err(e) => {
            tracing::warn!("Could not compute percentage for '{}': {}", ingredient, e);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::units::{G_PER_LB, ML_PER_CUP};

    #[test]
    fn test_same_unit_is_noop_with_requested_label() {
        let result = convert_same_type(3.14159265, "cup", "Cups").unwrap();
        assert_eq!(result.quantity, 3.14159265);
        assert_eq!(result.unit, "Cups");
        assert_eq!(result.original_quantity, 3.14159265);
        assert_eq!(result.original_unit, "cup");
    }

    #[test]
    fn test_volume_conversion() {
        let result = convert_same_type(1.0, "cups", "ml").unwrap();
        assert_eq!(result.quantity, ML_PER_CUP);
        assert_eq!(result.unit, "ml");

        let result = convert_same_type(3.0, "tsp", "tbsp").unwrap();
        assert!((result.quantity - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_weight_conversion() {
        let result = convert_same_type(2.0, "lb", "g").unwrap();
        assert_eq!(result.quantity, round4(2.0 * G_PER_LB));

        let result = convert_same_type(1500.0, "g", "kg").unwrap();
        assert_eq!(result.quantity, 1.5);
    }

    #[test]
    fn test_result_rounded_to_four_places() {
        let result = convert_same_type(1.0, "tsp", "cups").unwrap();
        assert_eq!(result.quantity, 0.0208);
    }

    #[test]
    fn test_normalizes_before_lookup() {
        let result = convert_same_type(2.0, " Cup ", "ML").unwrap();
        assert!((result.quantity - 473.176).abs() < 0.0001);
        assert_eq!(result.unit, "ML");

        let result = convert_same_type(1.0, "LB", "ounces").unwrap();
        assert!((result.quantity - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_cross_class_rejected() {
        let err = convert_same_type(1.0, "cup", "g").unwrap_err();
        assert_eq!(
            err,
            CalcError::UnsupportedConversion {
                from: "cup".to_string(),
                to: "g".to_string()
            }
        );
    }

    #[test]
    fn test_count_and_unknown_rejected() {
        assert!(convert_same_type(2.0, "pieces", "each").is_err());
        assert!(convert_same_type(2.0, "pinch", "g").is_err());
        // but a count unit to itself is a no-op
        assert_eq!(convert_same_type(2.0, "piece", "pieces").unwrap().quantity, 2.0);
    }

    #[test]
    fn test_volume_to_weight_default_density() {
        let result = volume_to_weight(1.0, "cup", "unknown-ingredient", "g").unwrap();
        assert_eq!(result.quantity, 165.6116);
        assert_eq!(result.unit, "g");
        assert_eq!(result.original_quantity, 1.0);
        assert_eq!(result.original_unit, "cup");
    }

    #[test]
    fn test_volume_to_weight_known_density() {
        let result = volume_to_weight(500.0, "ml", "Water", "kg").unwrap();
        assert_eq!(result.quantity, 0.5);

        let result = volume_to_weight(1.0, "tbsp", "honey", "g").unwrap();
        assert_eq!(result.quantity, round4(14.7868 * 1.42));
    }

    #[test]
    fn test_weight_to_volume() {
        let result = weight_to_volume(1.0, "kg", "water", "l").unwrap();
        assert_eq!(result.quantity, 1.0);

        let result = weight_to_volume(165.6116, "g", "unknown-ingredient", "cups").unwrap();
        assert!((result.quantity - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_density_path_checks_classes() {
        let err = volume_to_weight(1.0, "g", "flour", "g").unwrap_err();
        assert_eq!(
            err,
            CalcError::WrongUnitClass {
                unit: "g".to_string(),
                expected: UnitClass::Volume
            }
        );

        let err = volume_to_weight(1.0, "cup", "flour", "ml").unwrap_err();
        assert!(matches!(err, CalcError::WrongUnitClass { expected: UnitClass::Weight, .. }));

        let err = weight_to_volume(1.0, "cup", "flour", "ml").unwrap_err();
        assert!(matches!(err, CalcError::WrongUnitClass { expected: UnitClass::Weight, .. }));

        let err = weight_to_volume(1.0, "g", "flour", "pieces").unwrap_err();
        assert!(matches!(err, CalcError::WrongUnitClass { expected: UnitClass::Volume, .. }));
    }

    #[test]
    fn test_convert_dispatch() {
        let same = convert(1.0, "kg", "g", None).unwrap();
        assert_eq!(same.quantity, 1000.0);

        let cross = convert(1.0, "cup", "g", Some("unknown-ingredient")).unwrap();
        assert_eq!(cross.quantity, 165.6116);

        let back = convert(100.0, "g", "ml", Some("water")).unwrap();
        assert_eq!(back.quantity, 100.0);

        assert!(convert(1.0, "each", "g", Some("egg")).is_err());
    }

    #[test]
    fn test_to_grams() {
        assert_eq!(to_grams(2.0, "kg", "flour").unwrap(), 2000.0);
        assert_eq!(to_grams(100.0, "ml", "water").unwrap(), 100.0);
        assert!(to_grams(3.0, "slices", "bread").is_err());
    }

    #[test]
    fn test_percentage_weight_and_volume() {
        assert_eq!(calculate_ingredient_percentage(250.0, "g", "flour", 1000.0), 25.0);
        assert_eq!(calculate_ingredient_percentage(0.5, "kg", "flour", 1000.0), 50.0);
        assert_eq!(calculate_ingredient_percentage(100.0, "ml", "water", 400.0), 25.0);
    }

    #[test]
    fn test_percentage_count_unit_is_zero() {
        assert_eq!(calculate_ingredient_percentage(3.0, "pieces", "egg", 500.0), 0.0);
        assert_eq!(calculate_ingredient_percentage(1.0, "Whole", "chicken", 500.0), 0.0);
    }

    #[test]
    fn test_percentage_swallows_conversion_errors() {
        assert_eq!(calculate_ingredient_percentage(1.0, "pinch", "salt", 500.0), 0.0);
        assert_eq!(calculate_ingredient_percentage(1.0, "", "salt", 500.0), 0.0);
    }

    #[test]
    fn test_percentage_non_positive_total_is_zero() {
        assert_eq!(calculate_ingredient_percentage(100.0, "g", "flour", 0.0), 0.0);
        assert_eq!(calculate_ingredient_percentage(100.0, "g", "flour", -5.0), 0.0);
    }
}
