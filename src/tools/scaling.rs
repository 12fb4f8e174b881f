//! Recipe scaling tools
//!
//! Guest-count scaling and proportional adjustment for recipe editors and
//! prep-list generators.

use serde::Serialize;

use crate::models::{AdjustedIngredientLine, IngredientLine};
use crate::scaling;

/// Response for scale_quantity
#[derive(Debug, Serialize)]
pub struct ScaledQuantityResponse {
    pub original_quantity: f64,
    pub original_servings: f64,
    pub target_servings: f64,
    pub scaled_quantity: f64,
}

/// Response for scale_ingredients and adjust_recipe_proportions
#[derive(Debug, Serialize)]
pub struct AdjustedRecipeResponse {
    pub scale_factor: f64,
    pub ingredients: Vec<AdjustedIngredientLine>,
    pub count: usize,
}

/// Guest counts come from user input here, so they are checked before the
/// engine's unguarded formula sees them
fn check_servings(original_servings: f64, target_servings: f64) -> Result<(), String> {
    if !original_servings.is_finite() || original_servings <= 0.0 {
        return Err("original_servings must be greater than 0".to_string());
    }
    if !target_servings.is_finite() || target_servings < 0.0 {
        return Err("target_servings cannot be negative".to_string());
    }
    Ok(())
}

pub fn scale_quantity(
    original_quantity: f64,
    original_servings: f64,
    target_servings: f64,
) -> Result<ScaledQuantityResponse, String> {
    check_servings(original_servings, target_servings)?;

    Ok(ScaledQuantityResponse {
        original_quantity,
        original_servings,
        target_servings,
        scaled_quantity: scaling::scale_quantity(original_quantity, original_servings, target_servings),
    })
}

pub fn scale_ingredients(
    ingredients: &[IngredientLine],
    original_servings: f64,
    target_servings: f64,
) -> Result<AdjustedRecipeResponse, String> {
    check_servings(original_servings, target_servings)?;

    let scaled = scaling::scale_ingredients(ingredients, original_servings, target_servings);

    Ok(AdjustedRecipeResponse {
        scale_factor: target_servings / original_servings,
        count: scaled.len(),
        ingredients: scaled,
    })
}

pub fn adjust_recipe_proportions(
    ingredients: &[IngredientLine],
    modified_ingredient_id: i64,
    new_quantity: f64,
) -> Result<AdjustedRecipeResponse, String> {
    if !new_quantity.is_finite() {
        return Err(format!("new_quantity must be a finite number, got {}", new_quantity));
    }

    let adjusted = scaling::adjust_recipe_proportions(ingredients, modified_ingredient_id, new_quantity)
        .map_err(|e| format!("Failed to adjust recipe: {}", e))?;

    // The lookup above succeeded, so the modified line is present
    let scale_factor = ingredients
        .iter()
        .find(|line| line.id == modified_ingredient_id)
        .map(|line| new_quantity / line.quantity)
        .unwrap_or(1.0);

    Ok(AdjustedRecipeResponse {
        scale_factor,
        count: adjusted.len(),
        ingredients: adjusted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<IngredientLine> {
        vec![
            IngredientLine::new(10, 100.0, "g", "butter"),
            IngredientLine::new(11, 50.0, "g", "sugar"),
        ]
    }

    #[test]
    fn test_scale_quantity_tool() {
        let resp = scale_quantity(10.0, 4.0, 8.0).unwrap();
        assert_eq!(resp.scaled_quantity, 20.0);
    }

    #[test]
    fn test_scale_quantity_tool_checks_servings() {
        assert!(scale_quantity(10.0, 0.0, 8.0).is_err());
        assert!(scale_quantity(10.0, 4.0, -1.0).is_err());
        assert!(scale_quantity(10.0, 4.0, 0.0).is_ok());
    }

    #[test]
    fn test_scale_ingredients_tool() {
        let resp = scale_ingredients(&lines(), 10.0, 25.0).unwrap();
        assert_eq!(resp.scale_factor, 2.5);
        assert_eq!(resp.count, 2);
        assert_eq!(resp.ingredients[0].adjusted_quantity, 250.0);
    }

    #[test]
    fn test_adjust_tool() {
        let resp = adjust_recipe_proportions(&lines(), 10, 200.0).unwrap();
        assert_eq!(resp.scale_factor, 2.0);
        assert_eq!(resp.ingredients[1].adjusted_quantity, 100.0);
    }

    #[test]
    fn test_adjust_tool_unknown_id() {
        let err = adjust_recipe_proportions(&lines(), 5, 200.0).unwrap_err();
        assert_eq!(err, "Failed to adjust recipe: Ingredient 5 not found in recipe");
    }
}
