//! Guest-count scaling and proportional recipe adjustment

use crate::conversion::round4;
use crate::error::{CalcError, CalcResult};
use crate::models::{AdjustedIngredientLine, IngredientLine};

/// Scale a quantity from one serving count to another.
///
/// No guard on the serving counts: a zero `original_servings` gives a
/// non-finite result and a non-positive target passes straight through.
pub fn scale_quantity(original_quantity: f64, original_servings: f64, target_servings: f64) -> f64 {
    round4(original_quantity * target_servings / original_servings)
}

/// Scale every line of a recipe from one serving count to another
pub fn scale_ingredients(
    lines: &[IngredientLine],
    original_servings: f64,
    target_servings: f64,
) -> Vec<AdjustedIngredientLine> {
    lines
        .iter()
        .map(|line| {
            let scaled = scale_quantity(line.quantity, original_servings, target_servings);
            AdjustedIngredientLine::new(line, scaled)
        })
        .collect()
}

/// Recompute a recipe after one ingredient's quantity was overridden.
///
/// Every other line is multiplied by `new_quantity / modified.quantity`, so
/// the ratios between untouched ingredients hold. The overridden line gets
/// `new_quantity` exactly, without rounding.
pub fn adjust_recipe_proportions(
    lines: &[IngredientLine],
    modified_id: i64,
    new_quantity: f64,
) -> CalcResult<Vec<AdjustedIngredientLine>> {
    let modified = lines
        .iter()
        .find(|line| line.id == modified_id)
        .ok_or(CalcError::IngredientNotFound { id: modified_id })?;

    if modified.quantity == 0.0 {
        return Err(CalcError::ZeroBaseQuantity { id: modified_id });
    }

    let scale_factor = new_quantity / modified.quantity;
    tracing::debug!(
        "Adjusting {} ingredients around {} by factor {}",
        lines.len(),
        modified_id,
        scale_factor
    );

    let adjusted = lines
        .iter()
        .map(|line| {
            if line.id == modified_id {
                AdjustedIngredientLine::new(line, new_quantity)
            } else {
                AdjustedIngredientLine::new(line, round4(line.quantity * scale_factor))
            }
        })
        .collect();

    Ok(adjusted)
}
