//! Ingredient densities for volume/weight conversion
//!
//! Densities are grams per milliliter, keyed by lowercased ingredient name.
//! Matching is exact: "tomato" and "tomatoes" are different keys.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Density used for any ingredient missing from the table (g/ml)
pub const DEFAULT_DENSITY: f64 = 0.7;

/// Ingredient name -> grams per milliliter
static INGREDIENT_DENSITIES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Liquids
    m.insert("water", 1.0);
    m.insert("milk", 1.03);
    m.insert("cream", 1.01);
    m.insert("heavy cream", 0.994);
    m.insert("buttermilk", 1.03);
    m.insert("stock", 1.0);
    m.insert("chicken stock", 1.0);
    m.insert("beef stock", 1.0);
    m.insert("vegetable stock", 1.0);
    m.insert("wine", 0.99);
    m.insert("vinegar", 1.01);
    m.insert("soy sauce", 1.16);
    m.insert("lemon juice", 1.03);
    m.insert("orange juice", 1.04);
    m.insert("coconut milk", 0.97);

    // Fats & oils
    m.insert("oil", 0.92);
    m.insert("olive oil", 0.91);
    m.insert("vegetable oil", 0.92);
    m.insert("butter", 0.911);
    m.insert("margarine", 0.96);

    // Sweeteners
    m.insert("sugar", 0.845);
    m.insert("caster sugar", 0.81);
    m.insert("brown sugar", 0.93);
    m.insert("icing sugar", 0.56);
    m.insert("honey", 1.42);
    m.insert("maple syrup", 1.32);
    m.insert("golden syrup", 1.43);

    // Flours & starches
    m.insert("flour", 0.593);
    m.insert("plain flour", 0.593);
    m.insert("self-raising flour", 0.593);
    m.insert("wholemeal flour", 0.55);
    m.insert("cornflour", 0.54);
    m.insert("cocoa powder", 0.36);
    m.insert("baking powder", 0.9);
    m.insert("baking soda", 0.92);

    // Grains, seeds, dry goods
    m.insert("rice", 0.85);
    m.insert("rolled oats", 0.34);
    m.insert("couscous", 0.73);
    m.insert("quinoa", 0.72);
    m.insert("breadcrumbs", 0.45);
    m.insert("salt", 1.217);
    m.insert("sea salt", 1.2);

    // Dairy solids
    m.insert("yoghurt", 1.03);
    m.insert("yogurt", 1.03);
    m.insert("sour cream", 1.02);
    m.insert("cream cheese", 0.98);
    m.insert("grated cheese", 0.45);
    m.insert("parmesan", 0.42);

    m
});

/// Density for an ingredient if the table knows it
pub fn known_density(ingredient: &str) -> Option<f64> {
    let key = ingredient.trim().to_lowercase();
    INGREDIENT_DENSITIES.get(key.as_str()).copied()
}

/// Density for an ingredient, falling back to [`DEFAULT_DENSITY`]
pub fn density_for(ingredient: &str) -> f64 {
    match known_density(ingredient) {
        Some(density) => density,
        None => {
            tracing::debug!(
                "No density for '{}', using default {} g/ml",
                ingredient,
                DEFAULT_DENSITY
            );
            DEFAULT_DENSITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_density_is_case_insensitive() {
        assert_eq!(known_density("Water"), Some(1.0));
        assert_eq!(known_density("  HONEY "), Some(1.42));
    }

    #[test]
    fn test_unknown_ingredient_falls_back() {
        assert_eq!(known_density("unknown-ingredient"), None);
        assert_eq!(density_for("unknown-ingredient"), DEFAULT_DENSITY);
    }

    #[test]
    fn test_no_plural_matching() {
        assert!(known_density("rice").is_some());
        assert!(known_density("rices").is_none());
    }

    #[test]
    fn test_all_densities_positive() {
        assert!(INGREDIENT_DENSITIES.values().all(|d| *d > 0.0));
        assert!(DEFAULT_DENSITY > 0.0);
    }
}
