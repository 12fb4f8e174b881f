//! Ingredient lines as supplied by recipe editors and prep lists

use serde::{Deserialize, Serialize};

/// One ingredient of a recipe, as read from the caller's records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub id: i64,
    pub quantity: f64,
    pub unit: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_percentage: Option<f64>,
}

impl IngredientLine {
    pub fn new(id: i64, quantity: f64, unit: &str, name: &str) -> Self {
        Self {
            id,
            quantity,
            unit: unit.to_string(),
            name: name.to_string(),
            original_percentage: None,
        }
    }
}

/// An ingredient line annotated with its recomputed quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedIngredientLine {
    #[serde(flatten)]
    pub line: IngredientLine,
    pub adjusted_quantity: f64,
}

impl AdjustedIngredientLine {
    pub fn new(line: &IngredientLine, adjusted_quantity: f64) -> Self {
        Self {
            line: line.clone(),
            adjusted_quantity,
        }
    }

    pub fn id(&self) -> i64 {
        self.line.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjusted_line_serializes_flat() {
        let line = IngredientLine::new(3, 2.0, "cups", "flour");
        let adjusted = AdjustedIngredientLine::new(&line, 4.0);

        let value = serde_json::to_value(&adjusted).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "flour");
        assert_eq!(value["adjusted_quantity"], 4.0);
        assert!(value.get("original_percentage").is_none());
    }

    #[test]
    fn test_line_deserializes_without_percentage() {
        let line: IngredientLine =
            serde_json::from_str(r#"{"id": 1, "quantity": 100, "unit": "g", "name": "butter"}"#)
                .unwrap();
        assert_eq!(line.original_percentage, None);
        assert_eq!(line.quantity, 100.0);
    }
}
