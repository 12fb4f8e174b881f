//! Calculation error types
//!
//! Errors that abort a conversion or scaling call. Percentage calculation
//! never produces these; it recovers to `0` instead.

use thiserror::Error;

use crate::conversion::UnitClass;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Units can't be converted on this path (different classes, count or unknown units)
    #[error("Cannot convert from '{from}' to '{to}'")]
    UnsupportedConversion { from: String, to: String },

    /// A density conversion received a unit of the wrong class
    #[error("Unit '{unit}' is not a {expected} unit")]
    WrongUnitClass { unit: String, expected: UnitClass },

    #[error("Ingredient {id} not found in recipe")]
    IngredientNotFound { id: i64 },

    /// Proportional adjustment against a zero quantity has no defined scale factor
    #[error("Ingredient {id} has a quantity of 0 and cannot anchor a proportional adjustment")]
    ZeroBaseQuantity { id: i64 },
}

/// Result type for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_values() {
        let err = CalcError::UnsupportedConversion {
            from: "cup".to_string(),
            to: "g".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot convert from 'cup' to 'g'");

        let err = CalcError::WrongUnitClass {
            unit: "kg".to_string(),
            expected: UnitClass::Volume,
        };
        assert_eq!(err.to_string(), "Unit 'kg' is not a volume unit");

        let err = CalcError::IngredientNotFound { id: 7 };
        assert_eq!(err.to_string(), "Ingredient 7 not found in recipe");
    }
}
