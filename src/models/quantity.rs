//! Quantity and conversion result records

use serde::{Deserialize, Serialize};

/// An amount in a named unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

/// A converted amount together with the input it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub quantity: f64,
    pub unit: String,
    pub original_quantity: f64,
    pub original_unit: String,
}

impl ConversionResult {
    pub fn new(quantity: f64, unit: &str, original_quantity: f64, original_unit: &str) -> Self {
        Self {
            quantity,
            unit: unit.to_string(),
            original_quantity,
            original_unit: original_unit.to_string(),
        }
    }

    /// The converted side as a plain quantity
    pub fn converted(&self) -> Quantity {
        Quantity::new(self.quantity, self.unit.clone())
    }

    /// The pre-conversion side as a plain quantity
    pub fn original(&self) -> Quantity {
        Quantity::new(self.original_quantity, self.original_unit.clone())
    }
}
