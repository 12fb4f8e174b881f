//! Data models
//!
//! Plain value records passed into and returned from the engine.

mod ingredient;
mod quantity;
mod tax;

pub use ingredient::{AdjustedIngredientLine, IngredientLine};
pub use quantity::{ConversionResult, Quantity};
pub use tax::{GstBreakdown, TaxTotals, TaxableItem};
