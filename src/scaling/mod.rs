//! Proportional scaling and tax module
//!
//! Guest-count scaling, proportional re-adjustment around an overridden
//! ingredient, and GST splits for single amounts and stock lists.

pub mod gst;
pub mod proportions;

pub use gst::{
    add_gst, calculate_gst, calculate_total_with_gst, gst_breakdown, gst_from_inclusive,
    remove_gst, round_currency, GST_RATE,
};
pub use proportions::{adjust_recipe_proportions, scale_ingredients, scale_quantity};
