//! GST tools

use serde::Serialize;

use crate::models::{GstBreakdown, TaxTotals, TaxableItem};
use crate::scaling::{self, GST_RATE};

/// Response for gst_breakdown
#[derive(Debug, Serialize)]
pub struct GstBreakdownResponse {
    pub rate: f64,
    pub amount_was_inclusive: bool,
    pub breakdown: GstBreakdown,
}

/// Response for calculate_total_with_gst
#[derive(Debug, Serialize)]
pub struct TaxTotalsResponse {
    pub rate: f64,
    pub item_count: usize,
    /// Unrounded sums
    pub totals: TaxTotals,
    /// Sums rounded to cents
    pub display: TaxTotals,
}

pub fn gst_breakdown(amount: f64, inclusive: bool) -> Result<GstBreakdownResponse, String> {
    if !amount.is_finite() {
        return Err(format!("Amount must be a finite number, got {}", amount));
    }

    Ok(GstBreakdownResponse {
        rate: GST_RATE,
        amount_was_inclusive: inclusive,
        breakdown: scaling::gst_breakdown(amount, inclusive),
    })
}

pub fn calculate_total_with_gst(items: &[TaxableItem]) -> Result<TaxTotalsResponse, String> {
    if let Some(pos) = items
        .iter()
        .position(|i| !i.current_stock.is_finite() || !i.price_per_unit.is_finite())
    {
        return Err(format!("Item {} has a non-finite stock or price", pos));
    }

    let totals = scaling::calculate_total_with_gst(items);

    Ok(TaxTotalsResponse {
        rate: GST_RATE,
        item_count: items.len(),
        totals,
        display: totals.rounded(),
    })
}
