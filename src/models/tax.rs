//! Tax records: stock items and GST totals

use serde::{Deserialize, Serialize};

/// A stock line whose value is taxed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxableItem {
    pub current_stock: f64,
    pub price_per_unit: f64,
    /// Whether `price_per_unit` already includes GST (absent = exclusive)
    #[serde(default)]
    pub gst_inclusive: Option<bool>,
}

impl TaxableItem {
    pub fn exclusive(current_stock: f64, price_per_unit: f64) -> Self {
        Self {
            current_stock,
            price_per_unit,
            gst_inclusive: Some(false),
        }
    }

    pub fn inclusive(current_stock: f64, price_per_unit: f64) -> Self {
        Self {
            current_stock,
            price_per_unit,
            gst_inclusive: Some(true),
        }
    }

    pub fn is_inclusive(&self) -> bool {
        self.gst_inclusive.unwrap_or(false)
    }

    /// Stock value at the listed price
    pub fn line_value(&self) -> f64 {
        self.current_stock * self.price_per_unit
    }
}

/// GST split of a single amount
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub exclusive: f64,
    pub gst: f64,
    pub inclusive: f64,
}

/// Aggregated GST totals over a set of items
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxTotals {
    pub total_exclusive: f64,
    pub total_gst: f64,
    pub total_inclusive: f64,
}

impl TaxTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Totals rounded to cents, for display only
    pub fn rounded(&self) -> Self {
        use crate::scaling::round_currency;

        Self {
            total_exclusive: round_currency(self.total_exclusive),
            total_gst: round_currency(self.total_gst),
            total_inclusive: round_currency(self.total_inclusive),
        }
    }
}

impl From<GstBreakdown> for TaxTotals {
    fn from(b: GstBreakdown) -> Self {
        Self {
            total_exclusive: b.exclusive,
            total_gst: b.gst,
            total_inclusive: b.inclusive,
        }
    }
}

impl std::ops::Add for TaxTotals {
    type Output = TaxTotals;

    fn add(self, other: TaxTotals) -> TaxTotals {
        TaxTotals {
            total_exclusive: self.total_exclusive + other.total_exclusive,
            total_gst: self.total_gst + other.total_gst,
            total_inclusive: self.total_inclusive + other.total_inclusive,
        }
    }
}

impl std::iter::Sum for TaxTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TaxTotals::zero(), |acc, t| acc + t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flag_means_exclusive() {
        let item: TaxableItem =
            serde_json::from_str(r#"{"current_stock": 2, "price_per_unit": 3.5}"#).unwrap();
        assert!(!item.is_inclusive());
        assert_eq!(item.line_value(), 7.0);
    }

    #[test]
    fn test_totals_sum() {
        let parts = vec![
            TaxTotals { total_exclusive: 1.0, total_gst: 0.15, total_inclusive: 1.15 },
            TaxTotals { total_exclusive: 2.0, total_gst: 0.3, total_inclusive: 2.3 },
        ];
        let total: TaxTotals = parts.into_iter().sum();
        assert!((total.total_exclusive - 3.0).abs() < 1e-9);
        assert!((total.total_gst - 0.45).abs() < 1e-9);
        assert!((total.total_inclusive - 3.45).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_for_display() {
        let totals = TaxTotals {
            total_exclusive: 86.956521739,
            total_gst: 13.043478261,
            total_inclusive: 100.0,
        };
        let shown = totals.rounded();
        assert_eq!(shown.total_exclusive, 86.96);
        assert_eq!(shown.total_gst, 13.04);
        assert_eq!(shown.total_inclusive, 100.0);
    }
}
