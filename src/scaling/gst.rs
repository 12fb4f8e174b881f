//! GST calculations
//!
//! No intermediate rounding: only [`round_currency`] rounds, and only for
//! display.

use crate::models::{GstBreakdown, TaxTotals, TaxableItem};

/// Goods and Services Tax rate
pub const GST_RATE: f64 = 0.15;

/// GST owed on a GST-exclusive amount
pub fn calculate_gst(exclusive: f64) -> f64 {
    exclusive * GST_RATE
}

/// GST-exclusive amount -> GST-inclusive amount
pub fn add_gst(exclusive: f64) -> f64 {
    exclusive * (1.0 + GST_RATE)
}

/// GST-inclusive amount -> GST-exclusive amount
pub fn remove_gst(inclusive: f64) -> f64 {
    inclusive / (1.0 + GST_RATE)
}

/// GST component of a GST-inclusive amount
pub fn gst_from_inclusive(inclusive: f64) -> f64 {
    inclusive - remove_gst(inclusive)
}

/// Split one amount into exclusive, GST and inclusive parts
pub fn gst_breakdown(amount: f64, inclusive: bool) -> GstBreakdown {
    if inclusive {
        let exclusive = remove_gst(amount);
        GstBreakdown {
            exclusive,
            gst: amount - exclusive,
            inclusive: amount,
        }
    } else {
        let gst = calculate_gst(amount);
        GstBreakdown {
            exclusive: amount,
            gst,
            inclusive: amount + gst,
        }
    }
}

/// Total exclusive, GST and inclusive value over a list of stock items.
///
/// Each item is split on its own `gst_inclusive` flag before summing, so
/// lists mixing inclusive and exclusive prices add up correctly.
pub fn calculate_total_with_gst(items: &[TaxableItem]) -> TaxTotals {
    items
        .iter()
        .map(|item| TaxTotals::from(gst_breakdown(item.line_value(), item.is_inclusive())))
        .sum()
}

/// Round to cents for display
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_basic_rates() {
        assert!((calculate_gst(100.0) - 15.0).abs() < EPS);
        assert!((add_gst(100.0) - 115.0).abs() < EPS);
        assert!((remove_gst(115.0) - 100.0).abs() < EPS);
        assert!((gst_from_inclusive(115.0) - 15.0).abs() < EPS);
    }

    #[test]
    fn test_breakdown() {
        let b = gst_breakdown(230.0, true);
        assert!((b.exclusive - 200.0).abs() < EPS);
        assert!((b.gst - 30.0).abs() < EPS);
        assert_eq!(b.inclusive, 230.0);

        let b = gst_breakdown(200.0, false);
        assert_eq!(b.exclusive, 200.0);
        assert!((b.gst - 30.0).abs() < EPS);
        assert!((b.inclusive - 230.0).abs() < EPS);
    }

    #[test]
    fn test_mixed_item_list() {
        let items = vec![TaxableItem::inclusive(1.0, 115.0), TaxableItem::exclusive(1.0, 100.0)];
        let totals = calculate_total_with_gst(&items);

        assert!((totals.total_exclusive - 200.0).abs() < EPS);
        assert!((totals.total_gst - 30.0).abs() < EPS);
        assert!((totals.total_inclusive - 230.0).abs() < EPS);
    }

    #[test]
    fn test_stock_multiplies_price() {
        let items = vec![TaxableItem::exclusive(12.0, 2.5)];
        let totals = calculate_total_with_gst(&items);
        assert!((totals.total_exclusive - 30.0).abs() < EPS);
        assert!((totals.total_gst - 4.5).abs() < EPS);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(calculate_total_with_gst(&[]), TaxTotals::zero());
    }

    #[test]
    fn test_no_rounding_until_display() {
        // 1/3 of a cent per item; rounding each line would lose it
        let items: Vec<TaxableItem> = (0..300).map(|_| TaxableItem::exclusive(1.0, 0.0033333)).collect();
        let totals = calculate_total_with_gst(&items);
        assert!((totals.total_exclusive - 0.99999).abs() < 1e-9);
        assert_eq!(totals.rounded().total_exclusive, 1.0);
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(13.04347), 13.04);
        assert_eq!(round_currency(2.5), 2.5);
        assert_eq!(round_currency(-1.006), -1.01);
    }
}
