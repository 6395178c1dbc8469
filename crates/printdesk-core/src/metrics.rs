//! # Metrics Calculator
//!
//! Cost, profit and margin for a single order or catalog product.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total_cost = purchase_cost + printing_cost                             │
//! │  profit     = selling_price - total_cost                                │
//! │  margin     = profit / selling_price × 100      (0 when price is 0)     │
//! │  unit_cost  = purchase_cost / quantity          (0 when quantity is 0)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every edge case saturates to zero. Nothing here can fail.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// Metrics shown live on the order form and frozen into the order on save.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceMetrics {
    pub total_cost: Money,
    pub profit: Money,
    /// Percentage of selling price.
    pub margin: f64,
    /// Purchase cost per piece.
    pub unit_cost: Money,
}

/// Computes the metrics for an order.
///
/// ## Example
/// ```rust
/// use printdesk_core::metrics::calculate_service_metrics;
/// use printdesk_core::Money;
///
/// let m = calculate_service_metrics(
///     10,
///     Money::from_major(3000), // blank t-shirts
///     Money::from_major(1000), // printing
///     Money::from_major(5000), // price
/// );
/// assert_eq!(m.total_cost, Money::from_major(4000));
/// assert_eq!(m.profit, Money::from_major(1000));
/// assert_eq!(m.margin, 20.0);
/// assert_eq!(m.unit_cost, Money::from_major(300));
/// ```
pub fn calculate_service_metrics(
    quantity: i64,
    purchase_cost: Money,
    printing_cost: Money,
    selling_price: Money,
) -> ServiceMetrics {
    let total_cost = purchase_cost + printing_cost;
    let profit = selling_price - total_cost;

    ServiceMetrics {
        total_cost,
        profit,
        margin: profit.ratio_percent(selling_price),
        unit_cost: purchase_cost.divide_by_quantity(quantity),
    }
}

/// Total cost of a catalog product.
///
/// Base cost, plus the printing breakdown when the product is printed.
/// A non-printed product ignores whatever breakdown it carries.
pub fn calculate_product_total_cost(product: &Product) -> Money {
    let printing = match (product.is_printed, &product.printing_cost_details) {
        (true, Some(details)) => details.total(),
        _ => Money::zero(),
    };
    product.base_cost + printing
}

/// Margin of an arbitrary price/cost pair, 0 when the price is 0.
///
/// ```rust
/// use printdesk_core::metrics::calculate_profit_margin;
/// use printdesk_core::Money;
///
/// assert_eq!(calculate_profit_margin(Money::zero(), Money::from_major(99)), 0.0);
/// ```
pub fn calculate_profit_margin(selling_price: Money, cost: Money) -> f64 {
    (selling_price - cost).ratio_percent(selling_price)
}

// =============================================================================
// Product Economics
// =============================================================================

/// What a catalog card shows for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductEconomics {
    pub total_cost: Money,
    pub unit_profit: Money,
    pub margin: f64,
}

impl ProductEconomics {
    pub fn of(product: &Product) -> Self {
        let total_cost = calculate_product_total_cost(product);
        ProductEconomics {
            total_cost,
            unit_profit: product.selling_price - total_cost,
            margin: calculate_profit_margin(product.selling_price, total_cost),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrintingCostBreakdown;

    fn mug(is_printed: bool) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Ceramic mug".to_string(),
            sku: "MUG-11OZ".to_string(),
            category: "Drinkware".to_string(),
            base_cost: Money::from_major(250),
            is_printed,
            printing_cost_details: Some(PrintingCostBreakdown {
                ink: Some(Money::from_major(30)),
                paper: Some(Money::from_major(10)),
                machine: None,
                labor: Some(Money::from_major(60)),
            }),
            selling_price: Money::from_major(700),
            stock: 48,
        }
    }

    #[test]
    fn test_zero_selling_price_margin_is_zero() {
        let m = calculate_service_metrics(
            3,
            Money::from_major(100),
            Money::from_major(50),
            Money::zero(),
        );
        assert_eq!(m.profit, Money::from_major(-150));
        assert_eq!(m.margin, 0.0);
    }

    #[test]
    fn test_zero_quantity_unit_cost_is_zero() {
        let m = calculate_service_metrics(0, Money::from_major(100), Money::zero(), Money::from_major(100));
        assert_eq!(m.unit_cost, Money::zero());
        assert_eq!(m.margin, 0.0);
    }

    #[test]
    fn test_loss_gives_negative_margin() {
        let m = calculate_service_metrics(
            1,
            Money::from_major(80),
            Money::from_major(40),
            Money::from_major(100),
        );
        assert_eq!(m.profit, Money::from_major(-20));
        assert_eq!(m.margin, -20.0);
    }

    #[test]
    fn test_printed_product_adds_breakdown() {
        assert_eq!(calculate_product_total_cost(&mug(true)), Money::from_major(350));
    }

    #[test]
    fn test_non_printed_product_is_base_cost() {
        assert_eq!(calculate_product_total_cost(&mug(false)), Money::from_major(250));
    }

    #[test]
    fn test_printed_product_without_breakdown() {
        let mut product = mug(true);
        product.printing_cost_details = None;
        assert_eq!(calculate_product_total_cost(&product), Money::from_major(250));
    }

    #[test]
    fn test_profit_margin() {
        assert_eq!(calculate_profit_margin(Money::from_major(200), Money::from_major(150)), 25.0);
        assert_eq!(calculate_profit_margin(Money::zero(), Money::from_major(150)), 0.0);
    }

    #[test]
    fn test_product_economics() {
        let economics = ProductEconomics::of(&mug(true));
        assert_eq!(economics.total_cost, Money::from_major(350));
        assert_eq!(economics.unit_profit, Money::from_major(350));
        assert_eq!(economics.margin, 50.0);
    }
}
