//! # Order Commands
//!
//! Order intake, the live metrics preview on the order form, and delivery
//! status changes.
//!
//! ## Order Intake Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Intake                                         │
//! │                                                                         │
//! │  Cost fields as typed: "15*900", "4500", "27000"                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_amount() ──► Money (bad input counts as 0)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_order_draft() ──► rejected? VALIDATION_ERROR                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Order::from_draft() ──► profit and margin frozen into the order        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shop.orders.push(order)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use printdesk_core::expression::{evaluate_amount, parse_amount};
use printdesk_core::metrics::{calculate_service_metrics, ServiceMetrics};
use printdesk_core::validation::{validate_amount, validate_order_draft};
use printdesk_core::{CoreError, DeliveryStatus, Money, Order, OrderDraft};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShopState;

/// Arguments for `record_order`.
///
/// Amount fields hold whatever was typed, arithmetic included.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOrderArgs {
    pub customer_name: String,
    pub description: String,
    pub quantity: i64,
    #[serde(default)]
    pub purchase_cost: String,
    #[serde(default)]
    pub printing_cost: String,
    #[serde(default)]
    pub selling_price: String,
    #[serde(default)]
    pub status: Option<DeliveryStatus>,
}

impl RecordOrderArgs {
    fn into_draft(self) -> OrderDraft {
        OrderDraft {
            customer_name: self.customer_name,
            description: self.description,
            quantity: self.quantity,
            purchase_cost: parse_amount(&self.purchase_cost),
            printing_cost: parse_amount(&self.printing_cost),
            selling_price: parse_amount(&self.selling_price),
            status: self.status.unwrap_or_default(),
        }
    }
}

/// Arguments for `preview_order_metrics`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewOrderArgs {
    pub quantity: i64,
    pub purchase_cost: String,
    pub printing_cost: String,
    pub selling_price: String,
}

/// Live metrics for a half-filled order form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderPreview {
    pub purchase_cost: Money,
    pub printing_cost: Money,
    pub selling_price: Money,
    #[serde(flatten)]
    pub metrics: ServiceMetrics,
}

/// Arguments for `evaluate_amount`.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateAmountArgs {
    pub expression: String,
}

/// Arguments for `update_order_status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusArgs {
    pub order_id: String,
    pub status: DeliveryStatus,
}

/// Records a new order.
///
/// ## Returns
/// The stored order with its derived profit and margin.
pub fn record_order(shop: &ShopState, args: RecordOrderArgs) -> Result<Order, ApiError> {
    let draft = args.into_draft();
    validate_order_draft(&draft).map_err(CoreError::from)?;

    let order = shop.with_shop_mut(|s| s.record_order(draft, Utc::now()));

    info!(
        order_id = %order.id,
        customer = %order.customer_name,
        selling_price = %order.selling_price,
        profit = %order.profit,
        "Order recorded"
    );
    Ok(order)
}

/// Computes the metrics the order form shows while typing.
///
/// Unreadable amounts count as zero, like on save. Amounts that saving
/// would reject (negative, or above `MAX_AMOUNT`) are rejected here too.
pub fn preview_order_metrics(args: PreviewOrderArgs) -> Result<OrderPreview, ApiError> {
    let purchase_cost = parse_amount(&args.purchase_cost);
    let printing_cost = parse_amount(&args.printing_cost);
    let selling_price = parse_amount(&args.selling_price);

    validate_amount("purchase cost", purchase_cost).map_err(CoreError::from)?;
    validate_amount("printing cost", printing_cost).map_err(CoreError::from)?;
    validate_amount("selling price", selling_price).map_err(CoreError::from)?;

    Ok(OrderPreview {
        purchase_cost,
        printing_cost,
        selling_price,
        metrics: calculate_service_metrics(args.quantity, purchase_cost, printing_cost, selling_price),
    })
}

/// Strictly evaluates one amount field.
///
/// Unlike intake, nothing is dropped or defaulted: `"1500 DZD"` or `"5/0"`
/// come back as a VALIDATION_ERROR naming the problem.
pub fn evaluate_amount_field(args: EvaluateAmountArgs) -> Result<Money, ApiError> {
    let amount = evaluate_amount(&args.expression).map_err(CoreError::from)?;
    debug!(expression = %args.expression, amount = %amount, "evaluate_amount");
    Ok(amount)
}

/// Moves an order through the delivery pipeline.
///
/// Any status may follow any other, including going back.
pub fn update_order_status(
    shop: &ShopState,
    args: UpdateOrderStatusArgs,
) -> Result<Order, ApiError> {
    let order = shop.with_shop_mut(|s| s.set_order_status(&args.order_id, args.status))?;

    info!(order_id = %order.id, status = ?order.status, "Order status changed");
    Ok(order)
}

/// All orders, newest first.
pub fn list_orders(shop: &ShopState) -> Vec<Order> {
    let orders = shop.with_shop(|s| s.orders_newest_first());
    debug!(count = orders.len(), "list_orders");
    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn args(name: &str, purchase: &str, printing: &str, selling: &str) -> RecordOrderArgs {
        RecordOrderArgs {
            customer_name: name.to_string(),
            description: "Club jerseys".to_string(),
            quantity: 15,
            purchase_cost: purchase.to_string(),
            printing_cost: printing.to_string(),
            selling_price: selling.to_string(),
            status: None,
        }
    }

    #[test]
    fn test_record_order_evaluates_expressions() {
        let shop = ShopState::new();
        let order = record_order(&shop, args("Samir", "15*900", "15*300", "27000")).unwrap();

        assert_eq!(order.purchase_cost, Money::from_major(13_500));
        assert_eq!(order.printing_cost, Money::from_major(4_500));
        assert_eq!(order.profit, Money::from_major(9_000));
        assert_eq!(order.status, DeliveryStatus::OnTheWay);
        assert_eq!(shop.with_shop(|s| s.orders.len()), 1);
    }

    #[test]
    fn test_record_order_rejects_blank_name() {
        let shop = ShopState::new();
        let err = record_order(&shop, args("  ", "1", "1", "5")).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "customer name is required");
        assert!(shop.with_shop(|s| s.orders.is_empty()));
    }

    #[test]
    fn test_record_order_bad_amount_counts_as_zero() {
        let shop = ShopState::new();
        let order = record_order(&shop, args("Samir", "abc", "", "10/0")).unwrap();

        assert_eq!(order.purchase_cost, Money::zero());
        assert_eq!(order.selling_price, Money::zero());
        assert_eq!(order.margin, 0.0);
    }

    #[test]
    fn test_preview() {
        let preview = preview_order_metrics(PreviewOrderArgs {
            quantity: 10,
            purchase_cost: "3000".to_string(),
            printing_cost: "500*2".to_string(),
            selling_price: "5000".to_string(),
        })
        .unwrap();

        assert_eq!(preview.printing_cost, Money::from_major(1_000));
        assert_eq!(preview.metrics.profit, Money::from_major(1_000));
        assert_eq!(preview.metrics.margin, 20.0);
        assert_eq!(preview.metrics.unit_cost, Money::from_major(300));

        let empty = preview_order_metrics(PreviewOrderArgs::default()).unwrap();
        assert_eq!(empty.metrics.margin, 0.0);
        assert_eq!(empty.metrics.unit_cost, Money::zero());
    }

    #[test]
    fn test_preview_rejects_amounts_above_cap() {
        let err = preview_order_metrics(PreviewOrderArgs {
            quantity: 1,
            purchase_cost: "92233720368547758".to_string(),
            printing_cost: "92233720368547758".to_string(),
            selling_price: "1".to_string(),
        })
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "purchase cost must not exceed 1000000000.00 DZD");
    }

    #[test]
    fn test_record_order_rejects_amount_above_cap() {
        let shop = ShopState::new();
        let err = record_order(&shop, args("Samir", "1", "1", "1000000000.01")).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(shop.with_shop(|s| s.orders.is_empty()));

        let at_cap = record_order(&shop, args("Samir", "1", "1", "1000000000")).unwrap();
        assert_eq!(at_cap.selling_price, printdesk_core::MAX_AMOUNT);
    }

    #[test]
    fn test_evaluate_amount_field() {
        let amount = evaluate_amount_field(EvaluateAmountArgs {
            expression: "15*900".to_string(),
        })
        .unwrap();
        assert_eq!(amount, Money::from_major(13_500));

        let err = evaluate_amount_field(EvaluateAmountArgs {
            expression: "1500 DZD".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Invalid amount: unexpected character 'D' at position 5");
    }

    #[test]
    fn test_update_status_and_list() {
        let shop = ShopState::new();
        let first = record_order(&shop, args("Samir", "1", "1", "5")).unwrap();
        let second = record_order(&shop, args("Lina", "1", "1", "9")).unwrap();

        let updated = update_order_status(
            &shop,
            UpdateOrderStatusArgs {
                order_id: first.id.clone(),
                status: DeliveryStatus::Collected,
            },
        )
        .unwrap();
        assert!(updated.is_collected());

        let listed = list_orders(&shop);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].status, DeliveryStatus::Collected);

        let err = update_order_status(
            &shop,
            UpdateOrderStatusArgs {
                order_id: "nope".to_string(),
                status: DeliveryStatus::Collected,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
