//! # Financial Summary
//!
//! Reduces the order book and the till ledger to the figures shown on the
//! dashboard and report screens.
//!
//! ## Cash Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Orders ──┬── status = Collected ──► Σ selling ──► collected revenue ─┐ │
//! │           └── anything else ───────► Σ selling ──► pending collection │ │
//! │                                                                       │ │
//! │  Till ───────── every transaction ─► Σ amount ───► withdrawals ───────┤ │
//! │                                                                       ▼ │
//! │                          net cash in till = collected − withdrawals     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Transactions are summed regardless of kind: a deposit currently lowers
//! the till just like a withdrawal. Only withdrawals are ever recorded, so
//! the two agree in practice.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DeliveryStatus, Order, TillTransaction};

/// Default number of orders on the dashboard trend chart.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

// =============================================================================
// Financial Summary
// =============================================================================

/// Snapshot of the shop's cash position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinancialSummary {
    /// Σ selling price over collected orders.
    pub total_collected_revenue: Money,
    /// Σ selling price over orders not yet collected.
    pub total_pending_collection: Money,
    /// Σ purchase + printing cost over all orders.
    pub total_costs: Money,
    /// Σ stored profit over all orders.
    pub total_profit: Money,
    /// Σ amount over all till transactions.
    pub total_withdrawals: Money,
    /// Collected revenue minus withdrawals.
    pub net_cash_in_till: Money,
}

impl FinancialSummary {
    /// Order costs plus till withdrawals (the dashboard's expenses card).
    #[inline]
    pub fn total_outgoings(&self) -> Money {
        self.total_costs + self.total_withdrawals
    }
}

/// Computes the cash-position snapshot.
///
/// Pure and idempotent: the same inputs always give the same snapshot, and
/// empty inputs give all zeros.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use printdesk_core::summary::financial_summary;
/// use printdesk_core::{DeliveryStatus, Money, Order, OrderDraft, TillTransaction};
///
/// let order = |price, status| {
///     Order::from_draft(
///         OrderDraft {
///             customer_name: "Nadia".into(),
///             description: "Tote bags".into(),
///             quantity: 1,
///             purchase_cost: Money::zero(),
///             printing_cost: Money::zero(),
///             selling_price: Money::from_major(price),
///             status,
///         },
///         Utc::now(),
///     )
/// };
/// let orders = [
///     order(100, DeliveryStatus::Collected),
///     order(50, DeliveryStatus::NotCollected),
/// ];
/// let till = [TillTransaction::withdrawal("Nadia", Money::from_major(30), "Ink", Utc::now())];
///
/// let summary = financial_summary(&orders, &till);
/// assert_eq!(summary.total_collected_revenue, Money::from_major(100));
/// assert_eq!(summary.total_pending_collection, Money::from_major(50));
/// assert_eq!(summary.net_cash_in_till, Money::from_major(70));
/// ```
pub fn financial_summary(orders: &[Order], transactions: &[TillTransaction]) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for order in orders {
        if order.is_collected() {
            summary.total_collected_revenue += order.selling_price;
        } else {
            summary.total_pending_collection += order.selling_price;
        }
        summary.total_costs += order.total_cost();
        summary.total_profit += order.profit;
    }

    summary.total_withdrawals = transactions.iter().map(|tx| tx.amount).sum();
    summary.net_cash_in_till = summary.total_collected_revenue - summary.total_withdrawals;
    summary
}

// =============================================================================
// Collection Statistics
// =============================================================================

/// How many orders have made it all the way through delivery.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CollectionStats {
    pub total_orders: usize,
    pub collected_orders: usize,
    /// Collected orders as a percentage of all orders, 0 with no orders.
    pub collection_rate: f64,
}

pub fn collection_stats(orders: &[Order]) -> CollectionStats {
    let total_orders = orders.len();
    let collected_orders = orders.iter().filter(|o| o.is_collected()).count();
    let collection_rate = if total_orders == 0 {
        0.0
    } else {
        collected_orders as f64 * 100.0 / total_orders as f64
    };

    CollectionStats {
        total_orders,
        collected_orders,
        collection_rate,
    }
}

/// Workload figures for the dashboard's operations card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderVolume {
    /// Orders not yet collected, whatever their other status.
    pub pending_orders: usize,
    /// Σ quantity over all orders.
    pub total_units: i64,
}

pub fn order_volume(orders: &[Order]) -> OrderVolume {
    orders.iter().fold(OrderVolume::default(), |mut volume, order| {
        if !order.is_collected() {
            volume.pending_orders += 1;
        }
        volume.total_units = volume.total_units.saturating_add(order.quantity);
        volume
    })
}

/// Order count and value sitting in one delivery status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusBucket {
    pub status: DeliveryStatus,
    pub order_count: usize,
    pub selling_total: Money,
}

/// One bucket per status, in lifecycle order, empty statuses included.
pub fn status_breakdown(orders: &[Order]) -> Vec<StatusBucket> {
    let mut buckets: BTreeMap<DeliveryStatus, StatusBucket> = DeliveryStatus::ALL
        .iter()
        .map(|&status| {
            (
                status,
                StatusBucket {
                    status,
                    order_count: 0,
                    selling_total: Money::zero(),
                },
            )
        })
        .collect();

    for order in orders {
        if let Some(bucket) = buckets.get_mut(&order.status) {
            bucket.order_count += 1;
            bucket.selling_total += order.selling_price;
        }
    }

    buckets.into_values().collect()
}

// =============================================================================
// Recent Activity
// =============================================================================

/// One point on the dashboard trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityPoint {
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub revenue: Money,
    pub profit: Money,
}

/// The `limit` most recent orders, oldest first.
///
/// Orders recorded at the same instant keep their input order.
pub fn recent_activity(orders: &[Order], limit: usize) -> Vec<ActivityPoint> {
    let mut by_date: Vec<&Order> = orders.iter().collect();
    by_date.sort_by_key(|o| o.created_at);

    let skip = by_date.len().saturating_sub(limit);
    by_date
        .into_iter()
        .skip(skip)
        .map(|o| ActivityPoint {
            date: o.created_at,
            revenue: o.selling_price,
            profit: o.profit,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderDraft, TransactionKind};
    use chrono::{Duration, TimeZone};

    fn order_at(selling: i64, cost: i64, status: DeliveryStatus, minute: i64) -> Order {
        let base = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        Order::from_draft(
            OrderDraft {
                customer_name: "Amine".to_string(),
                description: "Caps".to_string(),
                quantity: 1,
                purchase_cost: Money::from_major(cost),
                printing_cost: Money::zero(),
                selling_price: Money::from_major(selling),
                status,
            },
            base + Duration::minutes(minute),
        )
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        assert_eq!(financial_summary(&[], &[]), FinancialSummary::default());
        assert_eq!(financial_summary(&[], &[]).total_outgoings(), Money::zero());
    }

    #[test]
    fn test_summary_totals() {
        let orders = vec![
            order_at(100, 60, DeliveryStatus::Collected, 0),
            order_at(50, 20, DeliveryStatus::OnTheWay, 1),
            order_at(80, 90, DeliveryStatus::NotCollected, 2),
        ];
        let till = vec![
            TillTransaction::withdrawal("Sofiane", Money::from_major(30), "Rent", Utc::now()),
            TillTransaction::withdrawal("Sofiane", Money::from_major(5), "Tape", Utc::now()),
        ];

        let summary = financial_summary(&orders, &till);
        assert_eq!(summary.total_collected_revenue, Money::from_major(100));
        assert_eq!(summary.total_pending_collection, Money::from_major(130));
        assert_eq!(summary.total_costs, Money::from_major(170));
        assert_eq!(summary.total_profit, Money::from_major(60));
        assert_eq!(summary.total_withdrawals, Money::from_major(35));
        assert_eq!(summary.net_cash_in_till, Money::from_major(65));
        assert_eq!(summary.total_outgoings(), Money::from_major(205));
    }

    #[test]
    fn test_deposits_are_subtracted_like_withdrawals() {
        let mut deposit = TillTransaction::withdrawal("Owner", Money::from_major(40), "Float", Utc::now());
        deposit.kind = TransactionKind::Deposit;

        let orders = vec![order_at(100, 0, DeliveryStatus::Collected, 0)];
        let summary = financial_summary(&orders, &[deposit]);
        assert_eq!(summary.total_withdrawals, Money::from_major(40));
        assert_eq!(summary.net_cash_in_till, Money::from_major(60));
    }

    #[test]
    fn test_summary_is_idempotent() {
        let orders = vec![order_at(100, 60, DeliveryStatus::Collected, 0)];
        assert_eq!(financial_summary(&orders, &[]), financial_summary(&orders, &[]));
    }

    #[test]
    fn test_collection_stats() {
        assert_eq!(collection_stats(&[]), CollectionStats::default());

        let orders = vec![
            order_at(10, 0, DeliveryStatus::Collected, 0),
            order_at(10, 0, DeliveryStatus::OnTheWay, 1),
            order_at(10, 0, DeliveryStatus::NotCollected, 2),
            order_at(10, 0, DeliveryStatus::Collected, 3),
        ];
        let stats = collection_stats(&orders);
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.collected_orders, 2);
        assert_eq!(stats.collection_rate, 50.0);
    }

    #[test]
    fn test_order_volume() {
        assert_eq!(order_volume(&[]), OrderVolume::default());

        let mut bulk = order_at(90, 40, DeliveryStatus::OnTheWay, 2);
        bulk.quantity = 25;
        let orders = vec![
            order_at(10, 5, DeliveryStatus::Collected, 0),
            order_at(20, 5, DeliveryStatus::NotCollected, 1),
            bulk,
        ];

        let volume = order_volume(&orders);
        assert_eq!(volume.pending_orders, 2);
        assert_eq!(volume.total_units, 27);
    }

    #[test]
    fn test_status_breakdown_includes_empty_statuses() {
        let orders = vec![
            order_at(10, 0, DeliveryStatus::Collected, 0),
            order_at(15, 0, DeliveryStatus::Collected, 1),
        ];
        let buckets = status_breakdown(&orders);

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].status, DeliveryStatus::OnTheWay);
        assert_eq!(buckets[0].order_count, 0);
        assert_eq!(buckets[2].status, DeliveryStatus::Collected);
        assert_eq!(buckets[2].order_count, 2);
        assert_eq!(buckets[2].selling_total, Money::from_major(25));
    }

    #[test]
    fn test_recent_activity_keeps_latest_oldest_first() {
        // Stored newest first, as the order list shows them.
        let orders: Vec<Order> = (0..5)
            .rev()
            .map(|m| order_at(100 + m, 0, DeliveryStatus::OnTheWay, m))
            .collect();

        let points = recent_activity(&orders, 3);
        let revenue: Vec<Money> = points.iter().map(|p| p.revenue).collect();
        assert_eq!(
            revenue,
            vec![Money::from_major(102), Money::from_major(103), Money::from_major(104)]
        );
        assert!(points.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_recent_activity_limit_larger_than_input() {
        let orders = vec![order_at(10, 0, DeliveryStatus::OnTheWay, 0)];
        assert_eq!(recent_activity(&orders, DEFAULT_ACTIVITY_LIMIT).len(), 1);
        assert!(recent_activity(&[], DEFAULT_ACTIVITY_LIMIT).is_empty());
    }
}
