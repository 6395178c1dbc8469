//! # Report Commands
//!
//! Read-only views over the shop's records. Everything is recomputed from
//! the current orders and till movements on each call.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  financial_summary ──► FinancialSummary                                 │
//! │                                                                         │
//! │  dashboard ──────────► summary + outgoings + volume + activity chart    │
//! │                                                                         │
//! │  report ─────────────► summary + collection rate + status breakdown     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use printdesk_core::summary::{
    collection_stats, order_volume, recent_activity, status_breakdown, ActivityPoint,
    CollectionStats, OrderVolume, StatusBucket,
};
use printdesk_core::{FinancialSummary, Money};
use serde::Serialize;
use tracing::debug;

use crate::state::{ConfigState, ShopState};

/// What the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub shop_name: String,
    pub summary: FinancialSummary,
    /// Order costs plus till withdrawals.
    pub total_outgoings: Money,
    /// Net cash in till in whole dinars, for the headline card.
    pub cash_in_till: String,
    /// Pending order count and units across all orders.
    pub volume: OrderVolume,
    /// Most recent orders, oldest first.
    pub recent_activity: Vec<ActivityPoint>,
}

/// What the reports page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub summary: FinancialSummary,
    pub collection: CollectionStats,
    pub status_breakdown: Vec<StatusBucket>,
}

/// The cash-position snapshot.
pub fn financial_summary(shop: &ShopState) -> FinancialSummary {
    let summary = shop.with_shop(|s| s.summary());
    debug!(
        collected = %summary.total_collected_revenue,
        pending = %summary.total_pending_collection,
        net_cash = %summary.net_cash_in_till,
        "financial_summary"
    );
    summary
}

pub fn dashboard(shop: &ShopState, config: &ConfigState) -> DashboardView {
    let (summary, volume, recent_activity) = shop.with_shop(|s| {
        (
            s.summary(),
            order_volume(&s.orders),
            recent_activity(&s.orders, config.recent_activity_limit),
        )
    });

    DashboardView {
        shop_name: config.shop_name.clone(),
        total_outgoings: summary.total_outgoings(),
        cash_in_till: config.format_amount(summary.net_cash_in_till),
        summary,
        volume,
        recent_activity,
    }
}

pub fn report(shop: &ShopState) -> ReportView {
    shop.with_shop(|s| ReportView {
        summary: s.summary(),
        collection: collection_stats(&s.orders),
        status_breakdown: status_breakdown(&s.orders),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use printdesk_core::{DeliveryStatus, OrderDraft, TillTransaction};

    fn seeded_shop() -> ShopState {
        let shop = ShopState::new();
        let start = Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap();

        shop.with_shop_mut(|s| {
            for (i, (price, status)) in [
                (100, DeliveryStatus::Collected),
                (50, DeliveryStatus::NotCollected),
                (70, DeliveryStatus::OnTheWay),
                (30, DeliveryStatus::Collected),
            ]
            .into_iter()
            .enumerate()
            {
                s.record_order(
                    OrderDraft {
                        customer_name: "Walid".to_string(),
                        description: "Banners".to_string(),
                        quantity: 1,
                        purchase_cost: Money::from_major(10),
                        printing_cost: Money::from_major(5),
                        selling_price: Money::from_major(price),
                        status,
                    },
                    start + Duration::hours(i as i64),
                );
            }
            s.record_transaction(TillTransaction::withdrawal(
                "Walid",
                Money::from_major(40),
                "Rent",
                start,
            ));
        });
        shop
    }

    #[test]
    fn test_financial_summary() {
        let summary = financial_summary(&seeded_shop());
        assert_eq!(summary.total_collected_revenue, Money::from_major(130));
        assert_eq!(summary.total_pending_collection, Money::from_major(120));
        assert_eq!(summary.total_costs, Money::from_major(60));
        assert_eq!(summary.net_cash_in_till, Money::from_major(90));
    }

    #[test]
    fn test_dashboard() {
        let config = ConfigState {
            recent_activity_limit: 2,
            ..ConfigState::default()
        };
        let view = dashboard(&seeded_shop(), &config);

        assert_eq!(view.total_outgoings, Money::from_major(100));
        assert_eq!(view.cash_in_till, "90 DZD");
        assert_eq!(view.volume.pending_orders, 2);
        assert_eq!(view.volume.total_units, 4);
        assert_eq!(view.recent_activity.len(), 2);
        assert_eq!(view.recent_activity[0].revenue, Money::from_major(70));
        assert_eq!(view.recent_activity[1].revenue, Money::from_major(30));
    }

    #[test]
    fn test_report() {
        let view = report(&seeded_shop());

        assert_eq!(view.collection.total_orders, 4);
        assert_eq!(view.collection.collected_orders, 2);
        assert_eq!(view.collection.collection_rate, 50.0);

        let statuses: Vec<_> = view.status_breakdown.iter().map(|b| b.status).collect();
        assert_eq!(statuses, DeliveryStatus::ALL.to_vec());
        assert_eq!(view.status_breakdown[2].selling_total, Money::from_major(130));
    }

    #[test]
    fn test_empty_shop() {
        let shop = ShopState::new();
        assert_eq!(financial_summary(&shop), FinancialSummary::default());

        let view = report(&shop);
        assert_eq!(view.collection.collection_rate, 0.0);
        assert!(view.status_breakdown.iter().all(|b| b.order_count == 0));

        let view = dashboard(&shop, &ConfigState::default());
        assert!(view.recent_activity.is_empty());
        assert_eq!(view.volume, OrderVolume::default());
        assert_eq!(view.cash_in_till, "0 DZD");
    }
}
