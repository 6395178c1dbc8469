//! # Customer Classifier
//!
//! Detects regular customers from order history.
//!
//! Orders carry a free-text customer name, not a link to a registered
//! customer. Orders are grouped by a normalized form of that name, and any
//! group with enough orders becomes a [`RegularCustomer`].
//!
//! ```text
//! "Ali"   ─┐
//! " ali " ─┼─ normalize ─► "ali" ─► 3 orders ≥ threshold ─► Regular "Ali"
//! "ALI"   ─┘
//! ```
//!
//! The roster is never stored. Callers re-run the classifier on every read,
//! so a new order shows up in the roster immediately.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Customer, Order, RegularCustomer};
use crate::REGULAR_CUSTOMER_THRESHOLD;

// =============================================================================
// Configuration
// =============================================================================

/// How two customer names are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NameMatching {
    /// Ignore surrounding whitespace and letter case.
    #[default]
    TrimLowercase,
    /// Ignore surrounding whitespace only.
    Trim,
    /// Byte-for-byte equality.
    Exact,
}

impl NameMatching {
    /// Produces the grouping key for a name.
    pub fn normalize(&self, name: &str) -> String {
        match self {
            NameMatching::TrimLowercase => name.trim().to_lowercase(),
            NameMatching::Trim => name.trim().to_string(),
            NameMatching::Exact => name.to_string(),
        }
    }
}

/// Classifier settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassifierConfig {
    /// Minimum number of orders to count as a regular.
    pub threshold: usize,
    pub matching: NameMatching,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            threshold: REGULAR_CUSTOMER_THRESHOLD,
            matching: NameMatching::default(),
        }
    }
}

// =============================================================================
// Classification
// =============================================================================

struct Group {
    display_name: String,
    order_count: usize,
    total_spent: Money,
    total_profit: Money,
}

/// Classifies with the default threshold and trim + lowercase matching.
pub fn regular_customers(orders: &[Order]) -> Vec<RegularCustomer> {
    classify_regular_customers(orders, &ClassifierConfig::default())
}

/// Groups orders by normalized customer name and returns every group with
/// at least `config.threshold` orders.
///
/// The display name is the name as written on the first order seen for the
/// group. Output is sorted by descending order count; ties keep the order
/// in which their groups first appeared.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use printdesk_core::customers::regular_customers;
/// use printdesk_core::{DeliveryStatus, Money, Order, OrderDraft};
///
/// let orders: Vec<Order> = ["Ali", " ali ", "ALI"]
///     .into_iter()
///     .map(|name| {
///         Order::from_draft(
///             OrderDraft {
///                 customer_name: name.to_string(),
///                 description: "Stickers".into(),
///                 quantity: 1,
///                 purchase_cost: Money::from_major(8),
///                 printing_cost: Money::zero(),
///                 selling_price: Money::from_major(10),
///                 status: DeliveryStatus::OnTheWay,
///             },
///             Utc::now(),
///         )
///     })
///     .collect();
///
/// let regulars = regular_customers(&orders);
/// assert_eq!(regulars.len(), 1);
/// assert_eq!(regulars[0].name, "Ali");
/// assert_eq!(regulars[0].order_count, 3);
/// assert_eq!(regulars[0].total_spent, Money::from_major(30));
/// assert_eq!(regulars[0].total_profit, Money::from_major(6));
/// ```
pub fn classify_regular_customers(orders: &[Order], config: &ClassifierConfig) -> Vec<RegularCustomer> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for order in orders {
        let key = config.matching.normalize(&order.customer_name);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                display_name: order.customer_name.clone(),
                order_count: 0,
                total_spent: Money::zero(),
                total_profit: Money::zero(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.order_count += 1;
        group.total_spent += order.selling_price;
        group.total_profit += order.profit;
    }

    let mut regulars: Vec<RegularCustomer> = groups
        .into_iter()
        .filter(|g| g.order_count >= config.threshold)
        .map(|g| RegularCustomer {
            name: g.display_name,
            order_count: g.order_count,
            total_spent: g.total_spent,
            total_profit: g.total_profit,
        })
        .collect();

    // stable: equal counts stay in first-seen order
    regulars.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    regulars
}

/// Names offered as suggestions on the order form.
///
/// Manual customers first, then names from orders, each name once, in the
/// order first seen. Duplicates are exact-match only, like the suggestions
/// list they feed.
pub fn known_customer_names(customers: &[Customer], orders: &[Order]) -> Vec<String> {
    let mut seen = HashSet::new();
    customers
        .iter()
        .map(|c| c.name.as_str())
        .chain(orders.iter().map(|o| o.customer_name.as_str()))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
