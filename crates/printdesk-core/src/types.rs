//! # Domain Types
//!
//! Core domain types used throughout Printdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │ TillTransaction │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  customer_name  │   │  person_name    │   │  name           │       │
//! │  │  costs, price   │   │  amount         │   │  phone, email   │       │
//! │  │  profit, margin │   │  kind           │   └─────────────────┘       │
//! │  │  status         │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ DeliveryStatus  │   │    Product      │   │ RegularCustomer │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  OnTheWay       │   │  base_cost      │   │  (derived, never│       │
//! │  │  NotCollected   │   │  is_printed     │   │   stored)       │       │
//! │  │  Collected      │   │  breakdown      │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders carry derived `profit` and `margin`. They are only ever written by
//! [`Order::from_draft`] and [`Order::reprice`], so they always agree with
//! the cost and price fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::metrics::calculate_service_metrics;
use crate::money::Money;

/// Generates a fresh entity id (UUID v4).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// =============================================================================
// Delivery Status
// =============================================================================

/// Where an order's parcel is in the delivery-company pipeline.
///
/// Variants are declared in lifecycle order, so `Ord` follows the pipeline:
/// `OnTheWay < NotCollected < Collected`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// On the way to the delivery company.
    #[default]
    OnTheWay,
    /// At the delivery company, not yet collected.
    NotCollected,
    /// Collected at the delivery company. Revenue is realized.
    Collected,
}

impl DeliveryStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::OnTheWay,
        DeliveryStatus::NotCollected,
        DeliveryStatus::Collected,
    ];

    /// Whether the order's selling price counts as realized revenue.
    #[inline]
    pub const fn is_collected(&self) -> bool {
        matches!(self, DeliveryStatus::Collected)
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::OnTheWay => "On the way to the delivery company",
            DeliveryStatus::NotCollected => "Not yet collected at the delivery company",
            DeliveryStatus::Collected => "Collected at the delivery company",
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// Everything the order form collects, before the order exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderDraft {
    pub customer_name: String,
    pub description: String,
    pub quantity: i64,
    /// Cost of the blank merchandise.
    pub purchase_cost: Money,
    /// Cost of the customization.
    pub printing_cost: Money,
    pub selling_price: Money,
    pub status: DeliveryStatus,
}

/// A recorded service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer name exactly as typed. Not linked to a `Customer`.
    pub customer_name: String,

    /// What was printed.
    pub description: String,

    /// Number of pieces.
    pub quantity: i64,

    /// Cost of materials.
    pub purchase_cost: Money,

    /// Cost of customization.
    pub printing_cost: Money,

    /// What the customer pays.
    pub selling_price: Money,

    /// When the order was recorded.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Derived: selling price minus both costs.
    pub profit: Money,

    /// Derived: profit as a percentage of selling price.
    pub margin: f64,

    /// Delivery pipeline position. The only field edited after creation.
    pub status: DeliveryStatus,
}

impl Order {
    /// Creates an order from a draft, deriving profit and margin.
    pub fn from_draft(draft: OrderDraft, created_at: DateTime<Utc>) -> Self {
        let metrics = calculate_service_metrics(
            draft.quantity,
            draft.purchase_cost,
            draft.printing_cost,
            draft.selling_price,
        );

        Order {
            id: new_id(),
            customer_name: draft.customer_name,
            description: draft.description,
            quantity: draft.quantity,
            purchase_cost: draft.purchase_cost,
            printing_cost: draft.printing_cost,
            selling_price: draft.selling_price,
            created_at,
            profit: metrics.profit,
            margin: metrics.margin,
            status: draft.status,
        }
    }

    /// Replaces the cost and price inputs and recomputes profit and margin.
    pub fn reprice(&mut self, purchase_cost: Money, printing_cost: Money, selling_price: Money) {
        let metrics =
            calculate_service_metrics(self.quantity, purchase_cost, printing_cost, selling_price);

        self.purchase_cost = purchase_cost;
        self.printing_cost = printing_cost;
        self.selling_price = selling_price;
        self.profit = metrics.profit;
        self.margin = metrics.margin;
    }

    /// Purchase plus printing cost.
    #[inline]
    pub fn total_cost(&self) -> Money {
        self.purchase_cost + self.printing_cost
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.status.is_collected()
    }
}

// =============================================================================
// Till Transaction
// =============================================================================

/// Direction of a till movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Cash taken out of the till.
    #[default]
    Withdrawal,
    /// Cash put into the till.
    Deposit,
}

/// A cash movement in or out of the till.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TillTransaction {
    pub id: String,
    /// Who took (or brought) the cash.
    pub person_name: String,
    pub amount: Money,
    pub reason: String,
    pub kind: TransactionKind,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl TillTransaction {
    /// Records cash taken out of the till.
    pub fn withdrawal(
        person_name: impl Into<String>,
        amount: Money,
        reason: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        TillTransaction {
            id: new_id(),
            person_name: person_name.into(),
            amount,
            reason: reason.into(),
            kind: TransactionKind::Withdrawal,
            created_at,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A manually registered customer. Independent of orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Customer {
            id: new_id(),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// A customer detected from order history. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegularCustomer {
    /// Name as written on the first order seen for this customer.
    pub name: String,
    pub order_count: usize,
    /// Sum of selling prices.
    pub total_spent: Money,
    /// Sum of stored order profits.
    pub total_profit: Money,
}

// =============================================================================
// Product
// =============================================================================

/// Per-unit cost of printing a catalog product.
///
/// Any component left blank counts as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrintingCostBreakdown {
    pub ink: Option<Money>,
    pub paper: Option<Money>,
    pub machine: Option<Money>,
    pub labor: Option<Money>,
}

impl PrintingCostBreakdown {
    /// Sum of all components, missing ones as zero.
    pub fn total(&self) -> Money {
        [self.ink, self.paper, self.machine, self.labor]
            .into_iter()
            .flatten()
            .sum()
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Stock Keeping Unit - business identifier.
    pub sku: String,
    pub category: String,
    /// Cost of the blank item.
    pub base_cost: Money,
    /// Whether the printing breakdown applies to this product.
    pub is_printed: bool,
    pub printing_cost_details: Option<PrintingCostBreakdown>,
    pub selling_price: Money,
    pub stock: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
