//! # printdesk-core: Pure Business Logic for Printdesk
//!
//! This crate is the **heart** of Printdesk. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Printdesk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (any)                               │   │
//! │  │    Orders ──► Till ──► Customers ──► Dashboard / Reports        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Backoffice (apps/backoffice)                 │   │
//! │  │    record_order, record_withdrawal, dashboard, etc.             │   │
//! │  │    In-memory ShopState                                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ printdesk-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐  │   │
//! │  │   │ metrics │ │ summary │ │customers│ │expression│ │  money  │  │   │
//! │  │   │ profit  │ │ till    │ │regulars │ │ "10+5*2" │ │ centimes│  │   │
//! │  │   │ margin  │ │ revenue │ │         │ │          │ │         │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HIDDEN STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, TillTransaction, Customer, Product)
//! - [`money`] - Money type with integer arithmetic
//! - [`metrics`] - Per-order and per-product cost, profit and margin
//! - [`summary`] - Cash position and report aggregates
//! - [`customers`] - Regular-customer detection
//! - [`expression`] - Arithmetic expressions typed into amount fields
//! - [`validation`] - Intake guards
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, inputs passed explicitly
//! 2. **No I/O**: no files, network, environment or logging in this crate
//! 3. **Integer Money**: all amounts are centimes (i64)
//! 4. **Saturating Math**: calculations define every edge case (0 instead of errors)
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use printdesk_core::expression::parse_amount;
//! use printdesk_core::summary::financial_summary;
//! use printdesk_core::{DeliveryStatus, Money, Order, OrderDraft};
//!
//! let order = Order::from_draft(
//!     OrderDraft {
//!         customer_name: "Samir".into(),
//!         description: "Club jerseys".into(),
//!         quantity: 15,
//!         purchase_cost: parse_amount("15*900"),
//!         printing_cost: parse_amount("15*300"),
//!         selling_price: parse_amount("27000"),
//!         status: DeliveryStatus::Collected,
//!     },
//!     Utc::now(),
//! );
//! assert_eq!(order.profit, Money::from_major(9000));
//!
//! let summary = financial_summary(&[order], &[]);
//! assert_eq!(summary.net_cash_in_till, Money::from_major(27000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customers;
pub mod error;
pub mod expression;
pub mod metrics;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use customers::{classify_regular_customers, regular_customers, ClassifierConfig, NameMatching};
pub use error::{CoreError, CoreResult, ExpressionError, ValidationError};
pub use metrics::{calculate_product_total_cost, calculate_profit_margin, calculate_service_metrics};
pub use money::Money;
pub use summary::{financial_summary, FinancialSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// ISO 4217 code of the shop's currency.
pub const CURRENCY_CODE: &str = "DZD";

/// Orders needed under one name before a customer counts as a regular.
pub const REGULAR_CUSTOMER_THRESHOLD: usize = 3;

/// Largest quantity accepted on a single order.
///
/// ## Business Reason
/// Catches a slipped key (10000 instead of 100) before it skews unit costs.
pub const MAX_ORDER_QUANTITY: i64 = 100_000;

/// Largest cost, price or withdrawal accepted at intake: one billion dinars.
///
/// ## Business Reason
/// A summary adds up every order ever recorded. Capping each amount keeps
/// those totals far inside the centime counter's range.
pub const MAX_AMOUNT: Money = Money::from_major(1_000_000_000);
