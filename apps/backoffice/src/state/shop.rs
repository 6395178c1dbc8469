//! # Shop State
//!
//! Holds everything the shop has recorded: orders, till movements,
//! customers and the product catalog.
//!
//! ## Thread Safety
//! The shop is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read and modify it
//! 2. Only one command should modify it at a time
//!
//! ## Shop Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shop State Operations                                │
//! │                                                                         │
//! │  Form Action              Command                 Shop State Change     │
//! │  ───────────              ───────                 ─────────────────     │
//! │                                                                         │
//! │  Save order ─────────────► record_order() ──────► orders.push(order)   │
//! │                                                                         │
//! │  Change status ──────────► update_order_status() ► order.status = s    │
//! │                                                                         │
//! │  Take cash ──────────────► record_withdrawal() ──► transactions.push() │
//! │                                                                         │
//! │  Add customer/product ───► add_customer() ...  ──► customers.push()    │
//! │                                                                         │
//! │  Dashboard / reports ────► financial_summary() ──► (read only)         │
//! │                                                                         │
//! │  NOTE: Lists are kept in recording order. Newest-first views are        │
//! │        produced on read.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use printdesk_core::summary::financial_summary;
use printdesk_core::{
    CoreError, CoreResult, Customer, DeliveryStatus, FinancialSummary, Order, OrderDraft, Product,
    TillTransaction,
};

/// The shop's records.
///
/// ## Invariants
/// - `orders` and `transactions` are in the order they were recorded
/// - Only an order's `status` changes after it is recorded
#[derive(Debug, Clone, Default)]
pub struct Shop {
    pub orders: Vec<Order>,
    pub transactions: Vec<TillTransaction>,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
}

impl Shop {
    /// Creates an empty shop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an order, deriving its profit and margin.
    pub fn record_order(&mut self, draft: OrderDraft, at: DateTime<Utc>) -> Order {
        let order = Order::from_draft(draft, at);
        self.orders.push(order.clone());
        order
    }

    /// Moves an order to another delivery status.
    pub fn set_order_status(&mut self, order_id: &str, status: DeliveryStatus) -> CoreResult<Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))?;

        order.status = status;
        Ok(order.clone())
    }

    /// Appends a till movement.
    pub fn record_transaction(&mut self, transaction: TillTransaction) -> TillTransaction {
        self.transactions.push(transaction.clone());
        transaction
    }

    pub fn add_customer(&mut self, customer: Customer) -> Customer {
        self.customers.push(customer.clone());
        customer
    }

    pub fn add_product(&mut self, product: Product) -> Product {
        self.products.push(product.clone());
        product
    }

    /// Orders, most recently recorded first.
    pub fn orders_newest_first(&self) -> Vec<Order> {
        self.orders.iter().rev().cloned().collect()
    }

    /// Till movements, most recently recorded first.
    pub fn transactions_newest_first(&self) -> Vec<TillTransaction> {
        self.transactions.iter().rev().cloned().collect()
    }

    /// Current cash-position snapshot.
    pub fn summary(&self) -> FinancialSummary {
        financial_summary(&self.orders, &self.transactions)
    }
}

/// Shared shop state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Shop>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread modifies the shop at a time
#[derive(Debug, Clone)]
pub struct ShopState {
    shop: Arc<Mutex<Shop>>,
}

impl ShopState {
    /// Creates a new empty shop state.
    pub fn new() -> Self {
        ShopState {
            shop: Arc::new(Mutex::new(Shop::new())),
        }
    }

    /// Executes a function with read access to the shop.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = shop_state.with_shop(|shop| shop.summary());
    /// ```
    pub fn with_shop<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Shop) -> R,
    {
        let shop = self.shop.lock().expect("Shop mutex poisoned");
        f(&shop)
    }

    /// Executes a function with write access to the shop.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// shop_state.with_shop_mut(|shop| shop.set_order_status(&id, status))?;
    /// ```
    pub fn with_shop_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Shop) -> R,
    {
        let mut shop = self.shop.lock().expect("Shop mutex poisoned");
        f(&mut shop)
    }
}

impl Default for ShopState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use printdesk_core::Money;

    fn draft(name: &str, selling: i64) -> OrderDraft {
        OrderDraft {
            customer_name: name.to_string(),
            description: "Stickers".to_string(),
            quantity: 50,
            purchase_cost: Money::from_major(10),
            printing_cost: Money::from_major(5),
            selling_price: Money::from_major(selling),
            status: DeliveryStatus::OnTheWay,
        }
    }

    #[test]
    fn test_record_order_keeps_chronological_order() {
        let mut shop = Shop::new();
        let t0 = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();

        let first = shop.record_order(draft("Amine", 40), t0);
        let second = shop.record_order(draft("Lina", 60), t0 + Duration::minutes(5));

        assert_eq!(shop.orders[0].id, first.id);
        assert_eq!(shop.orders_newest_first()[0].id, second.id);
        assert_eq!(first.profit, Money::from_major(25));
    }

    #[test]
    fn test_set_order_status() {
        let mut shop = Shop::new();
        let order = shop.record_order(draft("Amine", 40), Utc::now());
        assert_eq!(shop.summary().total_pending_collection, Money::from_major(40));

        let updated = shop
            .set_order_status(&order.id, DeliveryStatus::Collected)
            .unwrap();
        assert_eq!(updated.status, DeliveryStatus::Collected);
        assert_eq!(updated.profit, order.profit);
        assert_eq!(shop.summary().total_collected_revenue, Money::from_major(40));
    }

    #[test]
    fn test_set_order_status_unknown_id() {
        let mut shop = Shop::new();
        let err = shop
            .set_order_status("missing", DeliveryStatus::Collected)
            .unwrap_err();
        assert!(matches!(err, CoreError::OrderNotFound(id) if id == "missing"));
    }

    #[test]
    fn test_withdrawal_reduces_cash() {
        let state = ShopState::new();
        state.with_shop_mut(|shop| {
            let order = shop.record_order(draft("Amine", 100), Utc::now());
            shop.set_order_status(&order.id, DeliveryStatus::Collected).unwrap();
            shop.record_transaction(TillTransaction::withdrawal(
                "Yacine",
                Money::from_major(30),
                "Ink",
                Utc::now(),
            ));
        });

        let summary = state.with_shop(|shop| shop.summary());
        assert_eq!(summary.net_cash_in_till, Money::from_major(70));
    }
}
