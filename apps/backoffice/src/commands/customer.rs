//! # Customer Commands
//!
//! Manually registered customers, and the regulars detected from order
//! history. The two are independent: a regular need not be registered.

use printdesk_core::customers::{classify_regular_customers, known_customer_names};
use printdesk_core::validation::{validate_customer_name, validate_note};
use printdesk_core::{CoreError, Customer, RegularCustomer};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, ShopState};

/// Arguments for `add_customer`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCustomerArgs {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Registers a customer. Only the name is required.
pub fn add_customer(shop: &ShopState, args: AddCustomerArgs) -> Result<Customer, ApiError> {
    validate_customer_name(&args.name).map_err(CoreError::from)?;
    validate_note("phone", &args.phone).map_err(CoreError::from)?;
    validate_note("email", &args.email).map_err(CoreError::from)?;

    let customer = shop.with_shop_mut(|s| {
        s.add_customer(Customer::new(args.name, args.phone, args.email))
    });

    info!(customer_id = %customer.id, name = %customer.name, "Customer added");
    Ok(customer)
}

/// Registered customers, in the order they were added.
pub fn list_customers(shop: &ShopState) -> Vec<Customer> {
    shop.with_shop(|s| s.customers.clone())
}

/// Customers with enough orders to count as regulars, most orders first.
///
/// Recomputed from the full order history on every call.
pub fn regular_customers(shop: &ShopState, config: &ConfigState) -> Vec<RegularCustomer> {
    let classifier = config.classifier();
    let regulars = shop.with_shop(|s| classify_regular_customers(&s.orders, &classifier));
    debug!(
        count = regulars.len(),
        threshold = classifier.threshold,
        "regular_customers"
    );
    regulars
}

/// Names to suggest on the order form.
pub fn customer_name_suggestions(shop: &ShopState) -> Vec<String> {
    shop.with_shop(|s| known_customer_names(&s.customers, &s.orders))
}
