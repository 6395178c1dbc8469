//! # Product Commands
//!
//! The product catalog, each product shown with its cost and margin.
//!
//! ## Product Cost
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Card                                         │
//! │                                                                         │
//! │  base_cost ─────────────────────┐                                       │
//! │                                 ├──► total_cost ──► unit_profit, margin │
//! │  is_printed? ink+paper+machine ─┘        ▲                              │
//! │              +labor (blank = 0)          │                              │
//! │                                          │                              │
//! │  not printed: breakdown ignored ─────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use printdesk_core::expression::parse_amount;
use printdesk_core::metrics::ProductEconomics;
use printdesk_core::validation::{
    validate_amount, validate_note, validate_product_name, validate_sku, validate_stock,
};
use printdesk_core::{new_id, CoreError, Money, PrintingCostBreakdown, Product};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShopState;

/// Printing cost components as typed. Blank components stay unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintingCostInput {
    pub ink: Option<String>,
    pub paper: Option<String>,
    pub machine: Option<String>,
    pub labor: Option<String>,
}

impl PrintingCostInput {
    fn into_breakdown(self) -> PrintingCostBreakdown {
        PrintingCostBreakdown {
            ink: component(self.ink),
            paper: component(self.paper),
            machine: component(self.machine),
            labor: component(self.labor),
        }
    }
}

fn component(typed: Option<String>) -> Option<Money> {
    typed
        .filter(|text| !text.trim().is_empty())
        .map(|text| parse_amount(&text))
}

/// Arguments for `add_product`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductArgs {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub base_cost: String,
    #[serde(default)]
    pub is_printed: bool,
    #[serde(default)]
    pub printing_cost_details: Option<PrintingCostInput>,
    #[serde(default)]
    pub selling_price: String,
    #[serde(default)]
    pub stock: i64,
}

/// A product together with what it costs and earns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub economics: ProductEconomics,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let economics = ProductEconomics::of(&product);
        ProductView { product, economics }
    }
}

/// Adds a product to the catalog.
///
/// ## Rules
/// - Name and a well-formed SKU are required
/// - Costs, price and stock must not be negative
/// - Costs and price, breakdown components included, stay within `MAX_AMOUNT`
pub fn add_product(shop: &ShopState, args: AddProductArgs) -> Result<ProductView, ApiError> {
    let product = Product {
        id: new_id(),
        name: args.name,
        sku: args.sku.trim().to_string(),
        category: args.category,
        base_cost: parse_amount(&args.base_cost),
        is_printed: args.is_printed,
        printing_cost_details: args.printing_cost_details.map(PrintingCostInput::into_breakdown),
        selling_price: parse_amount(&args.selling_price),
        stock: args.stock,
    };

    validate_product_name(&product.name).map_err(CoreError::from)?;
    validate_sku(&product.sku).map_err(CoreError::from)?;
    validate_note("category", &product.category).map_err(CoreError::from)?;
    validate_amount("base cost", product.base_cost).map_err(CoreError::from)?;
    validate_amount("selling price", product.selling_price).map_err(CoreError::from)?;
    validate_stock(product.stock).map_err(CoreError::from)?;

    if let Some(details) = &product.printing_cost_details {
        for (field, value) in [
            ("ink cost", details.ink),
            ("paper cost", details.paper),
            ("machine cost", details.machine),
            ("labor cost", details.labor),
        ] {
            if let Some(value) = value {
                validate_amount(field, value).map_err(CoreError::from)?;
            }
        }
    }

    let product = shop.with_shop_mut(|s| s.add_product(product));
    let view = ProductView::from(product);

    info!(
        product_id = %view.product.id,
        sku = %view.product.sku,
        total_cost = %view.economics.total_cost,
        "Product added"
    );
    Ok(view)
}

/// The catalog, in the order products were added.
pub fn list_products(shop: &ShopState) -> Vec<ProductView> {
    let products: Vec<ProductView> =
        shop.with_shop(|s| s.products.iter().cloned().map(ProductView::from).collect());
    debug!(count = products.len(), "list_products");
    products
}
