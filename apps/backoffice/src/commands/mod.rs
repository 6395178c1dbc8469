//! # Commands Module
//!
//! All commands the back-office answers.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (envelope, dispatch)
//! ├── order.rs    ◄─── Order intake, live metrics, amount check, status
//! ├── till.rs     ◄─── Cash withdrawals
//! ├── customer.rs ◄─── Customers, regulars, name suggestions
//! ├── product.rs  ◄─── Catalog with per-product economics
//! ├── report.rs   ◄─── Financial summary, dashboard, report
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin line                                                             │
//! │  ──────────                                                             │
//! │  {"command": "record_withdrawal",                                       │
//! │   "args": {"personName": "Yacine", "amount": "2000", "reason": "Ink"}}  │
//! │         │                                                               │
//! │         │ (serde: tag = command, content = args)                        │
//! │         ▼                                                               │
//! │  Command::RecordWithdrawal(RecordWithdrawalArgs)                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  till::record_withdrawal(shop, args)                                    │
//! │    -> Result<TillTransaction, ApiError>                                 │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  stdout line                                                            │
//! │  {"ok": true, "data": {...}}  or  {"ok": false, "error": {...}}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each handler declares only the state it needs:
//! ```rust,ignore
//! // Only needs the shop
//! fn list_orders(shop: &ShopState) -> Vec<Order>
//!
//! // Needs both
//! fn regular_customers(shop: &ShopState, config: &ConfigState) -> Vec<RegularCustomer>
//! ```

pub mod config;
pub mod customer;
pub mod order;
pub mod product;
pub mod report;
pub mod till;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::Backoffice;

/// A parsed command line.
///
/// Commands without arguments may omit `args`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Command {
    RecordOrder(order::RecordOrderArgs),
    PreviewOrderMetrics(order::PreviewOrderArgs),
    EvaluateAmount(order::EvaluateAmountArgs),
    UpdateOrderStatus(order::UpdateOrderStatusArgs),
    ListOrders,
    RecordWithdrawal(till::RecordWithdrawalArgs),
    ListTransactions,
    AddCustomer(customer::AddCustomerArgs),
    ListCustomers,
    RegularCustomers,
    CustomerNameSuggestions,
    AddProduct(product::AddProductArgs),
    ListProducts,
    FinancialSummary,
    Dashboard,
    Report,
    GetConfig,
}

impl Command {
    /// Wire name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::RecordOrder(_) => "record_order",
            Command::PreviewOrderMetrics(_) => "preview_order_metrics",
            Command::EvaluateAmount(_) => "evaluate_amount",
            Command::UpdateOrderStatus(_) => "update_order_status",
            Command::ListOrders => "list_orders",
            Command::RecordWithdrawal(_) => "record_withdrawal",
            Command::ListTransactions => "list_transactions",
            Command::AddCustomer(_) => "add_customer",
            Command::ListCustomers => "list_customers",
            Command::RegularCustomers => "regular_customers",
            Command::CustomerNameSuggestions => "customer_name_suggestions",
            Command::AddProduct(_) => "add_product",
            Command::ListProducts => "list_products",
            Command::FinancialSummary => "financial_summary",
            Command::Dashboard => "dashboard",
            Command::Report => "report",
            Command::GetConfig => "get_config",
        }
    }
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Response {
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Response::success(data),
            Err(error) => Response::failure(error),
        }
    }
}

/// Parses one input line and runs it.
pub fn handle_line(backoffice: &Backoffice, line: &str) -> Response {
    let command: Command = match serde_json::from_str(line) {
        Ok(command) => command,
        Err(e) => {
            warn!(error = %e, "Unreadable command line");
            return Response::failure(ApiError::invalid_command(e.to_string()));
        }
    };

    let name = command.name();
    debug!(command = name, "Dispatching command");

    let result = dispatch(backoffice, command);
    if let Err(e) = &result {
        warn!(command = name, code = ?e.code, message = %e.message, "Command rejected");
    }
    result.into()
}

/// Runs a parsed command against the back-office state.
pub fn dispatch(backoffice: &Backoffice, command: Command) -> Result<Value, ApiError> {
    let shop = &backoffice.shop;
    let config = &backoffice.config;

    match command {
        Command::RecordOrder(args) => to_data(order::record_order(shop, args)?),
        Command::PreviewOrderMetrics(args) => to_data(order::preview_order_metrics(args)?),
        Command::EvaluateAmount(args) => to_data(order::evaluate_amount_field(args)?),
        Command::UpdateOrderStatus(args) => to_data(order::update_order_status(shop, args)?),
        Command::ListOrders => to_data(order::list_orders(shop)),
        Command::RecordWithdrawal(args) => to_data(till::record_withdrawal(shop, args)?),
        Command::ListTransactions => to_data(till::list_transactions(shop)),
        Command::AddCustomer(args) => to_data(customer::add_customer(shop, args)?),
        Command::ListCustomers => to_data(customer::list_customers(shop)),
        Command::RegularCustomers => to_data(customer::regular_customers(shop, config)),
        Command::CustomerNameSuggestions => to_data(customer::customer_name_suggestions(shop)),
        Command::AddProduct(args) => to_data(product::add_product(shop, args)?),
        Command::ListProducts => to_data(product::list_products(shop)),
        Command::FinancialSummary => to_data(report::financial_summary(shop)),
        Command::Dashboard => to_data(report::dashboard(shop, config)),
        Command::Report => to_data(report::report(shop)),
        Command::GetConfig => to_data(self::config::get_config(config)),
    }
}

fn to_data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_unit_command_without_args() {
        let command: Command = serde_json::from_str(r#"{"command":"list_orders"}"#).unwrap();
        assert!(matches!(command, Command::ListOrders));
        assert_eq!(command.name(), "list_orders");
    }

    #[test]
    fn test_unknown_command() {
        let backoffice = Backoffice::default();
        let response = handle_line(&backoffice, r#"{"command":"delete_everything"}"#);
        assert!(!response.ok);
        assert_eq!(response.error.unwrap().code, ErrorCode::InvalidCommand);
    }

    #[test]
    fn test_missing_required_arg() {
        let backoffice = Backoffice::default();
        let response = handle_line(
            &backoffice,
            r#"{"command":"update_order_status","args":{"status":"collected"}}"#,
        );
        assert!(!response.ok);
        assert_eq!(response.error.unwrap().code, ErrorCode::InvalidCommand);
    }

    #[test]
    fn test_response_shape() {
        let ok = serde_json::to_value(Response::success(Value::from(3))).unwrap();
        assert_eq!(ok, serde_json::json!({"ok": true, "data": 3}));

        let err = serde_json::to_value(Response::failure(ApiError::validation("bad"))).unwrap();
        assert_eq!(
            err,
            serde_json::json!({"ok": false, "error": {"code": "VALIDATION_ERROR", "message": "bad"}})
        );
    }
}
