//! # Till Commands
//!
//! Cash taken out of the till. Every withdrawal lowers the net cash shown
//! on the dashboard.

use chrono::Utc;
use printdesk_core::expression::parse_amount;
use printdesk_core::validation::{validate_note, validate_person_name, validate_withdrawal_amount};
use printdesk_core::{CoreError, TillTransaction};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShopState;

/// Arguments for `record_withdrawal`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordWithdrawalArgs {
    pub person_name: String,
    /// As typed; arithmetic allowed.
    pub amount: String,
    #[serde(default)]
    pub reason: String,
}

/// Records cash taken out of the till.
///
/// ## Rules
/// - A person name is required
/// - The amount must come out above zero and within `MAX_AMOUNT`
pub fn record_withdrawal(
    shop: &ShopState,
    args: RecordWithdrawalArgs,
) -> Result<TillTransaction, ApiError> {
    let amount = parse_amount(&args.amount);

    validate_person_name(&args.person_name).map_err(CoreError::from)?;
    validate_withdrawal_amount(amount).map_err(CoreError::from)?;
    validate_note("reason", &args.reason).map_err(CoreError::from)?;

    let transaction = TillTransaction::withdrawal(args.person_name, amount, args.reason, Utc::now());
    let transaction = shop.with_shop_mut(|s| s.record_transaction(transaction));

    info!(
        transaction_id = %transaction.id,
        person = %transaction.person_name,
        amount = %transaction.amount,
        "Withdrawal recorded"
    );
    Ok(transaction)
}

/// All till movements, newest first.
pub fn list_transactions(shop: &ShopState) -> Vec<TillTransaction> {
    let transactions = shop.with_shop(|s| s.transactions_newest_first());
    debug!(count = transactions.len(), "list_transactions");
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use printdesk_core::{Money, TransactionKind};

    fn args(person: &str, amount: &str) -> RecordWithdrawalArgs {
        RecordWithdrawalArgs {
            person_name: person.to_string(),
            amount: amount.to_string(),
            reason: "Ink refill".to_string(),
        }
    }

    #[test]
    fn test_record_withdrawal() {
        let shop = ShopState::new();
        let tx = record_withdrawal(&shop, args("Yacine", "1500+500")).unwrap();

        assert_eq!(tx.amount, Money::from_major(2_000));
        assert_eq!(tx.kind, TransactionKind::Withdrawal);
        assert_eq!(
            shop.with_shop(|s| s.summary().total_withdrawals),
            Money::from_major(2_000)
        );
    }

    #[test]
    fn test_rejects_zero_amount_and_blank_person() {
        let shop = ShopState::new();

        let err = record_withdrawal(&shop, args("Yacine", "abc")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "amount must be positive");

        let err = record_withdrawal(&shop, args(" ", "100")).unwrap_err();
        assert_eq!(err.message, "person name is required");

        let err = record_withdrawal(&shop, args("Yacine", "92233720368547758")).unwrap_err();
        assert_eq!(err.message, "amount must not exceed 1000000000.00 DZD");

        assert!(list_transactions(&shop).is_empty());
    }

    #[test]
    fn test_list_newest_first() {
        let shop = ShopState::new();
        record_withdrawal(&shop, args("Yacine", "100")).unwrap();
        let latest = record_withdrawal(&shop, args("Meriem", "200")).unwrap();

        let listed = list_transactions(&shop);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, latest.id);
    }
}
