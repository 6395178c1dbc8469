//! # Validation Module
//!
//! Intake guards for the forms that create orders, till movements,
//! customers and products.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Backoffice command (Rust)                                     │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: reject incomplete submissions                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Core calculations                                                      │
//! │  └── Never validate: every input has a defined result                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printdesk_core::validation::{validate_customer_name, validate_quantity};
//!
//! assert!(validate_customer_name("Imane").is_ok());
//! assert!(validate_customer_name("   ").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::OrderDraft;
use crate::{MAX_AMOUNT, MAX_ORDER_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 100;
const MAX_TEXT_LEN: usize = 500;
const MAX_SKU_LEN: usize = 50;

// =============================================================================
// String Validators
// =============================================================================

fn require_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates the customer name typed on an order or customer form.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    require_text("customer name", name, MAX_NAME_LEN)
}

/// Validates an order's service description.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    require_text("description", description, MAX_TEXT_LEN)
}

/// Validates the name of whoever takes cash from the till.
pub fn validate_person_name(name: &str) -> ValidationResult<()> {
    require_text("person name", name, MAX_NAME_LEN)
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require_text("product name", name, MAX_NAME_LEN)
}

/// Validates free-text notes. May be empty.
pub fn validate_note(field: &str, text: &str) -> ValidationResult<()> {
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use printdesk_core::validation::validate_sku;
///
/// assert!(validate_sku("HD-BLK-XL").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    require_text("sku", sku, MAX_SKU_LEN)?;

    if !sku
        .trim()
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order quantity: at least 1, at most `MAX_ORDER_QUANTITY`.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ORDER_QUANTITY {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("cannot exceed {}", MAX_ORDER_QUANTITY),
        });
    }

    Ok(())
}

fn require_within_cap(field: &str, amount: Money) -> ValidationResult<()> {
    if amount > MAX_AMOUNT {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

/// Validates a cost or price. Zero is allowed, `MAX_AMOUNT` is the ceiling.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }
    require_within_cap(field, amount)
}

/// Validates a till withdrawal amount. Must be above zero and within
/// `MAX_AMOUNT`.
pub fn validate_withdrawal_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }
    require_within_cap("amount", amount)
}

/// Validates a stock count. Zero is allowed.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Checks everything the order form requires before an order is recorded.
pub fn validate_order_draft(draft: &OrderDraft) -> ValidationResult<()> {
    validate_customer_name(&draft.customer_name)?;
    validate_description(&draft.description)?;
    validate_quantity(draft.quantity)?;
    validate_amount("purchase cost", draft.purchase_cost)?;
    validate_amount("printing cost", draft.printing_cost)?;
    validate_amount("selling price", draft.selling_price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeliveryStatus;

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Rania".to_string(),
            description: "Wedding mugs".to_string(),
            quantity: 40,
            purchase_cost: Money::from_major(8_000),
            printing_cost: Money::from_major(4_000),
            selling_price: Money::from_major(16_000),
            status: DeliveryStatus::OnTheWay,
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_customer_name("Rania").is_ok());
        assert_eq!(
            validate_customer_name(" \t"),
            Err(ValidationError::Required {
                field: "customer name".to_string()
            })
        );
        assert!(validate_description("").is_err());
        assert!(validate_person_name(&"A".repeat(101)).is_err());
        assert!(validate_product_name("Hoodie").is_ok());
    }

    #[test]
    fn test_validate_note() {
        assert!(validate_note("reason", "").is_ok());
        assert!(validate_note("reason", &"x".repeat(501)).is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("MUG-11OZ").is_ok());
        assert!(validate_sku("tee_white").is_ok());
        assert!(validate_sku("").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ORDER_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(MAX_ORDER_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_amounts() {
        assert!(validate_amount("selling price", Money::zero()).is_ok());
        assert!(validate_amount("selling price", Money::from_minor(-1)).is_err());
        assert!(validate_withdrawal_amount(Money::from_major(1)).is_ok());
        assert!(validate_withdrawal_amount(Money::zero()).is_err());
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_amounts_capped() {
        assert!(validate_amount("selling price", MAX_AMOUNT).is_ok());
        assert_eq!(
            validate_amount("selling price", MAX_AMOUNT + Money::from_minor(1)),
            Err(ValidationError::TooLarge {
                field: "selling price".to_string(),
                max: MAX_AMOUNT,
            })
        );
        assert!(validate_withdrawal_amount(MAX_AMOUNT).is_ok());
        assert!(validate_withdrawal_amount(Money::from_minor(i64::MAX)).is_err());

        let mut huge = draft();
        huge.purchase_cost = Money::from_minor(i64::MAX);
        assert!(matches!(
            validate_order_draft(&huge),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_order_draft() {
        assert!(validate_order_draft(&draft()).is_ok());

        let mut missing_description = draft();
        missing_description.description = "  ".to_string();
        assert_eq!(
            validate_order_draft(&missing_description),
            Err(ValidationError::Required {
                field: "description".to_string()
            })
        );

        let mut negative = draft();
        negative.printing_cost = Money::from_major(-5);
        assert!(validate_order_draft(&negative).is_err());
    }
}
