//! # Error Types
//!
//! Domain-specific error types for printdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  printdesk-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                           │
//! │  ├── ValidationError  - Form input rejected before intake               │
//! │  └── ExpressionError  - Typed-in arithmetic that cannot be evaluated    │
//! │                                                                         │
//! │  backoffice errors (app crate)                                          │
//! │  └── ApiError         - What the caller sees (serialized)               │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                               │
//! │        ExpressionError ─┴► CoreError ──► ApiError ──► caller            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Metrics, summaries and the classifier have no error type at all: every
//! edge case there saturates to zero.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No order with this id.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Expression error (wraps ExpressionError).
    #[error("Invalid amount: {0}")]
    Expression(#[from] ExpressionError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the intake guards before anything is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Amount above the intake cap.
    #[error("{field} must not exceed {max}")]
    TooLarge { field: String, max: Money },

    /// Invalid format (e.g., bad SKU characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Expression Error
// =============================================================================

/// Why a typed-in arithmetic expression could not be evaluated.
///
/// Positions are character offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("expression is empty")]
    Empty,

    #[error("expression longer than {max} characters")]
    TooLong { max: usize },

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    #[error("malformed number '{text}' at position {position}")]
    MalformedNumber { text: String, position: usize },

    #[error("unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("expression ends too early")]
    UnexpectedEnd,

    #[error("missing closing parenthesis for the one at position {position}")]
    UnclosedParenthesis { position: usize },

    #[error("expression nested deeper than {max} levels")]
    TooDeep { max: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is too large")]
    Overflow,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
