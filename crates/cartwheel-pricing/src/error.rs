//! Pricing error types.

use crate::money::Money;
use thiserror::Error;

/// Errors that can occur when building or mutating a cart.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Negative unit price.
    #[error("Negative unit price: {0}")]
    NegativeUnitPrice(Money),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
