//! Error types for coin arithmetic.

use thiserror::Error;

/// Errors from constructing or combining coin multisets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoinError {
    /// A wire-level coin declared a negative amount.
    #[error("Negative amount {amount} for denom {denom}")]
    NegativeAmount { denom: String, amount: i128 },

    /// Subtraction would take a balance below zero.
    #[error("Insufficient {denom}: required {required}, available {available}")]
    Insufficient {
        denom: String,
        required: u128,
        available: u128,
    },

    /// Addition overflowed the amount type.
    #[error("Amount overflow for denom {denom}")]
    Overflow { denom: String },
}
