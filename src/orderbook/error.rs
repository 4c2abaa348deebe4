//! Order book error types.
//!
//! Only invalid arguments are hard failures, and they are reported before any
//! state changes. Everything else a caller can encounter — a refused crossing
//! limit, a cancel of a missing order, a partially filled market order — is a
//! normal return value, not an error.

use thiserror::Error;

/// Errors that can occur within the OrderBook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// Order size must be positive
    #[error("invalid order size: {0}")]
    InvalidSize(String),

    /// Order price must be positive
    #[error("invalid order price: {0}")]
    InvalidPrice(String),

    /// Funds amount must be positive
    #[error("invalid funds amount: {0}")]
    InvalidFunds(String),
}
