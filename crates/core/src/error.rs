//! Domain error model.

use thiserror::Error;

use crate::id::OrderId;

/// Result type used across the order-tracking layers.
pub type OrderResult<T> = Result<T, OrderError>;

/// Order-level error.
///
/// Validation variants (`InvalidPrice`, `InvalidQuantity`, `InvalidNumber`) are
/// recovered where the input is read; the caller re-prompts for that one field.
/// Order-level variants abort the operation before anything is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// An order with this id is already pending.
    #[error("order ID {0} already exists")]
    DuplicateId(OrderId),

    /// An order must carry at least one line item.
    #[error("an order needs at least one item")]
    EmptyItems,

    /// Unit prices cannot be negative.
    #[error("price cannot be negative (got {0})")]
    InvalidPrice(i64),

    /// Quantities must be positive.
    #[error("quantity must be a positive integer (got {0})")]
    InvalidQuantity(i64),

    /// The input was not an integer.
    #[error("expected a whole number, got {0:?}")]
    InvalidNumber(String),

    /// Nothing is waiting to be fulfilled.
    #[error("there are no pending orders")]
    NoPendingOrders,

    /// A fulfillment selection was non-numeric or out of range.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// A persisted list was absent or unreadable.
    ///
    /// Load paths recover from this as an empty list; it is only observable
    /// through explicit `try_load` calls.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Writing a persisted list failed.
    #[error("failed to persist orders: {0}")]
    PersistFailed(String),
}

impl OrderError {
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber(input.into())
    }

    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        Self::StorageUnavailable(msg.into())
    }

    pub fn persist_failed(msg: impl Into<String>) -> Self {
        Self::PersistFailed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_message_names_the_normalized_id() {
        let err = OrderError::DuplicateId(OrderId::new(" a1 "));
        assert_eq!(err.to_string(), "order ID A1 already exists");
    }
}
