use std::path::PathBuf;

use thiserror::Error;

use ordertrack_core::OrderError;
use ordertrack_sales::Order;

/// Errors raised while persisting an order list.
///
/// Loads never produce these: an absent or unreadable list is treated as empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize orders: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    LockPoisoned,
}

impl From<StoreError> for OrderError {
    fn from(value: StoreError) -> Self {
        OrderError::persist_failed(value.to_string())
    }
}

/// A persisted, ordered list of orders.
///
/// Implementations must:
/// - return an empty list from `load` when nothing usable is stored
/// - replace the whole stored list on `save` (no append, no merge)
/// - preserve order and content exactly across `save` then `load`
pub trait OrderListStore {
    /// Load the full list. Never fails; absence or corruption yields `vec![]`.
    fn load(&self) -> Vec<Order>;

    /// Overwrite the stored list with `orders`.
    fn save(&self, orders: &[Order]) -> Result<(), StoreError>;
}
