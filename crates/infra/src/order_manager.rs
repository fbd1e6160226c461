//! Order lifecycle orchestration.
//!
//! Each order moves through `{absent} -> pending -> fulfilled`. There is no way
//! back. The `OrderManager` owns the two list stores and implements every
//! transition as "load the list, decide, write the list back":
//!
//! ```text
//! create_order:  load pending -> reject duplicate / empty -> append -> save pending
//! fulfill_order: load pending -> reject empty / out of range -> remove
//!                -> save pending -> load fulfilled -> append -> save fulfilled
//! ```
//!
//! Every rejection happens before the first save, so a failed operation
//! writes nothing.
//!
//! ## Partial persist
//!
//! Fulfillment writes two files in sequence, not transactionally. If the
//! fulfilled list cannot be written after the pending list was, the order is
//! in neither file. This is reported as `PersistFailed` and logged; it is not
//! retried or rolled back.

use ordertrack_core::{Entity, OrderError, OrderId, OrderResult};
use ordertrack_sales::{LineItem, Order};

use crate::config::StoreConfig;
use crate::store::{JsonFileStore, OrderListStore, StoreError};

/// Creates, lists, and fulfills orders against a pending and a fulfilled store.
#[derive(Debug)]
pub struct OrderManager<P, F> {
    pending: P,
    fulfilled: F,
}

impl OrderManager<JsonFileStore, JsonFileStore> {
    /// File-backed manager using the configured paths.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            JsonFileStore::new(&config.pending_path),
            JsonFileStore::new(&config.fulfilled_path),
        )
    }
}

impl<P, F> OrderManager<P, F>
where
    P: OrderListStore,
    F: OrderListStore,
{
    pub fn new(pending: P, fulfilled: F) -> Self {
        Self { pending, fulfilled }
    }

    pub fn pending_store(&self) -> &P {
        &self.pending
    }

    pub fn fulfilled_store(&self) -> &F {
        &self.fulfilled
    }

    pub fn load_pending(&self) -> Vec<Order> {
        self.pending.load()
    }

    pub fn save_pending(&self, orders: &[Order]) -> Result<(), StoreError> {
        self.pending.save(orders)
    }

    pub fn load_fulfilled(&self) -> Vec<Order> {
        self.fulfilled.load()
    }

    pub fn save_fulfilled(&self, orders: &[Order]) -> Result<(), StoreError> {
        self.fulfilled.save(orders)
    }

    /// Pending orders in insertion order. Read-only.
    pub fn list_pending(&self) -> Vec<Order> {
        self.load_pending()
    }

    /// Fulfilled orders in the order they were fulfilled. Read-only.
    pub fn list_fulfilled(&self) -> Vec<Order> {
        self.load_fulfilled()
    }

    /// Fail with `DuplicateId` if `id` is already pending.
    ///
    /// Lets an interactive caller reject a taken id before collecting the rest
    /// of the order. `create_order` performs the same check itself.
    pub fn ensure_id_available(&self, id: &OrderId) -> OrderResult<()> {
        Self::check_unique(&self.load_pending(), id)
    }

    fn check_unique(pending: &[Order], id: &OrderId) -> OrderResult<()> {
        if pending.iter().any(|o| o.has_id(id)) {
            return Err(OrderError::DuplicateId(id.clone()));
        }
        Ok(())
    }

    /// Create a pending order and persist the pending list.
    ///
    /// The id is trimmed and upper-cased; the customer name is trimmed.
    /// Fails with `DuplicateId` or `EmptyItems` (or an item-level error for
    /// hand-built lines) without writing anything.
    pub fn create_order(
        &self,
        id: impl AsRef<str>,
        customer: impl AsRef<str>,
        items: Vec<LineItem>,
    ) -> OrderResult<Order> {
        let id = OrderId::new(id);
        let mut pending = self.load_pending();

        Self::check_unique(&pending, &id)?;
        let order = Order::new(id, customer, items)?;

        pending.push(order.clone());
        self.save_pending(&pending)?;

        tracing::info!(
            order_id = %order.order_id,
            items = order.items.len(),
            total = order.total(),
            "order created"
        );
        Ok(order)
    }

    /// Move the order at 1-based `position` from pending to fulfilled.
    ///
    /// Returns the moved order so the caller can show it. Fails with
    /// `NoPendingOrders` or `InvalidSelection` without writing anything.
    pub fn fulfill_order(&self, position: usize) -> OrderResult<Order> {
        let mut pending = self.load_pending();
        if pending.is_empty() {
            return Err(OrderError::NoPendingOrders);
        }
        if position == 0 || position > pending.len() {
            return Err(OrderError::invalid_selection(format!(
                "{position} is not between 1 and {}",
                pending.len()
            )));
        }

        let order = pending.remove(position - 1);
        self.save_pending(&pending)?;

        let mut fulfilled = self.load_fulfilled();
        fulfilled.push(order.clone());
        if let Err(err) = self.save_fulfilled(&fulfilled) {
            tracing::error!(
                order_id = %order.order_id,
                error = %err,
                "order removed from pending but not recorded as fulfilled"
            );
            return Err(err.into());
        }

        tracing::info!(order_id = %order.order_id, position, "order fulfilled");
        Ok(order)
    }

    /// Fulfill from raw operator input.
    ///
    /// Blank input is a cancellation: `Ok(None)`, nothing written. Text that is
    /// not a number is `InvalidSelection`.
    pub fn fulfill_selection(&self, input: &str) -> OrderResult<Option<Order>> {
        if self.load_pending().is_empty() {
            return Err(OrderError::NoPendingOrders);
        }

        let input = input.trim();
        if input.is_empty() {
            tracing::debug!("fulfillment cancelled");
            return Ok(None);
        }

        let position = input
            .parse::<usize>()
            .map_err(|_| OrderError::invalid_selection(format!("{input:?} is not a number")))?;

        self.fulfill_order(position).map(Some)
    }
}
