use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use ordertrack_sales::Order;

use super::r#trait::{OrderListStore, StoreError};

/// In-memory order list.
///
/// Intended for tests/dev. Counts successful saves so callers can assert that
/// a rejected operation performed no writes.
#[derive(Debug, Default)]
pub struct InMemoryOrderListStore {
    orders: RwLock<Vec<Order>>,
    saves: AtomicUsize,
}

impl InMemoryOrderListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list without counting it as a save.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl OrderListStore for InMemoryOrderListStore {
    fn load(&self) -> Vec<Order> {
        match self.orders.read() {
            Ok(orders) => orders.clone(),
            Err(_) => {
                tracing::warn!("in-memory order list lock poisoned; treating as empty");
                vec![]
            }
        }
    }

    fn save(&self, orders: &[Order]) -> Result<(), StoreError> {
        let mut stored = self.orders.write().map_err(|_| StoreError::LockPoisoned)?;
        *stored = orders.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordertrack_core::OrderId;
    use ordertrack_sales::LineItem;

    fn order(id: &str) -> Order {
        Order::new(OrderId::new(id), "Mary", vec![LineItem::new("Tea", 50, 2).unwrap()]).unwrap()
    }

    #[test]
    fn save_replaces_and_counts() {
        let store = InMemoryOrderListStore::with_orders(vec![order("a1")]);
        assert_eq!(store.save_count(), 0);

        store.save(&[order("b1"), order("b2")]).unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load(), vec![order("b1"), order("b2")]);
    }
}
