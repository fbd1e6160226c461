//! Infrastructure layer: file-backed order lists, configuration, and the
//! order manager that moves orders between them.

pub mod config;
pub mod order_manager;
pub mod store;

pub use config::StoreConfig;
pub use order_manager::OrderManager;
pub use store::{InMemoryOrderListStore, JsonFileStore, OrderListStore, StoreError};
