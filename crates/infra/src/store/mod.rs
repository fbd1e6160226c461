//! Whole-list order storage boundary.
//!
//! Each persisted collection (pending, fulfilled) is one `OrderListStore`.
//! Loads read the entire list; saves replace it entirely.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryOrderListStore;
pub use json_file::JsonFileStore;
pub use r#trait::{OrderListStore, StoreError};
