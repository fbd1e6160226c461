//! JSON-file-backed order list.
//!
//! The file holds a single JSON array of orders, pretty-printed with 4-space
//! indentation and non-ASCII text written literally (UTF-8, not `\u` escaped).
//!
//! Records are decoded one at a time: a record that does not match the order
//! schema is skipped with a warning, and the rest of the list still loads.
//! Only a file that is not a JSON array at all counts as unusable.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_json::ser::{PrettyFormatter, Serializer};

use ordertrack_core::{OrderError, OrderResult};
use ordertrack_sales::Order;

use super::r#trait::{OrderListStore, StoreError};

const INDENT: &[u8] = b"    ";

/// Order list persisted as one JSON file, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load without recovering: an absent file, or one that is not a JSON
    /// array, is `StorageUnavailable`.
    ///
    /// Individual records that fail to decode are skipped and logged.
    pub fn try_load(&self) -> OrderResult<Vec<Order>> {
        let unavailable = |e: &dyn core::fmt::Display| {
            OrderError::storage_unavailable(format!("{}: {e}", self.path.display()))
        };

        let raw = fs::read_to_string(&self.path).map_err(|e| unavailable(&e))?;
        let records: Vec<JsonValue> =
            serde_json::from_str(&raw).map_err(|e| unavailable(&e))?;

        Ok(self.decode_records(records))
    }

    fn decode_records(&self, records: Vec<JsonValue>) -> Vec<Order> {
        let mut orders = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Order>(record) {
                Ok(order) => orders.push(order),
                Err(err) => tracing::warn!(
                    path = %self.path.display(),
                    index,
                    error = %err,
                    "skipping order record that does not match the schema"
                ),
            }
        }
        orders
    }
}

/// Serialize `orders` the way the files are stored on disk.
pub fn to_file_json(orders: &[Order]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    orders.serialize(&mut ser)?;
    Ok(buf)
}

impl OrderListStore for JsonFileStore {
    fn load(&self) -> Vec<Order> {
        match fs::metadata(&self.path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "order file absent; starting empty");
                return vec![];
            }
            _ => {}
        }

        match self.try_load() {
            Ok(orders) => {
                tracing::debug!(path = %self.path.display(), count = orders.len(), "loaded orders");
                orders
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "order file unreadable; treating as empty"
                );
                vec![]
            }
        }
    }

    fn save(&self, orders: &[Order]) -> Result<(), StoreError> {
        let bytes = to_file_json(orders)?;
        fs::write(&self.path, bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), count = orders.len(), "saved orders");
        Ok(())
    }
}
