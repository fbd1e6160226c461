//! Strongly-typed order identifier.

use serde::{Deserialize, Serialize};

/// Identifier of an order.
///
/// Ids are case-normalized: construction trims surrounding whitespace and
/// upper-cases the text, so `" a1"` and `"A1"` name the same order.
///
/// Deserialization is transparent and does **not** normalize, so records
/// written by other tools are loaded exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a normalized identifier from raw operator input.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
