//! Configuration loading and representation.

use std::path::PathBuf;

/// Env var overriding the pending-orders file location.
pub const ENV_PENDING_FILE: &str = "ORDERTRACK_PENDING_FILE";
/// Env var overriding the fulfilled-orders file location.
pub const ENV_FULFILLED_FILE: &str = "ORDERTRACK_FULFILLED_FILE";

pub const DEFAULT_PENDING_FILE: &str = "orders.json";
pub const DEFAULT_FULFILLED_FILE: &str = "output_orders.json";

/// Where the two order lists live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub pending_path: PathBuf,
    pub fulfilled_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pending_path: PathBuf::from(DEFAULT_PENDING_FILE),
            fulfilled_path: PathBuf::from(DEFAULT_FULFILLED_FILE),
        }
    }
}

impl StoreConfig {
    /// Defaults, overridden by `ORDERTRACK_PENDING_FILE` / `ORDERTRACK_FULFILLED_FILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with an injectable lookup, so tests
    /// don't have to mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(fallback)
        };

        Self {
            pending_path: pick(ENV_PENDING_FILE, defaults.pending_path),
            fulfilled_path: pick(ENV_FULFILLED_FILE, defaults.fulfilled_path),
        }
    }

    /// Apply explicit overrides (e.g. command-line flags) on top of this config.
    pub fn with_overrides(mut self, pending: Option<PathBuf>, fulfilled: Option<PathBuf>) -> Self {
        if let Some(path) = pending {
            self.pending_path = path;
        }
        if let Some(path) = fulfilled {
            self.fulfilled_path = path;
        }
        self
    }
}
