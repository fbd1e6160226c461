//! Diagnostic logging setup for the `ordertrack` binary.

pub use self::tracing::{DEFAULT_FILTER, FORMAT_ENV, LogFormat, init_with};

/// Install the process-wide subscriber, formatted per `ORDERTRACK_LOG_FORMAT`.
///
/// Repeated calls are no-ops.
pub fn init() {
    self::tracing::init();
}

pub mod tracing;
