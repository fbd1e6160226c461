//! Diagnostic logging for the order tracker.
//!
//! The shell owns stdout for its menu and prompts, so diagnostics always go
//! to stderr. Store recovery (absent file, unreadable file, skipped records)
//! and partial persists are logged at `warn`/`error`, which is also the
//! default threshold; `RUST_LOG` raises or lowers it.
//!
//! `ORDERTRACK_LOG_FORMAT` picks the line shape: `json` (default) for log
//! collection, `compact` for reading on a terminal.

use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Environment variable selecting the [`LogFormat`].
pub const FORMAT_ENV: &str = "ORDERTRACK_LOG_FORMAT";

/// Shape of each emitted log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl LogFormat {
    /// Case-insensitive; blank or unrecognized values fall back to `Json`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("compact") => Self::Compact,
            _ => Self::Json,
        }
    }

    fn from_env() -> Self {
        Self::parse(env::var(FORMAT_ENV).ok().as_deref())
    }
}

/// Install the stderr subscriber with the format from the environment.
///
/// Only the first call installs anything; later calls leave it in place.
pub fn init() {
    init_with(LogFormat::from_env());
}

/// Install the stderr subscriber with an explicit format.
pub fn init_with(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr);

    // Err means a global subscriber is already set.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
