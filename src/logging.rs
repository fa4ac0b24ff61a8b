//! Logging initialization for the `swl` binary.
//!
//! Configures the `tracing` subscriber from the `SWL_LOG` environment
//! variable, falling back to the `[log] level` from the config file.
//! Records from the `layout-ordering` crate go through the `log` facade and
//! are picked up by the subscriber's log bridge.
//!
//! ```bash
//! SWL_LOG=debug swl move ...
//! SWL_LOG=layout_ordering=trace,warn swl move ...
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "SWL_LOG";

/// Build the filter: `SWL_LOG` when set and valid, else `level`.
pub fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Initialize the tracing subscriber, writing to stderr.
///
/// Does nothing if a global subscriber is already set.
pub fn init(level: LogLevel) {
    let _ = fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
