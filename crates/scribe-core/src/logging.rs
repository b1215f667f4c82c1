//! Tracing subscriber setup.
//!
//! The filter comes from `SCRIBE_LOG` when set, falling back to the given
//! default directive. Initialization is idempotent so tests and embedding
//! applications can both call it freely.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "SCRIBE_LOG";

/// Install the global tracing subscriber.
///
/// `default_filter` is a standard `EnvFilter` directive (e.g. `"info"` or
/// `"scribe_engine=debug,info"`) used when [`LOG_ENV_VAR`] is unset or
/// invalid. A second call is a no-op.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
