//! Logging setup.
//!
//! Structured logs go to stderr through `tracing-subscriber`. The filter is
//! read from `POKEDEX_LOG` (same syntax as `RUST_LOG`), defaulting to
//! `info`, or `debug` in verbose mode.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "POKEDEX_LOG";

static INIT: Once = Once::new();

/// Default filter directive for the given verbosity.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Initializes the global subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // A subscriber may already be set (e.g. by a test harness).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init();
    });
}
