//! Logging setup for the desktop binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV_VAR: &str = "LEARNER_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Logs go to stderr.
///
/// ```bash
/// LEARNER_LOG=debug cargo run -p app
/// LEARNER_LOG=services=trace,info cargo run -p app
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init();

    if installed.is_err() {
        tracing::warn!("a global subscriber was already installed");
    }
}
