//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Variable holding the filter directives, e.g. `CHATLINE_LOG=chatline_application=debug`.
pub const LOG_ENV: &str = "CHATLINE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr fmt subscriber so log lines never mix with chat output.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
