//! Structured logging setup for Keywarden services

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for a Keywarden service
///
/// Log level comes from `RUST_LOG` when set, otherwise `default_level`.
/// Console formatting by default; pass `json = true` for line-delimited
/// JSON suitable for log shipping.
pub fn init_logging(service_name: &str, default_level: &str, json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    }

    tracing::info!(service = service_name, "Logging initialized");
}
