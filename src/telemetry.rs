//! Logging setup
//!
//! Events go to stderr so they never mix with command output. `RUST_LOG`
//! wins over the configured level; `--verbose` forces `debug` for this crate.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Settings;

pub fn init_telemetry(settings: &Settings, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("barber_cli=debug")
        } else {
            EnvFilter::new(&settings.log_level)
        }
    });

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .boxed();

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(log_layer)
        .try_init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        level = %settings.log_level,
        "Telemetry initialized"
    );
}
