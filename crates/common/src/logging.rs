//! Logging and tracing initialization.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber from a [`LoggingConfig`].
///
/// `RUST_LOG` overrides the configured level filter. When
/// `config.file` is set, output goes to that file (append mode);
/// widgets only log bind/open diagnostics, so a plain synchronous
/// writer is sufficient. A file that cannot be opened falls back to
/// the default stdout writer.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let sink = config.file.as_deref().and_then(|path| {
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match (config.json, sink) {
        (true, Some(file)) => {
            let subscriber = builder.json().with_writer(Arc::new(file)).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (true, None) => {
            let subscriber = builder.json().finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (false, Some(file)) => {
            let subscriber = builder.with_writer(Arc::new(file)).finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (false, None) => {
            let subscriber = builder.finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}
