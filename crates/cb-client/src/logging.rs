//! Diagnostic logging setup from the `debug`/`logfile` connection options.
//!
//! Strictly diagnostic: nothing here changes request behavior.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ConnectionConfig;
use crate::error::{Error, ErrorKind, Result};

/// Install a global `tracing` subscriber according to the configuration.
///
/// `debug = true` lowers the default filter to `debug`; `logfile` appends
/// output to that file instead of stderr. `RUST_LOG` overrides the default
/// filter either way. Fails if a global subscriber is already set.
pub fn init(config: &ConnectionConfig) -> Result<()> {
    let default_filter = if config.debug() { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.logfile() {
        Some(path) => {
            let file = std::fs::File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    Error::with_source(
                        ErrorKind::Config(format!("Cannot open logfile {}: {}", path.display(), e)),
                        e,
                    )
                })?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => builder.try_init(),
    }
    .map_err(|e| Error::new(ErrorKind::Config(e.to_string())))
}
