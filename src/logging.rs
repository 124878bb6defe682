//! Optional diagnostic logging.
//!
//! The terminal belongs to the UI while the picker is running, so logs are
//! only ever written to a file, and only when one is requested with
//! `--log-file`.
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding `EnvFilter` directives for the log file
pub(crate) const LOG_ENV_VAR: &str = "DATEPICK_LOG";

/// Directives used when [`LOG_ENV_VAR`] is unset or invalid
const DEFAULT_DIRECTIVES: &str = "datepick=debug";

/// Install a global subscriber that appends log lines to the file at `path`
pub(crate) fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(log_filter(std::env::var(LOG_ENV_VAR).ok().as_deref()))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
