//! Tracing setup.
//!
//! The interactive player owns the terminal, so while it runs logs go to a
//! file. Other commands log to stderr. `SLIDECAST_LOG` overrides the
//! configured filter using `EnvFilter` syntax.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable holding a log filter override.
pub const LOG_ENV: &str = "SLIDECAST_LOG";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file location.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("slidecast").join("slidecast.log"))
}

/// Pick the log target for a command.
pub fn target_for(config: &LoggingConfig, interactive: bool) -> LogTarget {
    if !interactive {
        return LogTarget::Stderr;
    }
    let configured = (!config.file.is_empty()).then(|| PathBuf::from(&config.file));
    match configured.or_else(default_log_file) {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stderr,
    }
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// Later calls keep the first subscriber and only log at debug level.
pub fn init(config: &LoggingConfig, target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(false);

    match target {
        LogTarget::Stderr => {
            if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
                tracing::debug!(error = %e, "tracing subscriber already installed");
            }
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            if let Err(e) = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
            {
                tracing::debug!(error = %e, path = %path.display(), "tracing subscriber already installed");
            }
        }
    }
    Ok(())
}
