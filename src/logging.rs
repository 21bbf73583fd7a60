//! Tracing subscriber setup
//!
//! Verbosity comes from `MOVIESEEK_LOG` using `EnvFilter` directives
//! (`debug`, `movieseek::search=trace`, ...). Commands log to stderr; the
//! full-screen browser logs to a file so output does not tear the UI.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{MovieSeekError, Result};
use crate::fs::ensure_parent_dir;

pub const LOG_ENV: &str = "MOVIESEEK_LOG";
pub const DEFAULT_DIRECTIVE: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(target: LogTarget) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    let installed = match target {
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogTarget::File(path) => {
            ensure_parent_dir(&path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| MovieSeekError::Storage {
                    operation: "open",
                    path: path.clone(),
                    source,
                })?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::sync::Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
        }
    };

    installed.map_err(|e| MovieSeekError::Other(format!("failed to initialize logging: {e}")))
}
