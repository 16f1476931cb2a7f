//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: Asset data failed to load
//! - `warn`: Records accepted with caveats (e.g. both `children` and `details`)
//! - `info`: Data source and asset count
//! - `debug`: Modal transitions, stale timers, skipped focus restoration
//! - `trace`: Every filter recomputation
//!
//! `RUST_LOG` takes precedence over the configured level when set.
//!
//! While the TUI owns the terminal, stderr logging is disabled unless a log
//! file is configured.

use crate::HubError;
use crate::config::LogLevel;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

/// Configuration for logging behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    pub target: LogTarget,
}

impl LogSettings {
    /// Resolve settings from config values and CLI flags
    ///
    /// `verbosity` is the number of `-v` flags. `interactive` is true when
    /// the TUI is about to take over the terminal.
    #[must_use]
    pub fn resolve(
        level: LogLevel,
        verbosity: u8,
        log_file: Option<PathBuf>,
        interactive: bool,
    ) -> Self {
        let target = match log_file {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Discard,
            None => LogTarget::Stderr,
        };
        Self {
            level: level.raised(verbosity),
            target,
        }
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns `HubError` if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(settings: &LogSettings) -> Result<(), HubError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let (writer, ansi) = match &settings.target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| HubError::LoggingError(e.to_string()))
}
