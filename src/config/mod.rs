//! Configuration module for assethub
//!
//! Manages application configuration: where the asset data comes from, the
//! modal exit transition length, and logging defaults.
//! Configuration is stored in the user's config directory and may be
//! overridden per-process with `ASSETHUB_*` environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Prefix of environment variables that override file settings
const ENV_PREFIX: &str = "ASSETHUB";

/// Default exit transition length in milliseconds
pub const DEFAULT_EXIT_DURATION_MS: u64 = 300;

/// Log verbosity
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Raise the level by `steps` (each `-v` on the command line)
    #[must_use]
    pub const fn raised(self, steps: u8) -> Self {
        let rank = match self {
            Self::Error => 0,
            Self::Warn => 1,
            Self::Info => 2,
            Self::Debug => 3,
            Self::Trace => 4,
        };
        match rank + steps as usize {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(ConfigError::Message(format!(
                "Invalid log level '{other}' (expected error, warn, info, debug or trace)"
            ))),
        }
    }
}

const fn default_exit_duration_ms() -> u64 {
    DEFAULT_EXIT_DURATION_MS
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Asset data file (TOML or JSON); the built-in data set is used when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Length of the modal exit transition in milliseconds
    #[serde(default = "default_exit_duration_ms")]
    pub exit_duration_ms: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Baseline log level (raised by `-v`, overridden by `RUST_LOG`)
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            exit_duration_ms: DEFAULT_EXIT_DURATION_MS,
            quiet: false,
            log_file: None,
            log_level: LogLevel::default(),
        }
    }
}

/// Keys accepted by `config get` / `config set`
pub const KEYS: &[&str] = &[
    "data_file",
    "exit_duration_ms",
    "quiet",
    "log_file",
    "log_level",
];

fn parse_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

impl HubConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("assethub").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields defaults; it is not created.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, layered with `ASSETHUB_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or an
    /// override has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from `path` layered with `env` as the override source
    fn load_with(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if path.exists() {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let settings = builder.add_source(env.try_parsing(true)).build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created or the file written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path` as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Exit transition length as a `Duration`
    #[must_use]
    pub const fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    /// Read a setting by key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "data_file" => Ok(display_path(self.data_file.as_ref())),
            "exit_duration_ms" => Ok(self.exit_duration_ms.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            "log_file" => Ok(display_path(self.log_file.as_ref())),
            "log_level" => Ok(self.log_level.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a setting by key; an empty value clears optional paths
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "data_file" => self.data_file = parse_path(value),
            "exit_duration_ms" => {
                self.exit_duration_ms = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for exit_duration_ms: '{value}' (expected milliseconds)"
                    ))
                })?;
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}' (expected true or false)"
                    ))
                })?;
            }
            "log_file" => self.log_file = parse_path(value),
            "log_level" => self.log_level = value.parse()?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key '{key}' (available: {})",
        KEYS.join(", ")
    ))
}
