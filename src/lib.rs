//! AssetHub - a searchable, filterable asset showcase
//!
//! This library provides the showcase core: a static asset data set, a
//! substring/category filter engine, and a modal controller with focus
//! management. A ratatui front end and a plain CLI sit on top of it.

use thiserror::Error;

pub mod assets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod hub;
pub mod logging;
pub mod modal;
pub mod output;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum HubError {
    /// Asset data could not be loaded
    #[error("Asset data error: {0}")]
    AssetError(#[from] assets::AssetError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    LoggingError(String),
    /// No asset with the requested id
    #[error("No asset with id {0}")]
    NotFound(assets::AssetId),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
