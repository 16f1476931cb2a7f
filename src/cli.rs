//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for assethub using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive showcase in the terminal (default)
//! - **list**: Print the assets matching a query and category
//! - **categories**: Print the category registry
//! - **show**: Print one asset with its details
//! - **config**: Inspect or change configuration
//!
//! # Examples
//!
//! ```no_run
//! use assethub::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::List { filter, .. } => println!("query: {:?}", filter.query),
//!     _ => {}
//! }
//! ```

use crate::filter::{CategoryFilter, FilterState};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Query and category arguments shared by `browse` and `list`
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Case-insensitive text to look for in titles and descriptions
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Only show assets in this category ("All" for every category)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,
}

impl FilterArgs {
    /// Convert into the filter state the engine works on
    #[must_use]
    pub fn to_filter_state(&self) -> FilterState {
        FilterState::new(
            self.query.clone().unwrap_or_default(),
            self.category
                .as_deref()
                .map_or(CategoryFilter::All, CategoryFilter::parse),
        )
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., exit_duration_ms=200)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., data_file)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive showcase (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List assets matching a query and category
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of text
        #[arg(long = "json")]
        json: bool,
    },

    /// List all categories, "All" first
    Categories,

    /// Show one asset with its details
    Show {
        /// Asset id
        id: u32,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "assethub")]
#[command(author, version, about = "A searchable, filterable asset showcase", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Asset data file (TOML or JSON), overrides config
    #[arg(long = "data", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            filter: FilterArgs::default(),
        })
    }
}

/// Split a `KEY=VALUE` setting
///
/// Returns `None` when there is no `=` or the key is empty.
#[must_use]
pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
}
