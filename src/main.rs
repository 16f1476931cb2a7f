//! AssetHub CLI application entry point
//!
//! This is the main executable for the asset showcase. It loads the asset
//! data set once, then either opens the interactive showcase or prints
//! filtered views of it.
//!
//! # Features
//!
//! - **Browse Mode**: Interactive grid with live search, category chips, and a details modal
//! - **List**: The same filter from the command line, as text or JSON
//! - **Categories / Show**: Inspect the registry or a single asset
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Open the showcase (default command)
//! assethub
//! assethub browse media
//!
//! # Filter from the command line
//! assethub list consult -c frameworks
//! assethub list --json
//!
//! # Use your own data set
//! assethub --data assets.toml categories
//! assethub config set data_file=/srv/assets.json
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/assethub/config.toml` on Linux) and can be overridden with
//! `ASSETHUB_*` environment variables.

use assethub::{
    HubError,
    assets::{self, Asset, AssetId, BuiltinAssets, DataProvider, FileAssets},
    cli::{Cli, Commands},
    commands,
    config::HubConfig,
    logging::{self, LogSettings},
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, HubError>;

/// Pick the data source: `--data`, then the configured file, then the built-in set
fn provider(data: Option<PathBuf>, config: &HubConfig) -> Box<dyn DataProvider> {
    match data.or_else(|| config.data_file.clone()) {
        Some(path) => Box::new(FileAssets::new(path)),
        None => Box::new(BuiltinAssets),
    }
}

/// Load the data set once from the selected provider
fn load_assets(data: Option<PathBuf>, config: &HubConfig) -> Result<Vec<Asset>> {
    Ok(assets::load(provider(data, config).as_ref())?)
}

/// Main entry point for the assethub application
///
/// Loads configuration, parses command-line arguments, sets up logging, and
/// dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `HubError` if configuration loading fails, the asset data cannot
/// be loaded, or any command handler returns an error.
fn main() -> Result<()> {
    let config = HubConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    logging::init(&LogSettings::resolve(
        config.log_level,
        cli.verbose,
        config.log_file.clone(),
        matches!(command, Commands::Browse { .. }),
    ))?;

    match command {
        Commands::Config { command } => commands::config(config, &command, quiet)?,
        Commands::Browse { filter } => {
            let assets = load_assets(cli.data, &config)?;
            commands::browse(assets, filter.to_filter_state(), config.exit_duration())?;
        }
        Commands::List { filter, json } => {
            let assets = load_assets(cli.data, &config)?;
            commands::list(&assets, &filter.to_filter_state(), json, quiet)?;
        }
        Commands::Categories => commands::categories(&load_assets(cli.data, &config)?, quiet)?,
        Commands::Show { id } => {
            commands::show(&load_assets(cli.data, &config)?, AssetId::new(id), quiet)?;
        }
    }

    Ok(())
}
