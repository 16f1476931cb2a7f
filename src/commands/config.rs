//! Config command - inspect and change the persistent configuration

use crate::{
    cli::{ConfigCommands, split_setting},
    config::HubConfig,
    HubError,
};
use std::io::{self, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, HubError>;

/// Execute a config subcommand against the default config file
///
/// # Errors
/// Returns an error if the config file cannot be located, read, or written,
/// or a key/value is invalid.
pub fn execute(config: HubConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    let path = HubConfig::config_path()?;
    execute_to(&mut io::stdout().lock(), config, &path, command, quiet)
}

/// Execute a config subcommand against the config file at `path`
///
/// # Errors
/// Returns an error if the config file cannot be written, output cannot be
/// produced, or a key/value is invalid.
pub fn execute_to(
    out: &mut impl Write,
    mut config: HubConfig,
    path: &Path,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Path => writeln!(out, "{}", path.display())?,
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| HubError::InvalidInput(format!("Failed to render config: {e}")))?;
            write!(out, "{text}")?;
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting).ok_or_else(|| {
                HubError::InvalidInput("Invalid format. Use: assethub config set key=value".into())
            })?;
            config.set(key, value)?;
            config.save_to(path)?;
            if !quiet {
                writeln!(out, "Set {key} = {}", config.get(key)?)?;
            }
        }
        ConfigCommands::Get { key } => writeln!(out, "{}", config.get(key)?)?,
    }
    Ok(())
}
