//! Browse command - interactive showcase in the terminal

use crate::{assets::Asset, filter::FilterState, hub::HubState, ui, HubError};
use std::time::Duration;

type Result<T> = std::result::Result<T, HubError>;

/// Execute the browse command
///
/// The query and category given on the command line pre-fill the showcase.
///
/// # Errors
/// Returns an error if the terminal cannot be driven.
pub fn execute(assets: Vec<Asset>, filter: FilterState, exit_duration: Duration) -> Result<()> {
    tracing::debug!(
        query = %filter.query,
        category = %filter.category,
        "starting showcase"
    );
    ui::run_showcase(HubState::with_filter(assets, filter, exit_duration))?;
    Ok(())
}
