//! Terminal user interface
//!
//! The interactive showcase is a ratatui implementation of the hub's
//! [`View`](crate::hub::View). The hub decides what is visible and when
//! the modal opens or closes; this module draws it and turns keys and
//! mouse clicks back into [`HubEvent`](crate::hub::HubEvent)s.
//!
//! # Example
//!
//! ```no_run
//! use assethub::assets::{BuiltinAssets, load};
//! use assethub::hub::HubState;
//! use assethub::ui::run_showcase;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assets = load(&BuiltinAssets)?;
//! run_showcase(HubState::new(assets, Duration::from_millis(300)))?;
//! # Ok(())
//! # }
//! ```

mod error;

pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use ratatui_adapter::{Showcase, ShowcaseView, Theme};

use crate::hub::HubState;

/// Run the interactive showcase with the default theme
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be driven.
pub fn run_showcase(state: HubState) -> Result<()> {
    Showcase::new().run(state)
}
