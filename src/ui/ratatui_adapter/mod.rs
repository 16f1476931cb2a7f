//! Ratatui front end for the showcase
//!
//! This module provides the terminal implementation of the hub's `View`
//! using ratatui for drawing and crossterm for input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Showcase                    │
//! │        (terminal setup + event loop)        │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Hub<V>    │ │  Ratatui  │ │ Crossterm │
//! │  (reducer) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Features
//!
//! - **Live filtering** as the query is typed
//! - **Category chips** cycled with Tab or clicked
//! - **Responsive card grid** (1, 2, or 3 columns)
//! - **Details modal** with a focus trap and a timed exit transition
//! - **Mouse support** for cards, chips, and the modal backdrop

mod events;
mod showcase;
mod state;
mod theme;
pub mod widgets;

pub use events::{Action, handle_key, handle_mouse};
pub use showcase::{Showcase, open_link, render};
pub use state::{CLOSE_HANDLE, ModalContent, ShowcaseView, card_handle, link_handle};
pub use theme::Theme;
