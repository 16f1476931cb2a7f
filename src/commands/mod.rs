//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and the loaded asset set. The non-interactive commands also expose
//! `execute_to`, which writes to any `io::Write` so output can be tested.

pub mod browse;
pub mod categories;
pub mod config;
pub mod list;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use categories::execute as categories;
pub use config::execute as config;
pub use list::execute as list;
pub use show::execute as show;
