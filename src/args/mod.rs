//! Command-line argument parsing and the one-shot (non-TUI) modes.

pub mod definition;
pub mod health;
pub mod news;
pub mod utils;

pub use definition::{Args, process_args};
pub use utils::{determine_log_level, initial_filter};
