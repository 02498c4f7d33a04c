//! akhbar application module: terminal setup and the TUI runtime.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{HEADLESS_ENV, RunOptions, initial_state, run};
pub use runtime::workers::feed::run_request;
