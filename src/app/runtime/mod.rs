use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::start_initial_load;
use crate::sources::ApiClient;
use crate::state::AppState;
use crate::state::types::ActiveFilter;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
mod handlers;
pub mod workers;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup and the input thread (tests).
pub const HEADLESS_ENV: &str = "AKHBAR_TEST_HEADLESS";

/// What: Startup inputs for the TUI.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Resolved API base URL.
    pub api_base: String,
    /// Loaded settings.
    pub settings: Settings,
    /// Filter preselected from the command line.
    pub initial_filter: ActiveFilter,
}

/// What: Build the starting state, including any command-line filter.
///
/// Details:
/// - Command-line ids are selected without lookup validation; the lookups are
///   not loaded yet.
#[must_use]
pub fn initial_state(opts: &RunOptions) -> AppState {
    let mut app = AppState::new(opts.settings.clone(), opts.api_base.clone());
    if let Some(id) = opts.initial_filter.agency_id {
        app.selected_filters.toggle_agency(id);
    }
    if let Some(id) = opts.initial_filter.category_id {
        app.selected_filters.toggle_category(id);
    }
    app.search = opts.initial_filter.q.clone().filter(|q| !q.trim().is_empty());
    app
}

/// What: Run the akhbar TUI end-to-end: set up the terminal, spawn the feed
/// worker, tick task, and input thread, drive the event loop, and restore the
/// terminal on exit.
///
/// Inputs:
/// - `opts`: API base, settings, and initial filter.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal or client setup failure.
///
/// Details:
/// - With `AKHBAR_TEST_HEADLESS=1` nothing touches the terminal; the loop still
///   runs so tests can observe startup.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let client = ApiClient::new(&opts.api_base)?;

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = initial_state(&opts);
    let mut channels = Channels::new(client);

    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    start_initial_load(&mut app, &channels.feed_req_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    tracing::debug!("main loop exited");
    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
