use std::time::Instant;

use ratatui::Terminal;
use tokio::select;

use crate::logic::handle_feed_response;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::handle_tick;

/// What: Process one message from any channel.
///
/// Output:
/// - `true` if the event loop should exit.
///
/// Details:
/// - Input events may enqueue feed requests; feed responses and ticks only
///   mutate state.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.feed_req_tx)
        }
        Some(response) = channels.feed_res_rx.recv() => {
            handle_feed_response(app, response, Instant::now());
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app, Instant::now());
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering after every message.
///
/// Inputs:
/// - `terminal`: Terminal for rendering (`None` in headless mode).
/// - `app`: Application state.
/// - `channels`: Runtime channels.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "frame render failed");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
