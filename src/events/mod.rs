//! Event handling layer for akhbar's TUI.
//!
//! `handle_event` routes key presses to the open modal or the global keymap,
//! and mouse input to the carousel/feed hit-tests.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, FeedRequest};

mod global;
mod modals;
mod mouse;

#[cfg(test)]
mod tests;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Crossterm event.
/// - `app`: Application state.
/// - `feed_tx`: Channel for feed requests (filters, paging, reload).
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - `Ctrl+C` exits from anywhere, including modals.
/// - While a modal is open it consumes every key.
/// - Key release/repeat events are ignored.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
                return true;
            }
            if app.modal.is_open() {
                modals::handle_modal_key(ke, app, feed_tx);
                return false;
            }
            global::handle_global_key(ke, app, feed_tx)
        }
        CEvent::Mouse(m) => {
            mouse::handle_mouse_event(m, app, feed_tx);
            false
        }
        _ => false,
    }
}
