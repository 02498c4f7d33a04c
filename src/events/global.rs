use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{
    clear_filters, maybe_load_more, remove_agency_chip, remove_category_chip, set_search,
    start_initial_load,
};
use crate::state::{AppState, FeedRequest, FilterModalState, Modal};

/// Rows moved by `PgUp`/`PgDn`.
const PAGE_STEP: isize = 10;

/// What: Handle a key press when no modal is open.
///
/// Output:
/// - `true` to exit the application.
///
/// Details:
/// - Every cursor movement re-checks the infinite-scroll trigger.
pub(super) fn handle_global_key(
    ke: KeyEvent,
    app: &mut AppState,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Down | KeyCode::Char('j') => move_and_prefetch(app, 1, feed_tx),
        KeyCode::Up | KeyCode::Char('k') => move_and_prefetch(app, -1, feed_tx),
        KeyCode::PageDown => move_and_prefetch(app, PAGE_STEP, feed_tx),
        KeyCode::PageUp => move_and_prefetch(app, -PAGE_STEP, feed_tx),
        KeyCode::Home | KeyCode::Char('g') => move_and_prefetch(app, isize::MIN, feed_tx),
        KeyCode::End | KeyCode::Char('G') => move_and_prefetch(app, isize::MAX, feed_tx),
        KeyCode::Enter => {
            if let Some(item) = app.selected_item() {
                app.modal = Modal::Detail {
                    id: item.id.clone(),
                    scroll: 0,
                };
            }
        }
        KeyCode::Char(' ') => {
            if let Some(item) = app.current_slide() {
                app.modal = Modal::Detail {
                    id: item.id.clone(),
                    scroll: 0,
                };
            }
        }
        KeyCode::Char('o') => {
            let link = app
                .selected_item()
                .filter(|it| it.has_link())
                .map(|it| it.link.clone());
            open_link(app, link);
        }
        KeyCode::Left | KeyCode::Char('h') => app.carousel.prev(Instant::now()),
        KeyCode::Right | KeyCode::Char('l') => app.carousel.next(Instant::now()),
        KeyCode::Char(d @ '1'..='9') => {
            if let Some(n) = d.to_digit(10) {
                app.carousel.go_to(n as usize - 1, Instant::now());
            }
        }
        KeyCode::Char('f') => app.modal = Modal::Filter(FilterModalState::default()),
        KeyCode::Char('/') => {
            app.modal = Modal::Search {
                input: app.search.clone().unwrap_or_default(),
            }
        }
        KeyCode::Char('c') => {
            app.status = None;
            clear_filters(app, feed_tx);
        }
        KeyCode::Char('x') => remove_last_chip(app, feed_tx),
        KeyCode::Char('r') => {
            app.status = None;
            start_initial_load(app, feed_tx);
        }
        KeyCode::Char('?') => app.modal = Modal::Help,
        _ => {}
    }
    false
}

/// Move the feed cursor, then request the next page when the sentinel is near.
fn move_and_prefetch(
    app: &mut AppState,
    delta: isize,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) {
    app.move_selection(delta);
    maybe_load_more(app, feed_tx);
}

/// What: Open a link in the browser, or report that the item has none.
pub(super) fn open_link(app: &mut AppState, link: Option<String>) {
    match link {
        Some(url) => {
            tracing::info!(url = %url, "opening link");
            crate::util::open_url(&url);
            app.status = None;
        }
        None => app.status = Some("لینک این خبر در دسترس نیست".to_string()),
    }
}

/// What: Remove the right-most header chip (search, then categories, then agencies).
fn remove_last_chip(app: &mut AppState, feed_tx: &mpsc::UnboundedSender<FeedRequest>) {
    if app.search.is_some() {
        set_search(app, "", feed_tx);
    } else if let Some(&id) = app.selected_filters.categories().last() {
        remove_category_chip(app, id, feed_tx);
    } else if let Some(&id) = app.selected_filters.agencies().last() {
        remove_agency_chip(app, id, feed_tx);
    }
}
