use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{apply_filters, clear_filters, set_search, toggle_agency, toggle_category};
use crate::state::{AppState, DateField, FeedRequest, FilterModalState, FilterSection, Modal};

use super::global::open_link;

/// What: Route a key press to the open modal.
///
/// Details:
/// - Help and Alert close on any key.
/// - The modal is taken out of the state while handled, then put back unless
///   the handler closed it.
pub(super) fn handle_modal_key(
    ke: KeyEvent,
    app: &mut AppState,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) {
    let modal = std::mem::take(&mut app.modal);
    app.modal = match modal {
        Modal::None | Modal::Help | Modal::Alert { .. } => Modal::None,
        Modal::Detail { id, scroll } => handle_detail_key(ke, app, id, scroll),
        Modal::Search { input } => handle_search_key(ke, app, input, feed_tx),
        Modal::Filter(state) => handle_filter_key(ke, app, state, feed_tx),
    };
}

fn handle_detail_key(ke: KeyEvent, app: &mut AppState, id: String, scroll: u16) -> Modal {
    match ke.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Modal::None,
        KeyCode::Down | KeyCode::Char('j') => Modal::Detail {
            id,
            scroll: scroll.saturating_add(1),
        },
        KeyCode::Up | KeyCode::Char('k') => Modal::Detail {
            id,
            scroll: scroll.saturating_sub(1),
        },
        KeyCode::Char('o') => {
            let link = app
                .find_item(&id)
                .filter(|it| it.has_link())
                .map(|it| it.link.clone());
            open_link(app, link);
            Modal::Detail { id, scroll }
        }
        _ => Modal::Detail { id, scroll },
    }
}

fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    mut input: String,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) -> Modal {
    match ke.code {
        KeyCode::Esc => Modal::None,
        KeyCode::Enter => {
            set_search(app, &input, feed_tx);
            Modal::None
        }
        KeyCode::Backspace => {
            input.pop();
            Modal::Search { input }
        }
        KeyCode::Char(ch) => {
            input.push(ch);
            Modal::Search { input }
        }
        _ => Modal::Search { input },
    }
}

/// What: Handle keys inside the filter modal.
///
/// Details:
/// - Selections take effect on the feed only when applied with `a`; `Esc`
///   closes and keeps the edited selection for the next apply.
/// - `c` clears and reloads but keeps the modal open.
/// - In the date section only digits, `-`, and `/` are typed into the field.
fn handle_filter_key(
    ke: KeyEvent,
    app: &mut AppState,
    mut state: FilterModalState,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) -> Modal {
    match ke.code {
        KeyCode::Esc => return Modal::None,
        KeyCode::Tab => state.section = state.section.next(),
        KeyCode::BackTab => state.section = state.section.prev(),
        KeyCode::Char('a') => {
            apply_filters(app, feed_tx);
            return Modal::None;
        }
        KeyCode::Char('c') => clear_filters(app, feed_tx),
        code => match state.section {
            FilterSection::Agencies => {
                let len = app.agencies.len();
                match code {
                    KeyCode::Down | KeyCode::Char('j') => {
                        state.agency_cursor = step(state.agency_cursor, 1, len);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        state.agency_cursor = step(state.agency_cursor, -1, len);
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        if let Some(id) = app.agencies.get(state.agency_cursor).map(|a| a.id) {
                            toggle_agency(app, id);
                        }
                    }
                    _ => {}
                }
            }
            FilterSection::Categories => {
                let len = app.categories.len();
                match code {
                    KeyCode::Down | KeyCode::Char('j') => {
                        state.category_cursor = step(state.category_cursor, 1, len);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        state.category_cursor = step(state.category_cursor, -1, len);
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        if let Some(id) = app.categories.get(state.category_cursor).map(|c| c.id)
                        {
                            toggle_category(app, id);
                        }
                    }
                    _ => {}
                }
            }
            FilterSection::Dates => edit_date(app, &mut state, code),
        },
    }
    Modal::Filter(state)
}

fn edit_date(app: &mut AppState, state: &mut FilterModalState, code: KeyCode) {
    let current = match state.date_field {
        DateField::Start => app.selected_filters.start_date.clone(),
        DateField::End => app.selected_filters.end_date.clone(),
    };
    let next = match code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            state.date_field = match state.date_field {
                DateField::Start => DateField::End,
                DateField::End => DateField::Start,
            };
            return;
        }
        KeyCode::Backspace => {
            let mut s = current;
            s.pop();
            s
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' || ch == '/' => {
            let mut s = current;
            s.push(ch);
            s
        }
        _ => return,
    };
    match state.date_field {
        DateField::Start => app.selected_filters.set_start_date(&next),
        DateField::End => app.selected_filters.set_end_date(&next),
    }
}

/// Move a list cursor by one row, clamped to `0..len`.
fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}
