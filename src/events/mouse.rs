use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::maybe_load_more;
use crate::state::{AppState, CarouselMode, FeedRequest, Modal};
use crate::ui::FEED_ITEM_HEIGHT;

/// Whether `(x, y)` lies inside a recorded rectangle.
fn hit(rect: Option<(u16, u16, u16, u16)>, x: u16, y: u16) -> bool {
    rect.is_some_and(|(rx, ry, rw, rh)| x >= rx && x < rx + rw && y >= ry && y < ry + rh)
}

/// What: Handle a single mouse event.
///
/// Details:
/// - Carousel: left press starts a drag gesture (pausing auto-advance), drag
///   updates it, release either swipes one slide or, with no real travel,
///   opens the slide's detail view.
/// - Feed: left click selects a row, a second click on the selected row opens
///   it; the wheel moves the cursor and re-checks the infinite-scroll trigger.
/// - Ignored while a modal is open, except that a release always ends a gesture.
pub(super) fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) {
    let (mx, my) = (m.column, m.row);
    let dragging = matches!(app.carousel.mode(), CarouselMode::SuspendedByGesture { .. });

    match m.kind {
        MouseEventKind::Up(MouseButton::Left) if dragging => {
            let moved = match app.carousel.mode() {
                CarouselMode::SuspendedByGesture { start_col, .. } => start_col != mx,
                CarouselMode::AutoAdvancing => false,
            };
            if let Some(swipe) = app.carousel.end_gesture(mx, Instant::now()) {
                tracing::debug!(?swipe, "carousel swipe");
            } else if !moved
                && !app.modal.is_open()
                && let Some(item) = app.current_slide()
            {
                app.modal = Modal::Detail {
                    id: item.id.clone(),
                    scroll: 0,
                };
            }
            return;
        }
        MouseEventKind::Drag(MouseButton::Left) if dragging => {
            app.carousel.update_gesture(mx);
            return;
        }
        _ => {}
    }

    if app.modal.is_open() {
        return;
    }

    match m.kind {
        MouseEventKind::Down(MouseButton::Left) if hit(app.carousel_rect, mx, my) => {
            app.carousel.begin_gesture(mx);
        }
        MouseEventKind::Down(MouseButton::Left) if hit(app.feed_rect, mx, my) => {
            if let Some((_, y, _, _)) = app.feed_rect {
                let row = usize::from((my - y) / FEED_ITEM_HEIGHT);
                let index = app.list_state.offset() + row;
                if index < app.feed.items.len() {
                    if index == app.selected {
                        if let Some(item) = app.selected_item() {
                            app.modal = Modal::Detail {
                                id: item.id.clone(),
                                scroll: 0,
                            };
                        }
                    } else {
                        app.selected = index;
                        app.list_state.select(Some(index));
                        maybe_load_more(app, feed_tx);
                    }
                }
            }
        }
        MouseEventKind::ScrollDown if hit(app.feed_rect, mx, my) => {
            app.move_selection(1);
            maybe_load_more(app, feed_tx);
        }
        MouseEventKind::ScrollUp if hit(app.feed_rect, mx, my) => {
            app.move_selection(-1);
        }
        _ => {}
    }
}
