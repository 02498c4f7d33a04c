//! Rendering for akhbar's TUI.
//!
//! `ui` draws one frame from [`AppState`] and records the carousel and feed
//! rectangles used by mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

mod carousel;
mod feed;
pub mod format;
mod header;
mod modals;

pub use feed::FEED_ITEM_HEIGHT;
pub use modals::LOOKUPS_INFERRED_NOTE;

/// Carousel height including its border.
const CAROUSEL_HEIGHT: u16 = 8;

/// What: Render a full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; hit-test rects are written back.
///
/// Details:
/// - The carousel row is omitted when there are no featured items and the
///   startup load is not pending.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let carousel_h = if app.featured.is_empty() && !app.loading_initial {
        0
    } else {
        CAROUSEL_HEIGHT
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(carousel_h),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    if carousel_h == 0 {
        app.carousel_rect = None;
    } else {
        carousel::render_carousel(f, app, chunks[1]);
    }
    feed::render_feed(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);
    modals::render_modal(f, app, area);
}

/// Key hints, or the status message when one is set.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = app.status.as_ref().map_or_else(
        || {
            Line::from(vec![
                Span::styled("↑↓ ", Style::default().fg(th.accent)),
                Span::styled("حرکت  ", Style::default().fg(th.subtext0)),
                Span::styled("←→ ", Style::default().fg(th.accent)),
                Span::styled("اسلاید  ", Style::default().fg(th.subtext0)),
                Span::styled("f ", Style::default().fg(th.accent)),
                Span::styled("فیلتر  ", Style::default().fg(th.subtext0)),
                Span::styled("/ ", Style::default().fg(th.accent)),
                Span::styled("جستجو  ", Style::default().fg(th.subtext0)),
                Span::styled("? ", Style::default().fg(th.accent)),
                Span::styled("راهنما  ", Style::default().fg(th.subtext0)),
                Span::styled("q ", Style::default().fg(th.accent)),
                Span::styled("خروج", Style::default().fg(th.subtext0)),
            ])
        },
        |msg| Line::from(Span::styled(msg.clone(), Style::default().fg(th.yellow))),
    );
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.mantle)),
        area,
    );
}

/// Centered rectangle of at most `w`×`h` inside `area`.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(2));
    let h = h.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// Inner area of a bordered block as a hit-test rect.
const fn inner_rect(area: Rect) -> (u16, u16, u16, u16) {
    (
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}
