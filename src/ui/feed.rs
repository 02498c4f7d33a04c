use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::logic::INITIAL_LOAD_ERROR;
use crate::state::AppState;
use crate::theme::theme;

use super::format::{content_preview, format_relative_time};
use super::inner_rect;

/// Terminal rows taken by one feed entry (title line and meta line).
pub const FEED_ITEM_HEIGHT: u16 = 2;

/// Sentinel text while more pages may follow.
const LOADING_MORE: &str = "در حال بارگذاری بیشتر...";
/// Sentinel text once the feed is exhausted.
const FEED_END: &str = "تمام شد";
/// Empty-state text.
const NO_NEWS: &str = "خبری یافت نشد";

/// What: Render the latest-news list with its preview pane.
///
/// Details:
/// - The startup error replaces the list with the error banner.
/// - A trailing sentinel row reports whether more pages follow.
/// - Records the list's inner area as `feed_rect` for clicks and the wheel.
pub(super) fn render_feed(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            format!(" آخرین خبرها ({}) ", app.feed.items.len()),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));

    if let Some(message) = &app.error_banner {
        app.feed_rect = None;
        let lines = vec![
            Line::from(Span::styled(
                INITIAL_LOAD_ERROR,
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("خطا در بارگذاری: {message}"),
                Style::default().fg(th.red),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "برای تلاش دوباره r را بزنید",
                Style::default().fg(th.overlay1),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            area,
        );
        return;
    }

    if app.loading_initial || app.feed.is_settled_empty() {
        app.feed_rect = None;
        let text = if app.loading_initial {
            "در حال بارگذاری..."
        } else {
            NO_NEWS
        };
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(th.overlay1))).block(block),
            area,
        );
        return;
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mut items: Vec<ListItem> = app
        .feed
        .items
        .iter()
        .map(|it| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    it.title.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(it.category.name.clone(), Style::default().fg(th.accent)),
                    Span::styled(" · ", Style::default().fg(th.overlay1)),
                    Span::styled(it.agency.name.clone(), Style::default().fg(th.subtext0)),
                    Span::styled(" · ", Style::default().fg(th.overlay1)),
                    Span::styled(
                        format_relative_time(it.pub_date),
                        Style::default().fg(th.overlay1),
                    ),
                ]),
            ])
        })
        .collect();
    let sentinel = if app.feed.has_more {
        LOADING_MORE
    } else {
        FEED_END
    };
    items.push(ListItem::new(Line::from(Span::styled(
        sentinel,
        Style::default().fg(th.overlay2),
    ))));

    app.feed_rect = Some(inner_rect(panes[0]));
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("▌ ");
    f.render_stateful_widget(list, panes[0], &mut app.list_state);

    render_preview(f, app, panes[1]);
}

/// Preview of the highlighted article: content snippet and link.
fn render_preview(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let Some(item) = app.selected_item() else {
        f.render_widget(block, area);
        return;
    };
    let mut lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let preview = content_preview(&item.content);
    if !preview.is_empty() {
        lines.push(Line::from(Span::styled(
            preview,
            Style::default().fg(th.subtext0),
        )));
        lines.push(Line::from(""));
    }
    if item.has_link() {
        lines.push(Line::from(Span::styled(
            item.link.clone(),
            Style::default().fg(th.accent),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(th.base))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
