use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the title bar with the API base and the active filter chips.
///
/// Details:
/// - Chips are listed agencies first, then categories, then the search text,
///   which is the order `x` removes them from the right.
/// - Dates are shown for reference only; they do not narrow the feed.
pub(super) fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let chip = |text: String| {
        Span::styled(
            format!(" {text} ✕ "),
            Style::default().fg(th.base).bg(th.accent),
        )
    };

    let mut spans: Vec<Span> = Vec::new();
    for &id in app.selected_filters.agencies() {
        let name = app.agency_name(id).map_or_else(|| id.to_string(), str::to_string);
        spans.push(chip(name));
        spans.push(Span::raw(" "));
    }
    for &id in app.selected_filters.categories() {
        let name = app
            .category_name(id)
            .map_or_else(|| id.to_string(), str::to_string);
        spans.push(chip(name));
        spans.push(Span::raw(" "));
    }
    if let Some(q) = &app.search {
        spans.push(chip(format!("«{q}»")));
        spans.push(Span::raw(" "));
    }
    let dates = &app.selected_filters;
    if !dates.start_date.is_empty() || !dates.end_date.is_empty() {
        spans.push(Span::styled(
            format!("{} تا {}", dates.start_date, dates.end_date),
            Style::default().fg(th.overlay2),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            "بدون فیلتر",
            Style::default().fg(th.overlay1),
        ));
    }

    let title = Line::from(vec![
        Span::styled(
            " اخبار ",
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.api_base.clone(), Style::default().fg(th.overlay1)),
        Span::raw(" "),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().fg(th.text).bg(th.base))
            .block(block),
        area,
    );
}
