use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, CarouselMode};
use crate::theme::theme;

use super::format::{agency_initial, content_preview, format_relative_time};
use super::inner_rect;

/// What: Render the featured carousel: the current slide and its dot row.
///
/// Details:
/// - Records the inner area as `carousel_rect` for drag gestures.
/// - The title shows a pause marker while a drag is in progress.
pub(super) fn render_carousel(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    app.carousel_rect = Some(inner_rect(area));

    let mut title = vec![Span::styled(
        " خبرهای برگزیده ",
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )];
    if matches!(app.carousel.mode(), CarouselMode::SuspendedByGesture { .. }) {
        title.push(Span::styled("⏸ ", Style::default().fg(th.yellow)));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));

    let Some(slide) = app.current_slide() else {
        let text = if app.loading_initial {
            "در حال بارگذاری..."
        } else {
            "خبر برگزیده‌ای وجود ندارد"
        };
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(th.overlay1))).block(block),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", agency_initial(&slide.agency.name)),
                Style::default()
                    .fg(th.base)
                    .bg(th.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(slide.agency.name.clone(), Style::default().fg(th.subtext0)),
            Span::styled(
                format!("  {}", format_relative_time(slide.pub_date)),
                Style::default().fg(th.overlay1),
            ),
        ]),
        Line::from(Span::styled(
            slide.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
    ];
    let preview = content_preview(&slide.content);
    if !preview.is_empty() {
        lines.push(Line::from(Span::styled(
            preview,
            Style::default().fg(th.overlay2),
        )));
    }

    let inner_h = area.height.saturating_sub(2);
    let dots: Vec<Span> = (0..app.carousel.len())
        .map(|i| {
            if i == app.carousel.index() {
                Span::styled("● ", Style::default().fg(th.accent))
            } else {
                Span::styled("○ ", Style::default().fg(th.overlay1))
            }
        })
        .collect();

    let inner = block.inner(area);
    f.render_widget(block, area);
    let body = Rect {
        height: inner_h.saturating_sub(1),
        ..inner
    };
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(th.base))
            .wrap(Wrap { trim: true }),
        body,
    );
    if inner_h > 0 {
        let dots_row = Rect {
            y: inner.y + inner_h - 1,
            height: 1,
            ..inner
        };
        f.render_widget(
            Paragraph::new(Line::from(dots)).alignment(ratatui::layout::Alignment::Center),
            dots_row,
        );
    }
}
