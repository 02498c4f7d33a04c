use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, DateField, FilterModalState, FilterSection, Modal};
use crate::theme::theme;
use crate::util::ts_to_date;

use super::centered;
use super::format::{format_relative_time, pad_to_width};

/// Shown under the filter lists when they were built from loaded news.
pub const LOOKUPS_INFERRED_NOTE: &str = "فهرست‌ها از خبرهای بارگذاری‌شده ساخته شده‌اند";

/// Bordered modal block with a bold title.
fn modal_block(title: &str) -> Block<'static> {
    let th = theme();
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle))
}

/// What: Draw the open modal, if any, over the main view.
pub(super) fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Detail { id, scroll } => render_detail(f, app, area, id, *scroll),
        Modal::Filter(state) => render_filter(f, app, area, state),
        Modal::Search { input } => render_search(f, area, input),
        Modal::Help => render_help(f, area),
        Modal::Alert { message } => {
            let rect = centered(area, 60, 7);
            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new(message.clone())
                    .wrap(Wrap { trim: true })
                    .block(modal_block("پیام")),
                rect,
            );
        }
    }
}

fn render_detail(f: &mut Frame, app: &AppState, area: Rect, id: &str, scroll: u16) {
    let th = theme();
    let rect = centered(area, 90, 30);
    f.render_widget(Clear, rect);
    let Some(item) = app.find_item(id) else {
        f.render_widget(
            Paragraph::new("این خبر دیگر در فهرست نیست").block(modal_block("خبر")),
            rect,
        );
        return;
    };
    let label = |s: &str| Span::styled(s.to_string(), Style::default().fg(th.overlay1));
    let mut lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("منبع: "),
            Span::styled(item.agency.name.clone(), Style::default().fg(th.subtext0)),
            label("   دسته: "),
            Span::styled(item.category.name.clone(), Style::default().fg(th.accent)),
        ]),
        Line::from(vec![
            label("زمان: "),
            Span::raw(format!(
                "{} ({})",
                format_relative_time(item.pub_date),
                ts_to_date(item.pub_date)
            )),
        ]),
    ];
    if let Some(img) = item.image_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(Line::from(vec![label("تصویر: "), Span::raw(img.to_string())]));
    }
    if item.has_link() {
        lines.push(Line::from(vec![
            label("لینک: "),
            Span::styled(item.link.clone(), Style::default().fg(th.accent)),
        ]));
    }
    lines.push(Line::from(""));
    lines.extend(
        item.content
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text)))),
    );
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(modal_block("خبر  (o باز کردن لینک، Esc بستن)")),
        rect,
    );
}

/// What: Draw the filter editor: agencies, categories, and the date fields.
///
/// Details:
/// - The focused section's title is highlighted; `[x]` marks selected rows.
fn render_filter(f: &mut Frame, app: &AppState, area: Rect, state: &FilterModalState) {
    let th = theme();
    let rect = centered(area, 80, 24);
    f.render_widget(Clear, rect);

    let heading = |text: &str, section: FilterSection| {
        let color = if state.section == section {
            th.accent
        } else {
            th.overlay1
        };
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    };
    let row = |selected: bool, focused: bool, name: &str| {
        let mark = if selected { "[x] " } else { "[ ] " };
        let style = if focused {
            Style::default().fg(th.base).bg(th.accent)
        } else {
            Style::default().fg(th.text)
        };
        Line::from(Span::styled(format!("{mark}{name}"), style))
    };

    let mut lines = vec![heading("خبرگزاری‌ها", FilterSection::Agencies)];
    if app.agencies.is_empty() {
        lines.push(Line::from(Span::styled("—", Style::default().fg(th.overlay1))));
    }
    for (i, a) in app.agencies.iter().enumerate() {
        lines.push(row(
            app.selected_filters.has_agency(a.id),
            state.section == FilterSection::Agencies && i == state.agency_cursor,
            &a.name,
        ));
    }
    lines.push(Line::from(""));
    lines.push(heading("دسته‌بندی‌ها", FilterSection::Categories));
    if app.categories.is_empty() {
        lines.push(Line::from(Span::styled("—", Style::default().fg(th.overlay1))));
    }
    for (i, c) in app.categories.iter().enumerate() {
        lines.push(row(
            app.selected_filters.has_category(c.id),
            state.section == FilterSection::Categories && i == state.category_cursor,
            &c.name,
        ));
    }
    lines.push(Line::from(""));
    let dates_line = lines.len();
    lines.push(heading("بازه زمانی", FilterSection::Dates));
    let date_field = |label: &str, value: &str, field: DateField| {
        let focused = state.section == FilterSection::Dates && state.date_field == field;
        let style = if focused {
            Style::default().fg(th.base).bg(th.accent)
        } else {
            Style::default().fg(th.text)
        };
        Line::from(vec![
            Span::styled(label.to_string(), Style::default().fg(th.overlay1)),
            Span::styled(format!("[{}]", pad_to_width(value, 10)), style),
        ])
    };
    lines.push(date_field(
        "از: ",
        &app.selected_filters.start_date,
        DateField::Start,
    ));
    lines.push(date_field(
        "تا: ",
        &app.selected_filters.end_date,
        DateField::End,
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab بخش بعد · Space انتخاب · a اعمال · c پاک کردن · Esc بستن",
        Style::default().fg(th.overlay2),
    )));
    if app.lookups_inferred {
        lines.push(Line::from(Span::styled(
            LOOKUPS_INFERRED_NOTE,
            Style::default().fg(th.yellow),
        )));
    }

    let focus_line = match state.section {
        FilterSection::Agencies => 1 + state.agency_cursor,
        FilterSection::Categories => 3 + app.agencies.len().max(1) + state.category_cursor,
        FilterSection::Dates => dates_line,
    };
    let visible = usize::from(rect.height.saturating_sub(2));
    let scroll = focus_line.saturating_sub(visible.saturating_sub(1));
    f.render_widget(
        Paragraph::new(lines)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .block(modal_block("فیلترها")),
        rect,
    );
}

fn render_search(f: &mut Frame, area: Rect, input: &str) {
    let th = theme();
    let rect = centered(area, 60, 3);
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(th.accent)),
            Span::styled(input.to_string(), Style::default().fg(th.text)),
        ]))
        .block(modal_block("جستجو (Enter اعمال، Esc لغو)")),
        rect,
    );
}

fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let rect = centered(area, 64, 22);
    f.render_widget(Clear, rect);
    let bindings: [(&str, &str); 16] = [
        ("q / Ctrl+C", "خروج"),
        ("↑↓ / j k", "حرکت در فهرست"),
        ("PgUp / PgDn", "صفحه بالا / پایین"),
        ("Home / End", "ابتدا / انتهای فهرست"),
        ("Enter", "نمایش خبر"),
        ("Space", "نمایش اسلاید جاری"),
        ("o", "باز کردن لینک در مرورگر"),
        ("← → / h l", "اسلاید قبلی / بعدی"),
        ("1-9", "رفتن به اسلاید"),
        ("f", "فیلترها"),
        ("/", "جستجو"),
        ("x", "حذف آخرین فیلتر"),
        ("c", "پاک کردن همه فیلترها"),
        ("r", "بارگذاری دوباره"),
        ("?", "راهنما"),
        ("کشیدن ماوس", "ورق زدن اسلایدها"),
    ];
    let lines: Vec<Line> = bindings
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    pad_to_width(keys, 14),
                    Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled((*what).to_string(), Style::default().fg(th.text)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(modal_block("راهنما")), rect);
}
