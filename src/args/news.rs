//! `--print`: dump the first page of news to stdout.

use akhbar::sources::ApiClient;
use akhbar::state::{ActiveFilter, NewsItem};
use akhbar::ui::format::{content_preview, format_relative_time};

/// What: Fetch and print one page of news under `filter`.
///
/// Output:
/// - Process exit code: `0` on success (even for an empty page), `1` on fetch failure.
pub async fn handle_print(client: &ApiClient, filter: &ActiveFilter, limit: usize) -> i32 {
    tracing::info!(base = client.base(), limit, ?filter, "print mode requested from CLI");
    match client.news_page(&filter.to_query(limit, 0)).await {
        Ok(page) => {
            if page.items.is_empty() {
                println!("خبری یافت نشد");
            }
            for item in &page.items {
                println!("{}", render_item(item));
            }
            if let Some(total) = page.total {
                println!("({} / {total})", page.items.len());
            }
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "print mode fetch failed");
            eprintln!(
                "خطا در بارگذاری: {}",
                e.server_message().unwrap_or_else(|| e.to_string())
            );
            1
        }
    }
}

/// Text block for one article: title, meta line, optional preview and link.
fn render_item(item: &NewsItem) -> String {
    let mut out = format!(
        "• {}\n  {} · {} · {}",
        item.title,
        item.agency.name,
        item.category.name,
        format_relative_time(item.pub_date)
    );
    let preview = content_preview(&item.content);
    if !preview.is_empty() {
        out.push_str("\n  ");
        out.push_str(&preview);
    }
    if item.has_link() {
        out.push_str("\n  ");
        out.push_str(&item.link);
    }
    out.push('\n');
    out
}
