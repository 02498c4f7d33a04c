//! Startup/reload: split the first window between carousel and feed, and
//! fill the filter lookups (falling back to inference from the news).

use std::collections::HashSet;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::sources::ApiError;
use crate::state::types::{Agency, Category, NewsItem, NewsPage};
use crate::state::{AppState, FeedRequest, ResetRequest};

use super::filters::current_filter;

/// Persian banner prefix for a failed startup load.
pub const INITIAL_LOAD_ERROR: &str = "خطا در بارگذاری اولیه برنامه";

/// What: Split the startup window into carousel and feed items.
///
/// Inputs:
/// - `items`: Items in server order.
/// - `featured_count`: Maximum carousel slides.
/// - `latest_count`: Maximum feed items.
///
/// Output:
/// - `(featured, latest)`: the first `featured_count` items that have an image,
///   then up to `latest_count` of the remaining items (by id) in order.
#[must_use]
pub fn partition_initial(
    items: Vec<NewsItem>,
    featured_count: usize,
    latest_count: usize,
) -> (Vec<NewsItem>, Vec<NewsItem>) {
    let featured: Vec<NewsItem> = items
        .iter()
        .filter(|it| it.has_image())
        .take(featured_count)
        .cloned()
        .collect();
    let claimed: HashSet<&str> = featured.iter().map(|it| it.id.as_str()).collect();
    let latest = items
        .iter()
        .filter(|it| !claimed.contains(it.id.as_str()))
        .take(latest_count)
        .cloned()
        .collect();
    (featured, latest)
}

/// What: Derive categories from loaded news (id required, first occurrence wins).
#[must_use]
pub fn infer_categories(items: &[NewsItem]) -> Vec<Category> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|it| {
            let id = it.category.id?;
            seen.insert(id).then(|| Category {
                id,
                name: it.category.name.clone(),
            })
        })
        .collect()
}

/// What: Derive agencies from loaded news (id required, first occurrence wins).
#[must_use]
pub fn infer_agencies(items: &[NewsItem]) -> Vec<Agency> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|it| {
            let id = it.agency.id?;
            seen.insert(id).then(|| Agency {
                id,
                name: it.agency.name.clone(),
                website: it.agency.website.clone(),
                image_url: it.agency.image_url.clone(),
            })
        })
        .collect()
}

/// What: Start the startup (or reload) load and send it to the feed worker.
///
/// Details:
/// - Requests `initial_window` items under the current filter.
/// - Clears the error banner and marks the feed as loading.
pub fn start_initial_load(app: &mut AppState, feed_tx: &mpsc::UnboundedSender<FeedRequest>) {
    let window = app.settings.initial_window;
    let request = app.feed.begin_reset(current_filter(app), window);
    app.loading_initial = true;
    app.error_banner = None;
    tracing::info!(
        generation = request.generation,
        window,
        "starting initial news load"
    );
    let _ = feed_tx.send(FeedRequest::Initial(request));
}

/// What: Apply the startup (or reload) result.
///
/// Inputs:
/// - `request`: The request the result belongs to.
/// - `news`, `categories`, `agencies`: Worker results.
/// - `now`: Clock for the carousel timer.
///
/// Details:
/// - Stale results (a newer reset exists) are ignored.
/// - News failure before anything has loaded shows the startup error banner
///   with empty lists.
/// - News failure on a reload keeps the last good carousel, feed, and lookups.
/// - Lookup failures fall back to values inferred from the loaded window.
pub fn apply_initial_load(
    app: &mut AppState,
    request: &ResetRequest,
    news: Result<NewsPage, ApiError>,
    categories: Result<Vec<Category>, ApiError>,
    agencies: Result<Vec<Agency>, ApiError>,
    now: Instant,
) {
    if !app.feed.is_current(request.generation) {
        tracing::debug!(generation = request.generation, "dropping stale initial load");
        return;
    }
    app.loading_initial = false;
    let window_items = match news {
        Ok(page) => {
            let all = page.items.clone();
            let (featured, latest) = partition_initial(
                page.items,
                app.settings.featured_count,
                app.settings.latest_initial_count,
            );
            tracing::info!(
                received = all.len(),
                featured = featured.len(),
                latest = latest.len(),
                "initial news loaded"
            );
            app.set_featured(featured, now);
            app.feed.seed_initial(request, latest, page.total);
            all
        }
        Err(e) if app.has_content() => {
            tracing::warn!(error = %e, "news reload failed; keeping previous items");
            app.feed.fail_reset(request);
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "initial news load failed");
            app.feed.fail_reset(request);
            app.feed.items.clear();
            app.feed.has_more = false;
            app.set_featured(Vec::new(), now);
            app.error_banner = Some(e.server_message().unwrap_or_else(|| e.to_string()));
            Vec::new()
        }
    };
    app.lookups_inferred = false;
    app.categories = match categories {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => infer_categories(&window_items),
        Err(e) => {
            tracing::warn!(error = %e, "category lookup failed; inferring from news");
            app.lookups_inferred = true;
            infer_categories(&window_items)
        }
    };
    app.agencies = match agencies {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => infer_agencies(&window_items),
        Err(e) => {
            tracing::warn!(error = %e, "agency lookup failed; inferring from news");
            app.lookups_inferred = true;
            infer_agencies(&window_items)
        }
    };
    app.reset_selection();
}
