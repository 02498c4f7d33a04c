//! Infinite-scroll trigger and feed response dispatch.

use std::time::Instant;

use tokio::sync::mpsc;

use crate::state::{AppState, ApplyOutcome, FeedRequest, FeedResponse};

use super::load::apply_initial_load;

/// What: Request the next page when the cursor reaches the trailing sentinel.
///
/// Output:
/// - `true` when an append was sent.
///
/// Details:
/// - No-op while the startup load is pending or failed, while an append or
///   reset is in flight, or when the feed is exhausted.
pub fn maybe_load_more(app: &mut AppState, feed_tx: &mpsc::UnboundedSender<FeedRequest>) -> bool {
    if app.loading_initial || app.error_banner.is_some() || !app.near_end() {
        return false;
    }
    let Some(request) = app.feed.begin_append() else {
        return false;
    };
    tracing::debug!(
        offset = request.offset,
        limit = request.limit,
        "loading more news"
    );
    feed_tx.send(FeedRequest::Append(request)).is_ok()
}

/// What: Apply one worker response to the state.
///
/// Details:
/// - Resets put the cursor back on the first row; appends keep it.
/// - A successful reset clears the startup banner, since the feed now has content.
/// - Stale responses are dropped inside [`crate::state::FeedState`].
pub fn handle_feed_response(app: &mut AppState, response: FeedResponse, now: Instant) {
    match response {
        FeedResponse::Initial {
            request,
            news,
            categories,
            agencies,
        } => apply_initial_load(app, &request, news, categories, agencies, now),
        FeedResponse::Append { request, result } => {
            let outcome = match result {
                Ok(page) => app.feed.apply_append(&request, Ok(page)),
                Err(e) => app.feed.apply_append(&request, Err(&e)),
            };
            if let ApplyOutcome::Applied { received } = outcome {
                tracing::debug!(
                    received,
                    offset = app.feed.offset,
                    has_more = app.feed.has_more,
                    "appended news"
                );
            }
        }
        FeedResponse::Reset { request, result } => {
            let outcome = match result {
                Ok(page) => app.feed.apply_reset(&request, Ok(page)),
                Err(e) => app.feed.apply_reset(&request, Err(&e)),
            };
            if let ApplyOutcome::Applied { received } = outcome {
                tracing::info!(received, has_more = app.feed.has_more, "feed reloaded");
                app.error_banner = None;
                app.reset_selection();
            }
        }
    }
}
