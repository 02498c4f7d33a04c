//! Filter actions: toggles validated against the lookups, apply, clear, chip
//! removal, and free-text search. Every change that alters the query issues a
//! feed reset.

use tokio::sync::mpsc;

use crate::state::types::ActiveFilter;
use crate::state::{AppState, FeedRequest};

/// What: The filter the feed should be fetched under right now.
///
/// Output:
/// - The selection projection (first agency, first category) plus the search text.
#[must_use]
pub fn current_filter(app: &AppState) -> ActiveFilter {
    ActiveFilter {
        q: app.search.clone().filter(|s| !s.trim().is_empty()),
        ..app.selected_filters.apply()
    }
}

/// What: Toggle an agency when it exists in the lookup list.
///
/// Output:
/// - `Some(now_selected)` for known ids; `None` (and no change) for unknown ones.
pub fn toggle_agency(app: &mut AppState, id: i64) -> Option<bool> {
    if !app.agencies.iter().any(|a| a.id == id) {
        tracing::debug!(id, "ignoring toggle of unknown agency");
        return None;
    }
    Some(app.selected_filters.toggle_agency(id))
}

/// What: Toggle a category when it exists in the lookup list.
///
/// Output:
/// - `Some(now_selected)` for known ids; `None` (and no change) for unknown ones.
pub fn toggle_category(app: &mut AppState, id: i64) -> Option<bool> {
    if !app.categories.iter().any(|c| c.id == id) {
        tracing::debug!(id, "ignoring toggle of unknown category");
        return None;
    }
    Some(app.selected_filters.toggle_category(id))
}

/// What: Reload the feed under the current selection and search.
pub fn apply_filters(app: &mut AppState, feed_tx: &mpsc::UnboundedSender<FeedRequest>) {
    let filter = current_filter(app);
    tracing::info!(?filter, "applying filters");
    let request = app.feed.begin_reset(filter, app.settings.page_size);
    let _ = feed_tx.send(FeedRequest::Reset(request));
}

/// What: Drop every selection and the search, then reload unfiltered.
pub fn clear_filters(app: &mut AppState, feed_tx: &mpsc::UnboundedSender<FeedRequest>) {
    app.selected_filters.clear_all();
    app.search = None;
    apply_filters(app, feed_tx);
}

/// What: Remove an agency chip and reload when it was selected.
pub fn remove_agency_chip(
    app: &mut AppState,
    id: i64,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) {
    if app.selected_filters.remove_agency(id) {
        apply_filters(app, feed_tx);
    }
}

/// What: Remove a category chip and reload when it was selected.
pub fn remove_category_chip(
    app: &mut AppState,
    id: i64,
    feed_tx: &mpsc::UnboundedSender<FeedRequest>,
) {
    if app.selected_filters.remove_category(id) {
        apply_filters(app, feed_tx);
    }
}

/// What: Set (or clear, with blank text) the search and reload.
pub fn set_search(app: &mut AppState, text: &str, feed_tx: &mpsc::UnboundedSender<FeedRequest>) {
    let text = text.trim();
    let next = (!text.is_empty()).then(|| text.to_string());
    if next == app.search {
        return;
    }
    app.search = next;
    apply_filters(app, feed_tx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Agency, Category};

    fn app_with_lookups() -> AppState {
        let mut app = AppState::default();
        app.agencies = vec![
            Agency {
                id: 1,
                name: "ایرنا".into(),
                website: None,
                image_url: None,
            },
            Agency {
                id: 2,
                name: "ایسنا".into(),
                website: None,
                image_url: None,
            },
        ];
        app.categories = vec![Category {
            id: 7,
            name: "ورزشی".into(),
        }];
        app
    }

    fn recv_reset(rx: &mut mpsc::UnboundedReceiver<FeedRequest>) -> crate::state::ResetRequest {
        match rx.try_recv() {
            Ok(FeedRequest::Reset(r)) => r,
            other => panic!("expected reset request, got {other:?}"),
        }
    }

    #[test]
    /// What: Unknown ids are rejected; known ones toggle.
    fn filters_toggle_validates_against_lookups() {
        let mut app = app_with_lookups();
        assert_eq!(toggle_agency(&mut app, 99), None);
        assert_eq!(toggle_category(&mut app, 1), None);
        assert_eq!(toggle_agency(&mut app, 2), Some(true));
        assert_eq!(toggle_category(&mut app, 7), Some(true));
        assert_eq!(toggle_agency(&mut app, 2), Some(false));
        assert_eq!(app.selected_filters.agencies(), &[] as &[i64]);
    }

    #[test]
    /// What: Applying sends a page-size reset carrying the projected filter.
    fn filters_apply_sends_reset() {
        let mut app = app_with_lookups();
        let (tx, mut rx) = mpsc::unbounded_channel();
        toggle_agency(&mut app, 2);
        toggle_agency(&mut app, 1);
        toggle_category(&mut app, 7);
        apply_filters(&mut app, &tx);
        let req = recv_reset(&mut rx);
        assert_eq!(req.limit, 10);
        assert_eq!(req.filter.agency_id, Some(2));
        assert_eq!(req.filter.category_id, Some(7));
        assert!(app.feed.is_resetting);
    }

    #[test]
    /// What: Search survives filter changes and is dropped by clear-all.
    fn filters_search_and_clear() {
        let mut app = app_with_lookups();
        let (tx, mut rx) = mpsc::unbounded_channel();
        set_search(&mut app, "  تورم ", &tx);
        assert_eq!(recv_reset(&mut rx).filter.q.as_deref(), Some("تورم"));
        set_search(&mut app, "تورم", &tx);
        assert!(rx.try_recv().is_err());

        toggle_category(&mut app, 7);
        apply_filters(&mut app, &tx);
        let req = recv_reset(&mut rx);
        assert_eq!(req.filter.q.as_deref(), Some("تورم"));
        assert_eq!(req.filter.category_id, Some(7));

        clear_filters(&mut app, &tx);
        let req = recv_reset(&mut rx);
        assert!(req.filter.is_empty());
        assert!(app.selected_filters.is_empty());
        assert!(app.search.is_none());
    }

    #[test]
    /// What: Removing a chip reloads only when the id was selected.
    fn filters_remove_chip() {
        let mut app = app_with_lookups();
        let (tx, mut rx) = mpsc::unbounded_channel();
        toggle_agency(&mut app, 1);
        remove_category_chip(&mut app, 7, &tx);
        assert!(rx.try_recv().is_err());
        remove_agency_chip(&mut app, 1, &tx);
        assert!(recv_reset(&mut rx).filter.agency_id.is_none());
    }
}
