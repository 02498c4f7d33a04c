//! Pagination and infinite-scroll state for the news feed.
//!
//! Every request is tagged with the feed `generation` it was issued under.
//! Starting a reset (initial load, filter change, reload) bumps the
//! generation, so responses from before the reset are recognised as stale and
//! dropped instead of being mixed into the new list.

use crate::sources::ApiError;
use crate::state::types::{ActiveFilter, Agency, Category, NewsItem, NewsPage, NewsQuery};

/// Request for the next page of the current list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppendRequest {
    /// Page size.
    pub limit: usize,
    /// Offset of the first requested item.
    pub offset: usize,
    /// Feed generation the request belongs to.
    pub generation: u64,
    /// Filter in force when the request was issued.
    pub filter: ActiveFilter,
}

impl AppendRequest {
    /// Query for `GET /api/news`.
    #[must_use]
    pub fn query(&self) -> NewsQuery {
        self.filter.to_query(self.limit, self.offset)
    }
}

/// Request replacing the whole list (offset 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetRequest {
    /// Number of items requested.
    pub limit: usize,
    /// Feed generation created by this reset.
    pub generation: u64,
    /// Filter the new list is fetched under.
    pub filter: ActiveFilter,
}

impl ResetRequest {
    /// Query for `GET /api/news`.
    #[must_use]
    pub fn query(&self) -> NewsQuery {
        self.filter.to_query(self.limit, 0)
    }
}

/// Work item for the feed worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedRequest {
    /// Startup or reload: news window plus category and agency lookups.
    Initial(ResetRequest),
    /// Next page for infinite scroll.
    Append(AppendRequest),
    /// Replace the list after a filter change.
    Reset(ResetRequest),
}

/// Result sent back by the feed worker, paired with its request.
#[derive(Debug)]
pub enum FeedResponse {
    /// Startup or reload result.
    Initial {
        /// Originating request.
        request: ResetRequest,
        /// News window.
        news: Result<NewsPage, ApiError>,
        /// Category lookup.
        categories: Result<Vec<Category>, ApiError>,
        /// Agency lookup.
        agencies: Result<Vec<Agency>, ApiError>,
    },
    /// Infinite-scroll page.
    Append {
        /// Originating request.
        request: AppendRequest,
        /// Page or failure.
        result: Result<NewsPage, ApiError>,
    },
    /// Filter-change result.
    Reset {
        /// Originating request.
        request: ResetRequest,
        /// Page or failure.
        result: Result<NewsPage, ApiError>,
    },
}

/// What happened when a response was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response was current and changed the list.
    Applied {
        /// Number of items the server returned.
        received: usize,
    },
    /// The response belonged to an older generation and was dropped.
    Stale,
    /// The request failed; prior items and paging state were kept.
    Failed,
}

/// What: Paging state of the feed list.
///
/// Details:
/// - `offset` always equals the initial window plus every item count received
///   by appends since the last reset.
/// - At most one append is in flight (`is_appending`).
#[derive(Clone, Debug)]
pub struct FeedState {
    /// Items shown in the feed, server order.
    pub items: Vec<NewsItem>,
    /// Page size for appends and resets.
    pub limit: usize,
    /// Offset of the next page.
    pub offset: usize,
    /// Whether another append may return items.
    pub has_more: bool,
    /// An append is in flight.
    pub is_appending: bool,
    /// A reset (initial load, filter change, reload) is in flight.
    pub is_resetting: bool,
    /// Current generation; bumped by every reset.
    pub generation: u64,
    /// Filter the current list was fetched under.
    pub filter: ActiveFilter,
    /// Total matching items reported by the server, when known.
    pub total: Option<u64>,
}

impl FeedState {
    /// Empty feed with the given page size; nothing loaded yet.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: limit.max(1),
            offset: 0,
            has_more: false,
            is_appending: false,
            is_resetting: false,
            generation: 0,
            filter: ActiveFilter::default(),
            total: None,
        }
    }

    /// Whether `generation` is the current one.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// What: Start a load that will replace the list.
    ///
    /// Inputs:
    /// - `filter`: Filter the new list is fetched under.
    /// - `limit`: Number of items to request (the page size for filter changes,
    ///   the initial window for startup and reload).
    ///
    /// Output:
    /// - The request to send; carries the new generation.
    ///
    /// Details:
    /// - Any in-flight append becomes stale and `is_appending` is cleared.
    pub fn begin_reset(&mut self, filter: ActiveFilter, limit: usize) -> ResetRequest {
        self.generation = self.generation.wrapping_add(1);
        self.is_appending = false;
        self.is_resetting = true;
        tracing::debug!(
            generation = self.generation,
            limit,
            ?filter,
            "feed reset started"
        );
        ResetRequest {
            limit: limit.max(1),
            generation: self.generation,
            filter,
        }
    }

    /// What: Apply a filter-change or reload response.
    ///
    /// Output:
    /// - `Applied` when current and successful: list replaced, `offset = received`,
    ///   `has_more = next.is_some() || received == limit`.
    /// - `Failed` when current and failed: previous list and filter kept.
    /// - `Stale` for responses from an older generation.
    pub fn apply_reset(
        &mut self,
        request: &ResetRequest,
        result: Result<NewsPage, &ApiError>,
    ) -> ApplyOutcome {
        if !self.is_current(request.generation) {
            tracing::debug!(
                generation = request.generation,
                current = self.generation,
                "dropping stale reset response"
            );
            return ApplyOutcome::Stale;
        }
        self.is_resetting = false;
        match result {
            Ok(page) => {
                let received = page.items.len();
                self.has_more = page.next.is_some() || received == request.limit;
                self.offset = received;
                self.items = page.items;
                self.total = page.total;
                self.filter = request.filter.clone();
                ApplyOutcome::Applied { received }
            }
            Err(e) => {
                tracing::warn!(error = %e, "feed reload failed; keeping previous list");
                ApplyOutcome::Failed
            }
        }
    }

    /// What: Seed the list from the startup window.
    ///
    /// Inputs:
    /// - `request`: The reset request the startup load was issued under.
    /// - `latest`: Items for the feed (already partitioned from the carousel).
    /// - `total`: Server-reported total, if any.
    ///
    /// Output:
    /// - `Applied` with the number of seeded items, or `Stale`.
    ///
    /// Details:
    /// - The next offset is the requested window size, not the number of items
    ///   shown, because the window also fed the carousel. `has_more` starts true.
    pub fn seed_initial(
        &mut self,
        request: &ResetRequest,
        latest: Vec<NewsItem>,
        total: Option<u64>,
    ) -> ApplyOutcome {
        if !self.is_current(request.generation) {
            return ApplyOutcome::Stale;
        }
        self.is_resetting = false;
        let received = latest.len();
        self.items = latest;
        self.offset = request.limit;
        self.has_more = true;
        self.total = total;
        self.filter = request.filter.clone();
        ApplyOutcome::Applied { received }
    }

    /// What: Mark a current reset as failed without touching the list.
    pub fn fail_reset(&mut self, request: &ResetRequest) -> ApplyOutcome {
        if !self.is_current(request.generation) {
            return ApplyOutcome::Stale;
        }
        self.is_resetting = false;
        ApplyOutcome::Failed
    }

    /// What: Claim the next page for infinite scroll.
    ///
    /// Output:
    /// - `None` when an append or reset is in flight or nothing more exists.
    /// - Otherwise the request; `is_appending` is set until the response is applied.
    pub fn begin_append(&mut self) -> Option<AppendRequest> {
        if self.is_appending || self.is_resetting || !self.has_more {
            return None;
        }
        self.is_appending = true;
        Some(AppendRequest {
            limit: self.limit,
            offset: self.offset,
            generation: self.generation,
            filter: self.filter.clone(),
        })
    }

    /// What: Apply an infinite-scroll response.
    ///
    /// Output:
    /// - `Applied`: items appended, `offset += received`,
    ///   `has_more = received > 0 && (next.is_some() || received == limit)`.
    /// - `Failed`: offset and `has_more` untouched, items kept.
    /// - `Stale`: dropped.
    pub fn apply_append(
        &mut self,
        request: &AppendRequest,
        result: Result<NewsPage, &ApiError>,
    ) -> ApplyOutcome {
        if !self.is_current(request.generation) {
            tracing::debug!(
                generation = request.generation,
                current = self.generation,
                offset = request.offset,
                "dropping stale append response"
            );
            return ApplyOutcome::Stale;
        }
        self.is_appending = false;
        match result {
            Ok(page) => {
                let received = page.items.len();
                self.offset += received;
                self.has_more =
                    received > 0 && (page.next.is_some() || received == request.limit);
                self.items.extend(page.items);
                if page.total.is_some() {
                    self.total = page.total;
                }
                ApplyOutcome::Applied { received }
            }
            Err(e) => {
                tracing::warn!(error = %e, offset = request.offset, "loading more news failed");
                ApplyOutcome::Failed
            }
        }
    }

    /// Whether the list is empty and nothing is loading.
    #[must_use]
    pub fn is_settled_empty(&self) -> bool {
        self.items.is_empty() && !self.is_resetting
    }
}
