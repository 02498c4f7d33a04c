//! Locate entity lists inside API responses of unknown shape.
//!
//! The backend wraps lists in an envelope (`{"meta": .., "data": {"news": [..]}}`),
//! but proxies and older deployments return `{"items": [..]}`, `{"results": [..]}`,
//! or a bare array. Each entity kind has a fixed, ordered table of candidate
//! paths; the first path that resolves to an array wins.

use serde_json::Value;

/// Where a candidate path starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Root {
    /// The `data` member when present and non-null, else the response itself.
    Data,
    /// The raw response.
    Response,
}

/// What: One typed location where an entity list may live.
///
/// Details:
/// - `keys` are walked in order from `root`; the path matches only if the final
///   value is a JSON array.
#[derive(Clone, Copy, Debug)]
pub struct CandidatePath {
    /// Starting point of the walk.
    root: Root,
    /// Object keys walked from the root.
    keys: &'static [&'static str],
}

impl CandidatePath {
    /// Path rooted at the unwrapped `data` member.
    const fn data(keys: &'static [&'static str]) -> Self {
        Self {
            root: Root::Data,
            keys,
        }
    }

    /// Path rooted at the raw response.
    const fn response(keys: &'static [&'static str]) -> Self {
        Self {
            root: Root::Response,
            keys,
        }
    }

    /// What: Resolve this path against a response.
    ///
    /// Output:
    /// - `Some(&Vec<Value>)` when every key exists and the final value is an array.
    #[must_use]
    pub fn resolve<'a>(&self, response: &'a Value) -> Option<&'a Vec<Value>> {
        let start = match self.root {
            Root::Data => data_of(response),
            Root::Response => response,
        };
        self.keys
            .iter()
            .try_fold(start, |cur, key| cur.get(*key))
            .and_then(Value::as_array)
    }
}

/// Candidate paths for news lists, in priority order.
pub const NEWS_PATHS: &[CandidatePath] = &[
    CandidatePath::data(&["news"]),
    CandidatePath::data(&["items"]),
    CandidatePath::data(&["results"]),
    CandidatePath::data(&["data", "news"]),
    CandidatePath::data(&["data", "items"]),
    CandidatePath::data(&["data", "results"]),
    CandidatePath::response(&["news"]),
    CandidatePath::response(&["items"]),
    CandidatePath::response(&["results"]),
];

/// Candidate paths for category lists, in priority order.
pub const CATEGORY_PATHS: &[CandidatePath] = &[
    CandidatePath::data(&["categories"]),
    CandidatePath::data(&["data", "categories"]),
    CandidatePath::response(&["categories"]),
];

/// Candidate paths for agency lists, in priority order.
pub const AGENCY_PATHS: &[CandidatePath] = &[
    CandidatePath::data(&["agencies"]),
    CandidatePath::data(&["sources"]),
    CandidatePath::data(&["data", "agencies"]),
    CandidatePath::response(&["agencies"]),
];

/// Candidate locations of the continuation link.
const NEXT_LINK_PATHS: [&[&str]; 2] = [
    &["meta", "pagination", "next"],
    &["data", "meta", "pagination", "next"],
];

/// Unwrap `response.data` when it is present and not `null`.
fn data_of(response: &Value) -> &Value {
    match response.get("data") {
        Some(d) if !d.is_null() => d,
        _ => response,
    }
}

/// What: Try candidate paths in order and return the first matching list.
///
/// Inputs:
/// - `response`: Raw API response.
/// - `paths`: Ordered candidate table.
///
/// Output:
/// - The first array found (cloned); the unwrapped `data` itself when it is an
///   array; otherwise an empty vector. Never fails.
#[must_use]
pub fn extract_with(response: &Value, paths: &[CandidatePath]) -> Vec<Value> {
    if let Some(found) = paths.iter().find_map(|p| p.resolve(response)) {
        return found.clone();
    }
    data_of(response).as_array().cloned().unwrap_or_default()
}

/// Extract the raw news records from a response.
#[must_use]
pub fn extract_news_list(response: &Value) -> Vec<Value> {
    extract_with(response, NEWS_PATHS)
}

/// Extract the raw category records from a response.
#[must_use]
pub fn extract_categories_list(response: &Value) -> Vec<Value> {
    extract_with(response, CATEGORY_PATHS)
}

/// Extract the raw agency records from a response.
#[must_use]
pub fn extract_agencies_list(response: &Value) -> Vec<Value> {
    extract_with(response, AGENCY_PATHS)
}

/// What: Read the continuation indicator (`meta.pagination.next`) from a news response.
///
/// Output:
/// - `Some(href)` when a non-empty next link is present, else `None`.
///
/// Details:
/// - The backend always sends `next`, using `""` on the last page, so an empty
///   string means "no more pages".
#[must_use]
pub fn extract_next_link(response: &Value) -> Option<String> {
    NEXT_LINK_PATHS.iter().find_map(|path| {
        path.iter()
            .try_fold(response, |cur, key| cur.get(*key))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(ToOwned::to_owned)
    })
}

/// What: Read the server-reported total item count, if any.
#[must_use]
pub fn extract_total_items(response: &Value) -> Option<u64> {
    [
        &["meta", "pagination", "total_items"][..],
        &["data", "meta", "pagination", "total_items"][..],
    ]
    .iter()
    .find_map(|path| {
        path.iter()
            .try_fold(response, |cur, key| cur.get(*key))
            .and_then(Value::as_u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: The backend envelope resolves through `data.news`.
    fn extract_envelope_news() {
        let resp = json!({
            "meta": {"success": true, "pagination": {"next": "", "prev": "", "current_page": 1, "total_items": 1}},
            "data": {"news": [{"id": "a"}]}
        });
        let list = extract_news_list(&resp);
        assert_eq!(list, vec![json!({"id": "a"})]);
    }

    #[test]
    /// What: First structural match wins, not the best or longest match.
    ///
    /// Inputs:
    /// - A response where `data.items` (short) precedes `response.news` (long) in priority.
    ///
    /// Output:
    /// - The `data.items` list is returned.
    fn extract_first_match_wins() {
        let resp = json!({
            "data": {"items": [1]},
            "news": [1, 2, 3]
        });
        assert_eq!(extract_news_list(&resp), vec![json!(1)]);
    }

    #[test]
    /// What: Non-array candidates are skipped and later paths are considered.
    fn extract_skips_non_array_candidates() {
        let resp = json!({
            "data": {"news": {"not": "a list"}, "data": {"results": [{"id": 9}]}}
        });
        assert_eq!(extract_news_list(&resp), vec![json!({"id": 9})]);
    }

    #[test]
    /// What: Bare arrays and `data` arrays are accepted as a fallback.
    fn extract_bare_arrays() {
        assert_eq!(extract_news_list(&json!([1, 2])).len(), 2);
        assert_eq!(extract_categories_list(&json!({"data": [{"id": 1}]})).len(), 1);
        assert_eq!(extract_agencies_list(&json!([{"id": 1}, {"id": 2}])).len(), 2);
    }

    #[test]
    /// What: `data: null` falls back to the response itself.
    fn extract_null_data_falls_back_to_response() {
        let resp = json!({"data": null, "items": [{"id": 1}]});
        assert_eq!(extract_news_list(&resp).len(), 1);
    }

    #[test]
    /// What: Unrecognizable shapes always produce an empty list, never a failure.
    ///
    /// Inputs:
    /// - Scalars, `null`, empty objects, and objects with wrongly named keys.
    ///
    /// Output:
    /// - Empty vectors from all three extractors.
    fn extract_unrecognized_shapes_are_empty() {
        for resp in [
            json!(null),
            json!(42),
            json!("news"),
            json!({}),
            json!({"data": {"posts": []}}),
            json!({"data": "oops"}),
        ] {
            assert!(extract_news_list(&resp).is_empty(), "{resp}");
            assert!(extract_categories_list(&resp).is_empty(), "{resp}");
            assert!(extract_agencies_list(&resp).is_empty(), "{resp}");
        }
    }

    #[test]
    /// What: Agencies may arrive under `sources`; categories under nested `data`.
    fn extract_agency_and_category_aliases() {
        let agencies = json!({"data": {"sources": [{"id": 3, "name": "ایسنا"}]}});
        assert_eq!(extract_agencies_list(&agencies).len(), 1);
        let cats = json!({"data": {"data": {"categories": [{"id": 1}, {"id": 2}]}}});
        assert_eq!(extract_categories_list(&cats).len(), 2);
    }

    #[test]
    /// What: Continuation link and total are read from either meta location; blanks are absent.
    fn extract_pagination_meta() {
        let with_next = json!({"meta": {"pagination": {"next": "http://x/api/news?offset=10", "total_items": 42}}});
        assert_eq!(
            extract_next_link(&with_next).as_deref(),
            Some("http://x/api/news?offset=10")
        );
        assert_eq!(extract_total_items(&with_next), Some(42));

        let nested = json!({"data": {"meta": {"pagination": {"next": "n"}}}});
        assert_eq!(extract_next_link(&nested).as_deref(), Some("n"));

        let last_page = json!({"meta": {"pagination": {"next": ""}}});
        assert!(extract_next_link(&last_page).is_none());
        assert!(extract_next_link(&json!([])).is_none());
        assert!(extract_total_items(&json!({})).is_none());
    }
}
