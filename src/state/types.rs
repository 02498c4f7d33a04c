//! Core value types used by akhbar state.

use serde::{Deserialize, Serialize};

/// Category name used when an article carries no usable category.
pub const DEFAULT_CATEGORY_NAME: &str = "عمومی";
/// Agency name used when an article carries no usable source agency.
pub const DEFAULT_AGENCY_NAME: &str = "منبع نامشخص";
/// Link placeholder for articles without a link.
pub const PLACEHOLDER_LINK: &str = "#";

/// Category reference embedded in a [`NewsItem`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category id when the upstream record carried one.
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
}

impl Default for CategoryRef {
    fn default() -> Self {
        Self {
            id: None,
            name: DEFAULT_CATEGORY_NAME.to_string(),
        }
    }
}

/// Source agency reference embedded in a [`NewsItem`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyRef {
    /// Agency id when the upstream record carried one.
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Agency homepage.
    pub website: Option<String>,
    /// Agency logo URL.
    pub image_url: Option<String>,
}

impl Default for AgencyRef {
    fn default() -> Self {
        Self {
            id: None,
            name: DEFAULT_AGENCY_NAME.to_string(),
            website: None,
            image_url: None,
        }
    }
}

/// Canonical news article, built once per fetch by the normalizer.
///
/// Every field is guaranteed present; see `sources::normalize` for the alias
/// and defaulting rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Identifier, unique within a result set.
    pub id: String,
    /// Headline (may be empty).
    pub title: String,
    /// Body or summary text (may be empty).
    pub content: String,
    /// Lead image, when any.
    pub image_url: Option<String>,
    /// Publication time in epoch seconds.
    #[serde(rename = "pubDate")]
    pub pub_date: i64,
    /// Article link; [`PLACEHOLDER_LINK`] when unknown.
    pub link: String,
    /// Category the article is filed under.
    pub category: CategoryRef,
    /// Publishing agency.
    pub agency: AgencyRef,
}

impl NewsItem {
    /// Whether the article has a lead image (featured carousel eligibility).
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Whether the article has a real link that can be opened.
    #[must_use]
    pub fn has_link(&self) -> bool {
        !self.link.is_empty() && self.link != PLACEHOLDER_LINK
    }
}

/// Category entry offered by the filter modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend id used as the `category_id` filter.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Agency entry offered by the filter modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    /// Backend id used as the `agency_id` filter.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Agency homepage.
    pub website: Option<String>,
    /// Agency logo URL.
    pub image_url: Option<String>,
}

/// Query parameters for `GET /api/news`.
///
/// `None` and empty strings are omitted from the request entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsQuery {
    /// Filter by category id.
    pub category_id: Option<i64>,
    /// Filter by agency id.
    pub agency_id: Option<i64>,
    /// Filter by category name.
    pub category: Option<String>,
    /// Filter by agency name.
    pub agency: Option<String>,
    /// Free-text search over title and content.
    pub q: Option<String>,
    /// Page size.
    pub limit: Option<usize>,
    /// Start offset.
    pub offset: Option<usize>,
}

impl NewsQuery {
    /// What: Serialize the query to `(key, value)` pairs in a fixed key order.
    ///
    /// Output:
    /// - Pairs for every parameter that is set and non-empty, ordered
    ///   `category_id`, `agency_id`, `category`, `agency`, `q`, `limit`, `offset`.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let candidates: [(&'static str, Option<String>); 7] = [
            ("category_id", self.category_id.map(|v| v.to_string())),
            ("agency_id", self.agency_id.map(|v| v.to_string())),
            ("category", self.category.clone()),
            ("agency", self.agency.clone()),
            ("q", self.q.clone()),
            ("limit", self.limit.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
        ];
        candidates
            .into_iter()
            .filter_map(|(k, v)| v.filter(|s| !s.is_empty()).map(|s| (k, s)))
            .collect()
    }
}

/// Filter currently applied to the feed (the single-value projection of the
/// multi-select UI state plus the free-text search).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveFilter {
    /// First selected agency id.
    pub agency_id: Option<i64>,
    /// First selected category id.
    pub category_id: Option<i64>,
    /// Free-text search.
    pub q: Option<String>,
}

impl ActiveFilter {
    /// Whether no filter is applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agency_id.is_none()
            && self.category_id.is_none()
            && self.q.as_deref().is_none_or(str::is_empty)
    }

    /// What: Build the news query for one page under this filter.
    #[must_use]
    pub fn to_query(&self, limit: usize, offset: usize) -> NewsQuery {
        NewsQuery {
            category_id: self.category_id,
            agency_id: self.agency_id,
            q: self.q.clone(),
            limit: Some(limit),
            offset: Some(offset),
            ..NewsQuery::default()
        }
    }
}

/// One normalized page of news plus the continuation indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsPage {
    /// Normalized items in server order.
    pub items: Vec<NewsItem>,
    /// Explicit continuation link, when the server sent one.
    pub next: Option<String>,
    /// Total number of matching items reported by the server.
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Unset and empty parameters are dropped; order is fixed.
    ///
    /// Inputs:
    /// - A query with an empty `q`, a name filter, and paging values.
    ///
    /// Output:
    /// - Only non-empty pairs, in canonical key order.
    fn news_query_omits_empty_parameters() {
        let q = NewsQuery {
            agency_id: Some(4),
            category: Some("ورزشی".into()),
            agency: Some(String::new()),
            q: Some(String::new()),
            limit: Some(10),
            offset: Some(0),
            ..NewsQuery::default()
        };
        assert_eq!(
            q.to_pairs(),
            vec![
                ("agency_id", "4".to_string()),
                ("category", "ورزشی".to_string()),
                ("limit", "10".to_string()),
                ("offset", "0".to_string()),
            ]
        );
        assert!(NewsQuery::default().to_pairs().is_empty());
    }

    #[test]
    /// What: Active filter projection carries ids, search, and paging.
    fn active_filter_to_query() {
        let f = ActiveFilter {
            agency_id: Some(2),
            category_id: None,
            q: Some("بورس".into()),
        };
        assert!(!f.is_empty());
        let q = f.to_query(10, 30);
        assert_eq!(q.agency_id, Some(2));
        assert_eq!(q.category_id, None);
        assert_eq!(q.q.as_deref(), Some("بورس"));
        assert_eq!((q.limit, q.offset), (Some(10), Some(30)));
        assert!(ActiveFilter::default().is_empty());
        assert!(
            ActiveFilter {
                q: Some(String::new()),
                ..ActiveFilter::default()
            }
            .is_empty()
        );
    }

    #[test]
    /// What: Placeholder links and blank images are treated as absent.
    fn news_item_link_and_image_helpers() {
        let mut item = NewsItem {
            id: "1".into(),
            title: String::new(),
            content: String::new(),
            image_url: Some(String::new()),
            pub_date: 0,
            link: PLACEHOLDER_LINK.into(),
            category: CategoryRef::default(),
            agency: AgencyRef::default(),
        };
        assert!(!item.has_image());
        assert!(!item.has_link());
        item.image_url = Some("https://img/1.jpg".into());
        item.link = "https://news/1".into();
        assert!(item.has_image());
        assert!(item.has_link());
    }
}
