//! HTTP access to the news API.
//!
//! Every call goes through [`ApiClient::request`], which joins the base URL and
//! endpoint, merges headers, checks the status, and decodes JSON. Raw
//! [`serde_json::Value`]s are returned; the typed helpers run them through the
//! extractor and normalizer.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use crate::state::types::{Agency, Category, NewsPage, NewsQuery};

use super::error::{ApiError, clip_body};
use super::extract::{
    extract_agencies_list, extract_categories_list, extract_news_list, extract_next_link,
    extract_total_items,
};
use super::normalize::{normalize_agency, normalize_category, normalize_news_item};

/// News listing endpoint.
pub const NEWS_PATH: &str = "/api/news";
/// Category listing endpoint.
pub const CATEGORIES_PATH: &str = "/api/categories";
/// Agency listing endpoint.
pub const AGENCIES_PATH: &str = "/api/agencies";
/// Liveness endpoint.
pub const HEALTH_PATH: &str = "/healthz";

/// Default number of carousel items requested by [`ApiClient::fetch_featured`].
pub const DEFAULT_FEATURED_LIMIT: usize = 5;

/// What: Client for the news API bound to one base URL.
///
/// Details:
/// - Cheap to clone; the inner `reqwest::Client` shares its connection pool.
/// - Sends `Accept` and `Content-Type: application/json` on every request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// What: Build a client for `base` (trailing `/` is stripped).
    ///
    /// # Errors
    /// - [`ApiError::Client`] when the TLS backend or builder fails.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(format!("akhbar/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// What: Join base, endpoint, and query parameters into a request URL.
    ///
    /// Inputs:
    /// - `path`: Endpoint path starting with `/`.
    /// - `pairs`: Already-filtered `(key, value)` pairs in send order.
    ///
    /// Output:
    /// - The full URL; no `?` when `pairs` is empty.
    ///
    /// # Errors
    /// - [`ApiError::InvalidUrl`] when the result is not an absolute URL.
    pub fn endpoint_url(&self, path: &str, pairs: &[(&str, String)]) -> Result<String, ApiError> {
        let raw = format!("{}{}", self.base, path);
        let parsed = if pairs.is_empty() {
            reqwest::Url::parse(&raw)
        } else {
            reqwest::Url::parse_with_params(&raw, pairs.iter().map(|(k, v)| (*k, v.as_str())))
        };
        parsed
            .map(String::from)
            .map_err(|_| ApiError::InvalidUrl { url: raw })
    }

    /// What: Perform a GET and decode the JSON body.
    ///
    /// Inputs:
    /// - `path`, `pairs`: See [`ApiClient::endpoint_url`].
    /// - `extra_headers`: Per-call headers merged over the defaults.
    ///
    /// Output:
    /// - Parsed JSON body on 2xx.
    ///
    /// # Errors
    /// - [`ApiError::Transport`] on network failure.
    /// - [`ApiError::Status`] on non-2xx, carrying up to 200 body characters.
    /// - [`ApiError::Decode`] when the 2xx body is not JSON.
    ///
    /// Details:
    /// - Every failure is logged with `warn!` before it is returned.
    pub async fn request(
        &self,
        path: &str,
        pairs: &[(&str, String)],
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint_url(path, pairs).inspect_err(|e| {
            warn!(error = %e, "api request url rejected");
        })?;
        let mut req = self.http.get(&url);
        if let Some(h) = extra_headers {
            req = req.headers(h);
        }
        let resp = req.send().await.map_err(|source| {
            warn!(url = %url, error = %source, "api request failed");
            ApiError::Transport {
                url: url.clone(),
                source,
            }
        })?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                url: url.clone(),
                body: clip_body(&body),
            };
            warn!(url = %url, status = status.as_u16(), error = %err, "api returned error status");
            return Err(err);
        }
        let text = resp.text().await.map_err(|source| {
            warn!(url = %url, error = %source, "failed to read api response body");
            ApiError::Transport {
                url: url.clone(),
                source,
            }
        })?;
        let v = serde_json::from_str::<Value>(&text).map_err(|source| {
            warn!(url = %url, error = %source, "api response is not json");
            ApiError::Decode {
                url: url.clone(),
                source,
            }
        })?;
        debug!(url = %url, bytes = text.len(), "api response ok");
        Ok(v)
    }

    /// What: `GET /api/news` with the given filters and paging.
    ///
    /// # Errors
    /// - See [`ApiClient::request`].
    pub async fn fetch_news(&self, query: &NewsQuery) -> Result<Value, ApiError> {
        self.request(NEWS_PATH, &query.to_pairs(), None).await
    }

    /// What: First `limit` news items, unfiltered (carousel source).
    ///
    /// # Errors
    /// - See [`ApiClient::request`].
    pub async fn fetch_featured(&self, limit: usize) -> Result<Value, ApiError> {
        let query = NewsQuery {
            limit: Some(limit),
            ..NewsQuery::default()
        };
        self.fetch_news(&query).await
    }

    /// What: `GET /api/categories`.
    ///
    /// # Errors
    /// - See [`ApiClient::request`].
    pub async fn fetch_categories(&self) -> Result<Value, ApiError> {
        self.request(CATEGORIES_PATH, &[], None).await
    }

    /// What: `GET /api/agencies`.
    ///
    /// # Errors
    /// - See [`ApiClient::request`].
    pub async fn fetch_agencies(&self) -> Result<Value, ApiError> {
        self.request(AGENCIES_PATH, &[], None).await
    }

    /// What: `GET /healthz`.
    ///
    /// # Errors
    /// - See [`ApiClient::request`].
    pub async fn health_check(&self) -> Result<Value, ApiError> {
        self.request(HEALTH_PATH, &[], None).await
    }

    /// What: Fetch and normalize one page of news.
    ///
    /// Output:
    /// - Items in server order plus the continuation link and total, if sent.
    ///
    /// # Errors
    /// - See [`ApiClient::request`].
    pub async fn news_page(&self, query: &NewsQuery) -> Result<NewsPage, ApiError> {
        let raw = self.fetch_news(query).await?;
        Ok(news_page_from(&raw))
    }

    /// What: Fetch and normalize the category list (entries without id or name dropped).
    ///
    /// # Errors
    /// - See [`ApiClient::request`].
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let raw = self.fetch_categories().await?;
        Ok(extract_categories_list(&raw)
            .iter()
            .filter_map(normalize_category)
            .collect())
    }

    /// What: Fetch and normalize the agency list (entries without id or name dropped).
    ///
    /// # Errors
    /// - See [`ApiClient::request`].
    pub async fn agencies(&self) -> Result<Vec<Agency>, ApiError> {
        let raw = self.fetch_agencies().await?;
        Ok(extract_agencies_list(&raw)
            .iter()
            .filter_map(normalize_agency)
            .collect())
    }
}

/// What: Normalize a raw news response into a [`NewsPage`].
#[must_use]
pub fn news_page_from(raw: &Value) -> NewsPage {
    NewsPage {
        items: extract_news_list(raw)
            .iter()
            .map(normalize_news_item)
            .collect(),
        next: extract_next_link(raw),
        total: extract_total_items(raw),
    }
}

/// Whether a `/healthz` body reports the service as up (`{"ok": true}`).
#[must_use]
pub fn is_healthy(body: &Value) -> bool {
    body.get("ok").and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:8000/").expect("client")
    }

    #[test]
    /// What: URLs join base and path; empty query yields no `?`.
    fn api_endpoint_url_without_query() {
        let c = client();
        assert_eq!(c.base(), "http://127.0.0.1:8000");
        assert_eq!(
            c.endpoint_url(CATEGORIES_PATH, &[]).expect("url"),
            "http://127.0.0.1:8000/api/categories"
        );
    }

    #[test]
    /// What: Query strings keep pair order and escape non-ASCII values.
    fn api_endpoint_url_encodes_query() {
        let q = NewsQuery {
            category_id: Some(3),
            q: Some("بورس تهران".into()),
            limit: Some(10),
            offset: Some(0),
            ..NewsQuery::default()
        };
        let url = client()
            .endpoint_url(NEWS_PATH, &q.to_pairs())
            .expect("url");
        assert!(url.starts_with("http://127.0.0.1:8000/api/news?category_id=3&q=%D8%A8"));
        assert!(url.contains('+'), "space is form-encoded");
        assert!(url.ends_with("&limit=10&offset=0"));
    }

    #[test]
    /// What: A base that is not an absolute URL is reported as invalid.
    fn api_endpoint_url_rejects_relative_base() {
        let c = ApiClient::new("").expect("client");
        assert!(matches!(
            c.endpoint_url(HEALTH_PATH, &[]),
            Err(ApiError::InvalidUrl { .. })
        ));
    }

    #[test]
    /// What: A full envelope becomes a page with items, continuation, and total.
    fn news_page_from_envelope() {
        let raw = json!({
            "meta": {"success": true, "pagination": {"next": "/api/news?offset=2", "total_items": 7}},
            "data": {"news": [
                {"id": 1, "title": "a", "pubDate": 1_700_000_000},
                {"id": 2, "title": "b", "category": "ورزشی"}
            ]}
        });
        let page = news_page_from(&raw);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.items[1].category.name, "ورزشی");
        assert_eq!(page.next.as_deref(), Some("/api/news?offset=2"));
        assert_eq!(page.total, Some(7));
    }

    #[test]
    /// What: Health bodies are accepted only with a literal `ok: true`.
    fn health_body_check() {
        assert!(is_healthy(&json!({"ok": true})));
        assert!(!is_healthy(&json!({"ok": "yes"})));
        assert!(!is_healthy(&json!([])));
    }
}
