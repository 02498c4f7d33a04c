//! Error type for the news API boundary.

use serde_json::Value;
use thiserror::Error;

/// Maximum number of body characters kept on an HTTP status error.
pub const ERROR_BODY_MAX_CHARS: usize = 200;

/// What: Failure of a request against the news API.
///
/// Details:
/// - Transport, HTTP status, and JSON decode failures are distinct variants so
///   callers can tell "server unreachable" from "server answered garbage".
/// - Malformed-but-valid JSON is never an error here; shape problems are absorbed
///   by the extractor and normalizer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The shared HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request URL could not be built from the configured base.
    #[error("invalid request URL {url}")]
    InvalidUrl {
        /// Offending URL text.
        url: String,
    },

    /// Network-level failure (connect, TLS, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Request URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} {status_text} - {url} - {body}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical reason phrase (may be empty).
        status_text: String,
        /// Request URL.
        url: String,
        /// First [`ERROR_BODY_MAX_CHARS`] characters of the response body.
        body: String,
    },

    /// The body was not valid JSON.
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` for other variants.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// What: Extract a human-readable message from the backend's error envelope.
    ///
    /// Output:
    /// - `Some("<error_code>: <message>")` when the status body parses as
    ///   `{"meta": {"error_code": ..}, "message": ..}`; `None` otherwise.
    ///
    /// Details:
    /// - The body is truncated, so long envelopes may fail to parse; that is fine,
    ///   the raw text is still in `Display`.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let v: Value = serde_json::from_str(body).ok()?;
        let message = v.get("message").and_then(Value::as_str);
        let code = v
            .get("meta")
            .and_then(|m| m.get("error_code"))
            .and_then(Value::as_str);
        match (code, message) {
            (Some(c), Some(m)) => Some(format!("{c}: {m}")),
            (None, Some(m)) => Some(m.to_string()),
            (Some(c), None) => Some(c.to_string()),
            (None, None) => None,
        }
    }
}

/// Keep at most [`ERROR_BODY_MAX_CHARS`] characters of an error body.
pub(crate) fn clip_body(body: &str) -> String {
    body.chars().take(ERROR_BODY_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(body: &str) -> ApiError {
        ApiError::Status {
            status: 404,
            status_text: "Not Found".into(),
            url: "http://127.0.0.1:8000/api/news".into(),
            body: body.into(),
        }
    }

    #[test]
    /// What: Status errors render like the web client's message and expose the code.
    fn api_error_status_display() {
        let e = status_error("nope");
        assert_eq!(
            e.to_string(),
            "HTTP 404 Not Found - http://127.0.0.1:8000/api/news - nope"
        );
        assert_eq!(e.status(), Some(404));
        assert!(
            ApiError::InvalidUrl { url: "x".into() }
                .status()
                .is_none()
        );
    }

    #[test]
    /// What: The backend's error envelope is surfaced when parseable.
    ///
    /// Inputs:
    /// - Envelope with code and message, message only, and non-JSON text.
    ///
    /// Output:
    /// - `code: message`, bare message, and `None` respectively.
    fn api_error_server_message_from_envelope() {
        let full = status_error(r#"{"meta":{"success":false,"error_code":"NotFound"},"message":"Not Found"}"#);
        assert_eq!(full.server_message().as_deref(), Some("NotFound: Not Found"));
        let bare = status_error(r#"{"message":"Request validation failed"}"#);
        assert_eq!(
            bare.server_message().as_deref(),
            Some("Request validation failed")
        );
        assert!(status_error("<html>502</html>").server_message().is_none());
    }

    #[test]
    /// What: Bodies are clipped by characters, not bytes.
    fn clip_body_counts_chars() {
        let long = "خ".repeat(300);
        assert_eq!(clip_body(&long).chars().count(), ERROR_BODY_MAX_CHARS);
        assert_eq!(clip_body("short"), "short");
    }
}
