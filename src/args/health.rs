//! `--health`: probe the backend and report.

use akhbar::sources::{ApiClient, is_healthy};

/// What: Call the health endpoint and print the outcome.
///
/// Output:
/// - `0` when the backend answers `{"ok": true}`, `1` otherwise.
pub async fn handle_health(client: &ApiClient) -> i32 {
    match client.health_check().await {
        Ok(body) if is_healthy(&body) => {
            println!("ok: {}", client.base());
            0
        }
        Ok(body) => {
            tracing::warn!(%body, "backend reported unhealthy");
            eprintln!("unhealthy: {} answered {body}", client.base());
            1
        }
        Err(e) => {
            tracing::error!(error = %e, "health probe failed");
            eprintln!("unreachable: {e}");
            1
        }
    }
}
