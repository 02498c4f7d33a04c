use futures::future::join;
use tokio::sync::mpsc;

use crate::sources::ApiClient;
use crate::state::{FeedRequest, FeedResponse};

/// What: Spawn the background worker that performs feed requests.
///
/// Inputs:
/// - `client`: Shared API client.
/// - `req_rx`: Requests from the event loop.
/// - `res_tx`: Responses back to the event loop.
///
/// Details:
/// - Each request runs in its own task so a slow page never blocks a reset;
///   ordering is restored by the generation check on the receiving side.
/// - Startup loads fetch the news window, then both lookups concurrently.
pub fn spawn_feed_worker(
    client: ApiClient,
    mut req_rx: mpsc::UnboundedReceiver<FeedRequest>,
    res_tx: mpsc::UnboundedSender<FeedResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let client = client.clone();
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let response = run_request(&client, req).await;
                if res_tx.send(response).is_err() {
                    tracing::debug!("feed response dropped; event loop has exited");
                }
            });
        }
        tracing::debug!("feed worker stopped");
    });
}

/// What: Execute one feed request against the API.
///
/// Output:
/// - The response variant matching the request, carrying the request back.
pub async fn run_request(client: &ApiClient, req: FeedRequest) -> FeedResponse {
    match req {
        FeedRequest::Initial(request) => {
            let news = client.news_page(&request.query()).await;
            let (categories, agencies) = join(client.categories(), client.agencies()).await;
            FeedResponse::Initial {
                request,
                news,
                categories,
                agencies,
            }
        }
        FeedRequest::Append(request) => {
            let result = client.news_page(&request.query()).await;
            FeedResponse::Append { request, result }
        }
        FeedRequest::Reset(request) => {
            let result = client.news_page(&request.query()).await;
            FeedResponse::Reset { request, result }
        }
    }
}
