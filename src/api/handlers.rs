use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{app_state::AppState, crawler};

use super::dtos::{CrawlRequest, CrawlResponse, ErrorResponse};

/// Crawl a URL and return its metadata plus a ranked topic list.
///
/// Cache-aside: a fresh result is computed only on a miss, and only fully
/// successful fetches (origin HTTP 200) are stored. A complete network
/// failure surfaces as 502 and is never cached; robots blocks and other
/// populated-error results return 200 with the error field set.
#[utoipa::path(
    post,
    path = "/crawl",
    tag = "crawl",
    request_body = CrawlRequest,
    responses(
        (status = 200, description = "Crawl result, possibly served from cache", body = CrawlResponse),
        (status = 400, description = "Invalid URL", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 502, description = "URL could not be reached", body = ErrorResponse)
    )
)]
pub async fn crawl_url(
    State(state): State<AppState>,
    Json(payload): Json<CrawlRequest>,
) -> Response {
    if let Err(reason) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: reason }),
        )
            .into_response();
    }

    if let Some(result) = state.cache.get(&payload.url).await {
        info!("cache hit for {}", payload.url);
        return Json(CrawlResponse {
            result,
            cached: true,
        })
        .into_response();
    }

    let result = crawler::crawl(&payload.url, payload.respect_robots).await;

    // complete network failure - don't cache, surface as 502
    if result.status_code == 0
        && let Some(error) = &result.error
    {
        return (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: format!("Failed to reach URL: {error}"),
            }),
        )
            .into_response();
    }

    // only successful fetches are cache-eligible
    if result.status_code == 200 && result.error.is_none() {
        state.cache.insert(&payload.url, result.clone()).await;
    }

    Json(CrawlResponse {
        result,
        cached: false,
    })
    .into_response()
}
