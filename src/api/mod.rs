pub mod dtos;
pub mod handlers;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    health,
    middleware::rate_limit::{RateLimit, rate_limit_middleware},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Web Metadata Crawler",
        description = "Given any URL, returns page metadata (title, description, open graph tags, headings, body text) and a ranked list of relevant topics."
    ),
    paths(handlers::crawl_url, health::health_check),
    tags(
        (name = "crawl", description = "Crawl a URL and extract metadata"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Assemble the application router. The rate limiter wraps every route; the
/// health exemption lives inside the middleware itself.
pub fn router(state: AppState, rate_limit: RateLimit) -> Router {
    Router::new()
        .route("/crawl", post(handlers::crawl_url))
        .route("/health", get(health::health_check))
        .layer(axum_middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
