use std::{net::SocketAddr, time::Duration};

use axum::{Router, extract::connect_info::MockConnectInfo};
use pagelens::{
    api, app_state::AppState, cache::ResultCache, middleware::rate_limit::RateLimit,
};

/// App with limits high enough that tests never trip them accidentally.
pub fn test_app() -> Router {
    test_app_with_rate_limit(1_000)
}

pub fn test_app_with_rate_limit(max_requests: u32) -> Router {
    let cache = ResultCache::new(1_000, Duration::from_secs(3600));
    let state = AppState::new(cache);
    let rate_limit = RateLimit::new(max_requests, 60);

    api::router(state, rate_limit)
        .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 7777))))
}
