use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagelens::{
    api, app_state::AppState, cache::ResultCache, config::Config,
    middleware::rate_limit::RateLimit,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let cache = ResultCache::new(
        config.cache_capacity(),
        Duration::from_secs(config.cache_ttl_seconds()),
    );
    let state = AppState::new(cache);
    let rate_limit = RateLimit::new(
        config.rate_limit_requests(),
        config.rate_limit_window_seconds(),
    );

    let app = api::router(state, rate_limit)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;
    info!("listening on {}", config.bind_addr());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
