use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::{net::SocketAddr, sync::Arc};
use tracing::warn;

use crate::api::dtos::ErrorResponse;

// In-process fixed window per client IP. Multi-instance deployments would
// need shared state; single-instance is the deployment model here.
#[derive(Clone)]
pub struct RateLimit {
    store: Arc<DashMap<String, WindowState>>,
    max_requests: u32,
    window_seconds: i64,
}

#[derive(Debug, Clone)]
struct WindowState {
    count: u32,
    window_start: DateTime<Utc>,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_seconds: i64) -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            max_requests,
            window_seconds,
        }
    }
}

/// IP-based rate limiting middleware. Health checks are exempt.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(rate_limit): State<RateLimit>,
    req: Request,
    next: Next,
) -> Response {
    if req.uri().path() == "/health" {
        return next.run(req).await;
    }

    let ip = client_ip(&req, &addr);
    let now = Utc::now();

    // the map guard must not be held across next.run
    let retry_after = {
        let mut entry = rate_limit
            .store
            .entry(ip.clone())
            .or_insert_with(|| WindowState {
                count: 0,
                window_start: now,
            });
        let data = entry.value_mut();

        if now.signed_duration_since(data.window_start)
            >= Duration::seconds(rate_limit.window_seconds)
        {
            data.count = 0;
            data.window_start = now;
        }

        data.count += 1;

        if data.count > rate_limit.max_requests {
            let elapsed = now.signed_duration_since(data.window_start).num_seconds();
            Some(rate_limit.window_seconds - elapsed + 1)
        } else {
            None
        }
    };

    if let Some(retry_after) = retry_after {
        warn!("rate limit hit for IP {ip}");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, retry_after.to_string())],
            Json(ErrorResponse {
                error: "Too many requests. Please slow down.".to_string(),
            }),
        )
            .into_response();
    }

    next.run(req).await
}

/// Client IP, honouring X-Forwarded-For when behind a proxy.
fn client_ip(req: &Request, addr: &SocketAddr) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| addr.ip().to_string())
}
