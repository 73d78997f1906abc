use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::state::AppState;

// Rate limit entry - tracks requests per IP within the current window
pub struct RateLimitEntry {
    pub count: u32,
    pub window_start: Instant,
}

/// Fixed-window per-IP request limiter.
///
/// Expired windows are reset lazily on the next request from that IP;
/// there is no background sweep.
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            max_requests,
            window,
        }
    }

    // The entry guard holds the shard lock for this key, so the
    // read-modify-write below never loses an increment under concurrency.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();

        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(RateLimitEntry {
                count: 0,
                window_start: now,
            });

        // Window expired? Reset it
        if entry.window_start.elapsed() > self.window {
            entry.count = 1;
            entry.window_start = now;
            return true;
        }

        // Under limit? Allow
        if entry.count < self.max_requests {
            entry.count += 1;
            return true;
        }

        // Over limit
        false
    }
}

/// Middleware that short-circuits with 429 once a client IP exceeds the limit.
pub async fn enforce(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let key = addr.ip().to_string();

    if state.limiter.allow(&key) {
        next.run(request).await
    } else {
        tracing::warn!(client = %key, "rate limit exceeded");
        (StatusCode::TOO_MANY_REQUESTS, "Too many requests").into_response()
    }
}
