use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Router,
};
use shared_types::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Sliding window rate limit state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    inner: Arc<Mutex<RateLimitInner>>,
}

struct RateLimitInner {
    /// Map from client key -> list of request timestamps.
    requests: HashMap<String, Vec<Instant>>,
    /// Maximum requests allowed within the window.
    max_requests: u32,
    /// Sliding window duration.
    window: Duration,
}

impl RateLimitState {
    /// Create rate limiter allowing `max_requests` per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimitInner {
                requests: HashMap::new(),
                max_requests,
                window,
            })),
        }
    }

    /// `max_requests` per minute.
    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    /// Check if a request from `key` is allowed. Returns true if allowed.
    fn check(&self, key: &str) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let window = inner.window;
        let max = inner.max_requests as usize;

        // Clients with no request inside the window hold no entry.
        inner
            .requests
            .retain(|_, timestamps| timestamps.last().is_some_and(|t| now.duration_since(*t) < window));

        let timestamps = inner.requests.entry(key.to_string()).or_default();
        timestamps.retain(|t| now.duration_since(*t) < window);

        if timestamps.len() >= max {
            return false;
        }

        timestamps.push(now);
        true
    }

    fn tracked_clients(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .requests
            .len()
    }
}

/// Client key: first `X-Forwarded-For` hop, then `X-Client-Ip`, else `unknown`.
fn client_key(request: &Request) -> String {
    let headers = request.headers();
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| headers.get("x-client-ip").and_then(|v| v.to_str().ok()))
        .unwrap_or("unknown")
        .to_string()
}

/// Axum middleware that enforces per-client submission limits.
pub async fn rate_limit_middleware(
    State(state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);

    if !state.check(&key) {
        tracing::warn!(client = %key, "rate limit exceeded");
        return AppError::rate_limited("Too many requests. Please try again in a minute.")
            .into_response();
    }

    next.run(request).await
}

/// Server functions that submit exchange requests. The generated endpoint
/// may carry a suffix after the function name.
const LIMITED_SERVER_FNS: [&str; 1] = ["/api/submit_exchange_request"];

fn is_limited_server_fn(path: &str) -> bool {
    LIMITED_SERVER_FNS.iter().any(|prefix| path.starts_with(prefix))
}

/// Rate limit submission server functions; every other path passes through.
pub async fn server_fn_rate_limit_middleware(
    state: State<RateLimitState>,
    request: Request,
    next: Next,
) -> Response {
    if is_limited_server_fn(request.uri().path()) {
        rate_limit_middleware(state, request, next).await
    } else {
        next.run(request).await
    }
}

/// Apply `rate_limit` to the submission server functions of `router`.
///
/// Share the state with the REST router so both paths draw on one budget.
pub fn limit_server_functions(router: Router, rate_limit: RateLimitState) -> Router {
    router.layer(axum::middleware::from_fn_with_state(
        rate_limit,
        server_fn_rate_limit_middleware,
    ))
}
