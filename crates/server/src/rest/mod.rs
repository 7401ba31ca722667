pub mod exchange;
pub mod json;

use axum::{
    routing::{get, post},
    Router,
};

use crate::health;
use crate::rate_limit::{rate_limit_middleware, RateLimitState};
use crate::state::AppState;

pub use exchange::*;

fn submissions() -> Router<AppState> {
    Router::new().route("/api/exchange-requests", post(exchange::create_exchange_request))
}

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    submissions().route("/health", get(health::health_check))
}

/// Build the REST API router with rate limiting applied to submissions.
/// Health checks are never limited.
pub fn api_router_with_rate_limit(rate_limit: RateLimitState) -> Router<AppState> {
    submissions()
        .route_layer(axum::middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ))
        .route("/health", get(health::health_check))
}
