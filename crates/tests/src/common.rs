use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::intake::ExchangeIntake;
use server::rate_limit::RateLimitState;
use server::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Build a test router with an instant intake service and a generous limit.
pub fn test_app() -> (Router, Arc<ExchangeIntake>) {
    test_app_rate_limited(1_000)
}

/// Build a test router allowing `max_requests` submissions per minute per client.
pub fn test_app_rate_limited(max_requests: u32) -> (Router, Arc<ExchangeIntake>) {
    let intake = Arc::new(ExchangeIntake::with_delay(Duration::ZERO));
    let router = server::rest::api_router_with_rate_limit(RateLimitState::per_minute(max_requests))
        .with_state(AppState::new(intake.clone()));
    (router, intake)
}

/// A complete, valid exchange request body.
pub fn valid_request() -> Value {
    serde_json::json!({
        "full_name": "Prajwol Shrestha",
        "email": "prajwolstha@example.com",
        "phone": "9841234567",
        "city": "Kathmandu",
        "vehicle_model": "Maruti Suzuki Alto 800",
        "vehicle_type": "hatch",
        "make_year": "2078 (2021)",
        "vehicle_color": "sky blue",
        "km_driven": 35000,
        "expected_valuation": 1250000,
        "features": "mid",
        "fuel_type": "petrol",
        "condition": "minimal",
        "accidents": "no",
        "transmission": "manual",
        "new_vehicle_price_range": "above 30 lakhs",
        "finance": "yes"
    })
}

/// POST JSON as a given client and return status + parsed JSON body.
pub async fn post_json_as(app: &Router, uri: &str, body: &Value, client: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", client)
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_json_as(app, uri, body, "203.0.113.10").await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request and return status + parsed JSON body (Null when empty).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
