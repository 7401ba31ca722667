use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn malformed_email_returns_422_with_field_error() {
    let (app, intake) = common::test_app();
    let mut request = common::valid_request();
    request["email"] = "prajwol-at-example".into();

    let (status, body) = common::post_json(&app, "/api/exchange-requests", &request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert_eq!(body["field_errors"]["email"], "Enter a valid email address");
    assert_eq!(intake.accepted(), 0);
}

#[tokio::test]
async fn empty_required_text_is_reported_per_field() {
    let (app, _intake) = common::test_app();
    let mut request = common::valid_request();
    request["full_name"] = "".into();
    request["vehicle_model"] = "".into();

    let (status, body) = common::post_json(&app, "/api/exchange-requests", &request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["field_errors"].get("full_name").is_some());
    assert!(body["field_errors"].get("vehicle_model").is_some());
}

#[tokio::test]
async fn zero_valuation_is_rejected() {
    let (app, _intake) = common::test_app();
    let mut request = common::valid_request();
    request["expected_valuation"] = 0.into();

    let (status, body) = common::post_json(&app, "/api/exchange-requests", &request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["field_errors"].get("expected_valuation").is_some());
}

#[tokio::test]
async fn unknown_option_value_is_a_field_error() {
    let (app, intake) = common::test_app();
    let mut request = common::valid_request();
    request["city"] = "Dharan".into();

    let (status, body) = common::post_json(&app, "/api/exchange-requests", &request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert_eq!(body["field_errors"]["city"], "Choose one of the listed options");
    assert_eq!(intake.accepted(), 0);
}

#[tokio::test]
async fn wrong_json_type_is_a_field_error() {
    let (app, _intake) = common::test_app();
    let mut request = common::valid_request();
    request["km_driven"] = "a lot".into();

    let (status, body) = common::post_json(&app, "/api/exchange-requests", &request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert!(body["field_errors"].get("km_driven").is_some(), "got {body}");
}

#[tokio::test]
async fn missing_required_field_is_a_field_error() {
    let (app, _intake) = common::test_app();
    let mut request = common::valid_request();
    request.as_object_mut().unwrap().remove("email");

    let (status, body) = common::post_json(&app, "/api/exchange-requests", &request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field_errors"]["email"], "This field is required");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (app, intake) = common::test_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/exchange-requests")
        .header("content-type", "application/json")
        .header("x-forwarded-for", "203.0.113.10")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
    assert_eq!(intake.accepted(), 0);
}
