use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn health_reports_ok() {
    let (app, _intake) = common::test_app();

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["submissions"], 0);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_counts_accepted_submissions() {
    let (app, _intake) = common::test_app();
    common::post_json(&app, "/api/exchange-requests", &common::valid_request()).await;

    let (_, body) = common::get(&app, "/health").await;

    assert_eq!(body["submissions"], 1);
}
