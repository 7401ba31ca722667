use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn submissions_past_the_limit_return_429() {
    let (app, intake) = common::test_app_rate_limited(2);
    let request = common::valid_request();

    let (s1, _) = common::post_json(&app, "/api/exchange-requests", &request).await;
    assert_eq!(s1, StatusCode::CREATED, "First request should pass");

    let (s2, _) = common::post_json(&app, "/api/exchange-requests", &request).await;
    assert_eq!(s2, StatusCode::CREATED, "Second request should pass");

    let (s3, body) = common::post_json(&app, "/api/exchange-requests", &request).await;
    assert_eq!(s3, StatusCode::TOO_MANY_REQUESTS, "Third request should be rate limited");
    assert_eq!(body["kind"], "RateLimited");
    assert_eq!(intake.accepted(), 2);
}

#[tokio::test]
async fn clients_are_limited_separately() {
    let (app, _intake) = common::test_app_rate_limited(1);
    let request = common::valid_request();

    let (s1, _) = common::post_json_as(&app, "/api/exchange-requests", &request, "198.51.100.1").await;
    assert_eq!(s1, StatusCode::CREATED);

    let (s2, _) = common::post_json_as(&app, "/api/exchange-requests", &request, "198.51.100.2").await;
    assert_eq!(s2, StatusCode::CREATED);

    let (s3, _) = common::post_json_as(&app, "/api/exchange-requests", &request, "198.51.100.1").await;
    assert_eq!(s3, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn health_is_never_limited() {
    let (app, _intake) = common::test_app_rate_limited(1);

    for _ in 0..3 {
        let (status, _) = common::get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
    }
}
