use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn valid_request_returns_201_with_receipt() {
    let (app, intake) = common::test_app();

    let (status, body) =
        common::post_json(&app, "/api/exchange-requests", &common::valid_request()).await;

    assert_eq!(status, StatusCode::CREATED);
    let reference = body["reference"].as_str().unwrap();
    assert!(reference.starts_with("EVX-"), "unexpected reference {reference}");
    assert!(chrono::DateTime::parse_from_rfc3339(body["received_at"].as_str().unwrap()).is_ok());
    assert!(body["message"].as_str().unwrap().contains("Our team will contact you shortly."));
    assert_eq!(intake.accepted(), 1);
}

#[tokio::test]
async fn optional_sections_may_be_omitted() {
    let (app, _intake) = common::test_app();
    let mut request = common::valid_request();
    let obj = request.as_object_mut().unwrap();
    for key in [
        "features",
        "fuel_type",
        "condition",
        "accidents",
        "transmission",
        "new_vehicle_price_range",
        "finance",
    ] {
        obj.remove(key);
    }

    let (status, _) = common::post_json(&app, "/api/exchange-requests", &request).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn each_submission_gets_its_own_reference() {
    let (app, intake) = common::test_app();

    let (_, first) =
        common::post_json(&app, "/api/exchange-requests", &common::valid_request()).await;
    let (_, second) =
        common::post_json(&app, "/api/exchange-requests", &common::valid_request()).await;

    assert_ne!(first["reference"], second["reference"]);
    assert_eq!(intake.accepted(), 2);
}
