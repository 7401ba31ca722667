use axum::{extract::State, http::StatusCode, Json};
use shared_types::{AppError, ExchangeReceipt, ExchangeRequest};
use std::sync::Arc;

use super::json::AppJson;
use crate::intake::ExchangeIntake;

#[utoipa::path(
    post,
    path = "/api/exchange-requests",
    request_body = ExchangeRequest,
    responses(
        (status = 201, description = "Exchange request accepted", body = ExchangeReceipt),
        (status = 400, description = "Malformed JSON body", body = AppError),
        (status = 422, description = "Validation error", body = AppError),
        (status = 429, description = "Too many submissions", body = AppError),
        (status = 500, description = "Internal server error", body = AppError)
    ),
    tag = "exchange"
)]
#[tracing::instrument(skip(intake, payload))]
pub async fn create_exchange_request(
    State(intake): State<Arc<ExchangeIntake>>,
    AppJson(payload): AppJson<ExchangeRequest>,
) -> Result<(StatusCode, Json<ExchangeReceipt>), AppError> {
    let receipt = intake.submit(payload).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
