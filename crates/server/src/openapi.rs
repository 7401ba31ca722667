use axum::Router;
use std::sync::Arc;
use shared_types::{
    AppError, AppErrorKind, City, ExchangeReceipt, ExchangeRequest, FeatureLevel, FuelType,
    PriceRange, Transmission, VehicleColor, VehicleCondition, VehicleType, YesNo,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health::{self, HealthResponse};
use crate::intake::ExchangeIntake;
use crate::rate_limit::RateLimitState;
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::create_exchange_request,
        health::health_check,
    ),
    components(schemas(
        ExchangeRequest,
        ExchangeReceipt,
        City,
        VehicleType,
        VehicleColor,
        PriceRange,
        FeatureLevel,
        FuelType,
        VehicleCondition,
        Transmission,
        YesNo,
        AppError,
        AppErrorKind,
        HealthResponse,
    )),
    tags(
        (name = "exchange", description = "Vehicle exchange intake"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "EV Exchange API",
        description = "Trade in a combustion vehicle towards a new electric one",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the REST API, the health check and,
/// when the `api_docs` flag is on, the API reference at `/docs`.
pub fn api_router(intake: Arc<ExchangeIntake>, rate_limit: RateLimitState) -> Router {
    let state = AppState::new(intake);
    let flags = crate::config::feature_flags();

    let router = rest::api_router_with_rate_limit(rate_limit).with_state(state);

    if flags.api_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
