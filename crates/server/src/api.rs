use dioxus::prelude::*;
use shared_types::{ExchangeReceipt, ExchangeRequest, FeatureFlags};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Get the current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Submit an exchange request to the intake service.
///
/// Validation failures come back as a serialized `AppError` carrying
/// per-field messages; see `AppError::parse_field_errors`.
#[cfg_attr(feature = "server", tracing::instrument(skip(request)))]
#[server]
pub async fn submit_exchange_request(
    request: ExchangeRequest,
) -> Result<ExchangeReceipt, ServerFnError> {
    crate::state::intake()
        .submit(request)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}
