use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use shared_types::AppError;
use std::collections::HashMap;

/// JSON body extractor whose rejections are [`AppError`]s.
///
/// Syntax errors and a missing content type are a 400. Bodies that parse
/// but do not fit the target type are a 422 keyed by the offending field.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(rejection_to_app_error(&rejection)),
        }
    }
}

fn rejection_to_app_error(rejection: &JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => data_error(&err.body_text()),
        JsonRejection::JsonSyntaxError(_) => AppError::bad_request("Request body is not valid JSON"),
        JsonRejection::MissingJsonContentType(_) => {
            AppError::bad_request("Expected a request with `Content-Type: application/json`")
        }
        other => AppError::bad_request(other.body_text()),
    }
}

/// Build a validation error from axum's data error text,
/// `Failed to deserialize ...: <path>: <message>`.
fn data_error(body_text: &str) -> AppError {
    let detail = body_text
        .split_once("target type: ")
        .map(|(_, rest)| rest)
        .unwrap_or(body_text);

    let (path, message) = match detail.split_once(": ") {
        Some((path, message)) if is_field_path(path) => (Some(path), message),
        _ => (None, detail),
    };

    let field = path
        .and_then(top_level_field)
        .or_else(|| missing_field(message))
        .unwrap_or("body");

    let mut field_errors = HashMap::new();
    field_errors.insert(field.to_string(), field_message(message).to_string());
    AppError::validation("Please correct the highlighted fields", field_errors)
}

fn is_field_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}

/// `vehicle.city[0]` -> `vehicle`; the root path `.` has no field.
fn top_level_field(path: &str) -> Option<&str> {
    let head = path.split(['.', '[']).next()?;
    (!head.is_empty()).then_some(head)
}

fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

fn field_message(message: &str) -> &'static str {
    if message.starts_with("missing field") {
        "This field is required"
    } else if message.starts_with("unknown variant") {
        "Choose one of the listed options"
    } else {
        "Invalid value for this field"
    }
}
