use axum::extract::FromRef;
use std::sync::{Arc, OnceLock};

use crate::intake::ExchangeIntake;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Arc<ExchangeIntake>>`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub intake: Arc<ExchangeIntake>,
}

impl AppState {
    pub fn new(intake: Arc<ExchangeIntake>) -> Self {
        Self { intake }
    }
}

static INTAKE: OnceLock<Arc<ExchangeIntake>> = OnceLock::new();

/// Process-wide intake service built from the loaded config.
///
/// Server functions and the REST router share this instance.
pub fn intake() -> Arc<ExchangeIntake> {
    INTAKE
        .get_or_init(|| Arc::new(ExchangeIntake::new(&crate::config::intake_config())))
        .clone()
}
