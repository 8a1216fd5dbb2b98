//! # Health Endpoint
//!
//! Liveness probe over the backing data file. The service itself is up as
//! long as it can answer, so `app` tracks `database`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::{FileStore, ProductStore};

/// Health report body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub code: u16,
    pub database: &'static str,
    pub app: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn up() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            database: "UP",
            app: "UP",
            error: None,
        }
    }

    fn down(error: String) -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            database: "DOWN",
            app: "DOWN",
            error: Some(error),
        }
    }
}

/// GET /health
pub async fn health<B: FileStore + 'static>(
    State(store): State<Arc<ProductStore<B>>>,
) -> Response {
    match store.check_liveness() {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::up())).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::down(e.to_string())),
            )
                .into_response()
        }
    }
}
