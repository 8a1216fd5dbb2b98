//! # REST API Errors
//!
//! Error types for the REST API module. Every kind carries a fixed message
//! and status code; failures render as a JSON object with one `error` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a valid product id
    #[error("Invalid product ID")]
    InvalidId,

    /// Limit query parameter is not a non-negative integer
    #[error("Invalid limit parameter")]
    InvalidLimit,

    /// Offset query parameter is not a non-negative integer
    #[error("Invalid offset parameter")]
    InvalidOffset,

    /// Request body failed to decode
    #[error("Invalid request body")]
    InvalidBody,

    /// No product with the requested id
    #[error("Product not found")]
    ProductNotFound,

    /// No route matched the request
    #[error("Not found")]
    RouteNotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The collection could not be loaded
    #[error("Failed to load products")]
    LoadFailed(#[source] StoreError),

    /// The collection could not be saved
    #[error("Failed to save products")]
    SaveFailed(#[source] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::InvalidLimit => StatusCode::BAD_REQUEST,
            ApiError::InvalidOffset => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::ProductNotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::LoadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::SaveFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        if err.is_write_error() {
            ApiError::SaveFailed(err)
        } else {
            ApiError::LoadFailed(err)
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client errors are expected traffic; storage failures are not.
        if let ApiError::LoadFailed(source) | ApiError::SaveFailed(source) = &self {
            tracing::error!(%source, "storage failure");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
