//! HTTP response shapes produced by controllers.
//!
//! # Invariants
//! - `ApiResponse::Ok` is always 200 with a JSON body.
//! - `ApiResponse::NotFound` is always 404 with an empty body.
//! - Service faults become `ApiError` (500) and never leak their cause to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use foundation_core::ServiceError;
use log::error;
use serde::Serialize;
use serde_json::json;

/// Terminal outcome of a read handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Ok(T),
    NotFound,
}

impl<T> ApiResponse<T> {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Returns the payload; `None` for a not-found outcome.
    pub fn body(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::NotFound => None,
        }
    }

    pub fn into_body(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(value) => (StatusCode::OK, Json(value)).into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Generic fault response for failures the controller does not handle.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(
            "event=request_fault module=api status=error error={}",
            self.0
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal error" })),
        )
            .into_response()
    }
}
