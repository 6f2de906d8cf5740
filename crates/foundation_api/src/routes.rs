//! Route table and axum handlers.

use crate::controller::anomaly_controller::AnomalyController;
use crate::response::{ApiError, ApiResponse};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use foundation_core::{Anomaly, AnomalyId, AnomalyService};
use serde_json::{json, Value};

/// Shared handler state: the controller over a type-erased service.
pub type AppState = AnomalyController<dyn AnomalyService>;

/// Builds the HTTP surface.
///
/// `GET /anomalies/{id}` with a non-UUID segment is rejected by the `Path`
/// extractor before the controller runs.
pub fn router(controller: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/anomalies", get(list_anomalies))
        .route("/anomalies/:id", get(get_anomaly))
        .with_state(controller)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn list_anomalies(
    State(controller): State<AppState>,
) -> Result<ApiResponse<Vec<Anomaly>>, ApiError> {
    Ok(controller.get().await?)
}

async fn get_anomaly(
    State(controller): State<AppState>,
    Path(id): Path<AnomalyId>,
) -> Result<ApiResponse<Anomaly>, ApiError> {
    Ok(controller.get_by_id(id).await?)
}
