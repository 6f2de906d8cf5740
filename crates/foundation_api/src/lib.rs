//! HTTP surface of the Foundation anomaly catalog.
//!
//! `GET /anomalies` lists records; `GET /anomalies/{id}` returns one record
//! or 404. Storage and retrieval live in `foundation_core`.

pub mod config;
pub mod controller;
pub mod response;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use controller::anomaly_controller::AnomalyController;
pub use response::{ApiError, ApiResponse};
pub use routes::{router, AppState};
