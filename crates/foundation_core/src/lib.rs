//! Core domain logic for the Foundation anomaly catalog.
//! Owns the record model, storage and the retrieval capability.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_console_logging, init_logging, logging_status, LogTarget,
};
pub use model::anomaly::{Anomaly, AnomalyId, AnomalyValidationError};
pub use repo::anomaly_repo::{AnomalyRepository, RepoError, RepoResult, SqliteAnomalyRepository};
pub use repo::seed::{sample_catalog, seed_if_empty};
pub use service::anomaly_service::{
    AnomalyService, InMemoryAnomalyService, RepositoryAnomalyService, ServiceError,
    ServiceResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
