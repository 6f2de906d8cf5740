//! Repository layer for the anomaly catalog.
//!
//! # Responsibility
//! - Define the data access contract used by retrieval services.
//! - Isolate SQLite query details from service orchestration.
//! - Provide the sample catalog used to seed empty stores.
//!
//! # Invariants
//! - Writes enforce `Anomaly::validate()` before persistence.
//! - Reads reject invalid persisted rows instead of masking them.

pub mod anomaly_repo;
pub mod seed;
