//! Domain model for the anomaly catalog.
//!
//! # Responsibility
//! - Define the canonical record relayed by services and the HTTP layer.
//!
//! # Invariants
//! - Every record is identified by a stable `AnomalyId`.
//! - Records are read-only values once they leave the store.

pub mod anomaly;
