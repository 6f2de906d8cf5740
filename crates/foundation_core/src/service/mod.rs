//! Retrieval services for the anomaly catalog.
//!
//! # Responsibility
//! - Define the read capability consumed by HTTP controllers.
//! - Keep callers decoupled from storage details.

pub mod anomaly_service;
