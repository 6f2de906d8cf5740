//! HTTP-facing controllers.
//!
//! Controllers translate retrieval results into `ApiResponse` values and
//! hold no per-request state.

pub mod anomaly_controller;
