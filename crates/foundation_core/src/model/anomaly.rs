//! Anomaly domain model.
//!
//! # Responsibility
//! - Define the catalog record (designation, classification, description).
//! - Validate records before they are written to or read from storage.
//!
//! # Invariants
//! - `id` is never nil for a persisted record.
//! - `designation` and `classification` are never blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a catalog record.
pub type AnomalyId = Uuid;

/// Catalog record describing a contained entity or object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anomaly {
    /// Generated once at creation time; never reused.
    pub id: AnomalyId,
    /// Short catalog code, e.g. `SCP-173`.
    pub designation: String,
    /// Containment tier, e.g. `Euclid`. Free text on purpose.
    pub classification: String,
    pub description: String,
}

/// Validation failures for `Anomaly` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyValidationError {
    NilId,
    EmptyDesignation,
    EmptyClassification,
}

impl Display for AnomalyValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "anomaly id must not be nil"),
            Self::EmptyDesignation => write!(f, "anomaly designation must not be empty"),
            Self::EmptyClassification => write!(f, "anomaly classification must not be empty"),
        }
    }
}

impl Error for AnomalyValidationError {}

impl Anomaly {
    /// Creates a record with a freshly generated v4 identifier.
    pub fn new(
        designation: impl Into<String>,
        classification: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), designation, classification, description)
    }

    /// Creates a record with a caller-provided identifier.
    ///
    /// Used when identity already exists, e.g. rows loaded from storage.
    /// Does not validate; call [`Anomaly::validate`] before persisting.
    pub fn with_id(
        id: AnomalyId,
        designation: impl Into<String>,
        classification: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            designation: designation.into(),
            classification: classification.into(),
            description: description.into(),
        }
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyDesignation` / `EmptyClassification` for blank labels.
    pub fn validate(&self) -> Result<(), AnomalyValidationError> {
        if self.id.is_nil() {
            return Err(AnomalyValidationError::NilId);
        }
        if self.designation.trim().is_empty() {
            return Err(AnomalyValidationError::EmptyDesignation);
        }
        if self.classification.trim().is_empty() {
            return Err(AnomalyValidationError::EmptyClassification);
        }
        Ok(())
    }
}
