//! Anomaly controller.
//!
//! # Responsibility
//! - Invoke the retrieval service once per request.
//! - Map records to 200 and absence to 404.
//!
//! # Invariants
//! - An empty list is 200 with `[]`; only a missing single record is 404.
//! - Service faults propagate unchanged; nothing is retried here.

use crate::response::ApiResponse;
use foundation_core::{Anomaly, AnomalyId, AnomalyService, ServiceResult};
use log::{debug, info};
use std::sync::Arc;

/// Read-only controller over an injected [`AnomalyService`].
pub struct AnomalyController<S: AnomalyService + ?Sized> {
    service: Arc<S>,
}

impl<S: AnomalyService + ?Sized> Clone for AnomalyController<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: AnomalyService + ?Sized> AnomalyController<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Lists every anomaly.
    pub async fn get(&self) -> ServiceResult<ApiResponse<Vec<Anomaly>>> {
        let anomalies = self.service.get_all().await?;
        info!(
            "event=anomaly_list module=controller status=ok count={}",
            anomalies.len()
        );
        Ok(ApiResponse::Ok(anomalies))
    }

    /// Looks up one anomaly by identifier.
    pub async fn get_by_id(&self, id: AnomalyId) -> ServiceResult<ApiResponse<Anomaly>> {
        match self.service.get_by_id(id).await? {
            Some(anomaly) => {
                debug!("event=anomaly_get module=controller status=ok id={id}");
                Ok(ApiResponse::Ok(anomaly))
            }
            None => {
                info!("event=anomaly_get module=controller status=not_found id={id}");
                Ok(ApiResponse::NotFound)
            }
        }
    }
}
