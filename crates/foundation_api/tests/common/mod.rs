#![allow(dead_code)]

use async_trait::async_trait;
use foundation_core::{
    Anomaly, AnomalyId, AnomalyService, RepoError, ServiceError, ServiceResult,
};
use std::sync::Mutex;

/// Builds a record the way catalog fixtures look.
pub fn create_anomaly(designation: &str, classification: &str, description: &str) -> Anomaly {
    Anomaly::new(designation, classification, description)
}

/// Scripted service that records every call it receives.
#[derive(Default)]
pub struct RecordingService {
    all: Vec<Anomaly>,
    by_id: Option<Anomaly>,
    fail: bool,
    get_all_calls: Mutex<usize>,
    get_by_id_calls: Mutex<Vec<AnomalyId>>,
}

impl RecordingService {
    pub fn returning_all(all: Vec<Anomaly>) -> Self {
        Self {
            all,
            ..Self::default()
        }
    }

    pub fn returning_one(anomaly: Option<Anomaly>) -> Self {
        Self {
            by_id: anomaly,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn get_all_calls(&self) -> usize {
        *self.get_all_calls.lock().unwrap()
    }

    pub fn get_by_id_calls(&self) -> Vec<AnomalyId> {
        self.get_by_id_calls.lock().unwrap().clone()
    }

    fn fault(&self) -> ServiceResult<()> {
        if self.fail {
            return Err(ServiceError::Repo(RepoError::InvalidData(
                "store offline".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AnomalyService for RecordingService {
    async fn get_all(&self) -> ServiceResult<Vec<Anomaly>> {
        *self.get_all_calls.lock().unwrap() += 1;
        self.fault()?;
        Ok(self.all.clone())
    }

    async fn get_by_id(&self, id: AnomalyId) -> ServiceResult<Option<Anomaly>> {
        self.get_by_id_calls.lock().unwrap().push(id);
        self.fault()?;
        Ok(self.by_id.clone())
    }
}
