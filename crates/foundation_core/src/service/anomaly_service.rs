//! Anomaly retrieval capability and its implementations.
//!
//! # Responsibility
//! - `AnomalyService` exposes `get_all` and `get_by_id` as async reads.
//! - Implementations are interchangeable behind `Arc<dyn AnomalyService>`.
//!
//! # Invariants
//! - `get_all` returns an empty `Vec` rather than absence when nothing exists.
//! - `get_by_id` reports a missing record as `Ok(None)`, not as an error.
//! - Neither operation mutates state; both are safe to retry.

use crate::model::anomaly::{Anomaly, AnomalyId};
use crate::repo::anomaly_repo::{AnomalyRepository, RepoError};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Backing-store failures surfaced by a retrieval service.
///
/// Not-found is deliberately absent here; it is modeled as `Option::None`.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    /// The blocking storage task panicked or was cancelled.
    Task(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Task(message) => write!(f, "storage task failed: {message}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Task(_) => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Task(value.to_string())
    }
}

/// Read access to anomaly records.
#[async_trait]
pub trait AnomalyService: Send + Sync {
    /// Returns every known anomaly in a stable order.
    async fn get_all(&self) -> ServiceResult<Vec<Anomaly>>;

    /// Returns the matching anomaly, or `None` when no record has `id`.
    async fn get_by_id(&self, id: AnomalyId) -> ServiceResult<Option<Anomaly>>;
}

/// Retrieval service backed by an [`AnomalyRepository`].
///
/// Repository calls are blocking, so they run on tokio's blocking pool.
pub struct RepositoryAnomalyService<R> {
    repo: Arc<R>,
}

impl<R> RepositoryAnomalyService<R>
where
    R: AnomalyRepository + Send + Sync + 'static,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// Returns the underlying repository, e.g. for seeding at startup.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}

#[async_trait]
impl<R> AnomalyService for RepositoryAnomalyService<R>
where
    R: AnomalyRepository + Send + Sync + 'static,
{
    async fn get_all(&self) -> ServiceResult<Vec<Anomaly>> {
        let repo = Arc::clone(&self.repo);
        let anomalies = tokio::task::spawn_blocking(move || repo.list_anomalies()).await??;
        Ok(anomalies)
    }

    async fn get_by_id(&self, id: AnomalyId) -> ServiceResult<Option<Anomaly>> {
        let repo = Arc::clone(&self.repo);
        let anomaly = tokio::task::spawn_blocking(move || repo.get_anomaly(id)).await??;
        Ok(anomaly)
    }
}

/// Retrieval service over a fixed in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnomalyService {
    records: Vec<Anomaly>,
}

impl InMemoryAnomalyService {
    /// Builds a snapshot ordered by `designation`, then `id`.
    pub fn new(records: impl IntoIterator<Item = Anomaly>) -> Self {
        let mut records: Vec<Anomaly> = records.into_iter().collect();
        records.sort_by(|a, b| {
            a.designation
                .cmp(&b.designation)
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { records }
    }
}

#[async_trait]
impl AnomalyService for InMemoryAnomalyService {
    async fn get_all(&self) -> ServiceResult<Vec<Anomaly>> {
        Ok(self.records.clone())
    }

    async fn get_by_id(&self, id: AnomalyId) -> ServiceResult<Option<Anomaly>> {
        Ok(self.records.iter().find(|record| record.id == id).cloned())
    }
}
