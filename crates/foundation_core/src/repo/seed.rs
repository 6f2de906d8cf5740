//! Sample catalog for demo and local runs.

use crate::model::anomaly::Anomaly;
use crate::repo::anomaly_repo::{AnomalyRepository, RepoResult};
use log::info;

/// Returns the built-in sample records with fresh identifiers.
pub fn sample_catalog() -> Vec<Anomaly> {
    vec![
        Anomaly::new(
            "SCP-173",
            "Euclid",
            "Statue made of rebar, concrete and spray paint",
        ),
        Anomaly::new(
            "SCP-999",
            "Safe",
            "Cute orange-yellow slime made of happiness",
        ),
        Anomaly::new("SCP-682", "Keter", "Hard To Destroy Reptile"),
    ]
}

/// Inserts `records` only when the repository holds no anomalies.
///
/// Returns the number of inserted rows (zero for a non-empty store).
pub fn seed_if_empty<R: AnomalyRepository + ?Sized>(
    repo: &R,
    records: &[Anomaly],
) -> RepoResult<usize> {
    if !repo.list_anomalies()?.is_empty() {
        info!("event=catalog_seed module=repo status=skipped reason=not_empty");
        return Ok(0);
    }

    for record in records {
        repo.insert_anomaly(record)?;
    }

    info!(
        "event=catalog_seed module=repo status=ok inserted={}",
        records.len()
    );
    Ok(records.len())
}
