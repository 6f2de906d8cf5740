//! Anomaly repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_anomalies` order is `designation ASC, id ASC`, independent of
//!   insertion order.
//! - Absence from `get_anomaly` is `Ok(None)`, never an error.

use crate::db::DbError;
use crate::model::anomaly::{Anomaly, AnomalyId, AnomalyValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

const ANOMALY_SELECT_SQL: &str = "SELECT
    id,
    designation,
    classification,
    description
FROM anomalies";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for anomaly persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(AnomalyValidationError),
    Db(DbError),
    Duplicate(AnomalyId),
    InvalidData(String),
    /// A previous holder of the connection lock panicked.
    Poisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Duplicate(id) => write!(f, "anomaly already exists: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted anomaly data: {message}"),
            Self::Poisoned => write!(f, "anomaly connection lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Duplicate(_) | Self::InvalidData(_) | Self::Poisoned => None,
        }
    }
}

impl From<AnomalyValidationError> for RepoError {
    fn from(value: AnomalyValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data access contract for anomaly records.
pub trait AnomalyRepository {
    fn list_anomalies(&self) -> RepoResult<Vec<Anomaly>>;
    fn get_anomaly(&self, id: AnomalyId) -> RepoResult<Option<Anomaly>>;
    /// Only used to seed a catalog; not reachable from the HTTP surface.
    fn insert_anomaly(&self, anomaly: &Anomaly) -> RepoResult<AnomalyId>;
}

/// SQLite-backed anomaly repository.
///
/// Owns its connection so it can be shared across request tasks.
pub struct SqliteAnomalyRepository {
    conn: Mutex<Connection>,
}

impl SqliteAnomalyRepository {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::Poisoned)
    }
}

impl AnomalyRepository for SqliteAnomalyRepository {
    fn list_anomalies(&self) -> RepoResult<Vec<Anomaly>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare(&format!("{ANOMALY_SELECT_SQL} ORDER BY designation ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut anomalies = Vec::new();

        while let Some(row) = rows.next()? {
            anomalies.push(parse_anomaly_row(row)?);
        }

        Ok(anomalies)
    }

    fn get_anomaly(&self, id: AnomalyId) -> RepoResult<Option<Anomaly>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{ANOMALY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_anomaly_row(row)?));
        }

        Ok(None)
    }

    fn insert_anomaly(&self, anomaly: &Anomaly) -> RepoResult<AnomalyId> {
        anomaly.validate()?;

        let conn = self.lock()?;
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO anomalies (
                id,
                designation,
                classification,
                description
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                anomaly.id.to_string(),
                anomaly.designation.as_str(),
                anomaly.classification.as_str(),
                anomaly.description.as_str(),
            ],
        )?;

        if inserted == 0 {
            return Err(RepoError::Duplicate(anomaly.id));
        }

        Ok(anomaly.id)
    }
}

fn parse_anomaly_row(row: &Row<'_>) -> RepoResult<Anomaly> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in anomalies.id"))
    })?;

    let anomaly = Anomaly::with_id(
        id,
        row.get::<_, String>("designation")?,
        row.get::<_, String>("classification")?,
        row.get::<_, String>("description")?,
    );
    anomaly
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("row `{id_text}`: {err}")))?;
    Ok(anomaly)
}
