//! Board store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist the canonical task list as one JSON blob under a fixed
//!   namespace key in device-local storage.
//! - Keep SQL and wire-format details inside the persistence boundary.
//!
//! # Invariants
//! - `load` never fails the caller over missing or unparseable state; it
//!   degrades to an empty board and logs the degradation.
//! - `persist` overwrites the whole blob synchronously; there is no
//!   partial-write protocol beyond the single upsert statement.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::task::Task;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed namespace key the task list is stored under.
///
/// Must stay stable so existing device-local state keeps loading.
pub const STORAGE_KEY: &str = "study_planner_pro";

const STORE_TABLE: &str = "local_store";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for board persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize board state: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected \
                 {expected_version}; open the database via `open_db` to run migrations"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
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

/// Store interface for loading and persisting the whole task list.
pub trait BoardRepository {
    /// Reads the persisted task list.
    ///
    /// Missing or unparseable state yields an empty list, never an error;
    /// only transport-level failures surface to the caller.
    fn load(&self) -> RepoResult<Vec<Task>>;

    /// Serializes and overwrites the stored task list synchronously.
    fn persist(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed board store.
pub struct SqliteBoardRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBoardRepository<'conn> {
    /// Wraps a connection after verifying it has been migrated.
    ///
    /// Rejects raw connections (schema version mismatch) and connections
    /// whose store table is absent, instead of failing later mid-operation.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [STORE_TABLE],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable(STORE_TABLE));
        }

        Ok(Self { conn })
    }
}

impl BoardRepository for SqliteBoardRepository<'_> {
    fn load(&self) -> RepoResult<Vec<Task>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1;",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(blob) = blob else {
            debug!("event=store_load module=repo status=empty reason=missing_key");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Task>>(&blob) {
            Ok(tasks) => {
                debug!(
                    "event=store_load module=repo status=ok count={}",
                    tasks.len()
                );
                Ok(tasks)
            }
            Err(err) => {
                warn!(
                    "event=store_load module=repo status=degraded reason=unparseable_blob \
                     error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, tasks: &[Task]) -> RepoResult<()> {
        let blob = serde_json::to_string(tasks).map_err(RepoError::Serialize)?;

        self.conn.execute(
            "INSERT INTO local_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STORAGE_KEY, blob],
        )?;

        debug!(
            "event=store_persist module=repo status=ok count={}",
            tasks.len()
        );
        Ok(())
    }
}
