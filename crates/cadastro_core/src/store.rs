//! Per-operation storage access over a database file.
//!
//! # Responsibility
//! - Expose initialize/insert/list/update/delete keyed by a database path.
//! - Open a fresh connection for every call and release it before returning.
//!
//! # Invariants
//! - No connection outlives a single call, on success or on error.
//! - Each mutation is one statement committed by SQLite autocommit.

use crate::db::open_db;
use crate::model::person::{NewPerson, Person, PersonId};
use crate::repo::person_repo::{RepoError, SqlitePersonRepository};
use crate::service::person_service::PersonService;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreError = RepoError;
pub type StoreResult<T> = Result<T, StoreError>;

/// Handle to the registry database file.
///
/// Holds only the path; connections are scoped to each method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonStore {
    db_path: PathBuf,
}

impl PersonStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Creates the database file and schema when missing. Idempotent.
    pub fn initialize(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        match open_db(&self.db_path) {
            Ok(conn) => {
                drop(conn);
                info!(
                    "event=store_init module=store status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_init module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Inserts a record; fails with `DuplicateEmail` when the email exists.
    pub fn insert(&self, name: &str, email: &str) -> StoreResult<PersonId> {
        let person = NewPerson::new(name, email);
        self.with_service("insert", |service| service.register(&person))
    }

    /// Returns all records in id order.
    pub fn list_all(&self) -> StoreResult<Vec<Person>> {
        self.with_service("list_all", |service| service.list_all())
    }

    /// Overwrites name and email of `id`; a missing id is a no-op.
    pub fn update(&self, id: PersonId, name: &str, email: &str) -> StoreResult<()> {
        let person = NewPerson::new(name, email);
        self.with_service("update", |service| service.update(id, &person))
    }

    /// Removes `id`; a missing id is a no-op.
    pub fn delete(&self, id: PersonId) -> StoreResult<()> {
        self.with_service("delete", |service| service.remove(id))
    }

    fn with_service<T>(
        &self,
        op: &str,
        f: impl FnOnce(&PersonService<SqlitePersonRepository<'_>>) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let started_at = Instant::now();
        let result = open_db(&self.db_path)
            .map_err(RepoError::from)
            .and_then(|conn| {
                let repo = SqlitePersonRepository::try_new(&conn)?;
                let service = PersonService::new(repo);
                f(&service)
            });

        match &result {
            Ok(_) => info!(
                "event=store_op module=store status=ok op={op} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_op module=store status=error op={op} duration_ms={} error_kind={}",
                started_at.elapsed().as_millis(),
                error_kind(err)
            ),
        }
        result
    }
}

fn error_kind(err: &StoreError) -> &'static str {
    match err {
        RepoError::Validation(_) => "validation",
        RepoError::Db(_) => "db",
        RepoError::DuplicateEmail(_) => "duplicate_email",
        RepoError::UninitializedConnection { .. } => "uninitialized",
        RepoError::MissingRequiredTable(_) | RepoError::MissingRequiredColumn { .. } => {
            "schema_mismatch"
        }
    }
}
