//! Person repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the CRUD statements over the `pessoas` table.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Write paths call `NewPerson::validate()` before SQL mutations.
//! - Update and delete of a missing id are no-ops, not errors.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::person::{NewPerson, Person, PersonId, PersonValidationError};
use rusqlite::{ffi, params, Connection, Row};
use thiserror::Error;

const PERSON_TABLE: &str = "pessoas";
const REQUIRED_COLUMNS: &[&str] = &["id", "nome", "email"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person persistence and query operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] PersonValidationError),
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    #[error("database schema not initialized: expected version {expected_version}, found {actual_version}")]
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    #[error("required table `{0}` is missing")]
    MissingRequiredTable(&'static str),
    #[error("required column `{table}.{column}` is missing")]
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for person CRUD operations.
pub trait PersonRepository {
    fn insert_person(&self, person: &NewPerson) -> RepoResult<PersonId>;
    fn list_people(&self) -> RepoResult<Vec<Person>>;
    /// Returns whether a row matched `id`.
    fn update_person(&self, id: PersonId, person: &NewPerson) -> RepoResult<bool>;
    /// Returns whether a row matched `id`.
    fn delete_person(&self, id: PersonId) -> RepoResult<bool>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a connection after checking that the schema is in place.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not match what the statements below expect.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version < expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let columns = table_columns(conn, PERSON_TABLE)?;
        if columns.is_empty() {
            return Err(RepoError::MissingRequiredTable(PERSON_TABLE));
        }
        for &column in REQUIRED_COLUMNS {
            if !columns.iter().any(|name| name.as_str() == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: PERSON_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn insert_person(&self, person: &NewPerson) -> RepoResult<PersonId> {
        person.validate()?;

        self.conn
            .execute(
                "INSERT INTO pessoas (nome, email) VALUES (?1, ?2);",
                params![person.name.as_str(), person.email.as_str()],
            )
            .map_err(|err| map_write_error(err, person))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_people(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, nome, email FROM pessoas ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();

        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }

    fn update_person(&self, id: PersonId, person: &NewPerson) -> RepoResult<bool> {
        person.validate()?;

        let changed = self
            .conn
            .execute(
                "UPDATE pessoas SET nome = ?1, email = ?2 WHERE id = ?3;",
                params![person.name.as_str(), person.email.as_str(), id],
            )
            .map_err(|err| map_write_error(err, person))?;

        Ok(changed > 0)
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM pessoas WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn map_write_error(err: rusqlite::Error, person: &NewPerson) -> RepoError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepoError::DuplicateEmail(person.email.clone())
        }
        _ => err.into(),
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    Ok(Person {
        id: row.get("id")?,
        name: row.get("nome")?,
        email: row.get("email")?,
    })
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}
