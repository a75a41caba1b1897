//! Storage access layer for the people registry.
//! This crate is the single writer and source of truth for person records.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{NewPerson, Person, PersonId, PersonValidationError};
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use service::person_service::PersonService;
pub use store::{PersonStore, StoreError, StoreResult};
