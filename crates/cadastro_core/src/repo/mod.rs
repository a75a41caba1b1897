//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewPerson::validate()` before persistence.
//! - Uniqueness violations surface as `RepoError::DuplicateEmail`.

pub mod person_repo;
