//! Domain model for the people registry.
//!
//! # Invariants
//! - Every stored person is identified by a storage-assigned `PersonId`.
//! - Deletion is permanent; there are no tombstones.

pub mod person;
