//! Person use-case service.
//!
//! # Responsibility
//! - Provide the CRUD entry points used by the store and tests.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::person::{NewPerson, Person, PersonId};
use crate::repo::person_repo::{PersonRepository, RepoResult};
use log::debug;

/// Use-case service wrapper for person CRUD operations.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new person and returns the assigned id.
    pub fn register(&self, person: &NewPerson) -> RepoResult<PersonId> {
        self.repo.insert_person(person)
    }

    /// Lists every registered person in id order.
    pub fn list_all(&self) -> RepoResult<Vec<Person>> {
        self.repo.list_people()
    }

    /// Rewrites name and email of `id`.
    ///
    /// A missing id is not an error; nothing is written.
    pub fn update(&self, id: PersonId, person: &NewPerson) -> RepoResult<()> {
        let matched = self.repo.update_person(id, person)?;
        if !matched {
            debug!("event=person_update module=service status=noop id={id}");
        }
        Ok(())
    }

    /// Permanently removes `id`. A missing id is not an error.
    pub fn remove(&self, id: PersonId) -> RepoResult<()> {
        let matched = self.repo.delete_person(id)?;
        if !matched {
            debug!("event=person_delete module=service status=noop id={id}");
        }
        Ok(())
    }
}
