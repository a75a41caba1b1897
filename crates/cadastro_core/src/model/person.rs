//! Person domain model.
//!
//! # Responsibility
//! - Define the stored record and the write payload used by insert/update.
//! - Validate required fields before they reach SQL.
//!
//! # Invariants
//! - `id` is assigned by SQLite on insert and never reused or changed.
//! - `name` and `email` are never blank on write paths.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage-assigned identifier (`pessoas.id`).
pub type PersonId = i64;

/// One row of the `pessoas` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Unique across all records.
    pub email: String,
}

/// Field values for insert and update; carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
}

/// Validation errors for person write payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PersonValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Rejects blank (empty or whitespace-only) fields.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(PersonValidationError::EmptyEmail);
        }
        Ok(())
    }
}

impl Person {
    /// Returns the editable fields of this record.
    pub fn fields(&self) -> NewPerson {
        NewPerson::new(self.name.clone(), self.email.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{NewPerson, Person, PersonValidationError};

    #[test]
    fn validate_accepts_filled_fields() {
        assert_eq!(NewPerson::new("Ana", "ana@x.com").validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_name_before_email() {
        let err = NewPerson::new("   ", "")
            .validate()
            .expect_err("blank name should be rejected");
        assert_eq!(err, PersonValidationError::EmptyName);
    }

    #[test]
    fn validate_rejects_blank_email() {
        let err = NewPerson::new("Ana", "\t")
            .validate()
            .expect_err("blank email should be rejected");
        assert_eq!(err, PersonValidationError::EmptyEmail);
    }

    #[test]
    fn person_serializes_with_plain_field_names() {
        let person = Person {
            id: 7,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
        };
        let json = serde_json::to_value(&person).expect("person should serialize");
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "name": "Ana", "email": "ana@x.com" })
        );
        assert_eq!(person.fields(), NewPerson::new("Ana", "ana@x.com"));
    }
}
