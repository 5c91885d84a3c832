//! Error handling for the campus map data layer
//!
//! This module provides idiomatic Rust error types using thiserror. Absent
//! records are never errors: single-record lookups return `Option` and
//! collection lookups return empty vectors.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Main error type for the data layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// A datastore constraint was violated: duplicate category name, missing
    /// required field, or a location referencing a category that does not
    /// exist in the datastore.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Any other datastore failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify an sqlx error, separating constraint violations from other
    /// datastore failures.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        let constraint = err
            .as_database_error()
            .filter(|db| {
                matches!(
                    db.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                )
            })
            .map(|db| db.message().to_string());

        match constraint {
            Some(message) => Self::Constraint(message),
            None => Self::Database(err),
        }
    }

    /// True when the error is a constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}
