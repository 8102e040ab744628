//! Domain-level error types.

use thiserror::Error;

/// Domain errors - schema and lookup failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A write was rejected by the entity schema (missing field, max length, bad type).
    #[error("{0}")]
    Validation(String),

    /// A value could not be read as an entity identifier.
    #[error("Cast to id failed for value \"{0}\"")]
    Cast(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
