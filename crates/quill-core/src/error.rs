//! Domain-level error types.

use thiserror::Error;

use crate::domain::schema::SchemaError;

/// Domain errors - the outcome classes a resource operation can report.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was absent or empty before the store was touched.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: String },

    /// Any store failure. `context` is the public, operation-specific message;
    /// `source` carries the underlying cause for logging.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: RepoError,
    },
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn internal(context: &'static str, source: RepoError) -> Self {
        Self::Internal { context, source }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    /// The identifier could not be cast to the store's id type.
    #[error("Cast to id failed for value \"{0}\"")]
    InvalidId(String),

    /// The store schema rejected the write.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<SchemaError> for RepoError {
    fn from(err: SchemaError) -> Self {
        RepoError::Constraint(err.to_string())
    }
}
