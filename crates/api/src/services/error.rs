//! Service error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No entity with the requested id exists.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity name, e.g. `Order`.
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
