//! Repository port for to-do persistence.

use crate::todo::domain::{Description, Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for to-do repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// To-do persistence contract.
///
/// Every operation maps to a single atomic row-level statement against the
/// store; implementations hold no per-request state beyond the store handle
/// itself.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a new record, assigning a fresh identifier and the creation
    /// timestamp, with the completion flag cleared.
    ///
    /// Identifiers are never reused within the store's lifetime, even after
    /// deletions.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn insert(&self, description: Description) -> TodoRepositoryResult<Todo>;

    /// Returns every present record in insertion order (ascending id).
    ///
    /// The result is a finite snapshot valid at call time.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the store cannot be
    /// read.
    async fn list_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Updates only the completion flag of the record matching `id` and
    /// returns the updated record as read back from the store.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when no record with that id
    /// exists, or [`TodoRepositoryError::Persistence`] on store failure.
    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoRepositoryResult<Todo>;

    /// Removes the record matching `id` if present.
    ///
    /// Returns whether a row was actually removed: `false` for an unknown id
    /// and for a second delete of an already-deleted id. Removing one record
    /// never affects any other.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the store rejects
    /// the delete. A missing row is not an error.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool>;
}

/// Errors returned by to-do repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The record targeted by a completion update was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
