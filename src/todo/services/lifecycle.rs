//! Service layer for to-do creation, listing, completion, and deletion.
//!
//! One operation per store primitive, each adding its input contract on top
//! of the repository port. The service holds no cached copies between calls;
//! the store is the sole source of truth.

use crate::todo::{
    domain::{Description, Todo, TodoDomainError, TodoId},
    ports::{TodoRepository, TodoRepositoryError},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a delete operation.
///
/// A missing target is reported here rather than as an error: `success` is
/// `false` both for an id that never existed and for one already removed,
/// indistinguishably (idempotent delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    /// Whether a record was actually removed.
    pub success: bool,
}

/// Service-level errors for to-do operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Input validation failed before the store was touched.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),

    /// The record targeted by a completion update does not exist.
    #[error("todo with id {0} not found")]
    NotFound(TodoId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TodoRepositoryError),
}

/// Result type for to-do service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// To-do orchestration service over an injected repository.
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TodoService<R>
where
    R: TodoRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Creates a new to-do service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new to-do record from the given description.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when the description is
    /// empty or whitespace-only after trimming, or
    /// [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create_todo(&self, description: impl Into<String>) -> TodoServiceResult<Todo> {
        let validated = Description::new(description)?;
        self.repository
            .insert(validated)
            .await
            .map_err(map_repository_error)
    }

    /// Returns every present record in creation order.
    ///
    /// Always succeeds on a reachable store; an empty store yields an empty
    /// vector.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store cannot be
    /// read.
    pub async fn list_todos(&self) -> TodoServiceResult<Vec<Todo>> {
        self.repository
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    /// Sets the completion flag of an existing record and returns the
    /// updated record as read back from the store.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record with that id
    /// exists, or [`TodoServiceError::Repository`] when persistence fails.
    pub async fn update_completion(
        &self,
        id: TodoId,
        completed: bool,
    ) -> TodoServiceResult<Todo> {
        self.repository
            .set_completed(id, completed)
            .await
            .map_err(map_repository_error)
    }

    /// Deletes the record matching `id`, reporting through the outcome
    /// whether a record was actually removed.
    ///
    /// Never fails for a nonexistent id; absence is reported via
    /// `success: false`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store rejects the
    /// delete.
    pub async fn delete_todo(&self, id: TodoId) -> TodoServiceResult<DeleteOutcome> {
        let success = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        Ok(DeleteOutcome { success })
    }
}

/// Lifts repository errors into the service taxonomy.
///
/// A missing completion-update target becomes an explicit not-found
/// rejection; store failures are logged where they surface and re-raised
/// unchanged.
fn map_repository_error(err: TodoRepositoryError) -> TodoServiceError {
    match err {
        TodoRepositoryError::NotFound(id) => TodoServiceError::NotFound(id),
        other => {
            tracing::error!(error = %other, "todo store operation failed");
            TodoServiceError::Repository(other)
        }
    }
}
