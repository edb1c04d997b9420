//! Remote procedure port as seen from the client.

use crate::todo::{
    domain::{Todo, TodoId},
    services::DeleteOutcome,
};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote to-do calls.
pub type TodoApiResult<T> = Result<T, TodoApiError>;

/// The four to-do remote procedures.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetches every present record in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApiError`] when the call cannot be completed or the
    /// server rejects it.
    async fn get_todos(&self) -> TodoApiResult<Vec<Todo>>;

    /// Creates a record from the given description and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApiError::Rejected`] when the server refuses the
    /// description, or [`TodoApiError::Transport`] on call failure.
    async fn create_todo(&self, description: String) -> TodoApiResult<Todo>;

    /// Sets a record's completion flag and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApiError::Rejected`] when the id is unknown to the
    /// server, or [`TodoApiError::Transport`] on call failure.
    async fn update_todo_completion(&self, id: TodoId, completed: bool) -> TodoApiResult<Todo>;

    /// Deletes a record, reporting whether a row was actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApiError`] when the call cannot be completed or the
    /// server rejects it.
    async fn delete_todo(&self, id: TodoId) -> TodoApiResult<DeleteOutcome>;
}

/// Errors surfaced by remote to-do calls.
#[derive(Debug, Clone, Error)]
pub enum TodoApiError {
    /// The call could not be completed (connection, timeout, malformed
    /// response body).
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code of the rejection.
        status: u16,
        /// Human-readable message from the response body.
        message: String,
    },
}

impl TodoApiError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
