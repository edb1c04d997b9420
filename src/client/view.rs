//! State-mirroring view over the remote to-do collection.

use super::remote::{TodoApi, TodoApiResult};
use crate::todo::domain::{Todo, TodoId};
use tracing::warn;

/// A display-only mirror of the server's to-do collection.
///
/// The view maintains no authoritative state: every mutation is reconciled
/// from the payload the server returns, never applied optimistically. A
/// failed call logs a warning and leaves the local list exactly as it was.
pub struct TodoListView<A>
where
    A: TodoApi,
{
    api: A,
    todos: Vec<Todo>,
}

impl<A> TodoListView<A>
where
    A: TodoApi,
{
    /// Creates an empty view over the given remote API.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self {
            api,
            todos: Vec::new(),
        }
    }

    /// Returns the mirrored records in server order.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Fetches the full list and replaces the local mirror with it.
    ///
    /// # Errors
    ///
    /// Returns the call error; the local mirror is left unchanged.
    pub async fn load(&mut self) -> TodoApiResult<()> {
        match self.api.get_todos().await {
            Ok(todos) => {
                self.todos = todos;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load todos");
                Err(err)
            }
        }
    }

    /// Creates a record and appends the returned payload to the mirror.
    ///
    /// # Errors
    ///
    /// Returns the call error; the local mirror is left unchanged.
    pub async fn create(&mut self, description: impl Into<String>) -> TodoApiResult<()> {
        match self.api.create_todo(description.into()).await {
            Ok(created) => {
                self.todos.push(created);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to create todo");
                Err(err)
            }
        }
    }

    /// Sets a record's completion flag and replaces the matching mirrored
    /// record by id with the returned payload.
    ///
    /// # Errors
    ///
    /// Returns the call error; the local mirror is left unchanged.
    pub async fn set_completion(&mut self, id: TodoId, completed: bool) -> TodoApiResult<()> {
        match self.api.update_todo_completion(id, completed).await {
            Ok(updated) => {
                if let Some(slot) = self.todos.iter_mut().find(|todo| todo.id() == id) {
                    *slot = updated;
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to update todo completion");
                Err(err)
            }
        }
    }

    /// Deletes a record and removes the matching mirrored record by id.
    ///
    /// The mirrored record is removed whenever the call resolves — for both
    /// `success` values the row is absent server-side afterwards. Returns
    /// whether the server actually removed a row.
    ///
    /// # Errors
    ///
    /// Returns the call error; the local mirror is left unchanged.
    pub async fn remove(&mut self, id: TodoId) -> TodoApiResult<bool> {
        match self.api.delete_todo(id).await {
            Ok(outcome) => {
                self.todos.retain(|todo| todo.id() != id);
                Ok(outcome.success)
            }
            Err(err) => {
                warn!(error = %err, "failed to delete todo");
                Err(err)
            }
        }
    }
}
