//! In-memory repository for to-do persistence.
//!
//! A drop-in substitute for the `PostgreSQL` adapter, used by tests and
//! available wherever a durable store is unnecessary. It honours the same
//! assignment contract: monotonically increasing identifiers that survive
//! deletions, and a creation timestamp fixed at insertion.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Description, Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory to-do repository.
pub struct InMemoryTodoRepository<C: Clock + Send + Sync = DefaultClock> {
    clock: Arc<C>,
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    // Last assigned identifier; never decremented, so deletions cannot
    // cause identifier reuse.
    last_id: i64,
    // Keyed by raw identifier: ascending-key iteration is insertion order.
    todos: BTreeMap<i64, Todo>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Send + Sync> InMemoryTodoRepository<C> {
    /// Creates an empty in-memory repository on the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            clock,
            state: Arc::new(RwLock::new(InMemoryTodoState::default())),
        }
    }
}

impl<C: Clock + Send + Sync> Clone for InMemoryTodoRepository<C> {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TodoRepository for InMemoryTodoRepository<C> {
    async fn insert(&self, description: Description) -> TodoRepositoryResult<Todo> {
        let created_at = self.clock.utc();
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.last_id += 1;
        let todo = Todo::new(TodoId::new(state.last_id), description, created_at);
        state.todos.insert(todo.id().into_inner(), todo.clone());
        Ok(todo)
    }

    async fn list_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.values().cloned().collect())
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let todo = state
            .todos
            .get_mut(&id.into_inner())
            .ok_or(TodoRepositoryError::NotFound(id))?;
        todo.set_completed(completed);
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.remove(&id.into_inner()).is_some())
    }
}
