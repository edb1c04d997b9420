//! `PostgreSQL` repository implementation for to-do persistence.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{Description, PersistedTodoData, Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by to-do adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// Initial table definition, applied once at startup.
const SCHEMA_BOOTSTRAP: &str = "CREATE TABLE IF NOT EXISTS todos (\
     id BIGSERIAL PRIMARY KEY, \
     description TEXT NOT NULL, \
     completed BOOLEAN NOT NULL DEFAULT FALSE, \
     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()\
     )";

/// `PostgreSQL`-backed to-do repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table when it does not already exist.
    ///
    /// This is the only schema management the service performs; there is no
    /// migration tooling beyond initial table creation.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the statement
    /// cannot be executed.
    pub async fn ensure_schema(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query(SCHEMA_BOOTSTRAP)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, description: Description) -> TodoRepositoryResult<Todo> {
        let new_row = NewTodoRow {
            description: description.into_inner(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row_to_todo(row))
        })
        .await
    }

    async fn list_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_todo).collect())
        })
        .await
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoRepositoryResult<Todo> {
        self.run_blocking(move |connection| {
            let row = diesel::update(todos::table.filter(todos::id.eq(id.into_inner())))
                .set(todos::completed.eq(completed))
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo)
                .ok_or(TodoRepositoryError::NotFound(id))
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(todos::table.filter(todos::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn row_to_todo(row: TodoRow) -> Todo {
    let TodoRow {
        id,
        description,
        completed,
        created_at,
    } = row;

    Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        description,
        completed,
        created_at,
    })
}
