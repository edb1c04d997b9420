//! Route handlers for the to-do remote procedures.

use super::error::ApiError;
use crate::todo::{
    domain::{Todo, TodoId},
    ports::TodoRepository,
    services::{DeleteOutcome, TodoService},
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

/// Request payload for creating a to-do record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    /// Description text; must be non-empty after trimming.
    pub description: String,
}

/// Request payload for setting a record's completion flag.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateTodoCompletionRequest {
    /// The completion flag to store.
    pub completed: bool,
}

/// `GET /api/todos` — returns every present record in creation order.
pub async fn get_todos<R>(
    State(service): State<TodoService<R>>,
) -> Result<Json<Vec<Todo>>, ApiError>
where
    R: TodoRepository + 'static,
{
    let todos = service.list_todos().await?;
    Ok(Json(todos))
}

/// `POST /api/todos` — creates a record and returns it.
pub async fn create_todo<R>(
    State(service): State<TodoService<R>>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, ApiError>
where
    R: TodoRepository + 'static,
{
    let todo = service.create_todo(body.description).await?;
    Ok(Json(todo))
}

/// `PATCH /api/todos/{id}/completion` — sets the completion flag and
/// returns the updated record as read back from the store.
pub async fn update_todo_completion<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoCompletionRequest>,
) -> Result<Json<Todo>, ApiError>
where
    R: TodoRepository + 'static,
{
    let todo = service
        .update_completion(TodoId::new(id), body.completed)
        .await?;
    Ok(Json(todo))
}

/// `DELETE /api/todos/{id}` — deletes a record, reporting whether a row was
/// actually removed. Never responds `404`; a missing id yields
/// `{ "success": false }`.
pub async fn delete_todo<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteOutcome>, ApiError>
where
    R: TodoRepository + 'static,
{
    let outcome = service.delete_todo(TodoId::new(id)).await?;
    Ok(Json(outcome))
}
