//! HTTP API boundary for the to-do service.
//!
//! Exposes the four to-do operations as named remote procedures over JSON:
//!
//! - `GET    /api/todos` — list every present record in creation order
//! - `POST   /api/todos` — create a record from a description
//! - `PATCH  /api/todos/{id}/completion` — set a record's completion flag
//! - `DELETE /api/todos/{id}` — delete a record, reporting `success`
//!
//! Input shapes are validated by the extractor layer before the service is
//! invoked; service rejections map to client-error responses carrying a
//! `{ "error": message }` body.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{CreateTodoRequest, UpdateTodoCompletionRequest};

use crate::todo::{ports::TodoRepository, services::TodoService};
use axum::{
    Router,
    routing::{delete, get, patch},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Builds the to-do API router over the given service.
///
/// The router carries a permissive CORS layer so a browser client served
/// from another origin can call it.
pub fn build_router<R>(service: TodoService<R>) -> Router
where
    R: TodoRepository + 'static,
{
    Router::new()
        .route(
            "/api/todos",
            get(routes::get_todos::<R>).post(routes::create_todo::<R>),
        )
        .route(
            "/api/todos/{id}/completion",
            patch(routes::update_todo_completion::<R>),
        )
        .route("/api/todos/{id}", delete(routes::delete_todo::<R>))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Binds `addr` and serves the to-do API until the task is aborted.
///
/// # Errors
///
/// Returns the underlying I/O error when the listener cannot be bound or
/// the accept loop fails.
pub async fn serve<R>(addr: SocketAddr, service: TodoService<R>) -> std::io::Result<()>
where
    R: TodoRepository + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("todo API listening on http://{local_addr}");
    axum::serve(listener, build_router(service)).await
}

#[cfg(test)]
mod tests;
