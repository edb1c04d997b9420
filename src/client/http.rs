//! HTTP implementation of the remote to-do port.

use super::remote::{TodoApi, TodoApiError, TodoApiResult};
use crate::todo::{
    domain::{Todo, TodoId},
    services::DeleteOutcome,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

/// Error body shape produced by the API boundary.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// reqwest-backed client for the to-do API.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTodoApi {
    /// Creates a client for the API served at `base_url`
    /// (e.g. `http://127.0.0.1:8080`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base_url: base,
            http: reqwest::Client::new(),
        }
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn get_todos(&self) -> TodoApiResult<Vec<Todo>> {
        let response = self
            .http
            .get(self.url("/api/todos"))
            .send()
            .await
            .map_err(TodoApiError::transport)?;
        decode(response).await
    }

    async fn create_todo(&self, description: String) -> TodoApiResult<Todo> {
        let response = self
            .http
            .post(self.url("/api/todos"))
            .json(&json!({ "description": description }))
            .send()
            .await
            .map_err(TodoApiError::transport)?;
        decode(response).await
    }

    async fn update_todo_completion(&self, id: TodoId, completed: bool) -> TodoApiResult<Todo> {
        let response = self
            .http
            .patch(self.url(&format!("/api/todos/{id}/completion")))
            .json(&json!({ "completed": completed }))
            .send()
            .await
            .map_err(TodoApiError::transport)?;
        decode(response).await
    }

    async fn delete_todo(&self, id: TodoId) -> TodoApiResult<DeleteOutcome> {
        let response = self
            .http
            .delete(self.url(&format!("/api/todos/{id}")))
            .send()
            .await
            .map_err(TodoApiError::transport)?;
        decode(response).await
    }
}

/// Turns a response into the expected payload, or into a rejection carrying
/// the server's `{ "error": message }` body when the status is non-success.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> TodoApiResult<T> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(TodoApiError::transport);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };
    Err(TodoApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}
