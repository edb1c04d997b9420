//! Client view for the to-do API.
//!
//! The view holds a transient, display-only mirror of the server's to-do
//! collection. It reconciles that mirror strictly from the payloads the
//! server returns — append on create, replace-by-id on toggle, remove-by-id
//! on delete — and leaves it untouched when a call fails. The remote API is
//! reached through the [`TodoApi`] port; [`HttpTodoApi`] is its HTTP
//! implementation.

mod http;
mod remote;
mod view;

pub use http::HttpTodoApi;
pub use remote::{TodoApi, TodoApiError, TodoApiResult};
pub use view::TodoListView;

#[cfg(test)]
mod tests;
