//! Application services for to-do lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{DeleteOutcome, TodoService, TodoServiceError, TodoServiceResult};
