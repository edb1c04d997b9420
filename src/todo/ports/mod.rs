//! Port contracts for to-do persistence.

mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
