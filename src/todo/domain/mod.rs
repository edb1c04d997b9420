//! Domain model for the to-do lifecycle.
//!
//! The domain models a single entity: a short text to-do item with a
//! store-assigned identifier, a completion flag, and an immutable creation
//! timestamp. All infrastructure concerns stay outside the domain boundary.

mod error;
mod ids;
mod todo;

pub use error::TodoDomainError;
pub use ids::{Description, TodoId};
pub use todo::{PersistedTodoData, Todo};
