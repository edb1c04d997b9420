//! Error types for to-do domain validation.

use thiserror::Error;

/// Errors returned while constructing domain to-do values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The description is empty or whitespace-only after trimming.
    #[error("todo description must not be empty")]
    EmptyDescription,
}
