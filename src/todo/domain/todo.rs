//! To-do aggregate root.

use super::{Description, TodoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do record.
///
/// The record exists in exactly one of two lifecycle states: *present*
/// (returned by listing, completion mutable) or *deleted* (permanently
/// absent, no tombstone). Only the completion flag changes after creation;
/// `description` and `created_at` are immutable for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    description: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted to-do record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Store-assigned identifier.
    pub id: TodoId,
    /// Persisted description text.
    pub description: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a freshly inserted to-do record.
    ///
    /// The store supplies the identifier and creation timestamp; the record
    /// starts incomplete.
    #[must_use]
    pub fn new(id: TodoId, description: Description, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            description: description.into_inner(),
            completed: false,
            created_at,
        }
    }

    /// Reconstructs a to-do record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the record is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sets the completion flag, leaving every other field untouched.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
