//! Domain DTOs for the todo collection resource.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch any drift between the
//! two. `id`, `completed` and `created_at` are server-assigned and never
//! sent on create, which is why the creation payload is a separate type.

use serde::{Deserialize, Serialize};

/// A single todo record returned by the API.
///
/// `created_at` is an opaque server-assigned timestamp, kept as a string
/// for display only. Records are never edited in place: a todo is created,
/// listed, and eventually deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    pub created_at: String,
}

/// Request payload for creating a new todo. The server assigns `id`,
/// `completed` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
