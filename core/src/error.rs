//! Error types for the todo view core.
//!
//! # Design
//! Two layers mirror the two failure kinds the screen distinguishes.
//! `ApiError` is the transport layer: any non-2xx status lands in `Http`
//! with the raw status and body for diagnostics; status codes are not
//! interpreted further, and no structured error body is parsed. `ViewError`
//! adds the single local validation failure and records which operation a
//! transport failure interrupted, so the matching notification copy can be
//! shown. Every failure is recoverable by user retry.

use std::fmt;

/// Errors returned by `TodoApi` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors surfaced by `TodoListView` operations.
#[derive(Debug)]
pub enum ViewError {
    /// The title buffer was empty when an add was attempted. No request is
    /// built and no state changes.
    EmptyTitle,

    /// Loading the collection failed; the collection is untouched.
    LoadFailed(ApiError),

    /// Creating a todo failed; collection and input buffers are untouched.
    AddFailed(ApiError),

    /// Deleting a todo failed; the collection is untouched.
    DeleteFailed(ApiError),
}

impl ViewError {
    /// Notification copy for the host UI to display verbatim.
    pub fn alert(&self) -> Alert {
        let (title, message) = match self {
            ViewError::EmptyTitle => {
                ("Validation Error", "Please enter a title for the to-do.")
            }
            ViewError::LoadFailed(_) => ("Error", "Unable to fetch todos from the server."),
            ViewError::AddFailed(_) => ("Error", "Unable to add todo to the server."),
            ViewError::DeleteFailed(_) => ("Error", "Unable to delete todo from the server."),
        };
        Alert {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::EmptyTitle => write!(f, "title must not be empty"),
            ViewError::LoadFailed(e) => write!(f, "loading todos failed: {e}"),
            ViewError::AddFailed(e) => write!(f, "adding todo failed: {e}"),
            ViewError::DeleteFailed(e) => write!(f, "deleting todo failed: {e}"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::EmptyTitle => None,
            ViewError::LoadFailed(e) | ViewError::AddFailed(e) | ViewError::DeleteFailed(e) => {
                Some(e)
            }
        }
    }
}

/// A user-visible notification produced by a failed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}
