//! The todo list view-model: single owner of the screen's UI state.
//!
//! # Design
//! `TodoListView` holds the todo collection and the two text-input buffers
//! the host's title/description fields mirror. Each operation is a
//! `begin_*` / `apply_*` pair around a network exchange the host executes:
//! `begin_*` builds the request from current state, `apply_*` consumes the
//! response and is the only place state mutates, and only on success, so
//! a failed exchange leaves the view exactly as it was before the call.
//!
//! Exchanges are intentionally uncoordinated. The view tracks no in-flight
//! state, any number of begin/apply pairs may overlap, and for loads the
//! last response applied wins the collection. Nothing is cancelled when the
//! host tears the screen down.

use crate::api::TodoApi;
use crate::error::ViewError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo};

/// UI state and operations for the single to-do list screen.
#[derive(Debug, Clone)]
pub struct TodoListView {
    api: TodoApi,
    todos: Vec<Todo>,
    title: String,
    description: String,
}

impl TodoListView {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: TodoApi::new(base_url),
            todos: Vec::new(),
            title: String::new(),
            description: String::new(),
        }
    }

    /// The collection in render order: server order after a load, append
    /// order for records added since.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the title buffer, mirroring the host's text input.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Replace the description buffer, mirroring the host's text input.
    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    /// Start loading the full collection.
    pub fn begin_load(&self) -> HttpRequest {
        self.api.build_list_todos()
    }

    /// Apply the response to a load. On success the collection is replaced
    /// wholesale with the returned records; on failure it is untouched.
    pub fn apply_load(&mut self, response: HttpResponse) -> Result<(), ViewError> {
        match self.api.parse_list_todos(response) {
            Ok(todos) => {
                self.todos = todos;
                Ok(())
            }
            Err(err) => {
                tracing::error!("loading todos failed: {err}");
                Err(ViewError::LoadFailed(err))
            }
        }
    }

    /// Start creating a todo from the current input buffers.
    ///
    /// An empty title fails immediately with `ViewError::EmptyTitle` and no
    /// request is built. The check is presence only; whitespace passes.
    pub fn begin_add(&self) -> Result<HttpRequest, ViewError> {
        if self.title.is_empty() {
            tracing::warn!("add attempted with empty title");
            return Err(ViewError::EmptyTitle);
        }
        let input = NewTodo {
            title: self.title.clone(),
            description: self.description.clone(),
        };
        self.api.build_create_todo(&input).map_err(ViewError::AddFailed)
    }

    /// Apply the response to an add. On success the server-returned record
    /// (carrying the assigned id) is appended and both input buffers are
    /// cleared; on failure collection and buffers are untouched, so the
    /// user's input survives for a retry.
    pub fn apply_add(&mut self, response: HttpResponse) -> Result<(), ViewError> {
        match self.api.parse_create_todo(response) {
            Ok(todo) => {
                self.todos.push(todo);
                self.title.clear();
                self.description.clear();
                Ok(())
            }
            Err(err) => {
                tracing::error!("adding todo failed: {err}");
                Err(ViewError::AddFailed(err))
            }
        }
    }

    /// Start deleting the record with the given id.
    pub fn begin_delete(&self, id: i64) -> HttpRequest {
        self.api.build_delete_todo(id)
    }

    /// Apply the response to a delete. On success the matching record is
    /// removed from the collection (a no-op if no record has that id);
    /// on failure the collection is untouched. Nothing was optimistically
    /// removed, so there is no rollback.
    pub fn apply_delete(&mut self, id: i64, response: HttpResponse) -> Result<(), ViewError> {
        match self.api.parse_delete_todo(response) {
            Ok(()) => {
                self.todos.retain(|todo| todo.id != id);
                Ok(())
            }
            Err(err) => {
                tracing::error!("deleting todo {id} failed: {err}");
                Err(ViewError::DeleteFailed(err))
            }
        }
    }
}
