//! In-process stand-in for the todo backend, implementing the consumed
//! REST contract: list, create, delete under `/api/todos/`.
//!
//! Ids are sequential integers and the list keeps insertion order, matching
//! what the real backend hands out. `created_at` is stamped at creation and
//! treated as opaque by clients.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Insertion-ordered store with a sequential id counter.
#[derive(Default)]
pub struct Store {
    next_id: i64,
    todos: Vec<Todo>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/todos/", get(list_todos).post(create_todo))
        .route("/api/todos/{id}/", delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.todos.clone())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<NewTodo>) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        title: input.title,
        description: input.description,
        completed: false,
        created_at: Utc::now().to_rfc3339(),
    };
    store.todos.push(todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|todo| todo.id != id);
    if store.todos.len() == before {
        StatusCode::NOT_FOUND
    } else {
        tracing::debug!(id, "deleted todo");
        StatusCode::NO_CONTENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            description: "details".to_string(),
            completed: false,
            created_at: "2024-05-01T09:30:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "details");
        assert_eq!(json["completed"], false);
        assert_eq!(json["created_at"], "2024-05-01T09:30:00+00:00");
    }

    #[test]
    fn new_todo_defaults_description_to_empty() {
        let input: NewTodo = serde_json::from_str(r#"{"title":"No description"}"#).unwrap();
        assert_eq!(input.title, "No description");
        assert_eq!(input.description, "");
    }

    #[test]
    fn new_todo_rejects_missing_title() {
        let result: Result<NewTodo, _> = serde_json::from_str(r#"{"description":"only"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 7,
            title: "Roundtrip".to_string(),
            description: String::new(),
            completed: true,
            created_at: "t0".to_string(),
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, todo.id);
        assert_eq!(back.title, todo.title);
        assert_eq!(back.completed, todo.completed);
    }
}
