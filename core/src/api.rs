//! Stateless HTTP request builder and response parser for the todo
//! collection resource.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! the caller executes the actual round-trip in between. Success means any
//! 2xx status (the backend answers 201 on create and 204 on delete, but the
//! contract allows 200 for either), and every non-2xx status maps uniformly
//! to `ApiError::Http` without further interpretation.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo};

/// Stateless client for the todo collection resource.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/todos/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/todos/", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/todos/{id}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// The delete response body is ignored; the backend may answer 200 with
    /// a body or 204 without one.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)?;
        Ok(())
    }
}

/// Any 2xx status is success; everything else is a uniform `Http` error.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> TodoApi {
        TodoApi::new("http://localhost:8000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = api().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/todos/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = NewTodo {
            title: "Buy milk".to_string(),
            description: "2L semi-skimmed".to_string(),
        };
        let req = api().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/todos/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["description"], "2L semi-skimmed");
        // completed and created_at are server-assigned and never sent
        assert!(body.get("completed").is_none());
        assert!(body.get("created_at").is_none());
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = api().build_delete_todo(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/api/todos/42/");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = TodoApi::new("http://localhost:8000/");
        let req = api.build_list_todos();
        assert_eq!(req.path, "http://localhost:8000/api/todos/");
    }

    #[test]
    fn parse_list_todos_success() {
        let body = r#"[{"id":1,"title":"Buy milk","description":"","completed":false,"created_at":"2024-05-01T09:30:00Z"}]"#;
        let todos = api().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].title, "Buy milk");
    }

    #[test]
    fn parse_list_todos_preserves_order() {
        let body = r#"[
            {"id":3,"title":"c","description":"","completed":false,"created_at":"t"},
            {"id":1,"title":"a","description":"","completed":false,"created_at":"t"},
            {"id":2,"title":"b","description":"","completed":true,"created_at":"t"}
        ]"#;
        let todos = api().parse_list_todos(response(200, body)).unwrap();
        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn parse_list_todos_missing_description_defaults_to_empty() {
        let body = r#"[{"id":1,"title":"Buy milk","completed":false,"created_at":"t"}]"#;
        let todos = api().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos[0].description, "");
    }

    #[test]
    fn parse_list_todos_non_success_status() {
        let err = api().parse_list_todos(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = api().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_todo_accepts_201() {
        let body = r#"{"id":2,"title":"Write spec","description":"","completed":false,"created_at":"t1"}"#;
        let todo = api().parse_create_todo(response(201, body)).unwrap();
        assert_eq!(todo.id, 2);
        assert_eq!(todo.title, "Write spec");
    }

    #[test]
    fn parse_create_todo_accepts_200() {
        let body = r#"{"id":2,"title":"Write spec","description":"","completed":false,"created_at":"t1"}"#;
        assert!(api().parse_create_todo(response(200, body)).is_ok());
    }

    #[test]
    fn parse_create_todo_non_success_status() {
        let err = api().parse_create_todo(response(400, "bad request")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 400, .. }));
    }

    #[test]
    fn parse_delete_todo_accepts_204_empty_body() {
        assert!(api().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_accepts_200_and_ignores_body() {
        assert!(api().parse_delete_todo(response(200, "{\"ok\":true}")).is_ok());
    }

    #[test]
    fn parse_delete_todo_non_success_status() {
        let err = api().parse_delete_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
    }
}
