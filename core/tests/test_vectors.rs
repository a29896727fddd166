//! Verify build/parse methods against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated
//! responses, and expected parse results. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use todoapp_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, NewTodo, Todo, TodoApi};

const BASE_URL: &str = "http://localhost:8000";

fn api() -> TodoApi {
    TodoApi::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Check the built request against the vector's `expected_request`, with
/// the body (when present) compared as parsed JSON.
fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    if expected["body"].is_null() {
        assert!(req.body.is_none(), "{name}: body expected absent");
    } else {
        let req_body: serde_json::Value =
            serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected["body"], "{name}: body");
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check a parse error against the vector's `expected_error`.
fn assert_error(name: &str, err: ApiError, expected: &serde_json::Value) {
    match expected["kind"].as_str().unwrap() {
        "http" => {
            let expected_status = expected["status"].as_u64().unwrap() as u16;
            assert!(
                matches!(err, ApiError::Http { status, .. } if status == expected_status),
                "{name}: expected HTTP {expected_status}, got {err}"
            );
        }
        "deserialization" => {
            assert!(
                matches!(err, ApiError::Deserialization(_)),
                "{name}: expected deserialization error, got {err}"
            );
        }
        other => panic!("{name}: unknown error kind: {other}"),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let a = api();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = a.build_list_todos();
        assert_request(name, &req, &case["expected_request"]);

        let result = a.parse_list_todos(simulated_response(case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected),
            None => {
                let todos = result.unwrap();
                let expected: Vec<Todo> =
                    serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(todos, expected, "{name}: parsed result");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let a = api();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: NewTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = a.build_create_todo(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = a.parse_create_todo(simulated_response(case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected),
            None => {
                let todo = result.unwrap();
                let expected: Todo =
                    serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(todo, expected, "{name}: parsed result");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let a = api();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["id"].as_i64().unwrap();

        let req = a.build_delete_todo(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = a.parse_delete_todo(simulated_response(case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected),
            None => result.unwrap(),
        }
    }
}
