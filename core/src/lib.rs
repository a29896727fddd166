//! View-model core for a single-screen to-do list backed by a REST API.
//!
//! # Overview
//! `TodoListView` owns the UI state of the screen: the ordered todo
//! collection and the title/description input buffers. It talks to the
//! remote collection resource through three operations (load, add, delete)
//! without ever touching the network itself (host-does-IO pattern): each
//! operation is a `begin_*` method that produces an `HttpRequest` and an
//! `apply_*` method that consumes the `HttpResponse` the host obtained.
//!
//! # Design
//! - `TodoApi` is the stateless request builder / response parser; it holds
//!   only `base_url`.
//! - `TodoListView` wraps `TodoApi` and is the single owner of mutable UI
//!   state. State changes only inside a successful `apply_*`, so a failed
//!   exchange leaves the view exactly as it was before the call.
//! - Exchanges are independent: the view tracks no in-flight state, and
//!   when responses arrive out of issue order the last one applied wins.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use error::{Alert, ApiError, ViewError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{NewTodo, Todo};
pub use view::TodoListView;
