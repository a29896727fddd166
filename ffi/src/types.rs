//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use todoapp_core::error::{ApiError, ViewError};
use todoapp_core::http::HttpMethod;
use todoapp_core::types::Todo;
use todoapp_core::TodoListView;

/// Opaque handle to a `TodoListView`. The host receives a pointer to this
/// and passes it back into every FFI function.
pub struct FfiTodoView {
    pub(crate) inner: TodoListView,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Delete = 2,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `todo_view_begin_*` functions. The host executes the request
/// and passes the response back through the matching `todo_view_apply_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: todoapp_core::HttpRequest) -> *mut Self {
        let path = CString::new(req.path).unwrap().into_raw();
        let body = match req.body {
            Some(b) => CString::new(b).unwrap().into_raw(),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let mut ffi_headers: Vec<FfiHeader> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: CString::new(k).unwrap().into_raw(),
                    value: CString::new(v).unwrap().into_raw(),
                })
                .collect();
            let ptr = ffi_headers.as_mut_ptr();
            std::mem::forget(ffi_headers);
            ptr
        };

        let ffi_req = Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        });
        Box::into_raw(ffi_req)
    }

    /// Free the owned fields (but not the struct itself).
    pub(crate) fn free_fields(&self) {
        if !self.path.is_null() {
            drop(unsafe { CString::from_raw(self.path) });
        }
        if !self.body.is_null() {
            drop(unsafe { CString::from_raw(self.body) });
        }
        if !self.headers.is_null() && self.headers_len > 0 {
            let headers = unsafe {
                Vec::from_raw_parts(self.headers, self.headers_len as usize, self.headers_len as usize)
            };
            for h in headers {
                if !h.key.is_null() {
                    drop(unsafe { CString::from_raw(h.key) });
                }
                if !h.value.is_null() {
                    drop(unsafe { CString::from_raw(h.value) });
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Response input (host-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The host constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `todo_view_apply_*` function. The FFI layer
/// reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiViewResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    /// The title buffer was empty on add; no request was built.
    EmptyTitle = 1,
    /// The server answered with a non-2xx status.
    Http = 2,
    Deserialization = 3,
    Serialization = 4,
    Panic = 5,
    NullArg = 6,
}

/// Tag that tells `todo_free_result` what `FfiViewResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Request = 1,
}

/// A single todo record exposed to C.
#[repr(C)]
pub struct FfiTodo {
    pub id: i64,
    pub title: *mut c_char,
    pub description: *mut c_char,
    pub completed: bool,
    pub created_at: *mut c_char,
}

impl FfiTodo {
    pub(crate) fn from_core(todo: &Todo) -> Self {
        FfiTodo {
            id: todo.id,
            title: CString::new(todo.title.clone()).unwrap_or_default().into_raw(),
            description: CString::new(todo.description.clone()).unwrap_or_default().into_raw(),
            completed: todo.completed,
            created_at: CString::new(todo.created_at.clone()).unwrap_or_default().into_raw(),
        }
    }

    /// Free the C-string fields (but not the struct itself).
    pub(crate) fn free_fields(&self) {
        if !self.title.is_null() {
            drop(unsafe { CString::from_raw(self.title) });
        }
        if !self.description.is_null() {
            drop(unsafe { CString::from_raw(self.description) });
        }
        if !self.created_at.is_null() {
            drop(unsafe { CString::from_raw(self.created_at) });
        }
    }
}

/// The render snapshot: the view's collection exposed to C.
#[repr(C)]
pub struct FfiTodoList {
    pub items: *mut FfiTodo,
    pub len: u32,
}

impl FfiTodoList {
    pub(crate) fn from_core(todos: &[Todo]) -> *mut Self {
        let len = todos.len() as u32;
        let mut items_vec: Vec<FfiTodo> = todos.iter().map(FfiTodo::from_core).collect();

        let items = if items_vec.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = items_vec.as_mut_ptr();
            std::mem::forget(items_vec);
            ptr
        };

        Box::into_raw(Box::new(FfiTodoList { items, len }))
    }
}

/// Result envelope for view operations.
///
/// On success `error_code` is `Ok`, the alert fields are null, and `data`
/// (tagged by `data_tag`) carries the payload when the operation produces
/// one. On failure `error_code` describes the category, `error_message` is
/// a diagnostic string, and `alert_title` / `alert_message` carry the
/// notification copy for the host to display verbatim.
#[repr(C)]
pub struct FfiViewResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub alert_title: *mut c_char,
    pub alert_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiViewResult {
    /// Build a success result with no data payload.
    pub(crate) fn ok_empty() -> *mut Self {
        let result = Box::new(FfiViewResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            alert_title: std::ptr::null_mut(),
            alert_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying a built `FfiHttpRequest`.
    pub(crate) fn ok_request(req: todoapp_core::HttpRequest) -> *mut Self {
        let result = Box::new(FfiViewResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            alert_title: std::ptr::null_mut(),
            alert_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::Request,
            data: FfiHttpRequest::from_core(req) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build an error result from a `ViewError`, carrying the notification
    /// copy alongside the diagnostic message.
    pub(crate) fn from_error(err: ViewError) -> *mut Self {
        let (error_code, http_status) = match &err {
            ViewError::EmptyTitle => (FfiErrorCode::EmptyTitle, 0u16),
            ViewError::LoadFailed(api)
            | ViewError::AddFailed(api)
            | ViewError::DeleteFailed(api) => match api {
                ApiError::Http { status, .. } => (FfiErrorCode::Http, *status),
                ApiError::Deserialization(_) => (FfiErrorCode::Deserialization, 0),
                ApiError::Serialization(_) => (FfiErrorCode::Serialization, 0),
            },
        };
        let alert = err.alert();

        let result = Box::new(FfiViewResult {
            error_code,
            error_message: CString::new(err.to_string()).unwrap_or_default().into_raw(),
            alert_title: CString::new(alert.title).unwrap_or_default().into_raw(),
            alert_message: CString::new(alert.message).unwrap_or_default().into_raw(),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        let msg = format!("null argument: {name}");
        let result = Box::new(FfiViewResult {
            error_code: FfiErrorCode::NullArg,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            alert_title: std::ptr::null_mut(),
            alert_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiViewResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            alert_title: std::ptr::null_mut(),
            alert_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
