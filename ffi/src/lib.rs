//! C-ABI wrapper around `todoapp-core`.
//!
//! # Overview
//! Exposes `TodoListView` through `extern "C"` functions so the mobile host
//! can own the screen's state machine without linking serde or any Rust
//! async machinery. The host renders from `todo_view_todos` snapshots,
//! mirrors its text inputs through the buffer setters, executes the HTTP
//! requests the view builds, and feeds the responses back.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `begin_*` / `apply_*` mirrors the core API 1:1.
//!   `begin_add` returns the result envelope rather than a bare request
//!   pointer because validation can fail locally, and the host needs the
//!   alert copy in that case.
//! - A single `FfiViewResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The host owns all returned pointers and must call the matching
//!   `todo_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use todoapp_core::http::HttpResponse;
use todoapp_core::TodoListView;

use types::*;

// ---------------------------------------------------------------------------
// View lifecycle
// ---------------------------------------------------------------------------

/// Create a new `TodoListView` talking to the API at `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The host must free the returned pointer with `todo_view_free`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_new(base_url: *const c_char) -> *mut FfiTodoView {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        Box::into_raw(Box::new(FfiTodoView {
            inner: TodoListView::new(url),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a view created by `todo_view_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_free(view: *mut FfiTodoView) {
    if !view.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(view) });
        });
    }
}

// ---------------------------------------------------------------------------
// Input buffers
// ---------------------------------------------------------------------------

/// Replace the title buffer, mirroring the host's text input.
/// Ignored if `view` or `title` is null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_set_title(view: *mut FfiTodoView, title: *const c_char) {
    if view.is_null() || title.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let view = unsafe { &mut *view };
        let title = unsafe { CStr::from_ptr(title) }.to_str().unwrap_or("");
        view.inner.set_title(title);
    });
}

/// Replace the description buffer, mirroring the host's text input.
/// Ignored if `view` or `description` is null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_set_description(view: *mut FfiTodoView, description: *const c_char) {
    if view.is_null() || description.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let view = unsafe { &mut *view };
        let description = unsafe { CStr::from_ptr(description) }.to_str().unwrap_or("");
        view.inner.set_description(description);
    });
}

/// Current title buffer, so the host can sync its text input after a
/// successful add clears it. The host frees it with `todo_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_title(view: *const FfiTodoView) -> *mut c_char {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        let view = unsafe { &*view };
        CString::new(view.inner.title()).unwrap_or_default().into_raw()
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Current description buffer. The host frees it with `todo_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_description(view: *const FfiTodoView) -> *mut c_char {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        let view = unsafe { &*view };
        CString::new(view.inner.description()).unwrap_or_default().into_raw()
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Render snapshot
// ---------------------------------------------------------------------------

/// Snapshot of the collection in render order.
///
/// Returns null if `view` is null. The host frees the snapshot with
/// `todo_free_todo_list`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_todos(view: *const FfiTodoView) -> *mut FfiTodoList {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        let view = unsafe { &*view };
        FfiTodoList::from_core(view.inner.todos())
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Build the HTTP request that loads the full collection.
///
/// Returns null if `view` is null. The host frees the request with
/// `todo_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_begin_load(view: *const FfiTodoView) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        let view = unsafe { &*view };
        FfiHttpRequest::from_core(view.inner.begin_load())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Apply the response to a load. On success the collection is replaced
/// wholesale; on failure it is untouched and the result carries the alert.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_apply_load(
    view: *mut FfiTodoView,
    response: *const FfiHttpResponse,
) -> *mut FfiViewResult {
    catch_unwind(|| {
        if view.is_null() {
            return FfiViewResult::null_arg("view");
        }
        if response.is_null() {
            return FfiViewResult::null_arg("response");
        }
        let view = unsafe { &mut *view };
        let resp = ffi_response_to_core(unsafe { &*response });
        match view.inner.apply_load(resp) {
            Ok(()) => FfiViewResult::ok_empty(),
            Err(e) => FfiViewResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiViewResult::panic("panic in todo_view_apply_load"))
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

/// Build the HTTP request that creates a todo from the current buffers.
///
/// Returns a result envelope: `data_tag = Request` on success, or
/// `EmptyTitle` with the validation alert when the title buffer is empty
/// (in which case no request exists and nothing must be sent).
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_begin_add(view: *const FfiTodoView) -> *mut FfiViewResult {
    catch_unwind(|| {
        if view.is_null() {
            return FfiViewResult::null_arg("view");
        }
        let view = unsafe { &*view };
        match view.inner.begin_add() {
            Ok(req) => FfiViewResult::ok_request(req),
            Err(e) => FfiViewResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiViewResult::panic("panic in todo_view_begin_add"))
}

/// Apply the response to an add. On success the server-returned record is
/// appended and both buffers are cleared; on failure collection and buffers
/// are untouched so the user's input survives for a retry.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_apply_add(
    view: *mut FfiTodoView,
    response: *const FfiHttpResponse,
) -> *mut FfiViewResult {
    catch_unwind(|| {
        if view.is_null() {
            return FfiViewResult::null_arg("view");
        }
        if response.is_null() {
            return FfiViewResult::null_arg("response");
        }
        let view = unsafe { &mut *view };
        let resp = ffi_response_to_core(unsafe { &*response });
        match view.inner.apply_add(resp) {
            Ok(()) => FfiViewResult::ok_empty(),
            Err(e) => FfiViewResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiViewResult::panic("panic in todo_view_apply_add"))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Build the HTTP request that deletes the record with the given id.
///
/// Returns null if `view` is null. The host frees the request with
/// `todo_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_begin_delete(view: *const FfiTodoView, id: i64) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if view.is_null() {
            return std::ptr::null_mut();
        }
        let view = unsafe { &*view };
        FfiHttpRequest::from_core(view.inner.begin_delete(id))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Apply the response to a delete. On success the matching record is
/// removed (a no-op if absent); on failure the collection is untouched.
#[unsafe(no_mangle)]
pub extern "C" fn todo_view_apply_delete(
    view: *mut FfiTodoView,
    id: i64,
    response: *const FfiHttpResponse,
) -> *mut FfiViewResult {
    catch_unwind(|| {
        if view.is_null() {
            return FfiViewResult::null_arg("view");
        }
        if response.is_null() {
            return FfiViewResult::null_arg("response");
        }
        let view = unsafe { &mut *view };
        let resp = ffi_response_to_core(unsafe { &*response });
        match view.inner.apply_delete(id, resp) {
            Ok(()) => FfiViewResult::ok_empty(),
            Err(e) => FfiViewResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiViewResult::panic("panic in todo_view_apply_delete"))
}

/// Convert a host-provided `FfiHttpResponse` to a core `HttpResponse`.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_str()
            .unwrap_or("")
            .to_string()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by a `todo_view_begin_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        req.free_fields();
    });
}

/// Free an `FfiViewResult`. Safe to call with null. Uses `data_tag` to
/// determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_result(result: *mut FfiViewResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.alert_title.is_null() {
            drop(unsafe { CString::from_raw(result.alert_title) });
        }
        if !result.alert_message.is_null() {
            drop(unsafe { CString::from_raw(result.alert_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::Request => {
                    let req = unsafe { Box::from_raw(result.data as *mut FfiHttpRequest) };
                    req.free_fields();
                }
                FfiDataTag::None => {}
            }
        }
    });
}

/// Free an `FfiTodoList` returned by `todo_view_todos`. Safe to call with
/// null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_todo_list(list: *mut FfiTodoList) {
    if list.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let list = unsafe { Box::from_raw(list) };
        if !list.items.is_null() && list.len > 0 {
            let items = unsafe {
                Vec::from_raw_parts(list.items, list.len as usize, list.len as usize)
            };
            for item in &items {
                item.free_fields();
            }
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
