use axum::response::{IntoResponse, Response};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

pub const MAX_TITLE_LEN: usize = 100;

/// Body of a plain 404 for reads of unknown resources.
#[derive(Debug, Serialize, Deserialize)]
pub struct NotFound { pub message: String }

impl IntoResponse for NotFound {
    fn into_response(self) -> Response { (StatusCode::NOT_FOUND, axum::Json(self)).into_response() }
}

/// Returns the message to reject `title` with, if any. `kind` is "Todolist"
/// or "Task".
pub fn validate_title(title: &str, kind: &str) -> Option<String> {
    if title.trim().is_empty() {
        return Some("Title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Some(format!("{kind} title is too long"));
    }
    None
}
