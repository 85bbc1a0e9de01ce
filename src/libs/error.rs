//! Error taxonomy for the request-to-persistence layer.
//!
//! Every failure a handler can hit is one [`TaskError`] variant, and each
//! variant maps to exactly one HTTP status:
//!
//! | Variant      | Status | Cause                                   |
//! |--------------|--------|-----------------------------------------|
//! | `Validation` | 400    | blank task text, non-integer id         |
//! | `NotFound`   | 404    | no row for the id on fetch or update    |
//! | `Store`      | 500    | SQLite connectivity or statement errors |
//! | `Render`     | 500    | template lookup or substitution failure |
//! | `Background` | 500    | the blocking store task panicked        |
//!
//! The response body is the error's `Display` text as `text/plain`. Nothing
//! else crosses the HTTP boundary.

use super::messages::Message;
use super::view::RenderError;
use crate::{msg_debug, msg_error};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),

    #[error("Task with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Template error: {0}")]
    Render(#[from] RenderError),

    #[error("Request processing failed: {0}")]
    Background(#[from] tokio::task::JoinError),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    /// Blank or missing task text.
    pub fn text_required() -> Self {
        TaskError::Validation(Message::TaskTextRequired.to_string())
    }

    /// A path segment that is not an integer id.
    pub fn invalid_id(raw: &str) -> Self {
        TaskError::Validation(Message::InvalidTaskId(raw.to_string()).to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            TaskError::Store(_) | TaskError::Render(_) | TaskError::Background(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_string();

        if status.is_server_error() {
            msg_error!(Message::RequestFailed(status.as_u16(), body.clone()));
        } else {
            msg_debug!(Message::RequestRejected(status.as_u16(), body.clone()));
        }

        (status, body).into_response()
    }
}
