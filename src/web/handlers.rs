//! One handler per endpoint.
//!
//! Each handler decodes its input, validates it, runs one gateway operation
//! (or a write followed by a full re-read) and renders the result. Store work
//! runs on tokio's blocking pool because `rusqlite` is synchronous.
//!
//! After any write the whole list is re-read and re-rendered.

use super::AppState;
use crate::db::tasks::Tasks;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::messages::Message;
use crate::libs::task::{normalize_text, parse_done, Task};
use crate::libs::view::{ViewData, ADD_TASK_FORM, HOME, TASK_LIST, UPDATE_TASK_FORM};
use crate::msg_debug;
use axum::extract::{FromRequest, Path, Request, State};
use axum::response::Html;
use axum::Form;
use std::convert::Infallible;

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
///
/// Absent fields decode as empty strings and a repeated field keeps its first
/// value. A body that is missing or not form-encoded decodes as an empty form,
/// so every bad body ends in the same validation error as a blank `task`.
#[derive(Debug, Default)]
pub struct TaskForm {
    pub task: String,
    pub done: String,
}

impl TaskForm {
    /// Builds the form from decoded `key=value` pairs.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        TaskForm {
            task: first("task"),
            done: first("done"),
        }
    }
}

impl<S> FromRequest<S> for TaskForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => pairs,
            Err(rejection) => {
                msg_debug!(Message::FormBodyIgnored(rejection.body_text()));
                Vec::new()
            }
        };
        Ok(TaskForm::from_pairs(&pairs))
    }
}

/// `GET /`
pub async fn show_home(State(state): State<AppState>) -> TaskResult<Html<String>> {
    Ok(Html(state.view.render(HOME, ViewData::Empty)?))
}

/// `GET /tasks`
pub async fn list_tasks(State(state): State<AppState>) -> TaskResult<Html<String>> {
    let tasks = with_store(&state, |store| store.list_all()).await?;
    render_list(&state, &tasks)
}

/// `GET /getnewtaskform`
pub async fn show_create_form(State(state): State<AppState>) -> TaskResult<Html<String>> {
    Ok(Html(state.view.render(ADD_TASK_FORM, ViewData::Empty)?))
}

/// `POST /tasks`
pub async fn create_task(State(state): State<AppState>, form: TaskForm) -> TaskResult<Html<String>> {
    let text = normalize_text(&form.task).ok_or_else(TaskError::text_required)?;

    let tasks = with_store(&state, move |store| {
        let id = store.create(&text)?;
        msg_debug!(Message::TaskCreated(id));
        store.list_all()
    })
    .await?;

    render_list(&state, &tasks)
}

/// `GET /gettaskupdateform/{id}`
pub async fn show_update_form(State(state): State<AppState>, Path(raw_id): Path<String>) -> TaskResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let task = with_store(&state, move |store| store.fetch_by_id(id)).await?;
    Ok(Html(state.view.render(UPDATE_TASK_FORM, ViewData::Task(&task))?))
}

/// `PUT /tasks/{id}`
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: TaskForm,
) -> TaskResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let text = normalize_text(&form.task).ok_or_else(TaskError::text_required)?;
    let done = parse_done(&form.done);

    let tasks = with_store(&state, move |store| {
        store.update(id, &text, done)?;
        msg_debug!(Message::TaskUpdated(id));
        store.list_all()
    })
    .await?;

    render_list(&state, &tasks)
}

/// `DELETE /tasks/{id}`
pub async fn delete_task(State(state): State<AppState>, Path(raw_id): Path<String>) -> TaskResult<Html<String>> {
    let id = parse_id(&raw_id)?;

    let tasks = with_store(&state, move |store| {
        let affected = store.delete(id)?;
        msg_debug!(Message::TaskDeleted(id, affected));
        store.list_all()
    })
    .await?;

    render_list(&state, &tasks)
}

/// Parses a path segment as a task id.
pub fn parse_id(raw: &str) -> TaskResult<i64> {
    raw.trim().parse().map_err(|_| TaskError::invalid_id(raw))
}

fn render_list(state: &AppState, tasks: &[Task]) -> TaskResult<Html<String>> {
    Ok(Html(state.view.render(TASK_LIST, ViewData::Tasks(tasks))?))
}

/// Runs `op` against the gateway on the blocking pool.
async fn with_store<T, F>(state: &AppState, op: F) -> TaskResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Tasks) -> TaskResult<T> + Send + 'static,
{
    let store = state.tasks.clone();
    tokio::task::spawn_blocking(move || op(&store)).await?
}
