//! HTTP surface of the task list.
//!
//! # Routes
//!
//! | Method | Path                       | Handler            |
//! |--------|----------------------------|--------------------|
//! | GET    | `/`                        | `show_home`        |
//! | GET    | `/tasks`                   | `list_tasks`       |
//! | POST   | `/tasks`                   | `create_task`      |
//! | GET    | `/getnewtaskform`          | `show_create_form` |
//! | GET    | `/gettaskupdateform/{id}`  | `show_update_form` |
//! | PUT    | `/tasks/{id}`              | `update_task`      |
//! | DELETE | `/tasks/{id}`              | `delete_task`      |
//!
//! Successful responses are HTML; failures are plain text with the status
//! chosen by [`TaskError`](crate::libs::error::TaskError).

pub mod handlers;

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::view::Render;
use crate::{msg_info, msg_warning};
use axum::routing::get;
use axum::Router;
use handlers::{create_task, delete_task, list_tasks, show_create_form, show_home, show_update_form, update_task};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const ROUTES: [(&str, &str); 7] = [
    ("GET", "/"),
    ("GET", "/tasks"),
    ("POST", "/tasks"),
    ("GET", "/getnewtaskform"),
    ("GET", "/gettaskupdateform/{id}"),
    ("PUT", "/tasks/{id}"),
    ("DELETE", "/tasks/{id}"),
];

/// Dependencies shared by every handler, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub tasks: Tasks,
    pub view: Arc<dyn Render>,
}

impl AppState {
    pub fn new(tasks: Tasks, view: impl Render + 'static) -> Self {
        AppState {
            tasks,
            view: Arc::new(view),
        }
    }
}

/// Builds the router with every route and the HTTP trace layer.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_home))
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/getnewtaskform", get(show_create_form))
        .route("/gettaskupdateform/{id}", get(show_update_form))
        .route("/tasks/{id}", axum::routing::put(update_task).delete(delete_task))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `state` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    for (method, path) in ROUTES {
        msg_info!(Message::ServerRoute(method.to_string(), path.to_string()));
    }

    axum::serve(listener, create_router(state)).with_graceful_shutdown(shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => msg_info!(Message::ShutdownSignalReceived),
        Err(err) => {
            msg_warning!(Message::ShutdownSignalFailed(err.to_string()));
            std::future::pending::<()>().await;
        }
    }
}
