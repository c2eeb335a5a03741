//! HTTP service exposing list, fetch, create, and toggle over an in-memory
//! collection of todos.
//!
//! # Routes
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/todos` | [`handlers::list_todos`] |
//! | POST | `/todos` | [`handlers::create_todo`] |
//! | GET | `/todos/{id}` | [`handlers::get_todo`] |
//! | PATCH | `/todos/{id}` | [`handlers::toggle_todo`] |
//!
//! All bodies are four-space indented JSON. Client errors (unknown id, bad id,
//! bad body) are `400` with a `{"message": ...}` body, see [`error::ApiError`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use store::{seed_todos, Todo, TodoStore};

/// Router over a freshly seeded store.
pub fn app() -> Router {
    router(Arc::new(TodoStore::seeded()))
}

/// Router over the given store. Tests pass their own instance to observe or
/// preload state.
pub fn router(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo).patch(handlers::toggle_todo),
        )
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `router` on `listener` until `shutdown` resolves, then drain
/// in-flight requests.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
