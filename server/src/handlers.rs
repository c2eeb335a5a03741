use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::{
    error::ApiError,
    response::PrettyJson,
    store::{Todo, TodoStore},
};

pub type SharedStore = Arc<TodoStore>;

/// Parse the raw `{id}` segment. Anything that is not an `i64` is rejected
/// instead of being treated as id 0.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

pub async fn list_todos(State(store): State<SharedStore>) -> PrettyJson<Vec<Todo>> {
    PrettyJson(store.list().await)
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<PrettyJson<Todo>, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;
    store.get(id).await.map(PrettyJson).ok_or(ApiError::NotFound)
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<Todo>, JsonRejection>,
) -> Result<PrettyJson<Todo>, ApiError> {
    let Json(todo) = payload?;
    tracing::debug!(id = todo.id, item = %todo.item, "creating todo");
    Ok(PrettyJson(store.create(todo).await))
}

pub async fn toggle_todo(
    State(store): State<SharedStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<PrettyJson<Todo>, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;
    let todo = store.toggle(id).await.ok_or(ApiError::NotFound)?;
    tracing::debug!(id, completed = todo.completed, "toggled todo");
    Ok(PrettyJson(todo))
}
