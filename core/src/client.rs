//! Stateless HTTP request builder and response parser for the todo API.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorBody, Todo, NOT_FOUND_MESSAGE};

/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller executes the round-trip between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        bare(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        bare(HttpMethod::Get, format!("{}/todos/{id}", self.base_url))
    }

    pub fn build_create_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(todo).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_toggle_todo(&self, id: i64) -> HttpRequest {
        bare(HttpMethod::Patch, format!("{}/todos/{id}", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_ok(response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }

    pub fn parse_toggle_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_ok(response)
    }
}

fn bare(method: HttpMethod, path: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    Ok(serde_json::from_str(&response.body)?)
}

/// Map anything but 200 to an `ApiError`. A 400 whose body is not a
/// `{"message": ...}` object is reported as a plain `HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => match serde_json::from_str::<ErrorBody>(&response.body) {
            Ok(err) if err.message == NOT_FOUND_MESSAGE => Err(ApiError::NotFound),
            Ok(err) => Err(ApiError::BadRequest(err.message)),
            Err(_) => Err(http_error(response)),
        },
        _ => Err(http_error(response)),
    }
}

fn http_error(response: &HttpResponse) -> ApiError {
    ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    }
}
