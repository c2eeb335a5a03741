//! Errors returned by `TodoClient` parse methods.
//!
//! The server answers every client error with 400 and a `message` body, so
//! "not found" is recognised by its message rather than by status.

use thiserror::Error;

use crate::types::NOT_FOUND_MESSAGE;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with message [`NOT_FOUND_MESSAGE`].
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// Any other 400; carries the server's message.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
