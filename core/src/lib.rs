//! Synchronous, I/O-free client core for the todo service.
//!
//! # Design
//! - `TodoClient` holds only `base_url`.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ErrorBody, Todo, NOT_FOUND_MESSAGE};
