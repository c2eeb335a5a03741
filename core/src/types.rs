//! Wire types for the todo API.
//!
//! Defined independently of the server crate; the integration test catches any
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// `message` of the 400 sent for an unknown id.
pub const NOT_FOUND_MESSAGE: &str = "todo not found";

/// A single todo record. Also the request body for create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub item: String,
    pub completed: bool,
}

/// Body of every 400 response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}
