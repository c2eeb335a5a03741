//! In-memory record store for todos.
//!
//! # Design
//! `TodoStore` owns the ordered sequence of records behind a
//! `tokio::sync::RwLock`. Reads take the read lock; create and toggle take the
//! write lock, so a toggle's find-and-flip is a single critical section.
//! Lookup is a linear scan by `id` and the first match in insertion order
//! wins, which matters because ids are never checked for uniqueness.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub item: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: i64, item: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            item: item.into(),
            completed,
        }
    }
}

/// The three records a fresh server starts with.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Clean room", false),
        Todo::new(2, "Pet dog", false),
        Todo::new(3, "Murder neighbor", false),
    ]
}

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: RwLock::new(todos),
        }
    }

    /// Store pre-populated with [`seed_todos`].
    pub fn seeded() -> Self {
        Self::new(seed_todos())
    }

    /// Seeded or empty, as `config.seed` says.
    pub fn from_config(config: &ServerConfig) -> Self {
        if config.seed {
            Self::seeded()
        } else {
            Self::default()
        }
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    pub async fn get(&self, id: i64) -> Option<Todo> {
        let todos = self.todos.read().await;
        todos.iter().find(|todo| todo.id == id).cloned()
    }

    /// Append `todo` to the end of the collection and return it.
    pub async fn create(&self, todo: Todo) -> Todo {
        self.todos.write().await.push(todo.clone());
        todo
    }

    /// Flip `completed` on the first record with `id`, returning the updated
    /// record.
    pub async fn toggle(&self, id: i64) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.iter_mut().find(|todo| todo.id == id)?;
        todo.completed = !todo.completed;
        Some(todo.clone())
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}
