//! Server configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TODO_SERVER_HOST` | `127.0.0.1` | bind address |
//! | `TODO_SERVER_PORT` | `9090` | bind port |
//! | `TODO_SERVER_SEED` | `true` | start with the three default todos |

use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9090;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("TODO_SERVER_HOST").unwrap_or(defaults.host);

        let port = match lookup("TODO_SERVER_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "TODO_SERVER_PORT",
                value,
            })?,
            None => defaults.port,
        };

        let seed = match lookup("TODO_SERVER_SEED") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                key: "TODO_SERVER_SEED",
                value,
            })?,
            None => defaults.seed,
        };

        Ok(Self { host, port, seed })
    }

    /// `host:port`, suitable for `TcpListener::bind`. Hostnames are resolved
    /// at bind time.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
