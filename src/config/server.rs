//! Server configuration module.
//!
//! This module defines configuration related to the transport: where to
//! listen, how many runtime workers to start, message size limits and the
//! HTTP routes.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Default port, used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Name of the server (used in logs)
    pub name: String,

    /// Address to bind the HTTP listener to
    pub address: SocketAddr,

    /// Number of runtime worker threads
    pub worker_threads: usize,

    /// Maximum request message size in bytes
    pub max_message_size: usize,

    /// Route accepting one request per HTTP POST
    pub once_path: String,

    /// Route upgrading to a WebSocket session
    pub websocket_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "lanai".to_string(),
            address: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            worker_threads: num_cpus::get(),
            max_message_size: 64 * 1024, // 64 KiB
            once_path: "/once".to_string(),
            websocket_path: "/ws".to_string(),
        }
    }
}

impl ServerConfig {
    /// Returns a copy listening on `port` instead of the configured one.
    pub fn with_port(mut self, port: u16) -> Self {
        self.address.set_port(port);
        self
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        if self.max_message_size == 0 {
            return Err(ConfigError::ValidationError(
                "max_message_size must be greater than 0".to_string(),
            ));
        }

        for (key, path) in [
            ("once_path", &self.once_path),
            ("websocket_path", &self.websocket_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must start with '/', got {path:?}"
                )));
            }
        }

        if self.once_path == self.websocket_path {
            return Err(ConfigError::ValidationError(
                "once_path and websocket_path must differ".to_string(),
            ));
        }

        Ok(())
    }
}
