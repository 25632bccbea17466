//! Error types for trendboard-core
//!
//! Batch-level failures (transport, status, decode) abort a whole load.
//! Endpoint-level `success: false` replies are not errors; they surface as
//! [`crate::models::Payload::Failed`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for trendboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Fetch Errors
    // ===================
    #[error("Network error on {path}: {message}")]
    Network { path: String, message: String },

    #[error("HTTP {status} on {path}")]
    HttpStatus { path: String, status: u16 },

    #[error("Invalid JSON from {path}: {message}")]
    Decode { path: String, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Failed to access config file: {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    pub fn network(path: impl Into<String>, message: impl ToString) -> Self {
        CoreError::Network {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(path: impl Into<String>, message: impl ToString) -> Self {
        CoreError::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Endpoint path the error relates to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            CoreError::Network { path, .. }
            | CoreError::HttpStatus { path, .. }
            | CoreError::Decode { path, .. } => Some(path),
            CoreError::InvalidConfig { .. } | CoreError::ConfigIo { .. } => None,
        }
    }

    /// Short text for the dashboard error banner
    pub fn banner_message(&self) -> String {
        format!("Failed to load analytics: {}", self)
    }
}
