//! Error types and handling for the MCP server.
//!
//! Startup and configuration failures live here. Failures while serving a
//! tool call never surface as this type: they are rendered into the tool's
//! text result instead.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential was not provided at startup.
    ///
    /// This is fatal: the server refuses to serve any tool without it.
    #[error("{0} not found in environment variables")]
    MissingCredential(&'static str),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
