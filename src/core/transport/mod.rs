//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output only; it never opens a
//! network listener of its own. The transport handles the connection
//! lifecycle and delegates message processing to the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(not(feature = "stdio"))]
compile_error!("The `stdio` transport feature must be enabled");

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
