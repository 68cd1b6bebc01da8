//! Ticketmaster MCP Server Library
//!
//! This crate exposes the Ticketmaster Discovery API as Model Context
//! Protocol (MCP) tools: search upcoming events by artist, venue, location or
//! genre, and look up event details and ticket availability.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and the
//!   stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The Ticketmaster tools, their API gateway and formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use ticketmaster_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
