//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/tm/` with one file per
//! tool. Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `create_route()` method (called by the router)
//!
//! The ToolRouter is built in `domains/tools/router.rs`.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::definitions::tm::{EventsApi, TicketmasterClient};
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the Ticketmaster tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry used for metadata and direct dispatch.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the real Ticketmaster API.
    ///
    /// Fails with [`Error::MissingCredential`](super::Error::MissingCredential)
    /// when no API key is configured.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let api_key = config.credentials.require_api_key()?;
        let client = TicketmasterClient::new(&config.api, api_key)?;
        info!("Ticketmaster client ready for {}", config.api.base_url);
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server on top of any [`EventsApi`] implementation.
    pub fn with_api(config: Config, api: Arc<dyn EventsApi>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(api.clone())),
            tool_router: build_tool_router::<Self>(api),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name without going through an MCP transport.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, ToolError> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Find upcoming events, venues and ticket availability through the Ticketmaster \
                 Discovery API. Search by artist, venue, location or genre, then use an event \
                 ID for details or ticket availability."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
