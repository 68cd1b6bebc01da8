//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Tool metadata for listing
//! - Direct dispatch of a tool call by name, without an MCP transport

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::ToolError;
use super::definitions::tm::{
    EventsApi, TmArtistTool, TmEventDetailsTool, TmGenreTool, TmLocationTool,
    TmTicketAvailabilityTool, TmVenueTool,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    api: Arc<dyn EventsApi>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `api`.
    pub fn new(api: Arc<dyn EventsApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            TmArtistTool::NAME,
            TmVenueTool::NAME,
            TmLocationTool::NAME,
            TmGenreTool::NAME,
            TmEventDetailsTool::NAME,
            TmTicketAvailabilityTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            TmArtistTool::to_tool(),
            TmVenueTool::to_tool(),
            TmLocationTool::to_tool(),
            TmGenreTool::to_tool(),
            TmEventDetailsTool::to_tool(),
            TmTicketAvailabilityTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let api = self.api.as_ref();
        match name {
            TmArtistTool::NAME => Ok(TmArtistTool::execute(&parse(arguments)?, api).await),
            TmVenueTool::NAME => Ok(TmVenueTool::execute(&parse(arguments)?, api).await),
            TmLocationTool::NAME => Ok(TmLocationTool::execute(&parse(arguments)?, api).await),
            TmGenreTool::NAME => Ok(TmGenreTool::execute(&parse(arguments)?, api).await),
            TmEventDetailsTool::NAME => {
                Ok(TmEventDetailsTool::execute(&parse(arguments)?, api).await)
            }
            TmTicketAvailabilityTool::NAME => {
                Ok(TmTicketAvailabilityTool::execute(&parse(arguments)?, api).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

fn parse<P: DeserializeOwned>(arguments: serde_json::Value) -> Result<P, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
