//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; every route shares the same
//! Ticketmaster gateway.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::tm::EventsApi;
use super::definitions::{
    TmArtistTool, TmEventDetailsTool, TmGenreTool, TmLocationTool, TmTicketAvailabilityTool,
    TmVenueTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<dyn EventsApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(TmArtistTool::create_route(api.clone()))
        .with_route(TmVenueTool::create_route(api.clone()))
        .with_route(TmLocationTool::create_route(api.clone()))
        .with_route(TmGenreTool::create_route(api.clone()))
        .with_route(TmEventDetailsTool::create_route(api.clone()))
        .with_route(TmTicketAvailabilityTool::create_route(api))
}
