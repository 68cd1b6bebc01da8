//! Ticketmaster event details tool.
//!
//! Looks up a single event by id and renders the full event block.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::client::{Endpoint, EventsApi};
use super::common::{error_result, require_input, success_result};
use super::event::Event;
use super::format::format_event;
use super::params::SearchParams;

/// Parameters shared by the single-event tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TmEventIdParams {
    /// Ticketmaster event id.
    #[schemars(description = "Ticketmaster event ID")]
    pub event_id: String,
}

/// Fetch one event by id.
///
/// Shared with the availability tool. Blank ids are rejected before any
/// request is made.
pub(super) async fn fetch_event(
    params: &TmEventIdParams,
    api: &dyn EventsApi,
) -> Result<Event, CallToolResult> {
    let event_id = require_input("event_id", &params.event_id).map_err(error_result)?;
    info!("Fetching event: {}", event_id);

    let payload = api
        .fetch(&Endpoint::EventDetail(event_id.to_string()), &SearchParams::new())
        .await
        .map_err(error_result)?;

    Ok(Event::from_json(&payload).unwrap_or_default())
}

/// Ticketmaster Event Details Tool implementation.
#[derive(Debug, Clone)]
pub struct TmEventDetailsTool;

impl TmEventDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_event_details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a specific event by its Ticketmaster event ID: date, venue, genre, price range, ticket status and ticket link.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(event_id = %params.event_id))]
    pub async fn execute(params: &TmEventIdParams, api: &dyn EventsApi) -> CallToolResult {
        match fetch_event(params, api).await {
            Ok(event) => success_result(format_event(&event)),
            Err(result) => result,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TmEventIdParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the MCP router.
    pub fn create_route<S>(api: Arc<dyn EventsApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            async move {
                let params: TmEventIdParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
