//! Ticketmaster ticket availability tool.
//!
//! Reports only sale status, price and ticket link for one event.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::instrument;

use super::client::EventsApi;
use super::common::success_result;
use super::details::{TmEventIdParams, fetch_event};
use super::format::format_availability;

/// Ticketmaster Ticket Availability Tool implementation.
#[derive(Debug, Clone)]
pub struct TmTicketAvailabilityTool;

impl TmTicketAvailabilityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "check_ticket_availability";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check ticket availability for a specific event by its Ticketmaster event ID: sale status, price range and ticket link.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(event_id = %params.event_id))]
    pub async fn execute(params: &TmEventIdParams, api: &dyn EventsApi) -> CallToolResult {
        match fetch_event(params, api).await {
            Ok(event) => success_result(format_availability(&event)),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::tm::client::{ApiError, Endpoint};
    use crate::domains::tools::definitions::tm::testing::{FakeApi, text};
    use serde_json::json;

    fn params(event_id: &str) -> TmEventIdParams {
        TmEventIdParams {
            event_id: event_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_availability_summary() {
        let api = FakeApi::returning(json!({
            "name": "Taylor Swift | The Eras Tour",
            "url": "https://tm.example/eras",
            "dates": {"status": {"code": "offsale"}},
            "priceRanges": [{"min": 49.0, "max": 449.0, "currency": "USD"}],
            "classifications": [{"segment": {"name": "Music"}}]
        }));
        let result = TmTicketAvailabilityTool::execute(&params("G5v0Z9"), &api).await;

        assert_eq!(api.last_call().0, Endpoint::EventDetail("G5v0Z9".to_string()));
        assert_eq!(
            text(&result),
            "Ticket Availability for: Taylor Swift | The Eras Tour\n\
             Status: Off Sale\n\
             Price Range: 49-449 USD\n\
             Ticket Link: https://tm.example/eras"
        );
    }

    #[tokio::test]
    async fn test_availability_unknown_status() {
        let api = FakeApi::returning(json!({"name": "Mystery Show", "dates": {"status": {"code": "tba"}}}));
        let result = TmTicketAvailabilityTool::execute(&params("x"), &api).await;
        assert!(text(&result).contains("Status: Unknown"));
        assert!(text(&result).contains("Price information not available"));
    }

    #[tokio::test]
    async fn test_availability_rate_limited() {
        let api = FakeApi::failing(ApiError::RateLimited);
        let result = TmTicketAvailabilityTool::execute(&params("x"), &api).await;
        assert_eq!(
            text(&result),
            "Error: Rate limit exceeded. Please try again later."
        );
    }
}
