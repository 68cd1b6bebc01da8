//! Ticketmaster venue search tool.
//!
//! Accepts either a venue name or a Ticketmaster venue id. Ids (`KovZ...`)
//! are sent as an exact `venueId` filter, anything else as a free-text
//! keyword; never both.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::client::{Endpoint, EventsApi};
use super::common::{
    default_size, error_result, is_venue_id, require_input, search_result, validate_size,
};
use super::params::{SORT_BY_DATE_ASC, SearchParams};

/// Parameters for venue search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TmVenueParams {
    /// Venue name, or a Ticketmaster venue id.
    #[schemars(description = "Name of the venue, or a Ticketmaster venue ID (starts with 'KovZ')")]
    pub venue: String,

    /// Number of results to return (default: 5).
    #[schemars(description = "Number of results to return (default: 5)")]
    #[serde(default = "default_size")]
    pub size: u32,
}

/// Ticketmaster Venue Search Tool implementation.
#[derive(Debug, Clone)]
pub struct TmVenueTool;

impl TmVenueTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_events_by_venue";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for upcoming events by venue name or Ticketmaster venue ID. Returns date, genre, price range, ticket status and ticket link for each event, soonest first.";

    /// Build the query for `venue`.
    fn build_query(venue: &str, size: u32) -> SearchParams {
        let query = if is_venue_id(venue) {
            debug!("Treating '{}' as a venue id", venue);
            SearchParams::new().venue_id(venue)
        } else {
            SearchParams::new().keyword(venue)
        };
        query.size(validate_size(size)).sort(SORT_BY_DATE_ASC)
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(venue = %params.venue, size = params.size))]
    pub async fn execute(params: &TmVenueParams, api: &dyn EventsApi) -> CallToolResult {
        let venue = match require_input("venue", &params.venue) {
            Ok(venue) => venue,
            Err(e) => return error_result(e),
        };
        info!("Searching events at venue: {}", venue);

        let query = Self::build_query(venue, params.size);
        let outcome = api.fetch(&Endpoint::Events, &query).await;
        search_result(
            outcome,
            &format!("Upcoming events at {venue}"),
            &format!("No upcoming events found for venue: {venue}"),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TmVenueParams>(),
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
                let params: TmVenueParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
