//! Ticketmaster artist search tool.
//!
//! Finds upcoming events for an artist or performer, soonest first.

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
use super::common::{default_size, error_result, require_input, search_result, validate_size};
use super::params::{SORT_BY_DATE_ASC, SearchParams};

/// Parameters for artist search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TmArtistParams {
    /// Name of the artist or performer.
    #[schemars(description = "Name of the artist or performer")]
    pub artist: String,

    /// Number of results to return (default: 5).
    #[schemars(description = "Number of results to return (default: 5)")]
    #[serde(default = "default_size")]
    pub size: u32,
}

/// Ticketmaster Artist Search Tool implementation.
#[derive(Debug, Clone)]
pub struct TmArtistTool;

impl TmArtistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_events_by_artist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for upcoming events by artist name. Returns date, venue, genre, price range, ticket status and ticket link for each event, soonest first.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(artist = %params.artist, size = params.size))]
    pub async fn execute(params: &TmArtistParams, api: &dyn EventsApi) -> CallToolResult {
        let artist = match require_input("artist", &params.artist) {
            Ok(artist) => artist,
            Err(e) => return error_result(e),
        };
        info!("Searching events for artist: {}", artist);

        let query = SearchParams::new()
            .keyword(artist)
            .size(validate_size(params.size))
            .sort(SORT_BY_DATE_ASC);

        let outcome = api.fetch(&Endpoint::Events, &query).await;
        search_result(
            outcome,
            &format!("Upcoming events for {artist}"),
            &format!("No upcoming events found for artist: {artist}"),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TmArtistParams>(),
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
                let params: TmArtistParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
