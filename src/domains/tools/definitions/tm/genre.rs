//! Ticketmaster genre search tool.
//!
//! Searches by classification name (segment, genre or sub-genre such as
//! "rock", "comedy" or "basketball"), optionally within a city.

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
use super::common::{
    default_size, error_result, optional_input, require_input, search_result, validate_size,
};
use super::params::{SORT_BY_DATE_ASC, SearchParams};

/// Parameters for genre search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TmGenreParams {
    /// Genre name.
    #[schemars(description = "Genre name (e.g., rock, pop, sports)")]
    pub genre: String,

    /// City name for location filtering (optional).
    #[schemars(description = "City name for location filtering (optional)")]
    #[serde(default)]
    pub city: Option<String>,

    /// Number of results to return (default: 5).
    #[schemars(description = "Number of results to return (default: 5)")]
    #[serde(default = "default_size")]
    pub size: u32,
}

/// Ticketmaster Genre Search Tool implementation.
#[derive(Debug, Clone)]
pub struct TmGenreTool;

impl TmGenreTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_events_by_genre";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for upcoming events by genre or category (e.g., rock, pop, sports), optionally limited to a city. Returns date, venue, price range, ticket status and ticket link for each event, soonest first.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(genre = %params.genre, city = ?params.city))]
    pub async fn execute(params: &TmGenreParams, api: &dyn EventsApi) -> CallToolResult {
        let genre = match require_input("genre", &params.genre) {
            Ok(genre) => genre,
            Err(e) => return error_result(e),
        };
        let city = optional_input(params.city.as_deref());
        let location = city.map(|city| format!(" in {city}")).unwrap_or_default();
        info!("Searching {} events{}", genre, location);

        let query = SearchParams::new()
            .classification_name(genre)
            .optional(city, SearchParams::city)
            .size(validate_size(params.size))
            .sort(SORT_BY_DATE_ASC);

        let outcome = api.fetch(&Endpoint::Events, &query).await;
        search_result(
            outcome,
            &format!("Upcoming {genre} events{location}"),
            &format!("No upcoming {genre} events found{location}"),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TmGenreParams>(),
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
                let params: TmGenreParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
