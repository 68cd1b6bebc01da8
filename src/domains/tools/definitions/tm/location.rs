//! Ticketmaster location search tool.
//!
//! Finds upcoming events in a city, optionally narrowed by state and
//! country code.

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
    default_country, default_size, error_result, optional_input, require_input, search_result,
    validate_size,
};
use super::params::{SORT_BY_DATE_ASC, SearchParams};

/// Parameters for location search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TmLocationParams {
    /// City name.
    #[schemars(description = "City name")]
    pub city: String,

    /// State code (optional, for US locations).
    #[schemars(description = "State code (optional, for US locations)")]
    #[serde(default)]
    pub state: Option<String>,

    /// Country code (default: US).
    #[schemars(description = "Country code (default: US)")]
    #[serde(default = "default_country")]
    pub country: String,

    /// Number of results to return (default: 5).
    #[schemars(description = "Number of results to return (default: 5)")]
    #[serde(default = "default_size")]
    pub size: u32,
}

/// Ticketmaster Location Search Tool implementation.
#[derive(Debug, Clone)]
pub struct TmLocationTool;

impl TmLocationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_events_by_location";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for upcoming events by location (city, optional state code, country code). Returns date, venue, genre, price range, ticket status and ticket link for each event, soonest first.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(city = %params.city, state = ?params.state, country = %params.country))]
    pub async fn execute(params: &TmLocationParams, api: &dyn EventsApi) -> CallToolResult {
        let city = match require_input("city", &params.city) {
            Ok(city) => city,
            Err(e) => return error_result(e),
        };
        let state = optional_input(params.state.as_deref());

        let location = match state {
            Some(state) => format!("{city},{state}"),
            None => city.to_string(),
        };
        info!("Searching events in: {}", location);

        let query = SearchParams::new()
            .city(city)
            .optional(state, SearchParams::state_code)
            .country_code(params.country.as_str())
            .size(validate_size(params.size))
            .sort(SORT_BY_DATE_ASC);

        let outcome = api.fetch(&Endpoint::Events, &query).await;
        search_result(
            outcome,
            &format!("Upcoming events in {location}"),
            &format!("No upcoming events found in {location}"),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TmLocationParams>(),
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
                let params: TmLocationParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
