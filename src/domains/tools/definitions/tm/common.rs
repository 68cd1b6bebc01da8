//! Common utilities shared across Ticketmaster tools.
//!
//! Input normalization, page-size handling and the shared
//! fetch-result-to-text rendering used by every search tool.

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::{info, warn};

use super::client::ApiResult;
use super::event::extract_events;
use super::format::format_event_list;
use crate::domains::tools::ToolError;

/// Venue identifiers issued by Ticketmaster start with this prefix.
pub const VENUE_ID_PREFIX: &str = "KovZ";

/// Largest page the Discovery API will return.
const MAX_PAGE_SIZE: u32 = 200;

/// Check if a venue argument is a Ticketmaster venue id rather than a name.
///
/// Example: `KovZpZA7AAEA` (Madison Square Garden).
pub fn is_venue_id(venue: &str) -> bool {
    venue.starts_with(VENUE_ID_PREFIX)
}

/// Default number of events per search.
pub fn default_size() -> u32 {
    5
}

/// Default country for location searches.
pub fn default_country() -> String {
    "US".to_string()
}

/// Clamp a requested page size to 1..=200.
pub fn validate_size(size: u32) -> u32 {
    size.clamp(1, MAX_PAGE_SIZE)
}

/// Trim a required argument, rejecting blank input.
pub fn require_input<'a>(field: &str, value: &'a str) -> Result<&'a str, ToolError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ToolError::invalid_arguments(format!("{field} must not be empty")));
    }
    Ok(value)
}

/// Trim an optional argument; blank counts as absent.
pub fn optional_input(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Create an error result, prefixed with `Error: `.
pub fn error_result(message: impl Display) -> CallToolResult {
    let message = format!("Error: {message}");
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render the outcome of an event search.
///
/// Failures become an `Error: ` result; an empty list becomes `empty_message`
/// (a successful result, not an error); otherwise every event is formatted
/// under `header`.
pub fn search_result(outcome: ApiResult<Value>, header: &str, empty_message: &str) -> CallToolResult {
    let payload = match outcome {
        Ok(payload) => payload,
        Err(e) => return error_result(e),
    };

    let events = extract_events(&payload);
    if events.is_empty() {
        info!("No events found");
        return success_result(empty_message.to_string());
    }

    info!("Found {} event(s)", events.len());
    success_result(format_event_list(header, &events))
}
