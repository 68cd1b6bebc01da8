//! Ticketmaster tools module.
//!
//! This module exposes the Ticketmaster Discovery API as MCP tools:
//! - `artist`, `venue`, `location`, `genre`: event searches
//! - `details`: a single event by id
//! - `availability`: sale status, price and link for a single event
//!
//! Every tool goes through the [`EventsApi`] gateway in `client`, and renders
//! its result with the `event` extractor and the `format` module.

pub mod artist;
pub mod availability;
pub mod client;
pub mod common;
pub mod details;
pub mod event;
pub mod format;
pub mod genre;
pub mod location;
pub mod params;
pub mod venue;

#[cfg(test)]
pub(crate) mod testing;

pub use artist::{TmArtistParams, TmArtistTool};
pub use availability::TmTicketAvailabilityTool;
pub use client::{ApiError, ApiResult, Endpoint, EventsApi, TicketmasterClient};
pub use details::{TmEventDetailsTool, TmEventIdParams};
pub use event::{Event, SaleStatus, extract_events};
pub use format::{format_availability, format_event};
pub use genre::{TmGenreParams, TmGenreTool};
pub use location::{TmLocationParams, TmLocationTool};
pub use params::SearchParams;
pub use venue::{TmVenueParams, TmVenueTool};
