//! Plain-text rendering of events.
//!
//! Lines always appear in the same order; a line whose data is missing is
//! left out entirely.

use super::event::{Event, Named};

const UNKNOWN_EVENT: &str = "Unknown Event";
const UNKNOWN_VENUE: &str = "Unknown Venue";
const DEFAULT_CURRENCY: &str = "USD";

/// Classification placeholder the API uses for "no value".
const UNDEFINED: &str = "undefined";

/// Render one event as a text block.
pub fn format_event(event: &Event) -> String {
    let mut lines = vec![format!("Event: {}", event_name(event))];
    lines.extend(date_line(event));
    lines.extend(venue_line(event));
    lines.extend(genre_line(event));
    lines.extend(price_text(event));
    lines.extend(
        event
            .sale_status()
            .map(|status| format!("Ticket Status: {}", status.label())),
    );
    lines.extend(event.url.as_deref().map(|url| format!("Tickets: {url}")));
    lines.join("\n")
}

/// Render `events` under `header`, separated by blank lines.
pub fn format_event_list(header: &str, events: &[Event]) -> String {
    let blocks: Vec<String> = events.iter().map(format_event).collect();
    format!("{header}:\n\n{}", blocks.join("\n\n"))
}

/// Status, price and link summary for a single event.
///
/// Unlike [`format_event`], every line is always present, with a fallback
/// text when the data is missing.
pub fn format_availability(event: &Event) -> String {
    let status = event
        .sale_status()
        .map(|status| status.label())
        .unwrap_or("Unknown");
    let price = price_text(event).unwrap_or_else(|| "Price information not available".to_string());
    let link = event.url.as_deref().unwrap_or("No ticket link available");

    format!(
        "Ticket Availability for: {}\nStatus: {status}\n{price}\nTicket Link: {link}",
        event_name(event)
    )
}

fn event_name(event: &Event) -> &str {
    event.name.as_deref().unwrap_or(UNKNOWN_EVENT)
}

fn date_line(event: &Event) -> Option<String> {
    let start = event.start()?;
    let date = start.local_date.as_deref()?;
    Some(match start.local_time.as_deref() {
        Some(time) => format!("Date: {date} {time}"),
        None => format!("Date: {date}"),
    })
}

fn venue_line(event: &Event) -> Option<String> {
    let venue = event.venue()?;
    let name = venue.name.as_deref().unwrap_or(UNKNOWN_VENUE);
    let location = [&venue.city, &venue.state, &venue.country]
        .into_iter()
        .filter_map(name_of)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    Some(if location.is_empty() {
        format!("Venue: {name}")
    } else {
        format!("Venue: {name}, {location}")
    })
}

fn genre_line(event: &Event) -> Option<String> {
    let classification = event.classification()?;
    let parts: Vec<&str> = [
        &classification.segment,
        &classification.genre,
        &classification.sub_genre,
    ]
    .into_iter()
    .filter_map(name_of)
    .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case(UNDEFINED))
    .collect();

    (!parts.is_empty()).then(|| format!("Genre: {}", parts.join(" | ")))
}

/// `Price Range: min-max CUR` or `Starting Price: min CUR`.
fn price_text(event: &Event) -> Option<String> {
    let range = event.price_range()?;
    let currency = range
        .currency
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY);

    match (range.min, range.max) {
        (Some(min), Some(max)) => Some(format!(
            "Price Range: {}-{} {currency}",
            format_amount(min),
            format_amount(max)
        )),
        (Some(min), None) => Some(format!("Starting Price: {} {currency}", format_amount(min))),
        _ => None,
    }
}

/// Whole amounts print without a fractional part (`20`, not `20.0`).
fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}

fn name_of(named: &Option<Named>) -> Option<&str> {
    named.as_ref()?.name.as_deref()
}
