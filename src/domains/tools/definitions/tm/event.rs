//! Event records as returned by the Discovery API.
//!
//! Every field is optional: the API omits whatever it does not know, and the
//! formatter drops the matching line instead of failing. A field holding a
//! value of the wrong type is treated as absent; it never discards the
//! surrounding record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

/// JSON pointer to the event list in a search response.
const EMBEDDED_EVENTS: &str = "/_embedded/events";

/// Decode a field, treating a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(T::deserialize(value)
        .map_err(|e| debug!("Ignoring unexpected field value: {}", e))
        .ok())
}

/// A single event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub dates: Option<EventDates>,
    #[serde(deserialize_with = "lenient")]
    pub price_ranges: Option<Vec<PriceRange>>,
    #[serde(deserialize_with = "lenient")]
    pub classifications: Option<Vec<Classification>>,
    #[serde(rename = "_embedded", deserialize_with = "lenient")]
    pub embedded: Option<EventEmbedded>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventDates {
    #[serde(deserialize_with = "lenient")]
    pub start: Option<EventStart>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<EventStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventStart {
    #[serde(deserialize_with = "lenient")]
    pub local_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub local_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventStatus {
    #[serde(deserialize_with = "lenient")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceRange {
    #[serde(deserialize_with = "lenient")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub max: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub currency: Option<String>,
}

/// Segment / genre / sub-genre triple.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Classification {
    #[serde(deserialize_with = "lenient")]
    pub segment: Option<Named>,
    #[serde(deserialize_with = "lenient")]
    pub genre: Option<Named>,
    #[serde(deserialize_with = "lenient")]
    pub sub_genre: Option<Named>,
}

/// Any `{ "name": ... }` object (city, state, country, segment, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Named {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventEmbedded {
    #[serde(deserialize_with = "lenient")]
    pub venues: Option<Vec<Venue>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Venue {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<Named>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<Named>,
    #[serde(deserialize_with = "lenient")]
    pub country: Option<Named>,
}

/// Ticket sale state reported in `dates.status.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    OnSale,
    OffSale,
    Cancelled,
    Postponed,
    Rescheduled,
}

impl SaleStatus {
    /// Parse an API status code; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "onsale" => Some(Self::OnSale),
            "offsale" => Some(Self::OffSale),
            "cancelled" => Some(Self::Cancelled),
            "postponed" => Some(Self::Postponed),
            "rescheduled" => Some(Self::Rescheduled),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::OnSale => "On Sale",
            Self::OffSale => "Off Sale",
            Self::Cancelled => "Cancelled",
            Self::Postponed => "Postponed",
            Self::Rescheduled => "Rescheduled",
        }
    }
}

impl Event {
    /// Decode one event; a record that is not an object is logged and yields `None`.
    pub fn from_json(raw: &Value) -> Option<Self> {
        match Self::deserialize(raw) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Ignoring malformed event record: {}", e);
                None
            }
        }
    }

    pub fn start(&self) -> Option<&EventStart> {
        self.dates.as_ref()?.start.as_ref()
    }

    pub fn sale_status(&self) -> Option<SaleStatus> {
        let code = self.dates.as_ref()?.status.as_ref()?.code.as_deref()?;
        SaleStatus::from_code(code)
    }

    /// The first (primary) venue.
    pub fn venue(&self) -> Option<&Venue> {
        self.embedded.as_ref()?.venues.as_ref()?.first()
    }

    /// The first (primary) price range.
    pub fn price_range(&self) -> Option<&PriceRange> {
        self.price_ranges.as_ref()?.first()
    }

    /// The first (primary) classification.
    pub fn classification(&self) -> Option<&Classification> {
        self.classifications.as_ref()?.first()
    }
}

/// Pull the event list out of a search response.
///
/// Responses without `_embedded.events` (the API's shape for "no results")
/// yield an empty list.
pub fn extract_events(payload: &Value) -> Vec<Event> {
    payload
        .pointer(EMBEDDED_EVENTS)
        .and_then(Value::as_array)
        .map(|events| events.iter().filter_map(Event::from_json).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_events_missing_envelope() {
        assert!(extract_events(&json!({})).is_empty());
        assert!(extract_events(&json!({"_embedded": {}})).is_empty());
        assert!(extract_events(&json!({"page": {"totalElements": 0}})).is_empty());
        assert!(extract_events(&json!({"_embedded": {"events": "nope"}})).is_empty());
        assert!(extract_events(&json!(null)).is_empty());
    }

    #[test]
    fn test_extract_events_reads_list() {
        let payload = json!({
            "_embedded": {
                "events": [
                    {"name": "Radiohead", "id": "G5v0Z9"},
                    {"name": "Radiohead - Night 2"}
                ]
            }
        });
        let events = extract_events(&payload);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name.as_deref(), Some("Radiohead"));
        assert_eq!(events[0].id.as_deref(), Some("G5v0Z9"));
    }

    #[test]
    fn test_extract_events_skips_non_object_records() {
        let payload = json!({
            "_embedded": {"events": [{"name": 42}, {"name": "Ok"}, "garbage"]}
        });
        let events = extract_events(&payload);
        assert_eq!(events.len(), 2);
        assert!(events[0].name.is_none());
        assert_eq!(events[1].name.as_deref(), Some("Ok"));
    }

    #[test]
    fn test_wrong_typed_field_keeps_the_event() {
        let event = Event::from_json(&json!({
            "name": "Hamilton",
            "url": "https://tm.example/h",
            "dates": {"start": {"localDate": "2025-09-12", "localTime": 1930}},
            "priceRanges": [{"min": "20", "max": 50, "currency": 1}],
            "classifications": "Theatre",
            "_embedded": {"venues": [{"name": "Richard Rodgers Theatre", "city": "New York"}]}
        }))
        .unwrap();

        assert_eq!(event.name.as_deref(), Some("Hamilton"));
        assert_eq!(event.url.as_deref(), Some("https://tm.example/h"));
        let start = event.start().unwrap();
        assert_eq!(start.local_date.as_deref(), Some("2025-09-12"));
        assert!(start.local_time.is_none());
        let price = event.price_range().unwrap();
        assert_eq!((price.min, price.max), (None, Some(50.0)));
        assert!(price.currency.is_none());
        assert!(event.classification().is_none());
        let venue = event.venue().unwrap();
        assert_eq!(venue.name.as_deref(), Some("Richard Rodgers Theatre"));
        assert!(venue.city.is_none());
    }

    #[test]
    fn test_event_accessors() {
        let event = Event::from_json(&json!({
            "dates": {
                "start": {"localDate": "2025-07-01", "localTime": "19:30:00"},
                "status": {"code": "offsale"}
            },
            "priceRanges": [{"min": 10.0}, {"min": 99.0}],
            "_embedded": {"venues": [{"name": "United Center"}]}
        }))
        .unwrap();

        assert_eq!(event.start().unwrap().local_date.as_deref(), Some("2025-07-01"));
        assert_eq!(event.sale_status(), Some(SaleStatus::OffSale));
        assert_eq!(event.price_range().unwrap().min, Some(10.0));
        assert_eq!(event.venue().unwrap().name.as_deref(), Some("United Center"));
        assert!(event.classification().is_none());
    }

    #[test]
    fn test_sale_status_codes() {
        assert_eq!(SaleStatus::from_code("onsale").map(SaleStatus::label), Some("On Sale"));
        assert_eq!(
            SaleStatus::from_code("rescheduled").map(SaleStatus::label),
            Some("Rescheduled")
        );
        assert_eq!(SaleStatus::from_code("ONSALE"), None);
        assert_eq!(SaleStatus::from_code(""), None);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let event = Event::from_json(&json!({
            "name": null,
            "priceRanges": null,
            "dates": {"status": null}
        }))
        .unwrap();
        assert!(event.name.is_none());
        assert!(event.price_range().is_none());
        assert!(event.sale_status().is_none());
    }
}
