//! Query parameters for the Discovery API.
//!
//! [`SearchParams`] only ever holds filters that carry a value: optional
//! inputs that are `None` or blank never reach the outgoing request.

/// Sort order used by every event search: soonest first.
pub const SORT_BY_DATE_ASC: &str = "date,asc";

const KEYWORD: &str = "keyword";
const VENUE_ID: &str = "venueId";
const CITY: &str = "city";
const STATE_CODE: &str = "stateCode";
const COUNTRY_CODE: &str = "countryCode";
const CLASSIFICATION_NAME: &str = "classificationName";
const SIZE: &str = "size";
const SORT: &str = "sort";

/// Ordered set of query filters for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(&'static str, String)>,
}

impl SearchParams {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search term.
    pub fn keyword(self, keyword: impl Into<String>) -> Self {
        self.set(KEYWORD, keyword)
    }

    /// Exact venue identifier.
    pub fn venue_id(self, venue_id: impl Into<String>) -> Self {
        self.set(VENUE_ID, venue_id)
    }

    pub fn city(self, city: impl Into<String>) -> Self {
        self.set(CITY, city)
    }

    pub fn state_code(self, state_code: impl Into<String>) -> Self {
        self.set(STATE_CODE, state_code)
    }

    pub fn country_code(self, country_code: impl Into<String>) -> Self {
        self.set(COUNTRY_CODE, country_code)
    }

    /// Segment, genre or sub-genre name (e.g. "rock", "sports").
    pub fn classification_name(self, name: impl Into<String>) -> Self {
        self.set(CLASSIFICATION_NAME, name)
    }

    /// Page size.
    pub fn size(self, size: u32) -> Self {
        self.set(SIZE, size.to_string())
    }

    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.set(SORT, sort)
    }

    /// Apply `setter` only when `value` is present.
    ///
    /// ```
    /// use ticketmaster_mcp_server::domains::tools::definitions::tm::SearchParams;
    ///
    /// let state: Option<String> = None;
    /// let params = SearchParams::new()
    ///     .city("Chicago")
    ///     .optional(state, SearchParams::state_code);
    /// assert_eq!(params.get("stateCode"), None);
    /// ```
    pub fn optional<T>(self, value: Option<T>, setter: impl FnOnce(Self, T) -> Self) -> Self {
        match value {
            Some(value) => setter(self, value),
            None => self,
        }
    }

    /// Look up the value sent for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The key/value pairs in insertion order, ready for `RequestBuilder::query`.
    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// URL-encoded form of the filters, used for request logging.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }

    /// Insert or replace `key`; blank values are dropped.
    fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = value.trim();
        self.pairs.retain(|(k, _)| *k != key);
        if !value.is_empty() {
            self.pairs.push((key, value.to_string()));
        }
        self
    }
}
