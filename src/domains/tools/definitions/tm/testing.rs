//! Test doubles for the Ticketmaster tools.

use std::sync::Mutex;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};

use super::client::{ApiError, ApiResult, Endpoint, EventsApi};
use super::params::SearchParams;

/// In-memory [`EventsApi`] returning a canned response and recording every call.
pub struct FakeApi {
    response: ApiResult<Value>,
    calls: Mutex<Vec<(Endpoint, SearchParams)>>,
}

impl FakeApi {
    pub fn returning(payload: Value) -> Self {
        Self {
            response: Ok(payload),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Search response wrapping `events` in the `_embedded` envelope.
    pub fn with_events(events: Value) -> Self {
        Self::returning(json!({ "_embedded": { "events": events } }))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> (Endpoint, SearchParams) {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no call recorded")
    }
}

#[async_trait]
impl EventsApi for FakeApi {
    async fn fetch(&self, endpoint: &Endpoint, params: &SearchParams) -> ApiResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.clone(), params.clone()));
        self.response.clone()
    }
}

/// The text of the first content item.
pub fn text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {:?}", other),
    }
}
