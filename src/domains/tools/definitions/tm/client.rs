//! Ticketmaster Discovery API gateway.
//!
//! Every tool issues exactly one GET through an [`EventsApi`]. The production
//! implementation, [`TicketmasterClient`], injects the API key, applies the
//! request timeout and folds every transport or HTTP failure into an
//! [`ApiError`]. Nothing is retried.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::params::SearchParams;
use crate::core::config::ApiConfig;
use crate::core::{Error, Result};

/// Query parameter carrying the consumer key.
const API_KEY_PARAM: &str = "apikey";

const USER_AGENT: &str = concat!("ticketmaster-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Result of a single gateway call.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Classified gateway failure.
///
/// The `Display` text is what the host ultimately sees after the `Error: `
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 429.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// HTTP 401.
    #[error("Unauthorized. Please check your API key.")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// DNS failure, refused connection, timeout or broken stream.
    #[error("Failed to connect to Ticketmaster API.")]
    ConnectionFailed,

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Map a non-success status code.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            other => Self::Http(other.as_u16()),
        }
    }

    /// Classify a reqwest failure. The request URL carries the API key, so
    /// it is stripped before any text is kept.
    fn from_reqwest(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            Self::Unexpected(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            Self::ConnectionFailed
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}

/// Discovery API resource addressed by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `events.json` - event search.
    Events,
    /// `events/{id}.json` - a single event.
    EventDetail(String),
}

impl Endpoint {
    /// Path segments below the API base; each is percent-encoded on its own.
    fn segments(&self) -> Vec<String> {
        match self {
            Self::Events => vec!["events.json".to_string()],
            Self::EventDetail(id) => vec!["events".to_string(), format!("{id}.json")],
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}

/// The outbound seam used by every tool.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// Issue one GET against `endpoint` with `params` and return the decoded JSON body.
    async fn fetch(&self, endpoint: &Endpoint, params: &SearchParams) -> ApiResult<Value>;
}

/// reqwest-backed [`EventsApi`].
#[derive(Clone)]
pub struct TicketmasterClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for TicketmasterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketmasterClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl TicketmasterClient {
    /// Build a client for `api` authenticating with `api_key`.
    ///
    /// Idle connections are not pooled, so each call opens and releases its
    /// own connection.
    pub fn new(api: &ApiConfig, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(&api.base_url)
            .map_err(|e| Error::config(format!("Invalid API base URL {:?}: {e}", api.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "API base URL {:?} cannot carry a path",
                api.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .pool_max_idle_per_host(0)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn endpoint_url(&self, endpoint: &Endpoint) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Unexpected("API base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }
}

#[async_trait]
impl EventsApi for TicketmasterClient {
    async fn fetch(&self, endpoint: &Endpoint, params: &SearchParams) -> ApiResult<Value> {
        let url = self.endpoint_url(endpoint)?;
        debug!(
            endpoint = %endpoint,
            query = %params.to_query_string(),
            "Requesting Ticketmaster API"
        );

        let response = self
            .http
            .get(url)
            .query(params.as_pairs())
            .query(&[(API_KEY_PARAM, self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                warn!(endpoint = %endpoint, "Ticketmaster request failed: {}", e);
                ApiError::from_reqwest(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %endpoint, status = status.as_u16(), "Ticketmaster API returned an error");
            return Err(ApiError::from_status(status));
        }

        response.json::<Value>().await.map_err(|e| {
            let e = e.without_url();
            warn!(endpoint = %endpoint, "Failed to read Ticketmaster response: {}", e);
            ApiError::from_reqwest(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output for inspection.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Accept one connection and hold it open without ever answering.
    async fn serve_silent() -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        (format!("http://{addr}/discovery/v2"), handle)
    }

    /// Serve a single canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/discovery/v2"), handle)
    }

    fn client_for(base_url: String) -> TicketmasterClient {
        let api = ApiConfig {
            base_url,
            timeout_secs: 5,
        };
        TicketmasterClient::new(&api, "secret").unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Events.to_string(), "events.json");
        assert_eq!(
            Endpoint::EventDetail("vvG1zZ9".to_string()).to_string(),
            "events/vvG1zZ9.json"
        );
    }

    #[test]
    fn test_event_id_is_encoded_as_one_segment() {
        let client = client_for("https://app.ticketmaster.com/discovery/v2".to_string());
        let url = client
            .endpoint_url(&Endpoint::EventDetail("a b/c".to_string()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://app.ticketmaster.com/discovery/v2/events/a%20b%2Fc.json"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(StatusCode::TOO_MANY_REQUESTS), ApiError::RateLimited);
        assert_eq!(ApiError::from_status(StatusCode::UNAUTHORIZED), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(StatusCode::NOT_FOUND), ApiError::Http(404));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::RateLimited.to_string(),
            "Rate limit exceeded. Please try again later."
        );
        assert_eq!(ApiError::Http(503).to_string(), "HTTP error: 503");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let api = ApiConfig {
            base_url: "not a url".to_string(),
            timeout_secs: 30,
        };
        assert!(TicketmasterClient::new(&api, "key").is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = client_for("https://app.ticketmaster.com/discovery/v2".to_string());
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
    }

    #[tokio::test]
    async fn test_fetch_injects_api_key_and_filters() {
        let (base, server) = serve_once("200 OK", r#"{"_embedded":{"events":[]}}"#).await;
        let client = client_for(base);
        let params = SearchParams::new().keyword("Radiohead").size(5);

        let body = client.fetch(&Endpoint::Events, &params).await.unwrap();
        assert!(body.pointer("/_embedded/events").is_some());

        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert!(request_line.starts_with("GET /discovery/v2/events.json?"));
        assert!(request_line.contains("keyword=Radiohead"));
        assert!(request_line.contains("size=5"));
        assert!(request_line.contains("apikey=secret"));
    }

    #[tokio::test]
    async fn test_fetch_maps_rate_limit() {
        let (base, server) = serve_once("429 Too Many Requests", "{}").await;
        let err = client_for(base)
            .fetch(&Endpoint::Events, &SearchParams::new())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::RateLimited);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_maps_unauthorized() {
        let (base, server) = serve_once("401 Unauthorized", "{}").await;
        let err = client_for(base)
            .fetch(&Endpoint::Events, &SearchParams::new())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_maps_other_status() {
        let (base, server) = serve_once("404 Not Found", "{}").await;
        let err = client_for(base)
            .fetch(&Endpoint::EventDetail("missing".to_string()), &SearchParams::new())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Http(404));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_unexpected() {
        let (base, server) = serve_once("200 OK", "<html>oops</html>").await;
        let err = client_for(base)
            .fetch(&Endpoint::Events, &SearchParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unexpected(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(format!("http://{addr}/discovery/v2"))
            .fetch(&Endpoint::Events, &SearchParams::new())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::ConnectionFailed);
    }

    #[tokio::test]
    async fn test_connection_failure_logs_omit_api_key() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let err = client_for(format!("http://{addr}/discovery/v2"))
            .fetch(&Endpoint::Events, &SearchParams::new().keyword("Radiohead"))
            .await
            .unwrap_err();

        let logs = logs.contents();
        assert!(logs.contains("Ticketmaster request failed"));
        assert!(!logs.contains("apikey"));
        assert!(!logs.contains("secret"));
        assert!(!err.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_connection_failure() {
        let (base, server) = serve_silent().await;
        let api = ApiConfig {
            base_url: base,
            timeout_secs: 1,
        };
        let client = TicketmasterClient::new(&api, "secret").unwrap();

        let err = client
            .fetch(&Endpoint::Events, &SearchParams::new())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::ConnectionFailed);
        server.abort();
    }
}
