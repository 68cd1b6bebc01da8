//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    Stdio,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::Stdio
    }
}

impl TransportConfig {
    /// Load transport config from the `MCP_TRANSPORT` environment variable.
    ///
    /// Only `stdio` is available; any other value is reported and ignored.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            "" | "stdio" => Self::default(),
            other => {
                warn!("Unsupported MCP_TRANSPORT '{}', falling back to stdio", other);
                Self::default()
            }
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }
}
