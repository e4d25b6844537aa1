//! Configuration for the API client and the mock server.
//!
//! Both structs deserialize with defaults for missing fields, so they can be
//! embedded in a test harness's own configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("typed-mock/", env!("CARGO_PKG_VERSION"));

/// Settings for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL prepended to every endpoint path. Empty means relative paths.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with each request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// What the mock server does with a request no handler matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnhandledRequest {
    /// Answer 404 without logging.
    Bypass,
    /// Answer 404 and log a warning.
    #[default]
    Warn,
    /// Answer 500 and log an error.
    Error,
}

/// Settings for [`MockServer`](crate::mock::MockServer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerOptions {
    /// Strategy for requests that match no handler.
    pub on_unhandled: UnhandledRequest,
}
