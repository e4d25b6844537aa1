//! API client.
//!
//! Low-level HTTP client that resolves paths and sends raw requests.
//! Endpoint-specific operations live on the descriptors in [`crate::api`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::method::Method;
use crate::response::ApiResponse;

/// Client for the sample API.
///
/// The prefix is the configured base URL without its trailing slash; every
/// endpoint path is appended to it. A client with an empty prefix resolves
/// relative paths, which is what mock handlers usually want.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```
/// use typed_mock::{ApiClient, Endpoint};
///
/// let api = ApiClient::new("http://localhost:3000/")?;
/// assert_eq!(api.prefix(), "http://localhost:3000");
///
/// // No base URL: paths stay relative.
/// let api = ApiClient::default();
/// assert_eq!(api.sample().path(), "/sample");
/// # Ok::<(), typed_mock::Error>(())
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    prefix: Arc<str>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("prefix", &&*self.prefix)
            .finish_non_exhaustive()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self {
            http: Client::new(),
            prefix: Arc::from(""),
        }
    }
}

impl ApiClient {
    /// Create a client for the given base URL with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    /// Create a client from a full configuration.
    ///
    /// An empty `base_url` is accepted and yields relative paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if !config.base_url.is_empty() {
            Url::parse(&config.base_url)?;
        }

        let prefix = config
            .base_url
            .strip_suffix('/')
            .unwrap_or(&config.base_url);

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(Error::HttpError)?;

        Ok(Self {
            http,
            prefix: Arc::from(prefix),
        })
    }

    /// The base URL every path is appended to.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Prefix a route path.
    pub(crate) fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }

    /// Send a request and check its status.
    #[tracing::instrument(skip(self, query, body))]
    pub(crate) async fn send<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Response>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let mut url = Url::parse(&self.resolve(path))?;
        if let Some(query) = query {
            let encoded = serde_qs::to_string(&query)?;
            if !encoded.is_empty() {
                url.set_query(Some(&encoded));
            }
        }

        let mut request = self.http.request(method.into(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Error::HttpError)?;
        tracing::debug!(status = %response.status(), "response received");

        Self::check_response(response).await
    }

    /// Send a request and parse its JSON body.
    pub(crate) async fn fetch_json<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, query, body).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(Error::HttpError)?;
        let body = serde_json::from_slice(&bytes)?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Send a request whose response carries no payload.
    pub(crate) async fn fetch_empty<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ApiResponse<()>>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, query, body).await?;

        Ok(ApiResponse {
            status: response.status(),
            headers: response.headers().clone(),
            body: (),
        })
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(Error::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}
