//! Full API responses.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// A response with its status and headers, for callers that need more than
/// the payload.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Parsed body.
    pub body: T,
}

impl<T> ApiResponse<T> {
    /// Drop status and headers, keeping the payload.
    pub fn into_body(self) -> T {
        self.body
    }
}
