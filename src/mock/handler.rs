//! Mock handlers and the typed handler factory.
//!
//! [`create_handler`] ties a fixture to an endpoint descriptor: the fixture
//! must have exactly the response type the descriptor declares for the
//! chosen method, and the method must be one the descriptor declares.
//! Both are checked by the compiler, never when the handler runs.

use std::fmt;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use url::Url;

use crate::method::{Method, MethodTag};
use crate::traits::{Invoke, ResBody};

type Responder = dyn Fn() -> Response + Send + Sync;

/// A registered (method, path, response) binding consumed by
/// [`MockServer`](super::MockServer).
///
/// The response is produced by a closure fixed at construction; the
/// incoming request's query and body are ignored.
#[derive(Clone)]
pub struct Handler {
    method: Method,
    path: String,
    status: Option<StatusCode>,
    respond: Arc<Responder>,
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl Handler {
    fn new<F>(method: Method, url: &str, respond: F) -> Self
    where
        F: Fn() -> Response + Send + Sync + 'static,
    {
        Self {
            method,
            path: normalize_path(url),
            status: None,
            respond: Arc::new(respond),
        }
    }

    /// Respond with `body` serialized as JSON.
    pub(crate) fn json<T>(method: Method, url: &str, body: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        Self::new(method, url, move || Json(&body).into_response())
    }

    /// Respond `204 No Content`.
    pub(crate) fn empty(method: Method, url: &str) -> Self {
        Self::new(method, url, || StatusCode::NO_CONTENT.into_response())
    }

    /// Build a handler from a plain path and an untyped JSON value.
    ///
    /// Nothing ties `response` to what the route actually returns, so a
    /// fixture that drifted from the API contract still compiles. Prefer
    /// [`create_handler`] whenever the route has a descriptor.
    ///
    /// ```
    /// use serde_json::json;
    /// use typed_mock::{Handler, Method};
    ///
    /// // Compiles even though `/sample` returns a list of users.
    /// let handler = Handler::raw("/sample", Method::Get, Some(json!("omg")));
    /// assert_eq!(handler.path(), "/sample");
    /// ```
    pub fn raw(url: &str, method: Method, response: Option<serde_json::Value>) -> Self {
        match response {
            Some(value) => Self::json(method, url, value),
            None => Self::empty(method, url),
        }
    }

    /// Override the response status.
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// The method this handler answers.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The normalized path this handler answers.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether a request with this method and URL is answered here.
    pub fn matches(&self, method: &str, url: &str) -> bool {
        self.method.matches(method) && normalize_path(url) == self.path
    }

    /// Produce the response.
    pub fn respond(&self) -> Response {
        let mut response = (self.respond)();
        if let Some(status) = self.status {
            *response.status_mut() = status;
        }
        response
    }
}

/// Build a handler answering `method` on `endpoint` with `response`.
///
/// The fixture type is inferred from the endpoint's declaration for the
/// method, so it has to match the real API response type:
///
/// ```
/// use typed_mock::{create_handler, ApiClient, Get, Post, User};
///
/// let api = ApiClient::default();
/// let handlers = vec![
///     create_handler(&api.sample(), Get, vec![User { id: 1, name: "foo".into() }]),
///     create_handler(&api.sample(), Post, User { id: 1, name: "foo".into() }),
/// ];
/// assert_eq!(handlers[0].path(), "/sample");
/// ```
///
/// A fixture of the wrong shape does not compile:
///
/// ```compile_fail
/// use typed_mock::{create_handler, ApiClient, Get};
///
/// let api = ApiClient::default();
/// let _ = create_handler(&api.sample(), Get, "omg");
/// ```
///
/// ```compile_fail
/// use serde::Serialize;
/// use typed_mock::{create_handler, ApiClient, Post};
///
/// #[derive(Serialize)]
/// struct LooseUser {
///     id: String,
///     name: String,
/// }
///
/// let api = ApiClient::default();
/// let fixture = LooseUser { id: "omg".into(), name: "foo".into() };
/// let _ = create_handler(&api.sample(), Post, fixture);
/// ```
///
/// ```compile_fail
/// use typed_mock::{create_handler, ApiClient, Post, User};
///
/// let api = ApiClient::default();
/// let _ = create_handler(&api.sample(), Post, User { name: "foo".into() });
/// ```
///
/// Nor does a method the endpoint never declared:
///
/// ```compile_fail
/// use typed_mock::{create_handler, ApiClient, Put, User};
///
/// let api = ApiClient::default();
/// let _ = create_handler(&api.sample(), Put, User { id: 1, name: "foo".into() });
/// ```
pub fn create_handler<E, M>(endpoint: &E, _method: M, response: ResBody<E, M>) -> Handler
where
    E: Invoke<M>,
    M: MethodTag,
{
    Handler::json(M::METHOD, &endpoint.path(), response)
}

/// Build a handler for a method that declares no response body.
///
/// The handler answers `204 No Content`.
///
/// ```
/// use typed_mock::{create_empty_handler, ApiClient, Delete};
///
/// let api = ApiClient::default();
/// let handler = create_empty_handler(&api.users().id(1), Delete);
/// assert_eq!(handler.path(), "/users/1");
/// ```
///
/// Leaving out the fixture is only allowed when there is nothing to return:
///
/// ```compile_fail
/// use typed_mock::{create_empty_handler, ApiClient, Get};
///
/// let api = ApiClient::default();
/// let _ = create_empty_handler(&api.sample(), Get);
/// ```
///
/// ```compile_fail
/// use typed_mock::{create_empty_handler, ApiClient, Put};
///
/// let api = ApiClient::default();
/// let _ = create_empty_handler(&api.sample(), Put);
/// ```
pub fn create_empty_handler<E, M>(endpoint: &E, _method: M) -> Handler
where
    E: Invoke<M, ResBody = ()>,
    M: MethodTag,
{
    Handler::empty(M::METHOD, &endpoint.path())
}

/// Reduce a URL to the path a handler matches on.
///
/// Absolute URLs keep only their path; query strings and fragments are
/// dropped; a trailing `/` is trimmed except on the root.
pub fn normalize_path(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiClient, Delete, Get, Post, User};

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
        }
    }

    async fn body_of(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/sample"), "/sample");
        assert_eq!(normalize_path("/sample/"), "/sample");
        assert_eq!(normalize_path("/sample?limit=10"), "/sample");
        assert_eq!(normalize_path("http://localhost:3000/api/sample?x=1"), "/api/sample");
        assert_eq!(normalize_path("sample"), "/sample");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("http://localhost:3000"), "/");
    }

    #[test]
    fn test_create_handler_binds_method_and_path() {
        let api = ApiClient::new("http://localhost:3000").unwrap();
        let handler = create_handler(&api.sample(), Post, user(1, "foo"));

        assert_eq!(handler.method(), Method::Post);
        assert_eq!(handler.path(), "/sample");
        assert!(handler.matches("POST", "/sample"));
        assert!(!handler.matches("GET", "/sample"));
        assert!(!handler.matches("POST", "/users/1"));
    }

    #[test]
    fn test_handler_ignores_query_when_matching() {
        let api = ApiClient::default();
        let handler = create_handler(&api.sample(), Get, vec![user(1, "foo")]);
        assert!(handler.matches("GET", "/sample?limit=5"));
    }

    #[tokio::test]
    async fn test_handler_responds_with_fixture_json() {
        let api = ApiClient::default();
        let handler = create_handler(&api.sample(), Get, vec![user(1, "foo")]);

        let response = handler.respond();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let body: Vec<User> = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body, vec![user(1, "foo")]);
    }

    #[tokio::test]
    async fn test_handler_responds_repeatedly() {
        let api = ApiClient::default();
        let handler = create_handler(&api.sample(), Post, user(2, "bar"));

        for _ in 0..3 {
            let body: User = serde_json::from_slice(&body_of(handler.respond()).await).unwrap();
            assert_eq!(body, user(2, "bar"));
        }
    }

    #[tokio::test]
    async fn test_empty_handler_responds_no_content() {
        let api = ApiClient::default();
        let handler = create_empty_handler(&api.users().id(1), Delete);

        let response = handler.respond();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_of(response).await.is_empty());
    }

    #[test]
    fn test_with_status_overrides_status() {
        let api = ApiClient::default();
        let handler =
            create_handler(&api.sample(), Post, user(1, "foo")).with_status(StatusCode::CREATED);
        assert_eq!(handler.respond().status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_raw_handler_accepts_any_json() {
        let handler = Handler::raw(
            "/sample",
            Method::Get,
            Some(serde_json::json!("omg")),
        );
        let body = body_of(handler.respond()).await;
        assert_eq!(body, b"\"omg\"");
    }

    #[test]
    fn test_handler_debug_omits_responder() {
        let handler = Handler::raw("/sample", Method::Get, None);
        let debug = format!("{:?}", handler);
        assert!(debug.contains("Handler"));
        assert!(debug.contains("/sample"));
    }
}
