//! Mock API server.
//!
//! Provides an axum-based HTTP server that answers requests from an ordered
//! list of [`Handler`]s.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method as HttpMethod, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::handler::Handler;
use crate::config::{ServerOptions, UnhandledRequest};
use crate::error::Result;

/// Handlers and options shared with the request dispatcher.
struct ServerState {
    handlers: Arc<[Handler]>,
    options: ServerOptions,
}

/// A mock API server for testing.
///
/// All handlers are registered at start-up and never change afterwards.
/// For each request the first handler, in registration order, whose method
/// and path match answers it.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Registered handlers, in order.
    handlers: Arc<[Handler]>,
}

impl MockServer {
    /// Start a server with the given handlers and default options.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if no local port can be bound.
    pub async fn start<I>(handlers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Handler>,
    {
        Self::start_with(handlers, ServerOptions::default()).await
    }

    /// Start a server with the given handlers and options.
    ///
    /// # Errors
    ///
    /// Returns an error if no local port can be bound.
    pub async fn start_with<I>(handlers: I, options: ServerOptions) -> Result<Self>
    where
        I: IntoIterator<Item = Handler>,
    {
        let handlers: Arc<[Handler]> = handlers.into_iter().collect();
        let state = Arc::new(ServerState {
            handlers: handlers.clone(),
            options,
        });
        let app = Self::create_router(state);

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!(error = %err, "mock server stopped");
            }
        });

        tracing::info!(%addr, handlers = handlers.len(), "mock server listening");

        Ok(Self {
            url: format!("http://{}", addr),
            handle,
            handlers,
        })
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating an `ApiClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The registered handlers, in dispatch order.
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Every request goes through the dispatcher.
    fn create_router(state: Arc<ServerState>) -> Router {
        Router::new().fallback(dispatch).with_state(state)
    }
}

/// Answer a request with the first matching handler.
async fn dispatch(
    State(state): State<Arc<ServerState>>,
    method: HttpMethod,
    uri: Uri,
) -> Response {
    let path = uri.path();

    match state
        .handlers
        .iter()
        .find(|handler| handler.matches(method.as_str(), path))
    {
        Some(handler) => {
            tracing::debug!(%method, path, "request handled by mock");
            handler.respond()
        }
        None => unhandled(state.options.on_unhandled, &method, path),
    }
}

fn unhandled(strategy: UnhandledRequest, method: &HttpMethod, path: &str) -> Response {
    let body = Json(serde_json::json!({
        "error": "Unhandled request",
        "message": format!("No mock handler for {} {}", method, path)
    }));

    match strategy {
        UnhandledRequest::Bypass => (StatusCode::NOT_FOUND, body).into_response(),
        UnhandledRequest::Warn => {
            tracing::warn!(%method, path, "request matched no mock handler");
            (StatusCode::NOT_FOUND, body).into_response()
        }
        UnhandledRequest::Error => {
            tracing::error!(%method, path, "request matched no mock handler");
            (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_handler, ApiClient, Get, Invoke, Request, User};

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let handlers = vec![create_handler(
            &ApiClient::default().sample(),
            Get,
            vec![user(1, "foo")],
        )];
        let server = MockServer::start(handlers).await.unwrap();

        let response = reqwest::Client::new()
            .get(format!("{}/sample", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        let users: Vec<User> = response.json().await.unwrap();
        assert_eq!(users, vec![user(1, "foo")]);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_invoke_against_server() {
        let handlers = vec![create_handler(
            &ApiClient::default().sample(),
            Get,
            vec![user(1, "foo"), user(2, "bar")],
        )];
        let server = MockServer::start(handlers).await.unwrap();
        let api = ApiClient::new(server.url()).unwrap();

        let users = Invoke::<Get>::invoke(&api.sample(), Request::default())
            .await
            .expect("Failed to get users");

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "bar");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server_returns_not_found() {
        let server = MockServer::start(Vec::new()).await.unwrap();

        let response = reqwest::Client::new()
            .get(format!("{}/sample", server.url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_handlers_are_kept_in_order() {
        let api = ApiClient::default();
        let handlers = vec![
            create_handler(&api.sample(), Get, vec![user(1, "first")]),
            create_handler(&api.sample(), Get, vec![user(2, "second")]),
        ];
        let server = MockServer::start(handlers).await.unwrap();

        assert_eq!(server.handlers().len(), 2);
        assert_eq!(server.handlers()[0].path(), "/sample");

        server.shutdown().await;
    }
}
