//! Type-safe HTTP mock handlers.
//!
//! Mock fixtures are bound to the endpoint declarations of a generated API
//! client, so a fixture whose shape no longer matches the real response
//! type stops compiling. Drift between mocks and the API contract shows up
//! as a build error at the call site instead of a confusing test failure.
//!
//! # Quick Start
//!
//! ```no_run
//! use typed_mock::mock::MockServer;
//! use typed_mock::{create_handler, ApiClient, Get, Invoke, Post, PostBody, Request, User};
//!
//! #[tokio::main]
//! async fn main() -> typed_mock::Result<()> {
//!     // Descriptors from a client without a base URL resolve to relative paths.
//!     let mocks = ApiClient::default();
//!     let handlers = vec![
//!         create_handler(&mocks.sample(), Get, vec![User { id: 1, name: "foo".into() }]),
//!         create_handler(&mocks.sample(), Post, User { id: 1, name: "foo".into() }),
//!     ];
//!
//!     let server = MockServer::start(handlers).await?;
//!     let api = ApiClient::new(server.url())?;
//!
//!     let created = Invoke::<Post>::invoke(
//!         &api.sample(),
//!         Request::body(PostBody { name: "foo".into() }),
//!     )
//!     .await?;
//!     println!("Created user {}", created.id);
//!
//!     server.shutdown().await;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Endpoint`] - resolve a route's URL
//! - [`Invoke`] - one impl per supported [`MethodTag`], declaring the
//!   method's query, request body and response body types
//! - [`create_handler`] - bind a fixture of type [`ResBody<E, M>`] to an
//!   endpoint and method
//! - [`mock::MockServer`] - answer requests from an ordered handler list
//!
//! Endpoint descriptors for the sample API live in [`api`] and are reached
//! from an [`ApiClient`] (`api.sample()`, `api.users().id(1)`).

pub mod api;
mod client;
mod config;
mod error;
mod method;
pub mod mock;
mod response;
mod traits;

// Re-export core types
pub use client::ApiClient;
pub use config::{ClientConfig, ServerOptions, UnhandledRequest, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use response::ApiResponse;

// Re-export method tags
pub use method::{Delete, Get, Head, Method, MethodTag, Options, Patch, Post, Put};

// Re-export traits
pub use traits::{Endpoint, Invoke, Request, ResBody};

// Re-export models
pub use api::{GetQuery, PostBody, Sample, User, UserById, Users};

// Re-export the handler factory
pub use mock::{create_empty_handler, create_handler, Handler};
