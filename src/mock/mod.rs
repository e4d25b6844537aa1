//! Typed mock handlers and the server that answers with them.
//!
//! Build handlers with [`create_handler`] (or [`create_empty_handler`] for
//! routes without a response body), collect them in the order they should
//! be tried, and hand the list to [`MockServer::start`].
//!
//! # Example
//!
//! ```
//! use typed_mock::mock::{Fixtures, MockServer};
//! use typed_mock::{create_handler, ApiClient, Get, Invoke, Request};
//!
//! #[tokio::main]
//! async fn main() -> typed_mock::Result<()> {
//!     let handlers = vec![create_handler(
//!         &ApiClient::default().sample(),
//!         Get,
//!         Fixtures::users(),
//!     )];
//!
//!     let server = MockServer::start(handlers).await?;
//!     let api = ApiClient::new(server.url())?;
//!
//!     let users = Invoke::<Get>::invoke(&api.sample(), Request::default()).await?;
//!     assert_eq!(users, Fixtures::users());
//!
//!     server.shutdown().await;
//!     Ok(())
//! }
//! ```

mod fixtures;
mod handler;
mod server;

pub use fixtures::{default_handlers, Fixtures};
pub use handler::{create_empty_handler, create_handler, normalize_path, Handler};
pub use server::MockServer;
