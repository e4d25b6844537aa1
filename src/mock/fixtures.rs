//! Test data fixtures for the mock server.
//!
//! Provides factory functions for users and the default handler list.

use super::handler::{create_empty_handler, create_handler, Handler};
use crate::client::ApiClient;
use crate::method::{Delete, Get, Post};
use crate::User;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a user.
    pub fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
        }
    }

    /// The user list served by `GET /sample`.
    pub fn users() -> Vec<User> {
        vec![Self::user(1, "foo")]
    }
}

/// Handlers for every declared route of the sample API.
///
/// Paths are resolved with `api`'s prefix; pass [`ApiClient::default`] for
/// relative paths.
pub fn default_handlers(api: &ApiClient) -> Vec<Handler> {
    let user = api.users().id(1);

    vec![
        create_handler(&api.sample(), Get, Fixtures::users()),
        create_handler(&api.sample(), Post, Fixtures::user(1, "foo")),
        create_handler(&user, Get, Fixtures::user(1, "foo")),
        create_empty_handler(&user, Delete),
    ]
}
