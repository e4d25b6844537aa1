//! Endpoint descriptors for the sample API.
//!
//! Each route gets a descriptor type that borrows the [`ApiClient`] for its
//! prefix and transport, and implements [`Invoke`](crate::Invoke) for every
//! method the route declares. Routes with a path parameter are reached in
//! two steps (`api.users().id(1)`), the parameter being substituted into
//! the path as a plain string.

pub mod sample;
pub mod users;

use crate::client::ApiClient;

pub use sample::{GetQuery, PostBody, Sample, User};
pub use users::{UserById, Users};

impl ApiClient {
    /// `/sample`
    pub fn sample(&self) -> Sample<'_> {
        Sample::new(self)
    }

    /// `/users/{id}`
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }
}
