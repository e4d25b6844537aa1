//! `/users/{id}` route.

use async_trait::async_trait;

use crate::api::sample::User;
use crate::client::ApiClient;
use crate::error::Result;
use crate::method::{Delete, Get, Method};
use crate::response::ApiResponse;
use crate::traits::{Endpoint, Invoke, Request};

/// Parent of the `/users/{id}` route; pick a user with [`Users::id`].
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a ApiClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Substitute the user id into the path.
    pub fn id(self, id: u64) -> UserById<'a> {
        UserById {
            client: self.client,
            path: format!("/users/{id}"),
        }
    }
}

/// Descriptor for `/users/{id}`.
///
/// Declares `GET -> User` and `DELETE` with no response body.
#[derive(Debug, Clone)]
pub struct UserById<'a> {
    client: &'a ApiClient,
    path: String,
}

impl UserById<'_> {
    /// `GET /users/{id}`, keeping status and headers.
    pub async fn fetch_get(&self) -> Result<ApiResponse<User>> {
        self.client
            .fetch_json(Method::Get, &self.path, None::<&()>, None::<&()>)
            .await
    }

    /// `DELETE /users/{id}`, keeping status and headers.
    pub async fn fetch_delete(&self) -> Result<ApiResponse<()>> {
        self.client
            .fetch_empty(Method::Delete, &self.path, None::<&()>, None::<&()>)
            .await
    }
}

impl Endpoint for UserById<'_> {
    fn path(&self) -> String {
        self.client.resolve(&self.path)
    }
}

#[async_trait]
impl<'a> Invoke<Get> for UserById<'a> {
    type Query = ();
    type ReqBody = ();
    type ResBody = User;

    async fn invoke(&self, _request: Request) -> Result<User> {
        Ok(self.fetch_get().await?.into_body())
    }
}

#[async_trait]
impl<'a> Invoke<Delete> for UserById<'a> {
    type Query = ();
    type ReqBody = ();
    type ResBody = ();

    async fn invoke(&self, _request: Request) -> Result<()> {
        self.fetch_delete().await?;
        Ok(())
    }
}
