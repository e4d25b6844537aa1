//! `/sample` route.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Result;
use crate::method::{Get, Method, Post};
use crate::response::ApiResponse;
use crate::traits::{Endpoint, Invoke, Request};

/// Route path, relative to the client prefix.
pub const PATH: &str = "/sample";

/// A user as returned by the sample API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Query parameters accepted by `GET /sample`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetQuery {
    /// Maximum number of users to return.
    pub limit: u32,
}

/// Request body for `POST /sample`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBody {
    pub name: String,
}

/// Descriptor for `/sample`.
///
/// Declares `GET -> Vec<User>` and `POST -> User`.
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a> {
    client: &'a ApiClient,
}

impl<'a> Sample<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /sample`, keeping status and headers.
    pub async fn fetch_get(&self, query: Option<&GetQuery>) -> Result<ApiResponse<Vec<User>>> {
        self.client
            .fetch_json(Method::Get, PATH, query, None::<&()>)
            .await
    }

    /// `POST /sample`, keeping status and headers.
    pub async fn fetch_post(&self, body: &PostBody) -> Result<ApiResponse<User>> {
        self.client
            .fetch_json(Method::Post, PATH, None::<&()>, Some(body))
            .await
    }
}

impl Endpoint for Sample<'_> {
    fn path(&self) -> String {
        self.client.resolve(PATH)
    }
}

#[async_trait]
impl<'a> Invoke<Get> for Sample<'a> {
    type Query = GetQuery;
    type ReqBody = ();
    type ResBody = Vec<User>;

    async fn invoke(&self, request: Request<GetQuery, ()>) -> Result<Vec<User>> {
        Ok(self.fetch_get(request.query.as_ref()).await?.into_body())
    }
}

#[async_trait]
impl<'a> Invoke<Post> for Sample<'a> {
    type Query = ();
    type ReqBody = PostBody;
    type ResBody = User;

    async fn invoke(&self, request: Request<(), PostBody>) -> Result<User> {
        Ok(self.fetch_post(&request.body).await?.into_body())
    }
}
