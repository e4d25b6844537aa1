//! Per-method invocation trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::method::MethodTag;
use crate::traits::Endpoint;

/// Arguments for a single invocation.
///
/// `()` stands for "not declared": a `GET` without a request body is a
/// `Request<Query, ()>`, a `POST` without a query is a `Request<(), Body>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request<Q = (), B = ()> {
    /// Optional query parameters.
    pub query: Option<Q>,
    /// Request body.
    pub body: B,
}

impl<Q> Request<Q, ()> {
    /// A body-less request carrying query parameters.
    pub fn query(query: Q) -> Self {
        Self {
            query: Some(query),
            body: (),
        }
    }
}

impl<B> Request<(), B> {
    /// A request carrying only a body.
    pub fn body(body: B) -> Self {
        Self { query: None, body }
    }
}

/// Call one HTTP method of an endpoint.
///
/// Implemented once per supported [`MethodTag`]. The associated types are
/// the endpoint's declaration for that method; [`ResBody`] is what a mock
/// fixture for the method must be.
#[async_trait]
pub trait Invoke<M: MethodTag>: Endpoint {
    /// Query parameters (`()` if none are declared).
    type Query: Serialize + Send + Sync;

    /// Request body (`()` if none is declared).
    type ReqBody: Serialize + Send + Sync;

    /// Response body (`()` if the method returns no content).
    type ResBody: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Send the request and return the response payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body cannot be parsed.
    async fn invoke(&self, request: Request<Self::Query, Self::ReqBody>) -> Result<Self::ResBody>;

    /// Resolve the endpoint's URL with an encoded query string appended.
    ///
    /// No `?` is added when the query encodes to nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be encoded.
    fn path_with_query(&self, query: &Self::Query) -> Result<String> {
        let encoded = serde_qs::to_string(query)?;
        let path = self.path();
        if encoded.is_empty() {
            Ok(path)
        } else {
            Ok(format!("{path}?{encoded}"))
        }
    }
}

/// The response payload type endpoint `E` declares for method `M`.
pub type ResBody<E, M> = <E as Invoke<M>>::ResBody;
