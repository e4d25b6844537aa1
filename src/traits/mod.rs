//! Trait definitions for endpoint descriptors.
//!
//! A descriptor implements [`Endpoint`] for path resolution and
//! [`Invoke<M>`] once per HTTP method it supports, declaring that
//! method's query, request body and response body types.

mod endpoint;
mod invoke;

pub use endpoint::Endpoint;
pub use invoke::{Invoke, Request, ResBody};
