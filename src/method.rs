//! HTTP method tags.
//!
//! [`Method`] is the runtime value; the unit structs ([`Get`], [`Post`], ...)
//! carry the same verb at the type level so an endpoint can declare, per
//! method, what it accepts and returns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of HTTP verbs a mock handler can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    /// Upper-case wire name (e.g. `"GET"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// Whether a request's method string names this verb.
    pub fn matches(&self, method: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(method)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Type-level method tag.
///
/// Endpoints implement [`Invoke<M>`](crate::Invoke) once per tag they
/// support, so passing a tag the endpoint never declared fails to compile.
pub trait MethodTag: Copy + Send + Sync + 'static {
    /// The runtime verb this tag stands for.
    const METHOD: Method;
}

macro_rules! method_tags {
    ($($(#[$doc:meta])* $tag:ident => $method:ident,)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $tag;

            impl MethodTag for $tag {
                const METHOD: Method = Method::$method;
            }
        )*
    };
}

method_tags! {
    /// `GET` tag.
    Get => Get,
    /// `POST` tag.
    Post => Post,
    /// `PUT` tag.
    Put => Put,
    /// `DELETE` tag.
    Delete => Delete,
    /// `PATCH` tag.
    Patch => Patch,
    /// `HEAD` tag.
    Head => Head,
    /// `OPTIONS` tag.
    Options => Options,
}
