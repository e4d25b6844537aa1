//! Path resolution for endpoint descriptors.

/// A single API route.
///
/// The resolved path is the client's prefix followed by the route path,
/// with any path parameters already substituted.
///
/// # Example
///
/// ```
/// use typed_mock::{ApiClient, Endpoint};
///
/// let api = ApiClient::new("https://api.example.com/")?;
/// assert_eq!(api.sample().path(), "https://api.example.com/sample");
/// assert_eq!(api.users().id(7).path(), "https://api.example.com/users/7");
/// # Ok::<(), typed_mock::Error>(())
/// ```
pub trait Endpoint: Sync {
    /// Resolve the endpoint's URL.
    fn path(&self) -> String;
}
