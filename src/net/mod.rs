//! External collaborators of the fetch orchestrator.
//!
//! The transport, the reachability check and the cookie store are trait
//! seams so they can be substituted in tests. Default implementations back
//! them with reqwest, a TCP probe and the shared reqwest cookie jar.

mod connectivity;
mod cookies;
mod transport;

pub use connectivity::SystemConnectivity;
pub use cookies::JarCookies;
pub use transport::ClientTransport;

use std::collections::HashMap;

use async_trait::async_trait;

/// The underlying HTTP client, responsible for connections, TLS and the
/// byte-level exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one full request/response exchange.
    ///
    /// Implementations resolve to the HTTP flavor of response for every HTTP
    /// request; reqwest guarantees this statically, so callers never check.
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error>;
}

/// A boolean reachability check, consulted once per fetch call before any
/// request is built.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_reachable(&self) -> bool;
}

/// Read-only view of a cookie store, keyed by host.
#[cfg_attr(test, mockall::automock)]
pub trait CookieLookup: Send + Sync {
    /// All cookies stored for the given host, as name/value pairs.
    fn cookies_for(&self, host: &str) -> HashMap<String, String>;
}
