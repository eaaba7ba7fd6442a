//! The fetch orchestrator: connectivity gate, bounded retry, delivery.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::Client;
use reqwest::cookie::Jar;
use url::Url;

use crate::error::FetchError;
use crate::header::Header;
use crate::method::Method;
use crate::net::{
    ClientTransport, Connectivity, CookieLookup, JarCookies, SystemConnectivity, Transport,
};
use crate::request;
use crate::response::{Response, STATUS_NO_CONNECTION, STATUS_NO_STATUS};

/// Attempts per call. The first 2xx response wins; otherwise the last
/// attempt's response is delivered.
pub const MAX_ATTEMPTS: usize = 3;

/// The fetch entry point: a cloneable handle over the transport, the
/// reachability check and the cookie store.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    connectivity: Arc<dyn Connectivity>,
    cookies: Arc<dyn CookieLookup>,
}

impl Fetcher {
    /// Creates a fetcher over the default stack: a reqwest client writing
    /// into a shared cookie jar, and the TCP-probe reachability check.
    ///
    /// Panics when the TLS backend cannot be initialized, the same contract
    /// as `reqwest::Client::new`.
    pub fn new() -> Self {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .build()
            .expect("failed to initialize HTTP client");

        Self::with_parts(
            Arc::new(ClientTransport::new(client)),
            Arc::new(SystemConnectivity::new()),
            Arc::new(JarCookies::new(jar)),
        )
    }

    /// Creates a fetcher from explicit collaborators.
    pub fn with_parts(
        transport: Arc<dyn Transport>,
        connectivity: Arc<dyn Connectivity>,
        cookies: Arc<dyn CookieLookup>,
    ) -> Self {
        Self {
            transport,
            connectivity,
            cookies,
        }
    }

    /// The cookie store responses can be queried against, see
    /// [`Response::cookies`].
    pub fn cookie_store(&self) -> &Arc<dyn CookieLookup> {
        &self.cookies
    }

    /// Fetches `url`, delivering the outcome as a [`Response`].
    ///
    /// When the network is unreachable no request is made and the response
    /// carries [`STATUS_NO_CONNECTION`]. Otherwise up to [`MAX_ATTEMPTS`]
    /// sequential attempts are made against the transport, returning as soon
    /// as one of them is `ok`. Attempts are not delayed and every transport
    /// failure consumes one attempt, whatever its cause.
    #[tracing::instrument(skip(self, headers, body))]
    pub async fn fetch(
        &self,
        url: Url,
        headers: &[Header],
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Response {
        if !self.connectivity.is_reachable().await {
            warn!("network unreachable, {} {} not attempted", method, url);
            return Response::failed(url, FetchError::NoConnection, STATUS_NO_CONNECTION);
        }

        let mut attempt = 1;
        loop {
            debug!("{} {} (attempt {}/{})", method, url, attempt, MAX_ATTEMPTS);

            let response = match request::build(url.clone(), headers, method, body.clone()) {
                Ok(request) => self.attempt(&url, request).await,
                // Building is deterministic; a request the wire format
                // cannot carry will not improve on retry.
                Err(err) => return Response::failed(url, err, STATUS_NO_STATUS),
            };

            if response.ok() || attempt == MAX_ATTEMPTS {
                return response;
            }

            match response.error() {
                Some(err) => warn!(
                    "{} {}: attempt {}/{} failed ({}), retrying...",
                    method, url, attempt, MAX_ATTEMPTS, err
                ),
                None => warn!(
                    "{} {}: attempt {}/{} returned status {}, retrying...",
                    method,
                    url,
                    attempt,
                    MAX_ATTEMPTS,
                    response.status()
                ),
            }
            attempt += 1;
        }
    }

    /// Like [`fetch`](Fetcher::fetch), parsing the URL string first. A
    /// malformed URL is an ordinary error, not a panic.
    pub async fn fetch_str(
        &self,
        url: &str,
        headers: &[Header],
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Result<Response, FetchError> {
        let url = Url::parse(url)?;
        Ok(self.fetch(url, headers, method, body).await)
    }

    /// Convenience for the all-defaults call shape: GET, no headers, no body.
    pub async fn get(&self, url: Url) -> Response {
        self.fetch(url, &[], Method::Get, None).await
    }

    /// Dispatches the fetch onto a background task and returns immediately.
    /// `callback` is invoked exactly once with the final response. Must be
    /// called from within a tokio runtime.
    pub fn fetch_with_callback<F>(
        &self,
        url: Url,
        headers: &[Header],
        method: Method,
        body: Option<Vec<u8>>,
        callback: F,
    ) where
        F: FnOnce(Response) + Send + 'static,
    {
        let fetcher = self.clone();
        let headers = headers.to_vec();
        tokio::spawn(async move {
            callback(fetcher.fetch(url, &headers, method, body).await);
        });
    }

    /// Like [`fetch_with_callback`](Fetcher::fetch_with_callback), parsing
    /// the URL string first. On a malformed URL the error is returned
    /// synchronously and the callback is never invoked.
    pub fn fetch_str_with_callback<F>(
        &self,
        url: &str,
        headers: &[Header],
        method: Method,
        body: Option<Vec<u8>>,
        callback: F,
    ) -> Result<(), FetchError>
    where
        F: FnOnce(Response) + Send + 'static,
    {
        let url = Url::parse(url)?;
        self.fetch_with_callback(url, headers, method, body, callback);
        Ok(())
    }

    /// Blocks the calling thread until the fetch completes. Must not be
    /// called from within an async runtime.
    pub fn fetch_blocking(
        &self,
        url: Url,
        headers: &[Header],
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Response {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build fetch runtime");
        runtime.block_on(self.fetch(url, headers, method, body))
    }

    /// Blocking form of [`fetch_str`](Fetcher::fetch_str).
    pub fn fetch_str_blocking(
        &self,
        url: &str,
        headers: &[Header],
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Result<Response, FetchError> {
        let url = Url::parse(url)?;
        Ok(self.fetch_blocking(url, headers, method, body))
    }

    /// One exchange against the transport, with every outcome folded into a
    /// [`Response`].
    async fn attempt(&self, url: &Url, request: reqwest::Request) -> Response {
        let raw = match self.transport.execute(request).await {
            Ok(raw) => raw,
            Err(err) => {
                return Response::failed(url.clone(), FetchError::Transport(err), STATUS_NO_STATUS);
            }
        };

        let status = raw.status();
        let final_url = raw.url().clone();
        let headers = raw.headers().clone();

        match raw.bytes().await {
            Ok(body) => Response::completed(final_url, Some(body.to_vec()), status, &headers),
            Err(err) => {
                Response::failed(url.clone(), FetchError::Transport(err), STATUS_NO_STATUS)
            }
        }
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
