//! The response value a fetch call resolves to.

mod encoding;

pub use encoding::TextEncoding;

use std::collections::HashMap;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::FetchError;
use crate::net::CookieLookup;

/// Sentinel status of a response constructed without a network status.
pub const STATUS_NO_STATUS: i32 = -1;

/// Sentinel status of a response produced when the network was unreachable.
pub const STATUS_NO_CONNECTION: i32 = -3;

/// The outcome of a fetch call.
///
/// Exactly one `Response` is produced per call and it is never mutated
/// afterwards. A completed HTTP exchange carries the status, headers,
/// resolved URL and body bytes; a failed one carries a sentinel status and
/// the [`FetchError`], nothing else.
#[derive(Debug)]
pub struct Response {
    headers: HashMap<String, String>,
    status: i32,
    url: Url,
    error: Option<FetchError>,
    body: Option<Vec<u8>>,
}

impl Response {
    /// Builds a response from a completed HTTP exchange. Duplicate header
    /// names collapse to the last value the transport reported.
    pub(crate) fn completed(
        url: Url,
        body: Option<Vec<u8>>,
        status: StatusCode,
        raw_headers: &HeaderMap,
    ) -> Self {
        let mut headers = HashMap::new();
        for (name, value) in raw_headers {
            headers.insert(
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }

        Response {
            headers,
            status: i32::from(status.as_u16()),
            url,
            error: None,
            body,
        }
    }

    /// Builds a response for an attempt that never produced a network
    /// status. `status` is one of the sentinel constants.
    pub(crate) fn failed(url: Url, error: FetchError, status: i32) -> Self {
        Response {
            headers: HashMap::new(),
            status,
            url,
            error: Some(error),
            body: None,
        }
    }

    /// True when the status is in the 200–299 range.
    pub fn ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// The HTTP status code, or a negative sentinel when no exchange
    /// completed ([`STATUS_NO_STATUS`], [`STATUS_NO_CONNECTION`]).
    pub fn status(&self) -> i32 {
        self.status
    }

    /// The resolved response URL when the exchange completed, the request
    /// URL otherwise.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The response headers, collapsed to one value per name.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// The failure that produced this response, if any. Absent for every
    /// completed exchange, including non-2xx ones.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// The raw body bytes. `None` iff the attempt failed.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Decodes the body as UTF-8 text.
    pub fn text(&self) -> Option<String> {
        self.text_with(TextEncoding::Utf8)
    }

    /// Decodes the body under the given encoding. `None` when there is no
    /// body or the bytes are not valid under that encoding.
    pub fn text_with(&self, encoding: TextEncoding) -> Option<String> {
        encoding.decode(self.body.as_deref()?)
    }

    /// Parses the body as JSON into `T`. Best effort: any parse or shape
    /// mismatch is `None`, not an error.
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_slice(self.body.as_deref()?).ok()
    }

    /// The cookies `store` holds for this response's host. Empty when the
    /// URL has no host component.
    pub fn cookies(&self, store: &dyn CookieLookup) -> HashMap<String, String> {
        match self.url.host_str() {
            Some(host) => store.cookies_for(host),
            None => HashMap::new(),
        }
    }
}
