//! Assembly of transport-level requests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::FetchError;
use crate::header::Header;
use crate::method::Method;

/// Fixed timeout applied to every attempt.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds a transport request from its parts. Headers are flattened into a
/// map, last occurrence of a duplicate name wins. Purely a constructor; no
/// validation happens here beyond what the HTTP types require, and the only
/// way to fail is a `Header::Custom` part the wire format cannot carry.
pub(crate) fn build(
    url: Url,
    headers: &[Header],
    method: Method,
    body: Option<Vec<u8>>,
) -> Result<reqwest::Request, FetchError> {
    let mut header_map = HeaderMap::with_capacity(headers.len());
    for header in headers {
        let (name, value) = header.header();
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| FetchError::InvalidHeader(format!("name {:?}: {}", name, err)))?;
        let value = HeaderValue::from_str(&value)
            .map_err(|err| FetchError::InvalidHeader(format!("value for {}: {}", name, err)))?;
        header_map.insert(name, value);
    }

    let mut request = reqwest::Request::new(method.into(), url);
    *request.headers_mut() = header_map;
    *request.body_mut() = body.map(reqwest::Body::from);
    *request.timeout_mut() = Some(REQUEST_TIMEOUT);
    Ok(request)
}
