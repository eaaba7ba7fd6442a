//! Failure values carried inside a [`Response`](crate::response::Response).

use std::fmt;

/// Everything that can go wrong while fetching.
///
/// Apart from [`InvalidUrl`](FetchError::InvalidUrl), which the `_str` entry
/// points return directly, these are delivered inside the final `Response`
/// rather than as an error return.
#[derive(Debug)]
pub enum FetchError {
    /// The network was not reachable; no request was attempted.
    NoConnection,
    /// A URL string could not be parsed.
    InvalidUrl(url::ParseError),
    /// A header name or value could not be represented on the wire. Only
    /// reachable through `Header::Custom` parts.
    InvalidHeader(String),
    /// The transport failed to complete the exchange.
    Transport(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NoConnection => {
                write!(f, "no network connection")
            }
            FetchError::InvalidUrl(err) => {
                write!(f, "invalid URL: {}", err)
            }
            FetchError::InvalidHeader(detail) => {
                write!(f, "invalid header: {}", detail)
            }
            FetchError::Transport(err) => {
                write!(f, "transport error: {}", err)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::NoConnection | FetchError::InvalidHeader(_) => None,
            FetchError::InvalidUrl(err) => Some(err),
            FetchError::Transport(err) => Some(err),
        }
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}
