//! HTTP request methods.

use std::fmt;

/// The HTTP verbs a request can be issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Requests a representation of the specified resource.
    #[default]
    Get,
    /// Sends data to the server; the body's media type is indicated by the Content-Type header.
    Post,
    /// Creates a new resource or replaces the target resource with the request payload.
    Put,
    /// Applies partial modifications to a resource.
    Patch,
    /// Deletes the specified resource.
    Delete,
    /// Describes the communication options for the target resource.
    Options,
    /// Requests the headers a GET for the same resource would return.
    Head,
}

impl Method {
    /// Returns the verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
        }
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
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Options => reqwest::Method::OPTIONS,
            Method::Head => reqwest::Method::HEAD,
        }
    }
}
