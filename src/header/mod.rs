//! Typed HTTP request headers.

mod authorization;
mod content_encoding;
mod content_type;

pub use authorization::Authorization;
pub use content_encoding::ContentEncoding;
pub use content_type::ContentType;

/// A single HTTP request header, with typed values for the common ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// Advertises which media types the client is able to understand.
    Accept(ContentType),
    /// Advertises which content codings the client is able to understand.
    AcceptEncoding(ContentEncoding),
    /// Advertises which languages the client prefers.
    AcceptLanguage(String),
    /// Advertises which character encodings the client understands.
    AcceptCharset(String),
    /// Credentials to authenticate the client with the server, rendered as
    /// `<scheme> <credentials>`.
    Authorization(Authorization, String),
    /// Stored HTTP cookies previously sent by the server.
    Cookie(String),
    /// The coding applied to the request body.
    ContentEncoding(ContentEncoding),
    /// The language(s) intended for the audience of the body.
    ContentLanguage(String),
    /// The size of the request body in bytes.
    ContentLength(u64),
    /// The media type of the request body.
    ContentType(ContentType),
    /// The address of the page the request originates from.
    Referer(String),
    /// Identifies the requesting client software.
    UserAgent(String),
    /// Any other header, as a raw `(name, value)` pair. Neither part is
    /// validated or escaped.
    Custom(String, String),
}

impl Header {
    /// The header's field name. Non-empty for every built-in variant.
    pub fn name(&self) -> &str {
        match self {
            Header::Accept(_) => "Accept",
            Header::AcceptEncoding(_) => "Accept-Encoding",
            Header::AcceptLanguage(_) => "Accept-Language",
            Header::AcceptCharset(_) => "Accept-Charset",
            Header::Authorization(_, _) => "Authorization",
            Header::Cookie(_) => "Cookie",
            Header::ContentEncoding(_) => "Content-Encoding",
            Header::ContentLanguage(_) => "Content-Language",
            Header::ContentLength(_) => "Content-Length",
            Header::ContentType(_) => "Content-Type",
            Header::Referer(_) => "Referer",
            Header::UserAgent(_) => "User-Agent",
            Header::Custom(name, _) => name,
        }
    }

    /// Projects the header to its wire-format `(name, value)` pair.
    pub fn header(&self) -> (String, String) {
        let value = match self {
            Header::Accept(value) => value.to_string(),
            Header::AcceptEncoding(value) => value.to_string(),
            Header::AcceptLanguage(value) => value.clone(),
            Header::AcceptCharset(value) => value.clone(),
            Header::Authorization(scheme, credentials) => {
                format!("{} {}", scheme, credentials)
            }
            Header::Cookie(value) => value.clone(),
            Header::ContentEncoding(value) => value.to_string(),
            Header::ContentLanguage(value) => value.clone(),
            Header::ContentLength(value) => value.to_string(),
            Header::ContentType(value) => value.to_string(),
            Header::Referer(value) => value.clone(),
            Header::UserAgent(value) => value.clone(),
            Header::Custom(_, value) => value.clone(),
        };
        (self.name().to_string(), value)
    }
}
