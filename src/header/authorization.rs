//! Schemes for the Authorization header.

use std::fmt;

/// The authorization scheme carried in an Authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// Base64-encoded credentials (RFC 7617).
    Basic,
    /// Token based access to OAuth 2.0-protected resources (RFC 6750).
    Bearer,
    /// Digest access authentication (RFC 7616).
    Digest,
    /// A verbatim scheme name.
    Custom(String),
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authorization::Basic => f.write_str("Basic"),
            Authorization::Bearer => f.write_str("Bearer"),
            Authorization::Digest => f.write_str("Digest"),
            Authorization::Custom(scheme) => f.write_str(scheme),
        }
    }
}
