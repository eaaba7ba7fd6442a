//! Content codings for the Accept-Encoding and Content-Encoding headers.

use std::fmt;

/// The standard content codings, plus a verbatim escape hatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEncoding {
    /// LZ77 with a 32-bit CRC, the format of the UNIX gzip program.
    Gzip,
    /// The zlib structure (RFC 1950) with the deflate algorithm (RFC 1951).
    Deflate,
    /// No compression or modification.
    Identity,
    /// The Brotli algorithm.
    Br,
    /// Accept any encoding (`*`).
    Any,
    /// A verbatim coding list, e.g. `deflate, gzip;q=1.0, *;q=0.5`.
    Custom(String),
}

impl fmt::Display for ContentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentEncoding::Gzip => f.write_str("gzip"),
            ContentEncoding::Deflate => f.write_str("deflate"),
            ContentEncoding::Identity => f.write_str("identity"),
            ContentEncoding::Br => f.write_str("br"),
            ContentEncoding::Any => f.write_str("*"),
            ContentEncoding::Custom(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_codings() {
        assert_eq!(ContentEncoding::Gzip.to_string(), "gzip");
        assert_eq!(ContentEncoding::Deflate.to_string(), "deflate");
        assert_eq!(ContentEncoding::Identity.to_string(), "identity");
        assert_eq!(ContentEncoding::Br.to_string(), "br");
        assert_eq!(ContentEncoding::Any.to_string(), "*");
    }

    #[test]
    fn test_custom_is_verbatim() {
        assert_eq!(
            ContentEncoding::Custom("deflate, gzip;q=1.0, *;q=0.5".to_string()).to_string(),
            "deflate, gzip;q=1.0, *;q=0.5"
        );
        assert_eq!(ContentEncoding::Custom(String::new()).to_string(), "");
    }
}
