//! Media types for the Accept and Content-Type headers.

use std::fmt;

/// The most common media types, plus open arms for anything else.
///
/// The family arms ([`Application`](ContentType::Application),
/// [`Audio`](ContentType::Audio), [`Image`](ContentType::Image),
/// [`Text`](ContentType::Text), [`Video`](ContentType::Video)) render as
/// `family/subtype`; [`Custom`](ContentType::Custom) renders its value
/// verbatim. Custom values are not validated or escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    Aac,
    Bin,
    Bmp,
    Gif,
    Jpg,
    Png,
    Tif,
    Webp,
    Bz,
    Bz2,
    Gz,
    Zip,
    Css,
    Html,
    Javascript,
    Xhtml,
    Csv,
    Json,
    Plain,
    Xml,
    Ico,
    Mp3,
    Oga,
    Opus,
    Weba,
    Ogv,
    Ts,
    Webm,
    Pdf,
    Ttf,
    Woff,
    Woff2,
    /// An `application/...` subtype, e.g. `Application("x")` renders `application/x`.
    Application(String),
    /// An `audio/...` subtype.
    Audio(String),
    /// An `image/...` subtype.
    Image(String),
    /// A `text/...` subtype.
    Text(String),
    /// A `video/...` subtype.
    Video(String),
    /// A full media type taken verbatim.
    Custom(String),
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Aac => f.write_str("audio/aac"),
            ContentType::Bin => f.write_str("application/octet-stream"),
            ContentType::Bmp => f.write_str("image/bmp"),
            ContentType::Bz => f.write_str("application/x-bzip"),
            ContentType::Bz2 => f.write_str("application/x-bzip2"),
            ContentType::Css => f.write_str("text/css"),
            ContentType::Csv => f.write_str("text/csv"),
            ContentType::Gz => f.write_str("application/gzip"),
            ContentType::Gif => f.write_str("image/gif"),
            ContentType::Html => f.write_str("text/html"),
            ContentType::Ico => f.write_str("image/vnd.microsoft.icon"),
            ContentType::Jpg => f.write_str("image/jpeg"),
            ContentType::Javascript => f.write_str("text/javascript"),
            ContentType::Json => f.write_str("application/json"),
            ContentType::Mp3 => f.write_str("audio/mpeg"),
            ContentType::Oga => f.write_str("audio/ogg"),
            ContentType::Ogv => f.write_str("video/ogg"),
            ContentType::Opus => f.write_str("audio/opus"),
            ContentType::Png => f.write_str("image/png"),
            ContentType::Pdf => f.write_str("application/pdf"),
            ContentType::Tif => f.write_str("image/tiff"),
            ContentType::Ts => f.write_str("video/mp2t"),
            ContentType::Ttf => f.write_str("font/ttf"),
            ContentType::Plain => f.write_str("text/plain"),
            ContentType::Weba => f.write_str("audio/webm"),
            ContentType::Webm => f.write_str("video/webm"),
            ContentType::Webp => f.write_str("image/webp"),
            ContentType::Woff => f.write_str("font/woff"),
            ContentType::Woff2 => f.write_str("font/woff2"),
            ContentType::Xhtml => f.write_str("application/xhtml+xml"),
            ContentType::Xml => f.write_str("application/xml"),
            ContentType::Zip => f.write_str("application/zip"),
            ContentType::Application(subtype) => write!(f, "application/{}", subtype),
            ContentType::Audio(subtype) => write!(f, "audio/{}", subtype),
            ContentType::Image(subtype) => write!(f, "image/{}", subtype),
            ContentType::Text(subtype) => write!(f, "text/{}", subtype),
            ContentType::Video(subtype) => write!(f, "video/{}", subtype),
            ContentType::Custom(value) => f.write_str(value),
        }
    }
}
