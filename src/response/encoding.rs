//! Text encodings a response body can be decoded under.

/// The encodings [`Response::text_with`](crate::response::Response::text_with)
/// understands. Decoding is strict: bytes that are not valid under the chosen
/// encoding decode to `None`, never to a replacement character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// UTF-16, honoring a byte order mark when present and assuming
    /// little-endian otherwise.
    Utf16,
    Utf16Le,
    Utf16Be,
    /// ISO-8859-1; total, every byte sequence decodes.
    Latin1,
    /// Strict 7-bit ASCII.
    Ascii,
}

impl TextEncoding {
    /// Decodes `bytes` under this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).ok(),
            TextEncoding::Utf16 => match bytes {
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, true),
                [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, false),
                _ => decode_utf16(bytes, false),
            },
            TextEncoding::Utf16Le => decode_utf16(bytes, false),
            TextEncoding::Utf16Be => decode_utf16(bytes, true),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Ascii => {
                if bytes.is_ascii() {
                    Some(bytes.iter().map(|&b| char::from(b)).collect())
                } else {
                    None
                }
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian {
                u16::from_be_bytes(pair)
            } else {
                u16::from_le_bytes(pair)
            }
        })
        .collect();
    String::from_utf16(&units).ok()
}
