//! `data:` URI encoding and parsing.

use super::types::ImageError;
use base64::{Engine as _, engine::general_purpose};
use std::fmt;
use std::str::FromStr;

/// MIME type of every snapshot produced by the editors.
pub const PNG_MIME: &str = "image/png";

/// A self-contained encoded image, `data:<mime>;base64,<payload>`.
///
/// The payload is kept decoded; formatting re-encodes it as base64.
#[derive(Clone, PartialEq, Eq)]
pub struct DataUri {
    mime: String,
    bytes: Vec<u8>,
}

impl DataUri {
    /// Wraps raw encoded bytes with their MIME type.
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Wraps PNG bytes.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self::new(PNG_MIME, bytes)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// The decoded payload.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data:{};base64,{}",
            self.mime,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

// Payloads can be megabytes long; keep debug output readable.
impl fmt::Debug for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataUri")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl FromStr for DataUri {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| ImageError::InvalidDataUri("missing 'data:' prefix".to_string()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ImageError::InvalidDataUri("missing ',' separator".to_string()))?;

        let mut params = header.split(';');
        let mime = params.next().unwrap_or_default();
        if !params.any(|param| param.eq_ignore_ascii_case("base64")) {
            return Err(ImageError::InvalidDataUri(
                "only base64 payloads are supported".to_string(),
            ));
        }

        let mime = if mime.is_empty() {
            "text/plain"
        } else {
            mime
        };
        let bytes = general_purpose::STANDARD.decode(payload)?;

        Ok(Self::new(mime.to_ascii_lowercase(), bytes))
    }
}
