use base64::{Engine as _, engine::general_purpose};

use super::error::MediaError;

/// MIME type used in data URIs when the stored content type is not an image type.
const FALLBACK_DATA_URI_TYPE: &str = "image/jpeg";

/// Text forms of a stored image, ready to embed in a JSON response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoded {
    /// Standard-alphabet, padded base64 of the raw bytes.
    pub base64: String,
    /// `data:<type>;base64,<payload>` URI for inline display.
    pub data_uri: String,
}

/// Encode stored image bytes for inline display.
///
/// Nothing is cached; every call encodes the full byte sequence.
pub fn transcode(bytes: &[u8], content_type: &str) -> Result<Transcoded, MediaError> {
    if bytes.is_empty() {
        return Err(MediaError::EmptyImage);
    }

    let base64 = general_purpose::STANDARD.encode(bytes);
    let uri_type = if content_type.starts_with("image/") {
        content_type
    } else {
        FALLBACK_DATA_URI_TYPE
    };
    let data_uri = format!("data:{uri_type};base64,{base64}");

    Ok(Transcoded { base64, data_uri })
}
