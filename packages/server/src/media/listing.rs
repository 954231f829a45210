use common::media::transcode;
use serde::Serialize;

use super::resource::MediaResource;

/// The encoded forms of a stored image, appended to each listed record.
///
/// When the stored image cannot be encoded, `imageError` is set and the
/// encoded fields are omitted; the rest of the list is unaffected.
#[derive(Debug, Default, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    /// Base64 of the stored image bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    /// `data:` URI ready for an `<img src>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data_uri: Option<String>,
    /// Why the image could not be encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_error: Option<String>,
}

impl EncodedImage {
    /// Transcode the stored image of `model`, isolating any failure to this record.
    pub fn of<R: MediaResource>(model: &R::Model) -> Self {
        let (bytes, content_type) = R::image(model);

        match transcode(bytes, content_type) {
            Ok(t) => Self {
                image_base64: Some(t.base64),
                image_data_uri: Some(t.data_uri),
                image_error: None,
            },
            Err(e) => {
                tracing::warn!(
                    resource = R::SCHEMA.name,
                    id = R::id(model),
                    error = %e,
                    "Failed to transcode stored image"
                );
                Self {
                    image_error: Some(e.to_string()),
                    ..Default::default()
                }
            }
        }
    }
}
