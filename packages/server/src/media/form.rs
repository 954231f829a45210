use std::collections::HashMap;

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;
use common::media::resolve_content_type;

use crate::error::AppError;

use super::schema::ResourceSchema;

/// Name of the single file part on every media form.
pub const IMAGE_FIELD: &str = "image";

/// Optional text part carrying the record version an update was based on.
pub const VERSION_FIELD: &str = "version";

/// Image bytes buffered from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// A fully buffered multipart submission for one resource.
///
/// Text parts are kept only when the resource schema knows them. Blank text
/// parts and empty file parts are treated as not supplied, which is what a
/// browser sends for untouched inputs.
#[derive(Debug, Default)]
pub struct MediaForm {
    fields: HashMap<String, String>,
    image: Option<UploadedImage>,
}

impl MediaForm {
    /// Drain `multipart`, buffering the image in memory up to `max_image_size` bytes.
    pub async fn read(
        mut multipart: Multipart,
        schema: &ResourceSchema,
        max_image_size: u64,
    ) -> Result<Self, AppError> {
        let mut form = MediaForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let image = read_image(field, max_image_size).await?;
                if form.image.is_some() && image.is_some() {
                    return Err(AppError::Validation(
                        "Exactly one 'image' file part is allowed".into(),
                    ));
                }
                if image.is_some() {
                    form.image = image;
                }
            } else if schema.accepts(&name) {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read '{name}': {e}")))?;
                let text = text.trim();
                if !text.is_empty() {
                    form.fields.insert(name, text.to_string());
                }
            }
            // Ignore unknown fields.
        }

        Ok(form)
    }

    /// Trimmed value of a text part, or `None` if absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Like [`MediaForm::text`], but a missing value is a validation error.
    pub fn require(&self, name: &str) -> Result<&str, AppError> {
        self.text(name)
            .ok_or_else(|| AppError::Validation(format!("Missing required field(s): {name}")))
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn take_image(&mut self) -> Option<UploadedImage> {
        self.image.take()
    }

    /// Parse the optional `version` part.
    pub fn version(&self) -> Result<Option<i32>, AppError> {
        self.text(VERSION_FIELD)
            .map(|v| {
                v.parse::<i32>()
                    .map_err(|_| AppError::Validation("version must be an integer".into()))
            })
            .transpose()
    }

    #[cfg(test)]
    pub(crate) fn from_parts<'a>(
        fields: impl IntoIterator<Item = (&'a str, &'a str)>,
        image: Option<UploadedImage>,
    ) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.trim().to_string()))
                .filter(|(_, v)| !v.is_empty())
                .collect(),
            image,
        }
    }
}

/// Buffer one file part. Returns `None` for an empty part, whatever type it declares.
async fn read_image(
    mut field: Field<'_>,
    max_image_size: u64,
) -> Result<Option<UploadedImage>, AppError> {
    let declared = field.content_type().map(str::to_owned);
    let file_name = field.file_name().map(str::to_owned);

    let mut bytes = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if (bytes.len() + chunk.len()) as u64 > max_image_size {
            return Err(AppError::PayloadTooLarge(format!(
                "Image exceeds maximum size of {max_image_size} bytes"
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    if bytes.is_empty() {
        return Ok(None);
    }

    let content_type = resolve_content_type(declared.as_deref(), file_name.as_deref())?;
    Ok(Some(UploadedImage {
        bytes,
        content_type,
    }))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Multipart error: {}", err.body_text()))
    }
}
