use thiserror::Error;

/// Errors raised while classifying or transcoding stored image bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    /// The upload declares (or is named as) something other than an image.
    #[error("expected an image upload, got '{0}'")]
    NotAnImage(String),
    /// The stored image has no bytes to encode.
    #[error("stored image is empty")]
    EmptyImage,
}
