use super::error::MediaError;

/// Content type recorded when neither the upload nor its filename says what it is.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Decide the content type to store for an uploaded image.
///
/// The part's declared type wins unless it is missing or the generic
/// `application/octet-stream`, in which case the type is guessed from the
/// filename. Anything that resolves to a known non-image type is rejected.
pub fn resolve_content_type(
    declared: Option<&str>,
    filename: Option<&str>,
) -> Result<String, MediaError> {
    let declared = declared
        .map(essence)
        .filter(|ct| !ct.is_empty() && ct != OCTET_STREAM);

    let resolved = match declared {
        Some(ct) => ct,
        None => filename
            .and_then(|name| mime_guess::from_path(name).first())
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| OCTET_STREAM.to_string()),
    };

    if resolved == OCTET_STREAM || resolved.starts_with("image/") {
        Ok(resolved)
    } else {
        Err(MediaError::NotAnImage(resolved))
    }
}

/// Strip parameters (`; charset=...`) and normalise case.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
