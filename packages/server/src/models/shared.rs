use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::error::AppError;

/// Plain confirmation returned by delete endpoints.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Blog deleted successfully")]
    pub message: String,
}

/// Parse a publication date given as `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep only their calendar date in their own offset.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            AppError::Validation(format!(
                "{field} must be a date (YYYY-MM-DD) or an RFC 3339 timestamp"
            ))
        })
}

/// Validate a trimmed title-like field (at most 256 Unicode characters).
pub fn validate_short_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().chars().count() > 256 {
        return Err(AppError::Validation(format!(
            "{field} must be at most 256 characters"
        )));
    }
    Ok(())
}
