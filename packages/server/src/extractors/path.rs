use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A `Path` wrapper for record identifiers.
///
/// An identifier that does not parse (not a number, out of range) cannot name
/// a stored record, so the rejection becomes `AppError::NotFound` like any
/// other unknown ID.
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Rejected record identifier: {}", e.body_text());
                AppError::NotFound("No record with this identifier".into())
            })?;
        Ok(AppPath(value))
    }
}
