use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Capability to edit the content catalog, extracted from the
/// `Authorization: Bearer <token>` header.
///
/// Every content handler takes one of these as a parameter; there is no
/// ambient session. The token itself is issued by the login service.
pub struct AdminToken {
    pub subject: String,
}

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenMissing)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::TokenInvalid)?;

        let claims = jwt::verify(&state.config.auth.jwt_secret, token)
            .map_err(|_| AppError::TokenInvalid)?;

        if claims.role != jwt::ADMIN_ROLE {
            return Err(AppError::PermissionDenied);
        }

        Ok(AdminToken {
            subject: claims.sub,
        })
    }
}
