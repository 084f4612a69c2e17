//! JWT-based authentication extractor for Axum handlers.

use arbolado_core::error::CoreError;
use arbolado_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a `Bearer` token in the
/// `Authorization` header.
///
/// A missing header is a 401; a malformed, invalid, or expired token is a
/// 403, matching the contract the front end expects.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub email: String,
    /// The user's role name (`"admin"` or `"operador"`).
    pub rol: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Token de acceso requerido".into()))
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Core(CoreError::Forbidden("Token inválido".into())))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| AppError::Core(CoreError::Forbidden("Token inválido".into())))?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            rol: claims.rol,
        })
    }
}
