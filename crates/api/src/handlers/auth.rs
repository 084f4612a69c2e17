//! Handlers for the `/api/auth` resource (register, login, profile).

use arbolado_core::error::CoreError;
use arbolado_core::roles::{ROL_ADMIN, ROL_OPERADOR};
use arbolado_core::types::DbId;
use arbolado_db::models::usuario::{CreateUsuario, PerfilUsuario, UsuarioPublico};
use arbolado_db::repositories::UsuarioRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::falta;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub nombre: Option<String>,
    #[validate(email(message = "Email inválido"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub password: Option<String>,
    /// Defaults to `"operador"` when omitted.
    pub rol: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    #[serde(rename = "userId")]
    pub user_id: DbId,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response: a 24h bearer token plus public user info.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UsuarioPublico,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    if falta(&input.nombre) || falta(&input.email) || falta(&input.password) {
        return Err(
            CoreError::Validation("Nombre, email y contraseña son obligatorios".into()).into(),
        );
    }
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let rol = match input.rol.as_deref() {
        None | Some(ROL_OPERADOR) => ROL_OPERADOR,
        Some(ROL_ADMIN) => ROL_ADMIN,
        Some(_) => return Err(CoreError::Validation("Rol inválido".into()).into()),
    };

    let email = input.email.as_deref().unwrap_or_default();
    if UsuarioRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(CoreError::Conflict("El usuario ya existe".into()).into());
    }

    let password_hash = hash_password(input.password.as_deref().unwrap_or_default())
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user_id = UsuarioRepo::create(
        &state.pool,
        &CreateUsuario {
            nombre: input.nombre.clone().unwrap_or_default(),
            email: email.to_string(),
            password_hash,
            rol: rol.to_string(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Usuario creado exitosamente",
            user_id,
        }),
    ))
}

/// POST /api/auth/login
///
/// A missing account and a wrong password answer identically, so the
/// endpoint never reveals which emails exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if falta(&input.email) || falta(&input.password) {
        return Err(CoreError::Validation("Email y contraseña son obligatorios".into()).into());
    }

    let user = UsuarioRepo::find_by_email(&state.pool, input.email.as_deref().unwrap_or_default())
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Credenciales inválidas".into()))?;

    let password_valid = verify_password(input.password.as_deref().unwrap_or_default(), &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(CoreError::Unauthorized("Credenciales inválidas".into()).into());
    }

    let token = generate_token(user.id, &user.email, &user.rol, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        user: UsuarioPublico::from(&user),
    }))
}

/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<PerfilUsuario>> {
    let perfil = UsuarioRepo::find_perfil_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| CoreError::NotFound("Usuario no encontrado".into()))?;
    Ok(Json(perfil))
}
