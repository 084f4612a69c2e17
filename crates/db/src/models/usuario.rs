//! User account models and DTOs.

use arbolado_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `usuarios` table.
///
/// Contains the password hash -- never serialize this to an API response.
/// Use [`UsuarioPublico`] or [`PerfilUsuario`] for external output.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: DbId,
    pub nombre: String,
    pub email: String,
    /// Argon2id PHC-formatted hash.
    pub password: String,
    pub rol: String,
    pub created_at: Timestamp,
}

/// Safe user representation embedded in the login response.
#[derive(Debug, Clone, Serialize)]
pub struct UsuarioPublico {
    pub id: DbId,
    pub nombre: String,
    pub email: String,
    pub rol: String,
}

impl From<&Usuario> for UsuarioPublico {
    fn from(u: &Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre.clone(),
            email: u.email.clone(),
            rol: u.rol.clone(),
        }
    }
}

/// Profile view returned by `GET /api/auth/profile`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PerfilUsuario {
    pub id: DbId,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub created_at: Timestamp,
}

/// Insert payload, built by the API layer after hashing the password.
#[derive(Debug, Clone)]
pub struct CreateUsuario {
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
    pub rol: String,
}
