//! Repository for the `usuarios` table.

use arbolado_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::usuario::{CreateUsuario, PerfilUsuario, Usuario};

pub struct UsuarioRepo;

impl UsuarioRepo {
    /// Fetch the full row (hash included) for credential verification.
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_perfil_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PerfilUsuario>, sqlx::Error> {
        sqlx::query_as::<_, PerfilUsuario>(
            "SELECT id, nombre, email, rol, created_at FROM usuarios WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new account, returning its id. The unique index on `email`
    /// rejects duplicates.
    pub async fn create(pool: &SqlitePool, input: &CreateUsuario) -> Result<DbId, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO usuarios (nombre, email, password, rol) VALUES (?, ?, ?, ?)")
                .bind(&input.nombre)
                .bind(&input.email)
                .bind(&input.password_hash)
                .bind(&input.rol)
                .execute(pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
            .fetch_one(pool)
            .await
    }
}
