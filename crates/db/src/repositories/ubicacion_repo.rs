//! Repository for the `ubicaciones` table.

use arbolado_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::ubicacion::{Ubicacion, UbicacionInput};

/// Provides CRUD operations for locations.
pub struct UbicacionRepo;

impl UbicacionRepo {
    /// List every location, most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Ubicacion>, sqlx::Error> {
        sqlx::query_as::<_, Ubicacion>("SELECT * FROM ubicaciones ORDER BY id DESC")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Ubicacion>, sqlx::Error> {
        sqlx::query_as::<_, Ubicacion>("SELECT * FROM ubicaciones WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new location, returning its id.
    pub async fn create(pool: &SqlitePool, input: &UbicacionInput) -> Result<DbId, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO ubicaciones (direccion, barrio, coordenadas) VALUES (?, ?, ?)")
                .bind(&input.direccion)
                .bind(&input.barrio)
                .bind(&input.coordenadas)
                .execute(pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every mutable field. Returns `false` when no row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UbicacionInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE ubicaciones SET direccion = ?, barrio = ?, coordenadas = ? WHERE id = ?",
        )
        .bind(&input.direccion)
        .bind(&input.barrio)
        .bind(&input.coordenadas)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a location by id. Returns `false` when no row matched.
    ///
    /// Callers must run the tree-well reference check first; the foreign
    /// key constraint is the backstop, not the user-facing guard.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ubicaciones WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
