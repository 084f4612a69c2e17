//! Repository for the `cazuelas` table.

use arbolado_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::cazuela::{CazuelaDetalle, CazuelaDisponible, CazuelaInput};

/// Columns selected by the detail views (well + joined location).
const DETALLE_COLUMNS: &str = "c.id, c.material, c.tamano, c.estado, c.fecha_instalacion, \
    c.foto, c.ubicacion_id, c.created_at, u.direccion, u.barrio, u.coordenadas";

/// Provides CRUD operations for tree wells.
pub struct CazuelaRepo;

impl CazuelaRepo {
    /// List every tree well with its location and assigned-tree count,
    /// most recently created first.
    pub async fn list_detalle(pool: &SqlitePool) -> Result<Vec<CazuelaDetalle>, sqlx::Error> {
        let query = format!(
            "SELECT {DETALLE_COLUMNS},
                (SELECT COUNT(*) FROM arboles a WHERE a.cazuela_id = c.id) AS arboles_asignados
             FROM cazuelas c
             LEFT JOIN ubicaciones u ON c.ubicacion_id = u.id
             ORDER BY c.id DESC"
        );
        sqlx::query_as::<_, CazuelaDetalle>(&query).fetch_all(pool).await
    }

    pub async fn find_detalle_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<CazuelaDetalle>, sqlx::Error> {
        let query = format!(
            "SELECT {DETALLE_COLUMNS},
                (SELECT COUNT(*) FROM arboles a WHERE a.cazuela_id = c.id) AS arboles_asignados
             FROM cazuelas c
             LEFT JOIN ubicaciones u ON c.ubicacion_id = u.id
             WHERE c.id = ?"
        );
        sqlx::query_as::<_, CazuelaDetalle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tree wells with no tree currently assigned, oldest first.
    pub async fn list_disponibles(pool: &SqlitePool) -> Result<Vec<CazuelaDisponible>, sqlx::Error> {
        sqlx::query_as::<_, CazuelaDisponible>(
            "SELECT c.id, c.material, c.tamano, c.estado, c.fecha_instalacion,
                    c.foto, c.ubicacion_id, c.created_at, u.direccion, u.barrio
             FROM cazuelas c
             LEFT JOIN ubicaciones u ON c.ubicacion_id = u.id
             WHERE c.id NOT IN (SELECT cazuela_id FROM arboles WHERE cazuela_id IS NOT NULL)
             ORDER BY c.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a new tree well, returning its id.
    pub async fn create(pool: &SqlitePool, input: &CazuelaInput) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO cazuelas (material, tamano, estado, fecha_instalacion, ubicacion_id)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.material)
        .bind(&input.tamano)
        .bind(&input.estado)
        .bind(input.fecha_instalacion)
        .bind(input.ubicacion_id)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every mutable field. Returns `false` when no row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &CazuelaInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cazuelas
             SET material = ?, tamano = ?, estado = ?, fecha_instalacion = ?, ubicacion_id = ?
             WHERE id = ?",
        )
        .bind(&input.material)
        .bind(&input.tamano)
        .bind(&input.estado)
        .bind(input.fecha_instalacion)
        .bind(input.ubicacion_id)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a tree well by id. Returns `false` when no row matched.
    /// Callers must run the assigned-tree check first.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cazuelas WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// How many tree wells reference the given location. Backs the
    /// location-deletion guard.
    pub async fn count_by_ubicacion(pool: &SqlitePool, ubicacion_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cazuelas WHERE ubicacion_id = ?")
            .bind(ubicacion_id)
            .fetch_one(pool)
            .await
    }

    /// Store an inline photo. Returns `false` when no row matched.
    pub async fn set_foto(pool: &SqlitePool, id: DbId, foto: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE cazuelas SET foto = ? WHERE id = ?")
            .bind(foto)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
