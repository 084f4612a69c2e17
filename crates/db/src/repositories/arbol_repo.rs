//! Repository for the `arboles` table.

use arbolado_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::arbol::{ArbolDetalle, ArbolInput, EstadisticaEstado};

/// Columns selected by the detail views (tree + joined well + location).
const DETALLE_COLUMNS: &str = "a.id, a.especie, a.fecha_plantacion, a.estado, a.foto, \
    a.cazuela_id, a.created_at, c.material AS cazuela_material, c.tamano AS cazuela_tamano, \
    c.estado AS cazuela_estado, u.direccion, u.barrio, u.coordenadas";

/// Provides CRUD operations for trees.
pub struct ArbolRepo;

impl ArbolRepo {
    /// List every tree with its well and location, most recent first.
    pub async fn list_detalle(pool: &SqlitePool) -> Result<Vec<ArbolDetalle>, sqlx::Error> {
        let query = format!(
            "SELECT {DETALLE_COLUMNS}
             FROM arboles a
             LEFT JOIN cazuelas c ON a.cazuela_id = c.id
             LEFT JOIN ubicaciones u ON c.ubicacion_id = u.id
             ORDER BY a.id DESC"
        );
        sqlx::query_as::<_, ArbolDetalle>(&query).fetch_all(pool).await
    }

    pub async fn find_detalle_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ArbolDetalle>, sqlx::Error> {
        let query = format!(
            "SELECT {DETALLE_COLUMNS}
             FROM arboles a
             LEFT JOIN cazuelas c ON a.cazuela_id = c.id
             LEFT JOIN ubicaciones u ON c.ubicacion_id = u.id
             WHERE a.id = ?"
        );
        sqlx::query_as::<_, ArbolDetalle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new tree, returning its id. An `estado` outside the CHECK
    /// enum surfaces as a constraint error here.
    pub async fn create(pool: &SqlitePool, input: &ArbolInput) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO arboles (especie, fecha_plantacion, estado, foto, cazuela_id)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.especie)
        .bind(input.fecha_plantacion)
        .bind(&input.estado)
        .bind(&input.foto)
        .bind(input.cazuela_id)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every mutable field. Returns `false` when no row matched.
    pub async fn update(pool: &SqlitePool, id: DbId, input: &ArbolInput) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE arboles
             SET especie = ?, fecha_plantacion = ?, estado = ?, foto = ?, cazuela_id = ?
             WHERE id = ?",
        )
        .bind(&input.especie)
        .bind(input.fecha_plantacion)
        .bind(&input.estado)
        .bind(&input.foto)
        .bind(input.cazuela_id)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a tree by id. Maintenance events cascade with it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM arboles WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// How many trees are assigned to the given tree well. Backs the
    /// well-deletion guard.
    pub async fn count_by_cazuela(pool: &SqlitePool, cazuela_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM arboles WHERE cazuela_id = ?")
            .bind(cazuela_id)
            .fetch_one(pool)
            .await
    }

    /// Tree counts per status with each status' percentage share of the
    /// total, rounded to two decimals.
    pub async fn estadisticas_estados(
        pool: &SqlitePool,
    ) -> Result<Vec<EstadisticaEstado>, sqlx::Error> {
        sqlx::query_as::<_, EstadisticaEstado>(
            "SELECT estado,
                    COUNT(*) AS cantidad,
                    ROUND(COUNT(*) * 100.0 / (SELECT COUNT(*) FROM arboles), 2) AS porcentaje
             FROM arboles
             GROUP BY estado",
        )
        .fetch_all(pool)
        .await
    }

    /// Store an inline photo. Returns `false` when no row matched.
    pub async fn set_foto(pool: &SqlitePool, id: DbId, foto: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE arboles SET foto = ? WHERE id = ?")
            .bind(foto)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
