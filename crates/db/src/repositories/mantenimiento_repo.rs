//! Repository for the `mantenimientos` table.

use arbolado_core::types::{DbId, Fecha};
use sqlx::SqlitePool;

use crate::models::mantenimiento::{
    CreateMantenimiento, MantenimientoDetalle, UpdateMantenimiento,
};

/// Columns selected by the detail views (event + joined names).
const DETALLE_COLUMNS: &str = "m.id, m.arbol_id, m.tipo_mantenimiento_id, \
    m.motivo_extraccion_id, m.fecha, m.responsable, m.costo, m.observaciones, \
    m.proximo_mantenimiento, m.created_at, a.especie, \
    tm.nombre AS tipo_mantenimiento, me.nombre AS motivo_extraccion";

const DETALLE_JOINS: &str = "FROM mantenimientos m \
    LEFT JOIN arboles a ON m.arbol_id = a.id \
    LEFT JOIN tipos_mantenimiento tm ON m.tipo_mantenimiento_id = tm.id \
    LEFT JOIN motivos_extraccion me ON m.motivo_extraccion_id = me.id";

/// Provides CRUD operations for maintenance events.
pub struct MantenimientoRepo;

impl MantenimientoRepo {
    /// List maintenance events, newest event date first, optionally capped.
    /// `LIMIT -1` is SQLite for "no limit", so the cap binds as a parameter.
    pub async fn list_detalle(
        pool: &SqlitePool,
        limit: Option<i64>,
    ) -> Result<Vec<MantenimientoDetalle>, sqlx::Error> {
        let query = format!(
            "SELECT {DETALLE_COLUMNS} {DETALLE_JOINS}
             ORDER BY m.fecha DESC
             LIMIT COALESCE(?, -1)"
        );
        sqlx::query_as::<_, MantenimientoDetalle>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List the maintenance history of one tree, newest first.
    pub async fn list_by_arbol(
        pool: &SqlitePool,
        arbol_id: DbId,
    ) -> Result<Vec<MantenimientoDetalle>, sqlx::Error> {
        let query = format!(
            "SELECT {DETALLE_COLUMNS} {DETALLE_JOINS}
             WHERE m.arbol_id = ?
             ORDER BY m.fecha DESC"
        );
        sqlx::query_as::<_, MantenimientoDetalle>(&query)
            .bind(arbol_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_detalle_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<MantenimientoDetalle>, sqlx::Error> {
        let query = format!("SELECT {DETALLE_COLUMNS} {DETALLE_JOINS} WHERE m.id = ?");
        sqlx::query_as::<_, MantenimientoDetalle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new event. `proximo_mantenimiento` arrives pre-computed by
    /// the scheduler; this layer stores whatever it is told.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMantenimiento,
        proximo_mantenimiento: Option<Fecha>,
    ) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO mantenimientos
                (arbol_id, tipo_mantenimiento_id, motivo_extraccion_id, fecha,
                 responsable, costo, observaciones, proximo_mantenimiento)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(input.arbol_id)
        .bind(input.tipo_mantenimiento_id)
        .bind(input.motivo_extraccion_id)
        .bind(input.fecha)
        .bind(&input.responsable)
        .bind(input.costo)
        .bind(&input.observaciones)
        .bind(proximo_mantenimiento)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every mutable field, including the recomputed follow-up
    /// date. Returns `false` when no row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMantenimiento,
        proximo_mantenimiento: Option<Fecha>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE mantenimientos
             SET tipo_mantenimiento_id = ?, motivo_extraccion_id = ?, fecha = ?,
                 responsable = ?, costo = ?, observaciones = ?, proximo_mantenimiento = ?
             WHERE id = ?",
        )
        .bind(input.tipo_mantenimiento_id)
        .bind(input.motivo_extraccion_id)
        .bind(input.fecha)
        .bind(&input.responsable)
        .bind(input.costo)
        .bind(&input.observaciones)
        .bind(proximo_mantenimiento)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an event by id. Returns `false` when no row matched.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mantenimientos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
