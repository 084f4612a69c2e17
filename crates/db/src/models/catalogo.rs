//! Catalog (reference data) models. Both tables are seeded at startup and
//! have no write API.

use arbolado_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tipos_mantenimiento` catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TipoMantenimiento {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// `None` for terminal actions (extraction) that schedule no follow-up.
    pub frecuencia_recomendada_dias: Option<i64>,
}

/// A row from the `motivos_extraccion` catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MotivoExtraccion {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
}
