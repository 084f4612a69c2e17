//! Tree entity models and DTOs.

use arbolado_core::types::{DbId, Fecha, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// List/detail view of a tree with its tree well and location joined in.
/// The joined columns are `None` for trees without a well (or wells
/// without a location).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArbolDetalle {
    pub id: DbId,
    pub especie: String,
    pub fecha_plantacion: Option<Fecha>,
    pub estado: String,
    /// Inline `data:<mime>;base64,...` URI set at creation or via upload.
    pub foto: Option<String>,
    pub cazuela_id: Option<DbId>,
    pub created_at: Timestamp,
    pub cazuela_material: Option<String>,
    #[serde(rename = "cazuela_tamaño")]
    pub cazuela_tamano: Option<String>,
    pub cazuela_estado: Option<String>,
    pub direccion: Option<String>,
    pub barrio: Option<String>,
    pub coordenadas: Option<String>,
}

/// Input for creating or overwriting a tree. `especie` and `estado` are
/// required; `estado` values outside the storage enum are rejected by the
/// CHECK constraint, not pre-validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct ArbolInput {
    pub especie: Option<String>,
    pub fecha_plantacion: Option<Fecha>,
    pub estado: Option<String>,
    pub foto: Option<String>,
    pub cazuela_id: Option<DbId>,
}

/// One row of the status statistics report: how many trees hold a status
/// and its share of the total, rounded to two decimals.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EstadisticaEstado {
    pub estado: String,
    pub cantidad: i64,
    pub porcentaje: f64,
}
