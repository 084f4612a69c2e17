//! Tree-well entity models and DTOs.

use arbolado_core::types::{DbId, Fecha, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// List/detail view of a tree well with its location joined in and the
/// number of trees currently assigned to it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CazuelaDetalle {
    pub id: DbId,
    pub material: String,
    #[serde(rename = "tamaño")]
    pub tamano: String,
    pub estado: String,
    pub fecha_instalacion: Option<Fecha>,
    /// Inline `data:<mime>;base64,...` URI set via the upload endpoint.
    pub foto: Option<String>,
    pub ubicacion_id: Option<DbId>,
    pub created_at: Timestamp,
    pub direccion: Option<String>,
    pub barrio: Option<String>,
    pub coordenadas: Option<String>,
    pub arboles_asignados: i64,
}

/// A tree well with no tree assigned, as returned by `/disponibles`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CazuelaDisponible {
    pub id: DbId,
    pub material: String,
    #[serde(rename = "tamaño")]
    pub tamano: String,
    pub estado: String,
    pub fecha_instalacion: Option<Fecha>,
    pub foto: Option<String>,
    pub ubicacion_id: Option<DbId>,
    pub created_at: Timestamp,
    pub direccion: Option<String>,
    pub barrio: Option<String>,
}

/// Input for creating or overwriting a tree well. `material`, `tamaño`
/// and `estado` are required. The photo is managed by the upload
/// endpoint and is not part of this payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CazuelaInput {
    pub material: Option<String>,
    #[serde(rename = "tamaño", alias = "tamano")]
    pub tamano: Option<String>,
    pub estado: Option<String>,
    pub fecha_instalacion: Option<Fecha>,
    pub ubicacion_id: Option<DbId>,
}
