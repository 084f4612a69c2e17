//! Location entity model and DTOs.

use arbolado_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ubicaciones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ubicacion {
    pub id: DbId,
    pub direccion: String,
    pub barrio: String,
    /// Free-form "lat,lng" pair as entered by the operator.
    pub coordenadas: Option<String>,
    pub created_at: Timestamp,
}

/// Input for creating or overwriting a location. Updates replace every
/// mutable field, so create and update share this shape. `direccion` and
/// `barrio` are required; the handler rejects their absence before the
/// NOT NULL constraint would.
#[derive(Debug, Clone, Deserialize)]
pub struct UbicacionInput {
    pub direccion: Option<String>,
    pub barrio: Option<String>,
    pub coordenadas: Option<String>,
}
