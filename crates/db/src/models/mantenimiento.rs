//! Maintenance event models and DTOs.

use arbolado_core::types::{DbId, Fecha, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A maintenance event with the tree species and catalog names joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MantenimientoDetalle {
    pub id: DbId,
    pub arbol_id: DbId,
    pub tipo_mantenimiento_id: Option<DbId>,
    pub motivo_extraccion_id: Option<DbId>,
    pub fecha: Fecha,
    pub responsable: String,
    pub costo: Option<f64>,
    pub observaciones: Option<String>,
    /// Computed at write time; never set for extraction events or types
    /// without a recommended frequency.
    pub proximo_mantenimiento: Option<Fecha>,
    pub created_at: Timestamp,
    pub especie: Option<String>,
    pub tipo_mantenimiento: Option<String>,
    pub motivo_extraccion: Option<String>,
}

/// Input for registering a maintenance event. `arbol_id`, `fecha` and
/// `responsable` are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMantenimiento {
    pub arbol_id: Option<DbId>,
    pub tipo_mantenimiento_id: Option<DbId>,
    pub motivo_extraccion_id: Option<DbId>,
    pub fecha: Option<Fecha>,
    pub responsable: Option<String>,
    pub costo: Option<f64>,
    pub observaciones: Option<String>,
}

/// Input for overwriting a maintenance event. The owning tree cannot be
/// reassigned.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMantenimiento {
    pub tipo_mantenimiento_id: Option<DbId>,
    pub motivo_extraccion_id: Option<DbId>,
    pub fecha: Option<Fecha>,
    pub responsable: Option<String>,
    pub costo: Option<f64>,
    pub observaciones: Option<String>,
}
