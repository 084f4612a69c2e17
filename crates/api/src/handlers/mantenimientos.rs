//! Handlers for the `/api/mantenimientos` resource.
//!
//! Write operations compute `proximo_mantenimiento` before touching the
//! store, so the persisted follow-up date always reflects the event's
//! current type, reason, and date.

use arbolado_core::error::CoreError;
use arbolado_core::scheduling;
use arbolado_core::types::{DbId, Fecha};
use arbolado_db::models::mantenimiento::{
    CreateMantenimiento, MantenimientoDetalle, UpdateMantenimiento,
};
use arbolado_db::repositories::{CatalogoRepo, MantenimientoRepo};
use arbolado_db::DbPool;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::falta;
use crate::query::LimitParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Response for event registration: the usual id + message, plus the
/// computed follow-up date so the client can display it immediately.
#[derive(Debug, Serialize)]
pub struct MantenimientoCreado {
    pub id: DbId,
    pub message: &'static str,
    pub proximo_mantenimiento: Option<Fecha>,
}

/// Resolve the follow-up date for an event.
///
/// An unknown `tipo_mantenimiento_id` yields `None` rather than an error;
/// the scheduler never fails. The catalog lookup is skipped entirely for
/// extraction events.
async fn resolver_proximo(
    pool: &DbPool,
    tipo_mantenimiento_id: Option<DbId>,
    motivo_extraccion_id: Option<DbId>,
    fecha: Fecha,
) -> Result<Option<Fecha>, sqlx::Error> {
    let es_extraccion = motivo_extraccion_id.is_some();

    let frecuencia = match (es_extraccion, tipo_mantenimiento_id) {
        (false, Some(tipo_id)) => CatalogoRepo::find_tipo_by_id(pool, tipo_id)
            .await?
            .and_then(|t| t.frecuencia_recomendada_dias),
        _ => None,
    };

    Ok(scheduling::proximo_mantenimiento(
        fecha,
        frecuencia,
        es_extraccion,
    ))
}

/// GET /api/mantenimientos?limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<MantenimientoDetalle>>> {
    let mantenimientos = MantenimientoRepo::list_detalle(&state.pool, params.limit).await?;
    Ok(Json(mantenimientos))
}

/// GET /api/mantenimientos/arbol/{arbol_id}
pub async fn list_by_arbol(
    State(state): State<AppState>,
    Path(arbol_id): Path<DbId>,
) -> AppResult<Json<Vec<MantenimientoDetalle>>> {
    let mantenimientos = MantenimientoRepo::list_by_arbol(&state.pool, arbol_id).await?;
    Ok(Json(mantenimientos))
}

/// GET /api/mantenimientos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MantenimientoDetalle>> {
    let mantenimiento = MantenimientoRepo::find_detalle_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound("Mantenimiento no encontrado".into()))?;
    Ok(Json(mantenimiento))
}

/// POST /api/mantenimientos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMantenimiento>,
) -> AppResult<(StatusCode, Json<MantenimientoCreado>)> {
    let (Some(_), Some(fecha)) = (input.arbol_id, input.fecha) else {
        return Err(
            CoreError::Validation("arbol_id, fecha y responsable son obligatorios".into()).into(),
        );
    };
    if falta(&input.responsable) {
        return Err(
            CoreError::Validation("arbol_id, fecha y responsable son obligatorios".into()).into(),
        );
    }

    let proximo = resolver_proximo(
        &state.pool,
        input.tipo_mantenimiento_id,
        input.motivo_extraccion_id,
        fecha,
    )
    .await?;

    let id = MantenimientoRepo::create(&state.pool, &input, proximo).await?;
    Ok((
        StatusCode::CREATED,
        Json(MantenimientoCreado {
            id,
            message: "Mantenimiento registrado exitosamente",
            proximo_mantenimiento: proximo,
        }),
    ))
}

/// PUT /api/mantenimientos/{id}
///
/// Full overwrite, with the follow-up date recomputed from the new
/// values. Switching an event to an extraction clears it.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMantenimiento>,
) -> AppResult<Json<MessageResponse>> {
    let Some(fecha) = input.fecha else {
        return Err(CoreError::Validation("fecha y responsable son obligatorios".into()).into());
    };
    if falta(&input.responsable) {
        return Err(CoreError::Validation("fecha y responsable son obligatorios".into()).into());
    }

    let proximo = resolver_proximo(
        &state.pool,
        input.tipo_mantenimiento_id,
        input.motivo_extraccion_id,
        fecha,
    )
    .await?;

    if !MantenimientoRepo::update(&state.pool, id, &input, proximo).await? {
        return Err(CoreError::NotFound("Mantenimiento no encontrado".into()).into());
    }
    Ok(Json(MessageResponse {
        message: "Mantenimiento actualizado exitosamente",
    }))
}

/// DELETE /api/mantenimientos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MantenimientoRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound("Mantenimiento no encontrado".into()).into());
    }
    Ok(Json(MessageResponse {
        message: "Mantenimiento eliminado exitosamente",
    }))
}
