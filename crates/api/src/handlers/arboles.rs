//! Handlers for the `/api/arboles` resource.

use arbolado_core::error::CoreError;
use arbolado_core::types::DbId;
use arbolado_db::models::arbol::{ArbolDetalle, ArbolInput, EstadisticaEstado};
use arbolado_db::repositories::ArbolRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::handlers::falta;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// The estado VALUE is deliberately not checked here: the storage CHECK
/// constraint is the enforcement boundary for the enum.
fn validar(input: &ArbolInput) -> Result<(), AppError> {
    if falta(&input.especie) || falta(&input.estado) {
        return Err(CoreError::Validation("Especie y estado son obligatorios".into()).into());
    }
    Ok(())
}

/// GET /api/arboles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ArbolDetalle>>> {
    let arboles = ArbolRepo::list_detalle(&state.pool).await?;
    Ok(Json(arboles))
}

/// GET /api/arboles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArbolDetalle>> {
    let arbol = ArbolRepo::find_detalle_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound("Árbol no encontrado".into()))?;
    Ok(Json(arbol))
}

/// POST /api/arboles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ArbolInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validar(&input)?;
    let id = ArbolRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Árbol creado exitosamente",
        }),
    ))
}

/// PUT /api/arboles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ArbolInput>,
) -> AppResult<Json<MessageResponse>> {
    validar(&input)?;
    if !ArbolRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound("Árbol no encontrado".into()).into());
    }
    Ok(Json(MessageResponse {
        message: "Árbol actualizado exitosamente",
    }))
}

/// DELETE /api/arboles/{id}
///
/// Unconditional by id; the maintenance history cascades with the row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ArbolRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound("Árbol no encontrado".into()).into());
    }
    Ok(Json(MessageResponse {
        message: "Árbol eliminado exitosamente",
    }))
}

/// GET /api/arboles/estadisticas/estados
pub async fn estadisticas_estados(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EstadisticaEstado>>> {
    let stats = ArbolRepo::estadisticas_estados(&state.pool).await?;
    Ok(Json(stats))
}
