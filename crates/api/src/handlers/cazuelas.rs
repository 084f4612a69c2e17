//! Handlers for the `/api/cazuelas` resource.

use arbolado_core::error::CoreError;
use arbolado_core::types::DbId;
use arbolado_db::models::cazuela::{CazuelaDetalle, CazuelaDisponible, CazuelaInput};
use arbolado_db::repositories::{ArbolRepo, CazuelaRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::handlers::falta;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

fn validar(input: &CazuelaInput) -> Result<(), AppError> {
    if falta(&input.material) || falta(&input.tamano) || falta(&input.estado) {
        return Err(
            CoreError::Validation("Material, tamaño y estado son obligatorios".into()).into(),
        );
    }
    Ok(())
}

/// GET /api/cazuelas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CazuelaDetalle>>> {
    let cazuelas = CazuelaRepo::list_detalle(&state.pool).await?;
    Ok(Json(cazuelas))
}

/// GET /api/cazuelas/disponibles
pub async fn disponibles(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CazuelaDisponible>>> {
    let cazuelas = CazuelaRepo::list_disponibles(&state.pool).await?;
    Ok(Json(cazuelas))
}

/// GET /api/cazuelas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CazuelaDetalle>> {
    let cazuela = CazuelaRepo::find_detalle_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound("Cazuela no encontrada".into()))?;
    Ok(Json(cazuela))
}

/// POST /api/cazuelas
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CazuelaInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validar(&input)?;
    let id = CazuelaRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Cazuela creada exitosamente",
        }),
    ))
}

/// PUT /api/cazuelas/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CazuelaInput>,
) -> AppResult<Json<MessageResponse>> {
    validar(&input)?;
    if !CazuelaRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound("Cazuela no encontrada".into()).into());
    }
    Ok(Json(MessageResponse {
        message: "Cazuela actualizada exitosamente",
    }))
}

/// DELETE /api/cazuelas/{id}
///
/// Refused while any tree is assigned to the well, so no tree is ever
/// left pointing at a missing cazuela.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let asignados = ArbolRepo::count_by_cazuela(&state.pool, id).await?;
    if asignados > 0 {
        return Err(CoreError::Conflict(
            "No se puede eliminar la cazuela porque tiene uno o más árboles asignados".into(),
        )
        .into());
    }

    if !CazuelaRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound("Cazuela no encontrada".into()).into());
    }
    Ok(Json(MessageResponse {
        message: "Cazuela eliminada exitosamente",
    }))
}
