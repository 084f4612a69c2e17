//! Handlers for the `/api/ubicaciones` resource.

use arbolado_core::error::CoreError;
use arbolado_core::types::DbId;
use arbolado_db::models::ubicacion::{Ubicacion, UbicacionInput};
use arbolado_db::repositories::{CazuelaRepo, UbicacionRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::handlers::falta;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

fn validar(input: &UbicacionInput) -> Result<(), AppError> {
    if falta(&input.direccion) || falta(&input.barrio) {
        return Err(CoreError::Validation("Dirección y barrio son obligatorios".into()).into());
    }
    Ok(())
}

/// GET /api/ubicaciones
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Ubicacion>>> {
    let ubicaciones = UbicacionRepo::list(&state.pool).await?;
    Ok(Json(ubicaciones))
}

/// GET /api/ubicaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Ubicacion>> {
    let ubicacion = UbicacionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound("Ubicación no encontrada".into()))?;
    Ok(Json(ubicacion))
}

/// POST /api/ubicaciones
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UbicacionInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validar(&input)?;
    let id = UbicacionRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Ubicación creada exitosamente",
        }),
    ))
}

/// PUT /api/ubicaciones/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UbicacionInput>,
) -> AppResult<Json<MessageResponse>> {
    validar(&input)?;
    if !UbicacionRepo::update(&state.pool, id, &input).await? {
        return Err(CoreError::NotFound("Ubicación no encontrada".into()).into());
    }
    Ok(Json(MessageResponse {
        message: "Ubicación actualizada exitosamente",
    }))
}

/// DELETE /api/ubicaciones/{id}
///
/// Refused while any tree well references the location; the explicit
/// check produces the client-facing message, the FK is the backstop.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let referencias = CazuelaRepo::count_by_ubicacion(&state.pool, id).await?;
    if referencias > 0 {
        return Err(CoreError::Conflict(
            "No se puede eliminar la ubicación porque está siendo usada por una o más cazuelas"
                .into(),
        )
        .into());
    }

    if !UbicacionRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound("Ubicación no encontrada".into()).into());
    }
    Ok(Json(MessageResponse {
        message: "Ubicación eliminada exitosamente",
    }))
}
