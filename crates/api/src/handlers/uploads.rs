//! Handlers for the `/api/uploads` resource: inline photo attachment for
//! trees and tree wells.
//!
//! Images arrive as a multipart `imagen` field, capped at 5MB by the body
//! limit on the uploads router, and are stored as a `data:` URI in the
//! row's `foto` column. No resizing or re-encoding happens server-side.

use arbolado_core::error::CoreError;
use arbolado_core::types::DbId;
use arbolado_db::repositories::{ArbolRepo, CazuelaRepo};
use axum::extract::{Multipart, Path, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Maximum accepted image payload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    /// The stored `data:` URI, echoed back for immediate display.
    pub imagen: String,
}

/// Pull the `imagen` field out of the multipart body and encode it as a
/// `data:<mime>;base64,...` URI.
async fn leer_imagen(mut multipart: Multipart) -> Result<String, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("imagen") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(str::to_owned)
            .ok_or_else(|| {
                CoreError::Validation("Solo se permiten imágenes (JPEG, JPG, PNG, GIF)".into())
            })?;

        if !ALLOWED_TYPES.contains(&content_type.as_str()) {
            return Err(CoreError::Validation(
                "Solo se permiten imágenes (JPEG, JPG, PNG, GIF)".into(),
            )
            .into());
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        return Ok(format!("data:{};base64,{}", content_type, BASE64.encode(&data)));
    }

    Err(CoreError::Validation("No se proporcionó ninguna imagen".into()).into())
}

/// POST /api/uploads/arbol/{id}
pub async fn subir_foto_arbol(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let imagen = leer_imagen(multipart).await?;

    if !ArbolRepo::set_foto(&state.pool, id, &imagen).await? {
        return Err(CoreError::NotFound("Árbol no encontrado".into()).into());
    }
    Ok(Json(UploadResponse {
        message: "Imagen subida exitosamente",
        imagen,
    }))
}

/// POST /api/uploads/cazuela/{id}
pub async fn subir_foto_cazuela(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let imagen = leer_imagen(multipart).await?;

    if !CazuelaRepo::set_foto(&state.pool, id, &imagen).await? {
        return Err(CoreError::NotFound("Cazuela no encontrada".into()).into());
    }
    Ok(Json(UploadResponse {
        message: "Imagen subida exitosamente",
        imagen,
    }))
}
