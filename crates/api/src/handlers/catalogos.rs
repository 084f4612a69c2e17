//! Handlers for the read-only `/api/catalogos` resource.

use arbolado_db::models::catalogo::{MotivoExtraccion, TipoMantenimiento};
use arbolado_db::repositories::CatalogoRepo;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Combined catalog payload. Field names keep the legacy camelCase the
/// front end binds to.
#[derive(Debug, Serialize)]
pub struct Catalogos {
    #[serde(rename = "tiposMantenimiento")]
    pub tipos_mantenimiento: Vec<TipoMantenimiento>,
    #[serde(rename = "motivosExtraccion")]
    pub motivos_extraccion: Vec<MotivoExtraccion>,
}

/// GET /api/catalogos
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Catalogos>> {
    let (tipos_mantenimiento, motivos_extraccion) = tokio::try_join!(
        CatalogoRepo::list_tipos(&state.pool),
        CatalogoRepo::list_motivos(&state.pool),
    )?;

    Ok(Json(Catalogos {
        tipos_mantenimiento,
        motivos_extraccion,
    }))
}

/// GET /api/catalogos/tipos-mantenimiento
pub async fn list_tipos(State(state): State<AppState>) -> AppResult<Json<Vec<TipoMantenimiento>>> {
    let tipos = CatalogoRepo::list_tipos(&state.pool).await?;
    Ok(Json(tipos))
}

/// GET /api/catalogos/motivos-extraccion
pub async fn list_motivos(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MotivoExtraccion>>> {
    let motivos = CatalogoRepo::list_motivos(&state.pool).await?;
    Ok(Json(motivos))
}
