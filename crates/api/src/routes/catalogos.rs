//! Route definitions for the read-only catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalogos;
use crate::state::AppState;

/// Routes mounted at `/api/catalogos`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalogos::list_all))
        .route("/tipos-mantenimiento", get(catalogos::list_tipos))
        .route("/motivos-extraccion", get(catalogos::list_motivos))
}
