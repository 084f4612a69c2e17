//! Route definitions for maintenance events.

use axum::routing::get;
use axum::Router;

use crate::handlers::mantenimientos;
use crate::state::AppState;

/// Routes mounted at `/api/mantenimientos`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mantenimientos::list).post(mantenimientos::create))
        .route("/arbol/{arbol_id}", get(mantenimientos::list_by_arbol))
        .route(
            "/{id}",
            get(mantenimientos::get_by_id)
                .put(mantenimientos::update)
                .delete(mantenimientos::delete),
        )
}
