//! Route definitions for the tree inventory.

use axum::routing::get;
use axum::Router;

use crate::handlers::arboles;
use crate::state::AppState;

/// Routes mounted at `/api/arboles`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(arboles::list).post(arboles::create))
        .route("/estadisticas/estados", get(arboles::estadisticas_estados))
        .route(
            "/{id}",
            get(arboles::get_by_id)
                .put(arboles::update)
                .delete(arboles::delete),
        )
}
