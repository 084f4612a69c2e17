//! Route definitions for tree wells.

use axum::routing::get;
use axum::Router;

use crate::handlers::cazuelas;
use crate::state::AppState;

/// Routes mounted at `/api/cazuelas`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cazuelas::list).post(cazuelas::create))
        .route("/disponibles", get(cazuelas::disponibles))
        .route(
            "/{id}",
            get(cazuelas::get_by_id)
                .put(cazuelas::update)
                .delete(cazuelas::delete),
        )
}
