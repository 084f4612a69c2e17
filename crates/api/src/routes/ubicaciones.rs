//! Route definitions for locations.

use axum::routing::get;
use axum::Router;

use crate::handlers::ubicaciones;
use crate::state::AppState;

/// Routes mounted at `/api/ubicaciones`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ubicaciones::list).post(ubicaciones::create))
        .route(
            "/{id}",
            get(ubicaciones::get_by_id)
                .put(ubicaciones::update)
                .delete(ubicaciones::delete),
        )
}
