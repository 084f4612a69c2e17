//! Route definitions for image uploads.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/api/uploads`, with the body capped at the image
/// size limit instead of axum's default.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/arbol/{id}", post(uploads::subir_foto_arbol))
        .route("/cazuela/{id}", post(uploads::subir_foto_cazuela))
        .layer(DefaultBodyLimit::max(uploads::MAX_IMAGE_BYTES))
}
