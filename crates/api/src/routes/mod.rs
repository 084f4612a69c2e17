pub mod arboles;
pub mod auth;
pub mod catalogos;
pub mod cazuelas;
pub mod health;
pub mod mantenimientos;
pub mod ubicaciones;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /arboles                         GET list, POST create
/// /arboles/{id}                    GET, PUT, DELETE
/// /arboles/estadisticas/estados    GET status statistics
///
/// /cazuelas                        GET list, POST create
/// /cazuelas/disponibles            GET wells without a tree
/// /cazuelas/{id}                   GET, PUT, DELETE
///
/// /ubicaciones                     GET list, POST create
/// /ubicaciones/{id}                GET, PUT, DELETE (guarded)
///
/// /mantenimientos                  GET list (?limit=), POST create
/// /mantenimientos/{id}             GET, PUT, DELETE
/// /mantenimientos/arbol/{arbol_id} GET one tree's history
///
/// /catalogos                       GET both catalogs
/// /catalogos/tipos-mantenimiento   GET
/// /catalogos/motivos-extraccion    GET
///
/// /auth/register                   POST (public)
/// /auth/login                      POST (public)
/// /auth/profile                    GET (bearer)
///
/// /uploads/arbol/{id}              POST multipart image
/// /uploads/cazuela/{id}            POST multipart image
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/arboles", arboles::router())
        .nest("/cazuelas", cazuelas::router())
        .nest("/ubicaciones", ubicaciones::router())
        .nest("/mantenimientos", mantenimientos::router())
        .nest("/catalogos", catalogos::router())
        .nest("/auth", auth::router())
        .nest("/uploads", uploads::router())
}
