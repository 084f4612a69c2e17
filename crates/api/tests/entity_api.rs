//! Integration tests for the inventory CRUD endpoints: locations, tree
//! wells, trees, the deletion guards, and the statistics report.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

async fn crear_ubicacion(app: &axum::Router) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/ubicaciones",
        json!({"direccion": "Av. Rivadavia 1200", "barrio": "Centro", "coordenadas": "-34.6,-58.4"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn crear_cazuela(app: &axum::Router, ubicacion_id: Option<i64>) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/cazuelas",
        json!({
            "material": "Hormigón",
            "tamaño": "Mediana",
            "estado": "Bueno",
            "ubicacion_id": ubicacion_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn crear_arbol(app: &axum::Router, estado: &str, cazuela_id: Option<i64>) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/arboles",
        json!({"especie": "Jacarandá", "estado": estado, "cazuela_id": cazuela_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn ubicacion_crud_over_http(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let id = crear_ubicacion(&app).await;

    let response = get(app.clone(), &format!("/api/ubicaciones/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["direccion"], "Av. Rivadavia 1200");

    let response = put_json(
        app.clone(),
        &format!("/api/ubicaciones/{id}"),
        json!({"direccion": "Av. Rivadavia 1250", "barrio": "Centro"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Overwrite semantics: the omitted coordinates are now null.
    let response = get(app.clone(), &format!("/api/ubicaciones/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["direccion"], "Av. Rivadavia 1250");
    assert!(json["coordenadas"].is_null());

    let response = delete(app.clone(), &format!("/api/ubicaciones/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/api/ubicaciones/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Ubicación no encontrada");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ubicacion_requires_direccion_and_barrio(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/ubicaciones", json!({"direccion": "Solo dirección"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Dirección y barrio son obligatorios");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn referenced_ubicacion_cannot_be_deleted(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let ubicacion_id = crear_ubicacion(&app).await;
    let cazuela_id = crear_cazuela(&app, Some(ubicacion_id)).await;

    // Blocked while the cazuela points at it.
    let response = delete(app.clone(), &format!("/api/ubicaciones/{ubicacion_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "No se puede eliminar la ubicación porque está siendo usada por una o más cazuelas"
    );

    // Still there.
    let response = get(app.clone(), &format!("/api/ubicaciones/{ubicacion_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Removing the cazuela unblocks the deletion.
    let response = delete(app.clone(), &format!("/api/cazuelas/{cazuela_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(app, &format!("/api/ubicaciones/{ubicacion_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Tree wells
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn disponibles_shrinks_as_trees_are_assigned(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let ocupada = crear_cazuela(&app, None).await;
    let libre = crear_cazuela(&app, None).await;
    crear_arbol(&app, "Vivo", Some(ocupada)).await;

    let response = get(app.clone(), "/api/cazuelas/disponibles").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let disponibles = json.as_array().unwrap();
    assert_eq!(disponibles.len(), 1);
    assert_eq!(disponibles[0]["id"], libre);

    // The listing reports the assigned-tree count.
    let response = get(app, "/api/cazuelas").await;
    let json = body_json(response).await;
    let ocupada_row = json
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == ocupada)
        .unwrap();
    assert_eq!(ocupada_row["arboles_asignados"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cazuela_with_assigned_tree_cannot_be_deleted(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let cazuela_id = crear_cazuela(&app, None).await;
    let arbol_id = crear_arbol(&app, "Vivo", Some(cazuela_id)).await;

    let response = delete(app.clone(), &format!("/api/cazuelas/{cazuela_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "No se puede eliminar la cazuela porque tiene uno o más árboles asignados"
    );

    // Deleting the tree unblocks the well.
    let response = delete(app.clone(), &format!("/api/arboles/{arbol_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(app, &format!("/api/cazuelas/{cazuela_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cazuela_requires_material_tamano_estado(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/cazuelas", json!({"material": "Hormigón"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Material, tamaño y estado son obligatorios");
}

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn arbol_detail_includes_cazuela_and_ubicacion(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let ubicacion_id = crear_ubicacion(&app).await;
    let cazuela_id = crear_cazuela(&app, Some(ubicacion_id)).await;
    let arbol_id = crear_arbol(&app, "Vivo", Some(cazuela_id)).await;

    let response = get(app, &format!("/api/arboles/{arbol_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["especie"], "Jacarandá");
    assert_eq!(json["cazuela_material"], "Hormigón");
    assert_eq!(json["cazuela_tamaño"], "Mediana");
    assert_eq!(json["direccion"], "Av. Rivadavia 1200");
    assert_eq!(json["barrio"], "Centro");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_estado_is_rejected_by_storage(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/arboles",
        json!({"especie": "Jacarandá", "estado": "Seco"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn estadisticas_sum_to_one_hundred(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    for _ in 0..3 {
        crear_arbol(&app, "Vivo", None).await;
    }
    crear_arbol(&app, "Muerto", None).await;

    let response = get(app, "/api/arboles/estadisticas/estados").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let stats = json.as_array().unwrap();
    assert_eq!(stats.len(), 2);

    let vivos = stats.iter().find(|s| s["estado"] == "Vivo").unwrap();
    assert_eq!(vivos["cantidad"], 3);
    assert_eq!(vivos["porcentaje"], 75.0);

    let muertos = stats.iter().find(|s| s["estado"] == "Muerto").unwrap();
    assert_eq!(muertos["cantidad"], 1);
    assert_eq!(muertos["porcentaje"], 25.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn updating_a_missing_arbol_is_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = put_json(
        app,
        "/api/arboles/9999",
        json!({"especie": "Jacarandá", "estado": "Vivo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Árbol no encontrado");
}
