//! Integration tests for the inline photo upload endpoints.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

const BOUNDARY: &str = "arbolado-test-boundary";

/// Build a single-field `multipart/form-data` request by hand.
fn multipart_request(uri: &str, field: &str, content_type: &str, payload: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"foto.png\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn crear_arbol(app: &axum::Router) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/arboles",
        json!({"especie": "Tilo", "estado": "Vivo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_stores_photo_as_data_uri(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let arbol_id = crear_arbol(&app).await;
    let request = multipart_request(
        &format!("/api/uploads/arbol/{arbol_id}"),
        "imagen",
        "image/png",
        b"not-really-a-png-but-close-enough",
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Imagen subida exitosamente");
    let imagen = json["imagen"].as_str().unwrap();
    assert!(imagen.starts_with("data:image/png;base64,"));

    // The photo is persisted on the tree.
    let response = get(app, &format!("/api/arboles/{arbol_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["foto"].as_str().unwrap(), imagen);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_image_content_type_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let arbol_id = crear_arbol(&app).await;
    let request = multipart_request(
        &format!("/api/uploads/arbol/{arbol_id}"),
        "imagen",
        "application/pdf",
        b"%PDF-1.7",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Solo se permiten imágenes (JPEG, JPG, PNG, GIF)");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_to_missing_cazuela_is_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let request = multipart_request(
        "/api/uploads/cazuela/9999",
        "imagen",
        "image/jpeg",
        b"\xff\xd8\xff",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_imagen_field_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let arbol_id = crear_arbol(&app).await;
    let request = multipart_request(
        &format!("/api/uploads/arbol/{arbol_id}"),
        "otra_cosa",
        "image/png",
        b"payload",
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No se proporcionó ninguna imagen");
}
