//! Bootstrap tests: migrations, seed idempotency, and constraint
//! enforcement against a real (per-test) database.

use sqlx::SqlitePool;

/// Full bootstrap: connect, verify schema, verify seed data.
#[sqlx::test]
async fn full_bootstrap(pool: SqlitePool) {
    arbolado_db::health_check(&pool).await.unwrap();

    let tables = [
        "ubicaciones",
        "cazuelas",
        "arboles",
        "tipos_mantenimiento",
        "motivos_extraccion",
        "mantenimientos",
        "usuarios",
    ];

    for table in tables {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count >= 0, "{table} should exist");
    }
}

/// Seeding is idempotent: running it twice leaves exactly 6 + 6 rows.
#[sqlx::test]
async fn seed_catalogos_twice_never_duplicates(pool: SqlitePool) {
    arbolado_db::seed::seed_catalogos(&pool).await;
    arbolado_db::seed::seed_catalogos(&pool).await;

    let tipos: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tipos_mantenimiento")
        .fetch_one(&pool)
        .await
        .unwrap();
    let motivos: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM motivos_extraccion")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(tipos, 6);
    assert_eq!(motivos, 6);
}

/// The extraction type must carry no recommended frequency.
#[sqlx::test]
async fn extraccion_has_no_frequency(pool: SqlitePool) {
    arbolado_db::seed::seed_catalogos(&pool).await;

    let frecuencia: Option<i64> = sqlx::query_scalar(
        "SELECT frecuencia_recomendada_dias FROM tipos_mantenimiento WHERE nombre = 'Extracción'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(frecuencia, None);
}

/// The default admin is created exactly once, and only on an empty table.
#[sqlx::test]
async fn admin_seed_is_a_noop_once_any_user_exists(pool: SqlitePool) {
    let inserted = arbolado_db::seed::seed_admin(&pool, "Administrador", "admin@example.com", "$argon2id$fake")
        .await
        .unwrap();
    assert!(inserted, "first seed on an empty table must insert");

    let inserted = arbolado_db::seed::seed_admin(&pool, "Administrador", "otro@example.com", "$argon2id$fake")
        .await
        .unwrap();
    assert!(!inserted, "second seed must be a no-op");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let rol: String = sqlx::query_scalar("SELECT rol FROM usuarios")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rol, "admin");
}

/// Foreign keys are enforced, not merely declared: a well pointing at a
/// nonexistent location must be rejected.
#[sqlx::test]
async fn foreign_keys_are_enforced(pool: SqlitePool) {
    let result = sqlx::query(
        "INSERT INTO cazuelas (material, tamano, estado, ubicacion_id) VALUES ('Hormigón', 'Mediana', 'Bueno', 9999)",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "dangling ubicacion_id must violate the FK");
}
