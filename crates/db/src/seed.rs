//! Idempotent bootstrap data, applied on every process start.
//!
//! Catalog rows use single-statement conditional inserts backed by the
//! UNIQUE index on `nombre`, so a re-run (or two processes racing) can
//! never duplicate an entry. The default administrator is keyed on the
//! `usuarios` table being empty, not on any particular row.

use arbolado_core::roles::ROL_ADMIN;

use crate::DbPool;

/// Canonical maintenance types: (nombre, descripcion, frecuencia en días).
/// `Extracción` is terminal and never schedules a follow-up.
const TIPOS_MANTENIMIENTO: [(&str, &str, Option<i64>); 6] = [
    ("Poda", "Poda de ramas y formación", Some(180)),
    ("Riego", "Riego manual complementario", Some(7)),
    ("Fertilización", "Aplicación de fertilizante", Some(90)),
    ("Control de plagas", "Tratamiento fitosanitario", Some(30)),
    ("Limpieza", "Limpieza de cazuela y alrededores", Some(15)),
    ("Extracción", "Extracción del árbol", None),
];

/// Canonical removal reasons: (nombre, descripcion).
const MOTIVOS_EXTRACCION: [(&str, &str); 6] = [
    ("Árbol muerto", "El árbol ha muerto por causas naturales"),
    ("Daño estructural", "Árbol con daños que representan riesgo"),
    ("Enfermedad", "Árbol afectado por enfermedad incurable"),
    ("Solicitud vecinal", "Extracción solicitada por vecinos"),
    ("Obras públicas", "Extracción por obras de infraestructura"),
    ("Crecimiento inadecuado", "Árbol con crecimiento problemático"),
];

/// Insert any missing catalog rows.
///
/// Individual row failures are logged and skipped; a partially seeded
/// catalog is repaired on the next start.
pub async fn seed_catalogos(pool: &DbPool) {
    for (nombre, descripcion, frecuencia) in TIPOS_MANTENIMIENTO {
        let result = sqlx::query(
            "INSERT INTO tipos_mantenimiento (nombre, descripcion, frecuencia_recomendada_dias)
             VALUES (?, ?, ?)
             ON CONFLICT (nombre) DO NOTHING",
        )
        .bind(nombre)
        .bind(descripcion)
        .bind(frecuencia)
        .execute(pool)
        .await;

        if let Err(e) = result {
            tracing::warn!(nombre, error = %e, "Failed to seed maintenance type");
        }
    }

    for (nombre, descripcion) in MOTIVOS_EXTRACCION {
        let result = sqlx::query(
            "INSERT INTO motivos_extraccion (nombre, descripcion)
             VALUES (?, ?)
             ON CONFLICT (nombre) DO NOTHING",
        )
        .bind(nombre)
        .bind(descripcion)
        .execute(pool)
        .await;

        if let Err(e) = result {
            tracing::warn!(nombre, error = %e, "Failed to seed removal reason");
        }
    }
}

/// Create the default administrator account, but only while `usuarios`
/// is completely empty. Returns `true` when a row was inserted.
pub async fn seed_admin(
    pool: &DbPool,
    nombre: &str,
    email: &str,
    password_hash: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO usuarios (nombre, email, password, rol)
         SELECT ?, ?, ?, ?
         WHERE NOT EXISTS (SELECT 1 FROM usuarios)",
    )
    .bind(nombre)
    .bind(email)
    .bind(password_hash)
    .bind(ROL_ADMIN)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
