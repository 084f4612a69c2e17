//! Read-only repository for the two seeded catalogs.

use arbolado_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::catalogo::{MotivoExtraccion, TipoMantenimiento};

pub struct CatalogoRepo;

impl CatalogoRepo {
    pub async fn list_tipos(pool: &SqlitePool) -> Result<Vec<TipoMantenimiento>, sqlx::Error> {
        sqlx::query_as::<_, TipoMantenimiento>(
            "SELECT * FROM tipos_mantenimiento ORDER BY nombre",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_motivos(pool: &SqlitePool) -> Result<Vec<MotivoExtraccion>, sqlx::Error> {
        sqlx::query_as::<_, MotivoExtraccion>("SELECT * FROM motivos_extraccion ORDER BY nombre")
            .fetch_all(pool)
            .await
    }

    /// Look up one maintenance type; the scheduler needs its recommended
    /// frequency. An unknown id is `None`, never an error.
    pub async fn find_tipo_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<TipoMantenimiento>, sqlx::Error> {
        sqlx::query_as::<_, TipoMantenimiento>("SELECT * FROM tipos_mantenimiento WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
