//! File dossiers repository.
//!
//! Soft-deleted dossiers are invisible to every query.

use crate::errors::CatalogError;
use crate::models::FileDossier;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for FileDossier {
    const TABLE: &'static str = "file_dossiers";
    const SELECT_COLUMNS: &'static str = "id, name, shortened, created_at, updated_at, deleted_at";
    const VISIBLE: Option<&'static str> = Some("deleted_at IS NULL");
}

/// File dossiers repository for database operations.
pub struct FileDossiersRepository;

impl FileDossiersRepository {
    #[instrument(skip_all, name = "catalog.repository.file_dossiers.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<FileDossier>, CatalogError> {
        lookup::fetch_all(pool, "file_dossiers.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.file_dossiers.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<FileDossier>, CatalogError> {
        lookup::fetch_by_id(pool, id, "file_dossiers.find_by_id").await
    }

    #[instrument(skip_all, name = "catalog.repository.file_dossiers.find_by_ids", fields(count = ids.len()))]
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[i64],
    ) -> Result<Vec<FileDossier>, CatalogError> {
        lookup::fetch_by_ids(pool, ids, "file_dossiers.find_by_ids").await
    }
}
