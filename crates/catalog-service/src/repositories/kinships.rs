//! Kinships repository.
//!
//! Soft-deleted kinships are invisible to every query.

use crate::errors::CatalogError;
use crate::models::Kinship;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for Kinship {
    const TABLE: &'static str = "kinships";
    const SELECT_COLUMNS: &'static str = "id, name, created_at, updated_at, deleted_at";
    const VISIBLE: Option<&'static str> = Some("deleted_at IS NULL");
}

/// Kinships repository for database operations.
pub struct KinshipsRepository;

impl KinshipsRepository {
    #[instrument(skip_all, name = "catalog.repository.kinships.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Kinship>, CatalogError> {
        lookup::fetch_all(pool, "kinships.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.kinships.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Kinship>, CatalogError> {
        lookup::fetch_by_id(pool, id, "kinships.find_by_id").await
    }

    #[instrument(skip_all, name = "catalog.repository.kinships.find_by_ids", fields(count = ids.len()))]
    pub async fn find_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<Kinship>, CatalogError> {
        lookup::fetch_by_ids(pool, ids, "kinships.find_by_ids").await
    }
}
