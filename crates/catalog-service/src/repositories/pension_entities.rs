//! Pension entities repository.

use crate::errors::CatalogError;
use crate::models::PensionEntity;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for PensionEntity {
    const TABLE: &'static str = "pension_entities";
    const SELECT_COLUMNS: &'static str = "id, type, name, is_active";
}

/// Pension entities repository for database operations.
///
/// Inactive entities are still returned; `isActive` is for the caller.
pub struct PensionEntitiesRepository;

impl PensionEntitiesRepository {
    #[instrument(skip_all, name = "catalog.repository.pension_entities.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<PensionEntity>, CatalogError> {
        lookup::fetch_all(pool, "pension_entities.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.pension_entities.find_by_id", fields(id = id))]
    pub async fn find_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<PensionEntity>, CatalogError> {
        lookup::fetch_by_id(pool, id, "pension_entities.find_by_id").await
    }
}
