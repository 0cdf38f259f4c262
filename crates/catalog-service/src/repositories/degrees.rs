//! Degrees repository.

use crate::errors::CatalogError;
use crate::models::Degree;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for Degree {
    const TABLE: &'static str = "degrees";
    const SELECT_COLUMNS: &'static str =
        "id, hierarchy_id, code, name, shortened, correlative, is_active";
}

/// Degrees repository for database operations.
///
/// `is_active` is returned to callers but never filtered on.
pub struct DegreesRepository;

impl DegreesRepository {
    #[instrument(skip_all, name = "catalog.repository.degrees.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Degree>, CatalogError> {
        lookup::fetch_all(pool, "degrees.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.degrees.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Degree>, CatalogError> {
        lookup::fetch_by_id(pool, id, "degrees.find_by_id").await
    }

    /// Degrees belonging to a hierarchy.
    #[instrument(skip_all, name = "catalog.repository.degrees.find_by_hierarchy_id", fields(hierarchy_id = hierarchy_id))]
    pub async fn find_by_hierarchy_id(
        pool: &PgPool,
        hierarchy_id: i64,
    ) -> Result<Vec<Degree>, CatalogError> {
        lookup::fetch_by_value(pool, "hierarchy_id", hierarchy_id, "degrees.find_by_hierarchy_id")
            .await
    }
}
