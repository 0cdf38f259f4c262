//! Hierarchies repository.

use crate::errors::CatalogError;
use crate::models::Hierarchy;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for Hierarchy {
    const TABLE: &'static str = "hierarchies";
    const SELECT_COLUMNS: &'static str = "id, code, name";
}

/// Hierarchies repository for database operations.
pub struct HierarchiesRepository;

impl HierarchiesRepository {
    #[instrument(skip_all, name = "catalog.repository.hierarchies.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Hierarchy>, CatalogError> {
        lookup::fetch_all(pool, "hierarchies.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.hierarchies.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Hierarchy>, CatalogError> {
        lookup::fetch_by_id(pool, id, "hierarchies.find_by_id").await
    }
}
