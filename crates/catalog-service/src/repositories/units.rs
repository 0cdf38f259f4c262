//! Units repository.

use crate::errors::CatalogError;
use crate::models::Unit;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for Unit {
    const TABLE: &'static str = "units";
    const SELECT_COLUMNS: &'static str =
        "id, breakdown_id, district, code, name, shortened, created_at, updated_at";
}

/// Units repository for database operations.
pub struct UnitsRepository;

impl UnitsRepository {
    #[instrument(skip_all, name = "catalog.repository.units.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Unit>, CatalogError> {
        lookup::fetch_all(pool, "units.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.units.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Unit>, CatalogError> {
        lookup::fetch_by_id(pool, id, "units.find_by_id").await
    }

    /// Units belonging to a breakdown.
    #[instrument(skip_all, name = "catalog.repository.units.find_by_breakdown_id", fields(breakdown_id = breakdown_id))]
    pub async fn find_by_breakdown_id(
        pool: &PgPool,
        breakdown_id: i64,
    ) -> Result<Vec<Unit>, CatalogError> {
        lookup::fetch_by_value(pool, "breakdown_id", breakdown_id, "units.find_by_breakdown_id")
            .await
    }
}
