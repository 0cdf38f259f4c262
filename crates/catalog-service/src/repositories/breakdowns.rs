//! Breakdowns repository.

use crate::errors::CatalogError;
use crate::models::Breakdown;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for Breakdown {
    const TABLE: &'static str = "breakdowns";
    const SELECT_COLUMNS: &'static str = "id, code, name";
}

/// Breakdowns repository for database operations.
pub struct BreakdownsRepository;

impl BreakdownsRepository {
    #[instrument(skip_all, name = "catalog.repository.breakdowns.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Breakdown>, CatalogError> {
        lookup::fetch_all(pool, "breakdowns.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.breakdowns.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Breakdown>, CatalogError> {
        lookup::fetch_by_id(pool, id, "breakdowns.find_by_id").await
    }
}
