//! Financial entities repository.

use crate::errors::CatalogError;
use crate::models::FinancialEntity;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for FinancialEntity {
    const TABLE: &'static str = "financial_entities";
    const SELECT_COLUMNS: &'static str = "id, name, created_at, updated_at";
}

pub struct FinancialEntitiesRepository;

impl FinancialEntitiesRepository {
    #[instrument(skip_all, name = "catalog.repository.financial_entities.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<FinancialEntity>, CatalogError> {
        lookup::fetch_all(pool, "financial_entities.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.financial_entities.find_by_id", fields(id = id))]
    pub async fn find_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<FinancialEntity>, CatalogError> {
        lookup::fetch_by_id(pool, id, "financial_entities.find_by_id").await
    }
}
