//! Procedure modalities repository.

use crate::errors::CatalogError;
use crate::models::ProcedureModality;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for ProcedureModality {
    const TABLE: &'static str = "procedure_modalities";
    const SELECT_COLUMNS: &'static str = "id, procedure_type_id, name, shortened, is_valid";
}

/// Procedure modalities repository for database operations.
pub struct ProcedureModalitiesRepository;

impl ProcedureModalitiesRepository {
    #[instrument(skip_all, name = "catalog.repository.procedure_modalities.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<ProcedureModality>, CatalogError> {
        lookup::fetch_all(pool, "procedure_modalities.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.procedure_modalities.find_by_id", fields(id = id))]
    pub async fn find_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<ProcedureModality>, CatalogError> {
        lookup::fetch_by_id(pool, id, "procedure_modalities.find_by_id").await
    }

    #[instrument(skip_all, name = "catalog.repository.procedure_modalities.find_by_ids", fields(count = ids.len()))]
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[i64],
    ) -> Result<Vec<ProcedureModality>, CatalogError> {
        lookup::fetch_by_ids(pool, ids, "procedure_modalities.find_by_ids").await
    }

    #[instrument(skip_all, name = "catalog.repository.procedure_modalities.find_by_procedure_type_ids", fields(count = procedure_type_ids.len()))]
    pub async fn find_by_procedure_type_ids(
        pool: &PgPool,
        procedure_type_ids: &[i64],
    ) -> Result<Vec<ProcedureModality>, CatalogError> {
        lookup::fetch_by_column(
            pool,
            "procedure_type_id",
            procedure_type_ids,
            "procedure_modalities.find_by_procedure_type_ids",
        )
        .await
    }
}
