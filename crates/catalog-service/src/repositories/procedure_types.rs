//! Procedure types repository.
//!
//! Soft-deleted procedure types are invisible, including through relations.

use crate::errors::CatalogError;
use crate::models::ProcedureType;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for ProcedureType {
    const TABLE: &'static str = "procedure_types";
    const SELECT_COLUMNS: &'static str =
        "id, module_id, name, second_name, created_at, updated_at, deleted_at";
    const VISIBLE: Option<&'static str> = Some("deleted_at IS NULL");
}

/// Procedure types repository for database operations.
pub struct ProcedureTypesRepository;

impl ProcedureTypesRepository {
    #[instrument(skip_all, name = "catalog.repository.procedure_types.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<ProcedureType>, CatalogError> {
        lookup::fetch_all(pool, "procedure_types.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.procedure_types.find_by_id", fields(id = id))]
    pub async fn find_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<ProcedureType>, CatalogError> {
        lookup::fetch_by_id(pool, id, "procedure_types.find_by_id").await
    }

    #[instrument(skip_all, name = "catalog.repository.procedure_types.find_by_ids", fields(count = ids.len()))]
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[i64],
    ) -> Result<Vec<ProcedureType>, CatalogError> {
        lookup::fetch_by_ids(pool, ids, "procedure_types.find_by_ids").await
    }

    #[instrument(skip_all, name = "catalog.repository.procedure_types.find_by_module_ids", fields(count = module_ids.len()))]
    pub async fn find_by_module_ids(
        pool: &PgPool,
        module_ids: &[i64],
    ) -> Result<Vec<ProcedureType>, CatalogError> {
        lookup::fetch_by_column(
            pool,
            "module_id",
            module_ids,
            "procedure_types.find_by_module_ids",
        )
        .await
    }
}
