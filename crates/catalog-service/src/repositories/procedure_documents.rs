//! Procedure documents repository.

use crate::errors::CatalogError;
use crate::models::ProcedureDocument;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for ProcedureDocument {
    const TABLE: &'static str = "procedure_documents";
    const SELECT_COLUMNS: &'static str =
        "id, name, shortened, expire_date, created_at, updated_at";
}

/// Procedure documents repository for database operations.
pub struct ProcedureDocumentsRepository;

impl ProcedureDocumentsRepository {
    /// Documents that carry a non-empty abbreviation.
    #[instrument(skip_all, name = "catalog.repository.procedure_documents.find_all_shortened")]
    pub async fn find_all_shortened(
        pool: &PgPool,
    ) -> Result<Vec<ProcedureDocument>, CatalogError> {
        lookup::fetch_filtered(
            pool,
            "shortened IS NOT NULL AND shortened <> ''",
            "procedure_documents.find_all_shortened",
        )
        .await
    }

    #[instrument(skip_all, name = "catalog.repository.procedure_documents.find_by_id", fields(id = id))]
    pub async fn find_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<ProcedureDocument>, CatalogError> {
        lookup::fetch_by_id(pool, id, "procedure_documents.find_by_id").await
    }

    #[instrument(skip_all, name = "catalog.repository.procedure_documents.find_by_ids", fields(count = ids.len()))]
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[i64],
    ) -> Result<Vec<ProcedureDocument>, CatalogError> {
        lookup::fetch_by_ids(pool, ids, "procedure_documents.find_by_ids").await
    }
}
