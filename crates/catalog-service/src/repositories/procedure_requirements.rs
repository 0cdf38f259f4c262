//! Procedure requirements repository.
//!
//! Only reachable through relation loading. Soft-deleted requirements are
//! invisible.

use crate::errors::CatalogError;
use crate::models::ProcedureRequirement;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for ProcedureRequirement {
    const TABLE: &'static str = "procedure_requirements";
    const SELECT_COLUMNS: &'static str = "id, procedure_modality_id, procedure_document_id, \
        number, created_at, updated_at, deleted_at";
    const VISIBLE: Option<&'static str> = Some("deleted_at IS NULL");
}

pub struct ProcedureRequirementsRepository;

impl ProcedureRequirementsRepository {
    #[instrument(skip_all, name = "catalog.repository.procedure_requirements.find_by_procedure_modality_ids", fields(count = procedure_modality_ids.len()))]
    pub async fn find_by_procedure_modality_ids(
        pool: &PgPool,
        procedure_modality_ids: &[i64],
    ) -> Result<Vec<ProcedureRequirement>, CatalogError> {
        lookup::fetch_by_column(
            pool,
            "procedure_modality_id",
            procedure_modality_ids,
            "procedure_requirements.find_by_procedure_modality_ids",
        )
        .await
    }
}
