//! Modules repository.

use crate::errors::CatalogError;
use crate::models::{DocumentSummary, Module};
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for Module {
    const TABLE: &'static str = "modules";
    const SELECT_COLUMNS: &'static str = "id, name, display_name, description, shortened, \
        url_prod, url_dev, url_manual, url_test";
}

/// Modules repository for database operations.
pub struct ModulesRepository;

impl ModulesRepository {
    #[instrument(skip_all, name = "catalog.repository.modules.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Module>, CatalogError> {
        lookup::fetch_all(pool, "modules.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.modules.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Module>, CatalogError> {
        lookup::fetch_by_id(pool, id, "modules.find_by_id").await
    }

    #[instrument(skip_all, name = "catalog.repository.modules.find_by_ids", fields(count = ids.len()))]
    pub async fn find_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<Module>, CatalogError> {
        lookup::fetch_by_ids(pool, ids, "modules.find_by_ids").await
    }

    /// Documents required by the live requirements of the given modules.
    ///
    /// Rows come back in request order, then by procedure type, modality and
    /// requirement; the same document may appear more than once.
    #[instrument(skip_all, name = "catalog.repository.modules.find_documents", fields(count = module_ids.len()))]
    pub async fn find_documents(
        pool: &PgPool,
        module_ids: &[i64],
    ) -> Result<Vec<DocumentSummary>, CatalogError> {
        if module_ids.is_empty() {
            return Ok(Vec::new());
        }

        lookup::timed(
            "modules.find_documents",
            sqlx::query_as::<_, DocumentSummary>(
                r#"
                SELECT d.id, d.name
                FROM unnest($1::bigint[]) WITH ORDINALITY AS requested(module_id, position)
                JOIN procedure_types t
                    ON t.module_id = requested.module_id AND t.deleted_at IS NULL
                JOIN procedure_modalities m
                    ON m.procedure_type_id = t.id
                JOIN procedure_requirements r
                    ON r.procedure_modality_id = m.id AND r.deleted_at IS NULL
                JOIN procedure_documents d
                    ON d.id = r.procedure_document_id
                ORDER BY requested.position, t.id, m.id, r.id
                "#,
            )
            .bind(module_ids)
            .fetch_all(pool),
        )
        .await
    }
}
