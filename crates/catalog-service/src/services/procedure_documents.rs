//! Procedure documents service.

use crate::errors::CatalogError;
use crate::models::ProcedureDocument;
use crate::repositories::ProcedureDocumentsRepository;
use crate::services::projection::{found, key_by_id, project, resolve_columns};
use serde_json::{json, Map, Value};
use sqlx::PgPool;

/// Columns returned by `findAll` when the caller asks for none.
pub const DEFAULT_COLUMNS: &[&str] = &["id", "name", "shortened"];

pub struct ProcedureDocumentsService;

impl ProcedureDocumentsService {
    /// Documents that have an abbreviation.
    pub async fn find_all(pool: &PgPool, columns: Option<&[String]>) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<ProcedureDocument>(columns, DEFAULT_COLUMNS)?;
        let rows = ProcedureDocumentsRepository::find_all_shortened(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        found(ProcedureDocumentsRepository::find_by_id(pool, id).await?, id)
    }

    /// Documents keyed by id.
    ///
    /// Without explicit columns each entry is `{name, shortened}` with a
    /// missing abbreviation reported as `""`.
    pub async fn find_all_by_ids(
        pool: &PgPool,
        ids: &[i64],
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let requested = columns.filter(|c| !c.is_empty());
        let columns = match requested {
            Some(requested) => Some(resolve_columns::<ProcedureDocument>(Some(requested), &[])?),
            None => None,
        };
        if ids.is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        let rows = ProcedureDocumentsRepository::find_by_ids(pool, ids).await?;
        match columns {
            Some(columns) => key_by_id(&rows, |d| i64::from(d.id), &columns),
            None => Ok(Value::Object(
                rows.into_iter()
                    .map(|doc| {
                        (
                            doc.id.to_string(),
                            json!({
                                "name": doc.name,
                                "shortened": doc.shortened.unwrap_or_default(),
                            }),
                        )
                    })
                    .collect(),
            )),
        }
    }
}
