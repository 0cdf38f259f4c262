//! Kinships service.

use crate::errors::CatalogError;
use crate::models::Kinship;
use crate::repositories::KinshipsRepository;
use crate::services::projection::{found, key_by_id, project, resolve_columns};
use serde_json::{Map, Value};
use sqlx::PgPool;

/// Columns returned by `findAll` and `findAllByIds` when the caller asks for none.
pub const DEFAULT_COLUMNS: &[&str] = &["id", "name"];

pub struct KinshipsService;

impl KinshipsService {
    pub async fn find_all(pool: &PgPool, columns: Option<&[String]>) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<Kinship>(columns, DEFAULT_COLUMNS)?;
        let rows = KinshipsRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        found(KinshipsRepository::find_by_id(pool, id).await?, id)
    }

    /// Kinships keyed by id. Unknown or deleted ids are left out.
    pub async fn find_all_by_ids(
        pool: &PgPool,
        ids: &[i64],
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<Kinship>(columns, DEFAULT_COLUMNS)?;
        if ids.is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        let rows = KinshipsRepository::find_by_ids(pool, ids).await?;
        key_by_id(&rows, |k| i64::from(k.id), &columns)
    }
}
