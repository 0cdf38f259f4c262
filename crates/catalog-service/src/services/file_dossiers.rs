//! File dossiers service.

use crate::errors::CatalogError;
use crate::models::{Entity, FileDossier};
use crate::repositories::FileDossiersRepository;
use crate::services::projection::{found, key_by_id, project, resolve_columns};
use serde_json::{Map, Value};
use sqlx::PgPool;

pub struct FileDossiersService;

impl FileDossiersService {
    pub async fn find_all(pool: &PgPool, columns: Option<&[String]>) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<FileDossier>(columns, FileDossier::COLUMNS)?;
        let rows = FileDossiersRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        found(FileDossiersRepository::find_by_id(pool, id).await?, id)
    }

    /// Dossiers keyed by id. Unknown or deleted ids are left out.
    pub async fn find_all_by_ids(
        pool: &PgPool,
        ids: &[i64],
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<FileDossier>(columns, FileDossier::COLUMNS)?;
        if ids.is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        let rows = FileDossiersRepository::find_by_ids(pool, ids).await?;
        key_by_id(&rows, |d| d.id, &columns)
    }
}
