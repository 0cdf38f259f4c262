//! Financial entities service.

use crate::errors::CatalogError;
use crate::models::FinancialEntity;
use crate::repositories::FinancialEntitiesRepository;
use crate::services::projection::{found, project, resolve_columns};
use serde_json::Value;
use sqlx::PgPool;

/// Columns returned by `findAll` when the caller asks for none.
pub const DEFAULT_COLUMNS: &[&str] = &["id", "name"];

pub struct FinancialEntitiesService;

impl FinancialEntitiesService {
    pub async fn find_all(pool: &PgPool, columns: Option<&[String]>) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<FinancialEntity>(columns, DEFAULT_COLUMNS)?;
        let rows = FinancialEntitiesRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        found(FinancialEntitiesRepository::find_by_id(pool, id).await?, id)
    }
}
