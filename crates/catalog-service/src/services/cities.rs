//! Cities service.

use crate::errors::CatalogError;
use crate::models::City;
use crate::repositories::CitiesRepository;
use crate::services::projection::{found, project, resolve_columns};
use serde_json::Value;
use sqlx::PgPool;

/// Columns returned by `findAll` when the caller asks for none.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "firstShortened",
    "secondShortened",
    "thirdShortened",
    "companyPhones",
    "companyCellphones",
];

pub struct CitiesService;

impl CitiesService {
    pub async fn find_all(pool: &PgPool, columns: Option<&[String]>) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<City>(columns, DEFAULT_COLUMNS)?;
        let rows = CitiesRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        found(CitiesRepository::find_by_id(pool, id).await?, id)
    }
}
