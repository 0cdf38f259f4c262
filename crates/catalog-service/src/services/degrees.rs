//! Degrees and hierarchies service.
//!
//! A degree is returned with its hierarchy; a hierarchy with its degrees.

use crate::errors::CatalogError;
use crate::models::{Degree, Entity, Hierarchy};
use crate::repositories::{DegreesRepository, HierarchiesRepository};
use crate::services::projection::{project, resolve_columns, to_value, with_relation};
use serde_json::Value;
use sqlx::PgPool;

/// Columns returned by `findAll` when the caller asks for none.
pub const DEFAULT_COLUMNS: &[&str] = &["code", "name"];

pub struct DegreesService;

impl DegreesService {
    pub async fn find_all_degrees(
        pool: &PgPool,
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<Degree>(columns, DEFAULT_COLUMNS)?;
        let rows = DegreesRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one_degree(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        let degree = DegreesRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CatalogError::entity_not_found(Degree::NAME, id))?;
        let hierarchy =
            HierarchiesRepository::find_by_id(pool, i64::from(degree.hierarchy_id)).await?;

        Ok(with_relation(
            to_value(&degree)?,
            "hierarchy",
            to_value(&hierarchy)?,
        ))
    }

    pub async fn find_all_hierarchies(
        pool: &PgPool,
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<Hierarchy>(columns, DEFAULT_COLUMNS)?;
        let rows = HierarchiesRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one_hierarchy(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        let hierarchy = HierarchiesRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CatalogError::entity_not_found(Hierarchy::NAME, id))?;
        let degrees = DegreesRepository::find_by_hierarchy_id(pool, id).await?;

        Ok(with_relation(
            to_value(&hierarchy)?,
            "degrees",
            to_value(&degrees)?,
        ))
    }
}
