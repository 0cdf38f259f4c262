//! Units and breakdowns service.
//!
//! A unit is returned with its breakdown; a breakdown with its units.

use crate::errors::CatalogError;
use crate::models::{Breakdown, Entity, Unit};
use crate::repositories::{BreakdownsRepository, UnitsRepository};
use crate::services::projection::{project, resolve_columns, to_value, with_relation};
use serde_json::Value;
use sqlx::PgPool;

/// Columns returned by `findAll` when the caller asks for none.
pub const DEFAULT_COLUMNS: &[&str] = &["code", "name"];

pub struct UnitsService;

impl UnitsService {
    pub async fn find_all_units(
        pool: &PgPool,
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<Unit>(columns, DEFAULT_COLUMNS)?;
        let rows = UnitsRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one_unit(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        let unit = UnitsRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CatalogError::entity_not_found(Unit::NAME, id))?;
        let breakdown =
            BreakdownsRepository::find_by_id(pool, i64::from(unit.breakdown_id)).await?;

        Ok(with_relation(
            to_value(&unit)?,
            "breakdown",
            to_value(&breakdown)?,
        ))
    }

    pub async fn find_all_breakdowns(
        pool: &PgPool,
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<Breakdown>(columns, DEFAULT_COLUMNS)?;
        let rows = BreakdownsRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one_breakdown(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        let breakdown = BreakdownsRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CatalogError::entity_not_found(Breakdown::NAME, id))?;
        let units = UnitsRepository::find_by_breakdown_id(pool, id).await?;

        Ok(with_relation(
            to_value(&breakdown)?,
            "units",
            to_value(&units)?,
        ))
    }
}
