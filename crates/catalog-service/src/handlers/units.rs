//! Unit and breakdown message handlers.

use crate::errors::CatalogError;
use crate::handlers::payload::{parse_columns, parse_id};
use crate::routes::AppState;
use crate::services::UnitsService;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip_all, name = "catalog.handlers.units.find_all")]
pub async fn find_all_units(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    UnitsService::find_all_units(&state.pool, columns.as_deref()).await
}

/// `units.findOne`, with the unit's breakdown attached.
#[instrument(skip_all, name = "catalog.handlers.units.find_one")]
pub async fn find_one_unit(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    UnitsService::find_one_unit(&state.pool, id).await
}

#[instrument(skip_all, name = "catalog.handlers.breakdowns.find_all")]
pub async fn find_all_breakdowns(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    UnitsService::find_all_breakdowns(&state.pool, columns.as_deref()).await
}

/// `breakdowns.findOne`, with the breakdown's units attached.
#[instrument(skip_all, name = "catalog.handlers.breakdowns.find_one")]
pub async fn find_one_breakdown(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    UnitsService::find_one_breakdown(&state.pool, id).await
}
