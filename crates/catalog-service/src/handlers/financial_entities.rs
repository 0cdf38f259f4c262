//! Financial entity message handlers.

use crate::errors::CatalogError;
use crate::handlers::payload::{parse_columns, parse_id};
use crate::routes::AppState;
use crate::services::FinancialEntitiesService;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// `financialEntities.findAll`
#[instrument(skip_all, name = "catalog.handlers.financial_entities.find_all")]
pub async fn find_all(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    FinancialEntitiesService::find_all(&state.pool, columns.as_deref()).await
}

/// `financialEntities.findOne`
#[instrument(skip_all, name = "catalog.handlers.financial_entities.find_one")]
pub async fn find_one(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    FinancialEntitiesService::find_one(&state.pool, id).await
}
