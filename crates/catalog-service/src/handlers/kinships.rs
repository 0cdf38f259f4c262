//! Kinship message handlers.

use crate::errors::CatalogError;
use crate::handlers::payload::{parse_columns, parse_id, parse_ids};
use crate::routes::AppState;
use crate::services::KinshipsService;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// `kinships.findAll`
#[instrument(skip_all, name = "catalog.handlers.kinships.find_all")]
pub async fn find_all(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    KinshipsService::find_all(&state.pool, columns.as_deref()).await
}

/// `kinships.findOne`
#[instrument(skip_all, name = "catalog.handlers.kinships.find_one")]
pub async fn find_one(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    KinshipsService::find_one(&state.pool, id).await
}

/// `kinships.findAllByIds`: `{ids, columns?}` or a bare id list.
#[instrument(skip_all, name = "catalog.handlers.kinships.find_all_by_ids")]
pub async fn find_all_by_ids(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let ids = parse_ids(&data)?;
    // A bare list carries ids only.
    let columns = if data.is_object() {
        parse_columns(&data)?
    } else {
        None
    };
    tracing::debug!(target: "catalog.handlers.kinships", count = ids.len(), "Looking up by ids");
    KinshipsService::find_all_by_ids(&state.pool, &ids, columns.as_deref()).await
}
