//! File dossier message handlers.

use crate::errors::CatalogError;
use crate::handlers::payload::{parse_columns, parse_id, parse_ids};
use crate::routes::AppState;
use crate::services::FileDossiersService;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// `fileDossiers.findAll`
#[instrument(skip_all, name = "catalog.handlers.file_dossiers.find_all")]
pub async fn find_all(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    FileDossiersService::find_all(&state.pool, columns.as_deref()).await
}

/// `fileDossiers.findOne`
#[instrument(skip_all, name = "catalog.handlers.file_dossiers.find_one")]
pub async fn find_one(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    FileDossiersService::find_one(&state.pool, id).await
}

/// `fileDossiers.findAllByIds`: `{ids, columns?}` or a bare id list.
#[instrument(skip_all, name = "catalog.handlers.file_dossiers.find_all_by_ids")]
pub async fn find_all_by_ids(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let ids = parse_ids(&data)?;
    // A bare list carries ids only.
    let columns = if data.is_object() {
        parse_columns(&data)?
    } else {
        None
    };
    tracing::debug!(target: "catalog.handlers.file_dossiers", count = ids.len(), "Looking up by ids");
    FileDossiersService::find_all_by_ids(&state.pool, &ids, columns.as_deref()).await
}
