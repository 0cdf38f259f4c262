//! Degree and hierarchy message handlers.

use crate::errors::CatalogError;
use crate::handlers::payload::{parse_columns, parse_id};
use crate::routes::AppState;
use crate::services::DegreesService;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip_all, name = "catalog.handlers.degrees.find_all")]
pub async fn find_all_degrees(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    DegreesService::find_all_degrees(&state.pool, columns.as_deref()).await
}

/// `degrees.findOne`, with the degree's hierarchy attached.
#[instrument(skip_all, name = "catalog.handlers.degrees.find_one", fields(id = tracing::field::Empty))]
pub async fn find_one_degree(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    tracing::Span::current().record("id", id);
    DegreesService::find_one_degree(&state.pool, id).await
}

#[instrument(skip_all, name = "catalog.handlers.hierarchies.find_all")]
pub async fn find_all_hierarchies(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    DegreesService::find_all_hierarchies(&state.pool, columns.as_deref()).await
}

/// `hierarchies.findOne`, with the hierarchy's degrees attached.
#[instrument(skip_all, name = "catalog.handlers.hierarchies.find_one", fields(id = tracing::field::Empty))]
pub async fn find_one_hierarchy(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    tracing::Span::current().record("id", id);
    DegreesService::find_one_hierarchy(&state.pool, id).await
}
