//! Module, procedure type and procedure modality message handlers.
//!
//! Also serves the two composite lookups of the domain:
//!
//! - `modules.findDataRelations` - an entity with dotted relation paths loaded
//! - `modules.findDocuments` - distinct documents required by a set of modules

use crate::errors::CatalogError;
use crate::handlers::payload::{parse_columns, parse_entity, parse_id, parse_ids, parse_relations};
use crate::routes::AppState;
use crate::services::ModulesService;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip_all, name = "catalog.handlers.modules.find_all")]
pub async fn find_all_modules(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    ModulesService::find_all_modules(&state.pool, columns.as_deref()).await
}

#[instrument(skip_all, name = "catalog.handlers.modules.find_one")]
pub async fn find_one_module(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    ModulesService::find_one_module(&state.pool, id).await
}

#[instrument(skip_all, name = "catalog.handlers.procedure_types.find_all")]
pub async fn find_all_procedure_types(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    ModulesService::find_all_procedure_types(&state.pool, columns.as_deref()).await
}

#[instrument(skip_all, name = "catalog.handlers.procedure_types.find_one")]
pub async fn find_one_procedure_type(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    ModulesService::find_one_procedure_type(&state.pool, id).await
}

#[instrument(skip_all, name = "catalog.handlers.procedure_modalities.find_all")]
pub async fn find_all_procedure_modalities(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let columns = parse_columns(&data)?;
    ModulesService::find_all_procedure_modalities(&state.pool, columns.as_deref()).await
}

#[instrument(skip_all, name = "catalog.handlers.procedure_modalities.find_one")]
pub async fn find_one_procedure_modality(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    ModulesService::find_one_procedure_modality(&state.pool, id).await
}

/// `modules.findDataRelations`: `{id, relations, entity}`.
#[instrument(
    skip_all,
    name = "catalog.handlers.modules.find_data_relations",
    fields(entity = tracing::field::Empty, relations = tracing::field::Empty)
)]
pub async fn find_data_relations(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    let relations = parse_relations(&data)?;
    let entity = parse_entity(&data)?;

    let span = tracing::Span::current();
    span.record("entity", entity.as_str());
    span.record("relations", relations.len());

    ModulesService::find_data_relations(&state.pool, id, &relations, &entity).await
}

/// `modules.findDocuments`: `{ids}` or a bare id list.
#[instrument(skip_all, name = "catalog.handlers.modules.find_documents")]
pub async fn find_documents(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let ids = parse_ids(&data)?;
    ModulesService::find_documents(&state.pool, &ids).await
}
