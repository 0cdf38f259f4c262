//! Retirement fund average message handlers.
//!
//! Payload validation failures are still errors; only lookup failures are
//! folded into the `{data, serviceStatus}` envelope by the service.

use crate::errors::CatalogError;
use crate::handlers::payload::parse_id;
use crate::routes::AppState;
use crate::services::RetirementFundAveragesService;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip_all, name = "catalog.handlers.retirement_fund_averages.find_all")]
pub async fn find_all(state: Arc<AppState>, _data: Value) -> Result<Value, CatalogError> {
    RetirementFundAveragesService::find_all(&state.pool).await
}

#[instrument(skip_all, name = "catalog.handlers.retirement_fund_averages.find_one")]
pub async fn find_one(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let id = parse_id(&data, "id")?;
    RetirementFundAveragesService::find_one(&state.pool, id).await
}

/// `retirementFundAverages.findByDegreeId`: `{degreeId}`.
#[instrument(skip_all, name = "catalog.handlers.retirement_fund_averages.find_by_degree_id")]
pub async fn find_by_degree_id(state: Arc<AppState>, data: Value) -> Result<Value, CatalogError> {
    let degree_id = parse_id(&data, "degreeId")?;
    RetirementFundAveragesService::find_by_degree_id(&state.pool, degree_id).await
}

/// `retirementFundAverages.findByCategoryId`: `{categoryId}`.
#[instrument(skip_all, name = "catalog.handlers.retirement_fund_averages.find_by_category_id")]
pub async fn find_by_category_id(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let category_id = parse_id(&data, "categoryId")?;
    RetirementFundAveragesService::find_by_category_id(&state.pool, category_id).await
}

/// `retirementFundAverages.findByDegreeAndCategory`: `{degreeId, categoryId}`.
#[instrument(
    skip_all,
    name = "catalog.handlers.retirement_fund_averages.find_by_degree_and_category"
)]
pub async fn find_by_degree_and_category(
    state: Arc<AppState>,
    data: Value,
) -> Result<Value, CatalogError> {
    let degree_id = parse_id(&data, "degreeId")?;
    let category_id = parse_id(&data, "categoryId")?;
    RetirementFundAveragesService::find_by_degree_and_category(&state.pool, degree_id, category_id)
        .await
}
