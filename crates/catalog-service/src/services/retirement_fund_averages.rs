//! Retirement fund averages service.
//!
//! Results travel in a `{data, serviceStatus}` envelope. A failed lookup is
//! logged and reported as `serviceStatus: false` instead of an error; an
//! absent row for `findOne` is still a not-found error.

use crate::errors::CatalogError;
use crate::models::{Entity, RetirementFundAverage, ServiceEnvelope};
use crate::repositories::RetirementFundAveragesRepository;
use crate::services::projection::to_value;
use serde_json::Value;
use sqlx::PgPool;
use tracing::instrument;

pub struct RetirementFundAveragesService;

impl RetirementFundAveragesService {
    #[instrument(skip_all, name = "catalog.services.retirement_fund_averages.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Value, CatalogError> {
        list_envelope(RetirementFundAveragesRepository::find_all(pool).await)
    }

    pub async fn find_one(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        match RetirementFundAveragesRepository::find_by_id(pool, id).await {
            Ok(Some(average)) => to_value(&ServiceEnvelope::ok(average)),
            Ok(None) => Err(CatalogError::entity_not_found(
                RetirementFundAverage::NAME,
                id,
            )),
            Err(e) => {
                tracing::error!(
                    target: "catalog.services.retirement_fund_averages",
                    id = id,
                    error = %e,
                    "Failed to load retirement fund average"
                );
                to_value(&ServiceEnvelope::failed(Value::Null))
            }
        }
    }

    pub async fn find_by_degree_id(pool: &PgPool, degree_id: i64) -> Result<Value, CatalogError> {
        list_envelope(RetirementFundAveragesRepository::find_by_degree_id(pool, degree_id).await)
    }

    pub async fn find_by_category_id(
        pool: &PgPool,
        category_id: i64,
    ) -> Result<Value, CatalogError> {
        list_envelope(
            RetirementFundAveragesRepository::find_by_category_id(pool, category_id).await,
        )
    }

    /// `data` is `null` when no active row exists for the pair.
    pub async fn find_by_degree_and_category(
        pool: &PgPool,
        degree_id: i64,
        category_id: i64,
    ) -> Result<Value, CatalogError> {
        match RetirementFundAveragesRepository::find_by_degree_and_category(
            pool,
            degree_id,
            category_id,
        )
        .await
        {
            Ok(average) => to_value(&ServiceEnvelope::ok(average)),
            Err(e) => {
                tracing::error!(
                    target: "catalog.services.retirement_fund_averages",
                    degree_id = degree_id,
                    category_id = category_id,
                    error = %e,
                    "Failed to load retirement fund average"
                );
                to_value(&ServiceEnvelope::failed(Value::Null))
            }
        }
    }
}

fn list_envelope(
    result: Result<Vec<RetirementFundAverage>, CatalogError>,
) -> Result<Value, CatalogError> {
    match result {
        Ok(averages) => {
            tracing::debug!(
                target: "catalog.services.retirement_fund_averages",
                count = averages.len(),
                "Loaded retirement fund averages"
            );
            to_value(&ServiceEnvelope::ok(averages))
        }
        Err(e) => {
            tracing::error!(
                target: "catalog.services.retirement_fund_averages",
                error = %e,
                "Failed to load retirement fund averages"
            );
            to_value(&ServiceEnvelope::failed(Vec::<RetirementFundAverage>::new()))
        }
    }
}
