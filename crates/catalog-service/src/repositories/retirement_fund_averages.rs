//! Retirement fund averages repository.
//!
//! Only active rows are visible.

use crate::errors::CatalogError;
use crate::models::RetirementFundAverage;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for RetirementFundAverage {
    const TABLE: &'static str = "retirement_fund_averages";
    const SELECT_COLUMNS: &'static str =
        "id, degree_id, category_id, retirement_fund_average, is_active";
    const VISIBLE: Option<&'static str> = Some("is_active = true");
}

/// Retirement fund averages repository for database operations.
pub struct RetirementFundAveragesRepository;

impl RetirementFundAveragesRepository {
    #[instrument(skip_all, name = "catalog.repository.retirement_fund_averages.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<RetirementFundAverage>, CatalogError> {
        lookup::fetch_all(pool, "retirement_fund_averages.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.retirement_fund_averages.find_by_id", fields(id = id))]
    pub async fn find_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<RetirementFundAverage>, CatalogError> {
        lookup::fetch_by_id(pool, id, "retirement_fund_averages.find_by_id").await
    }

    #[instrument(skip_all, name = "catalog.repository.retirement_fund_averages.find_by_degree_id", fields(degree_id = degree_id))]
    pub async fn find_by_degree_id(
        pool: &PgPool,
        degree_id: i64,
    ) -> Result<Vec<RetirementFundAverage>, CatalogError> {
        lookup::fetch_by_value(
            pool,
            "degree_id",
            degree_id,
            "retirement_fund_averages.find_by_degree_id",
        )
        .await
    }

    #[instrument(skip_all, name = "catalog.repository.retirement_fund_averages.find_by_category_id", fields(category_id = category_id))]
    pub async fn find_by_category_id(
        pool: &PgPool,
        category_id: i64,
    ) -> Result<Vec<RetirementFundAverage>, CatalogError> {
        lookup::fetch_by_value(
            pool,
            "category_id",
            category_id,
            "retirement_fund_averages.find_by_category_id",
        )
        .await
    }

    /// First active row for a degree/category pair.
    #[instrument(
        skip_all,
        name = "catalog.repository.retirement_fund_averages.find_by_degree_and_category",
        fields(degree_id = degree_id, category_id = category_id)
    )]
    pub async fn find_by_degree_and_category(
        pool: &PgPool,
        degree_id: i64,
        category_id: i64,
    ) -> Result<Option<RetirementFundAverage>, CatalogError> {
        let mut sql = lookup::select_sql::<RetirementFundAverage>(Some(
            "degree_id = $1 AND category_id = $2",
        ));
        sql.push_str(" LIMIT 1");

        lookup::timed(
            "retirement_fund_averages.find_by_degree_and_category",
            sqlx::query_as::<_, RetirementFundAverage>(&sql)
                .bind(degree_id)
                .bind(category_id)
                .fetch_optional(pool),
        )
        .await
    }
}
