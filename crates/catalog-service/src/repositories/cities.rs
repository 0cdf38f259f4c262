//! Cities repository.

use crate::errors::CatalogError;
use crate::models::City;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for City {
    const TABLE: &'static str = "cities";
    const SELECT_COLUMNS: &'static str = "id, name, first_shortened, second_shortened, \
        third_shortened, to_bank, latitude, longitude, company_address, phone_prefix, \
        company_phones, company_cellphones";
}

/// Cities repository for database operations.
pub struct CitiesRepository;

impl CitiesRepository {
    #[instrument(skip_all, name = "catalog.repository.cities.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<City>, CatalogError> {
        lookup::fetch_all(pool, "cities.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.cities.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<City>, CatalogError> {
        lookup::fetch_by_id(pool, id, "cities.find_by_id").await
    }
}
