//! Categories repository.

use crate::errors::CatalogError;
use crate::models::Category;
use crate::repositories::lookup::{self, LookupTable};
use sqlx::PgPool;
use tracing::instrument;

impl LookupTable for Category {
    const TABLE: &'static str = "categories";
    const SELECT_COLUMNS: &'static str = r#"id, "from", "to", name, percentage"#;
}

/// Categories repository for database operations.
pub struct CategoriesRepository;

impl CategoriesRepository {
    #[instrument(skip_all, name = "catalog.repository.categories.find_all")]
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Category>, CatalogError> {
        lookup::fetch_all(pool, "categories.find_all").await
    }

    #[instrument(skip_all, name = "catalog.repository.categories.find_by_id", fields(id = id))]
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Category>, CatalogError> {
        lookup::fetch_by_id(pool, id, "categories.find_by_id").await
    }
}
