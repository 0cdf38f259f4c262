//! Shared query building blocks for the lookup repositories.
//!
//! Every table repository describes its row type with `LookupTable` and
//! delegates the common shapes (all rows, by id, by id list, by foreign key)
//! to the functions here. Each query is timed and recorded under the
//! caller's `operation` label.

use crate::errors::CatalogError;
use crate::observability::metrics;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::time::Instant;

/// A table served by a lookup repository.
pub trait LookupTable: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Column list for `SELECT`, in entity order.
    const SELECT_COLUMNS: &'static str;

    /// Predicate hiding rows that are logically absent (soft deleted or
    /// inactive).
    const VISIBLE: Option<&'static str> = None;
}

/// Build `SELECT ... FROM table [WHERE ...] ORDER BY id`.
pub(crate) fn select_sql<T: LookupTable>(condition: Option<&str>) -> String {
    let mut sql = format!("SELECT {} FROM {}", T::SELECT_COLUMNS, T::TABLE);

    let predicates: Vec<&str> = T::VISIBLE.into_iter().chain(condition).collect();
    if !predicates.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&predicates.join(" AND "));
    }

    sql.push_str(" ORDER BY id");
    sql
}

/// Await a query, recording its duration and outcome.
pub(crate) async fn timed<R, F>(operation: &str, query: F) -> Result<R, CatalogError>
where
    F: Future<Output = Result<R, sqlx::Error>>,
{
    let start = Instant::now();
    let result = query.await;
    let status = if result.is_ok() { "success" } else { "error" };
    metrics::record_db_query(operation, status, start.elapsed());

    result.map_err(|e| {
        tracing::warn!(target: "catalog.repository", operation = %operation, error = %e, "Query failed");
        CatalogError::from(e)
    })
}

/// All visible rows.
pub async fn fetch_all<T: LookupTable>(
    pool: &PgPool,
    operation: &str,
) -> Result<Vec<T>, CatalogError> {
    let sql = select_sql::<T>(None);
    timed(operation, sqlx::query_as::<_, T>(&sql).fetch_all(pool)).await
}

/// Visible rows matching a static predicate (no bind parameters).
pub async fn fetch_filtered<T: LookupTable>(
    pool: &PgPool,
    condition: &'static str,
    operation: &str,
) -> Result<Vec<T>, CatalogError> {
    let sql = select_sql::<T>(Some(condition));
    timed(operation, sqlx::query_as::<_, T>(&sql).fetch_all(pool)).await
}

/// A single visible row by primary key.
pub async fn fetch_by_id<T: LookupTable>(
    pool: &PgPool,
    id: i64,
    operation: &str,
) -> Result<Option<T>, CatalogError> {
    let sql = select_sql::<T>(Some("id = $1"));
    timed(
        operation,
        sqlx::query_as::<_, T>(&sql).bind(id).fetch_optional(pool),
    )
    .await
}

/// Visible rows whose primary key is in `ids`. Unknown ids are skipped.
pub async fn fetch_by_ids<T: LookupTable>(
    pool: &PgPool,
    ids: &[i64],
    operation: &str,
) -> Result<Vec<T>, CatalogError> {
    fetch_by_column(pool, "id", ids, operation).await
}

/// Visible rows whose integer `column` is in `values`.
///
/// An empty `values` slice returns no rows without querying.
pub async fn fetch_by_column<T: LookupTable>(
    pool: &PgPool,
    column: &'static str,
    values: &[i64],
    operation: &str,
) -> Result<Vec<T>, CatalogError> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let condition = format!("{column} = ANY($1)");
    let sql = select_sql::<T>(Some(&condition));
    timed(
        operation,
        sqlx::query_as::<_, T>(&sql).bind(values).fetch_all(pool),
    )
    .await
}

/// Visible rows whose integer `column` equals `value`.
pub async fn fetch_by_value<T: LookupTable>(
    pool: &PgPool,
    column: &'static str,
    value: i64,
    operation: &str,
) -> Result<Vec<T>, CatalogError> {
    let condition = format!("{column} = $1");
    let sql = select_sql::<T>(Some(&condition));
    timed(
        operation,
        sqlx::query_as::<_, T>(&sql).bind(value).fetch_all(pool),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(sqlx::FromRow)]
    #[allow(dead_code)]
    struct Plain {
        id: i32,
    }

    impl LookupTable for Plain {
        const TABLE: &'static str = "plain";
        const SELECT_COLUMNS: &'static str = "id";
    }

    #[derive(sqlx::FromRow)]
    #[allow(dead_code)]
    struct Soft {
        id: i32,
    }

    impl LookupTable for Soft {
        const TABLE: &'static str = "soft";
        const SELECT_COLUMNS: &'static str = "id";
        const VISIBLE: Option<&'static str> = Some("deleted_at IS NULL");
    }

    #[test]
    fn test_select_sql_without_predicates() {
        assert_eq!(select_sql::<Plain>(None), "SELECT id FROM plain ORDER BY id");
    }

    #[test]
    fn test_select_sql_with_condition() {
        assert_eq!(
            select_sql::<Plain>(Some("id = $1")),
            "SELECT id FROM plain WHERE id = $1 ORDER BY id"
        );
    }

    #[test]
    fn test_select_sql_visibility_always_applies() {
        assert_eq!(
            select_sql::<Soft>(None),
            "SELECT id FROM soft WHERE deleted_at IS NULL ORDER BY id"
        );
        assert_eq!(
            select_sql::<Soft>(Some("id = ANY($1)")),
            "SELECT id FROM soft WHERE deleted_at IS NULL AND id = ANY($1) ORDER BY id"
        );
    }
}
