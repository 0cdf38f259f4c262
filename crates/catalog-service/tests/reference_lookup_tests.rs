//! Integration tests for the flat reference tables: categories, cities,
//! financial entities and pension entities.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]

use catalog_service::errors::{NO_HANDLER_MESSAGE, NUMERIC_VALIDATION_MESSAGE};
use catalog_test_utils::*;
use common::error::BusError;
use serde_json::{json, Value};
use sqlx::PgPool;

async fn seeded(pool: PgPool) -> TestCatalog {
    seed_catalog(&pool).await.expect("seed failed");
    TestCatalog::spawn(pool).await.expect("spawn failed")
}

async fn remote_error(catalog: &TestCatalog, pattern: &str, data: Value) -> (u16, String) {
    match catalog.call(pattern, data).await {
        Err(BusError::Remote { message, code }) => (code, message),
        other => panic!("expected an error reply for {pattern}, got {other:?}"),
    }
}

// ============================================================================
// Categories
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_categories_find_all_default_projection(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let categories = catalog.call("categories.findAll", Value::Null).await?;

    assert_eq!(
        categories,
        json!([{"id": 1, "name": "0%"}, {"id": 2, "name": "15%"}])
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_categories_find_all_with_columns(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    // Requested order does not matter, entity order is kept
    let categories = catalog
        .call("categories.findAll", json!(["percentage", "id"]))
        .await?;

    assert_eq!(
        categories,
        json!([
            {"id": 1, "percentage": "0.00"},
            {"id": 2, "percentage": "15.50"}
        ])
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_categories_find_all_unknown_column(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let (code, message) =
        remote_error(&catalog, "categories.findAll", json!({"columns": ["salary"]})).await;

    assert_eq!(code, 400);
    assert!(message.contains("salary"));
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_categories_find_one(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let category = catalog
        .call("categories.findOne", json!({"id": CATEGORY_SENIOR}))
        .await?;
    assert_eq!(
        category,
        json!({"id": 2, "from": 5, "to": 9, "name": "15%", "percentage": "15.50"})
    );

    // Numeric strings and bare ids are accepted too
    let by_string = catalog.call("categories.findOne", json!({"id": "2"})).await?;
    let bare = catalog.call("categories.findOne", json!(2)).await?;
    assert_eq!(by_string, category);
    assert_eq!(bare, category);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_categories_find_one_not_found(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let (code, message) =
        remote_error(&catalog, "categories.findOne", json!({"id": UNKNOWN_ID})).await;

    assert_eq!(code, 404);
    assert_eq!(message, "Category with id 9999 not found");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_one_rejects_non_numeric_id(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    for payload in [json!({"id": "abc"}), json!({"id": 1.5}), json!({})] {
        let (code, message) = remote_error(&catalog, "categories.findOne", payload).await;
        assert_eq!(code, 400);
        assert_eq!(message, NUMERIC_VALIDATION_MESSAGE);
    }
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_database_failure_is_generic(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool.clone()).await;
    pool.close().await;

    let (code, message) = remote_error(&catalog, "categories.findAll", Value::Null).await;

    assert_eq!(code, 500);
    assert_eq!(message, "An internal database error occurred");
    Ok(())
}

// ============================================================================
// Cities
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_cities_find_all_default_projection(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let cities = catalog.call("cities.findAll", Value::Null).await?;
    let la_paz = cities.get(0).unwrap();

    let keys: Vec<&str> = la_paz.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "name",
            "firstShortened",
            "secondShortened",
            "thirdShortened",
            "companyPhones",
            "companyCellphones"
        ]
    );
    assert_eq!(la_paz["companyPhones"], json!(["2440000", "2440001"]));
    assert_eq!(cities.as_array().unwrap().len(), 2);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_cities_find_one(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let la_paz = catalog.call("cities.findOne", json!({"id": CITY_LA_PAZ})).await?;
    // NUMERIC(10, 2) keeps its trailing zero
    assert_eq!(la_paz["latitude"], "-16.50");
    assert_eq!(la_paz["longitude"], "-68.10");
    assert_eq!(la_paz["toBank"], "LPZ01");
    assert_eq!(la_paz["phonePrefix"], 2);

    let oruro = catalog.call("cities.findOne", json!({"id": CITY_ORURO})).await?;
    assert_eq!(oruro["latitude"], Value::Null);
    assert_eq!(oruro["companyCellphones"], json!([]));
    Ok(())
}

// ============================================================================
// Financial and pension entities
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_financial_entities(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let all = catalog.call("financialEntities.findAll", Value::Null).await?;
    assert_eq!(
        all,
        json!([
            {"id": 1, "name": "Banco Union"},
            {"id": 2, "name": "Cooperativa San Martin"}
        ])
    );

    let one = catalog
        .call("financialEntities.findOne", json!({"id": FINANCIAL_ENTITY_COOPERATIVE}))
        .await?;
    assert_eq!(one["createdAt"], "2024-01-01T00:00:00Z");

    let (code, message) =
        remote_error(&catalog, "financialEntities.findOne", json!({"id": UNKNOWN_ID})).await;
    assert_eq!(code, 404);
    assert_eq!(message, "FinancialEntity with id 9999 not found");
    Ok(())
}

/// `is_active` is exposed but does not hide rows.
#[sqlx::test(migrations = "../../migrations")]
async fn test_pension_entities_include_inactive(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let all = catalog.call("pensionEntities.findAll", Value::Null).await?;
    assert_eq!(
        all,
        json!([
            {"id": 1, "type": "AFP", "name": "Futuro de Bolivia"},
            {"id": 2, "type": "AFP", "name": "Prevision"}
        ])
    );

    let inactive = catalog
        .call("pensionEntities.findOne", json!({"id": PENSION_ENTITY_INACTIVE}))
        .await?;
    assert_eq!(
        inactive,
        json!({"id": 2, "type": "AFP", "name": "Prevision", "isActive": false})
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_pattern(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let (code, message) = remote_error(&catalog, "findAllCategories", Value::Null).await;

    assert_eq!(code, 404);
    assert_eq!(message, NO_HANDLER_MESSAGE);
    Ok(())
}
