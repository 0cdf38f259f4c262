//! Integration tests for kinships, procedure documents and file dossiers,
//! including the id-keyed `findAllByIds` lookups and soft-deleted rows.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]

use catalog_test_utils::*;
use common::error::BusError;
use serde_json::{json, Value};
use sqlx::PgPool;

async fn seeded(pool: PgPool) -> TestCatalog {
    seed_catalog(&pool).await.expect("seed failed");
    TestCatalog::spawn(pool).await.expect("spawn failed")
}

async fn not_found(catalog: &TestCatalog, pattern: &str, id: i64) -> String {
    match catalog.call(pattern, json!({"id": id})).await {
        Err(BusError::Remote { message, code: 404 }) => message,
        other => panic!("expected not found for {pattern} {id}, got {other:?}"),
    }
}

// ============================================================================
// Kinships
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_kinships_find_all_skips_deleted(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let kinships = catalog.call("kinships.findAll", Value::Null).await?;

    assert_eq!(
        kinships,
        json!([{"id": 1, "name": "Esposa"}, {"id": 2, "name": "Hijo"}])
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_kinships_find_one(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let spouse = catalog
        .call("kinships.findOne", json!({"id": KINSHIP_SPOUSE}))
        .await?;
    assert_eq!(
        spouse,
        json!({
            "id": 1,
            "name": "Esposa",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "deletedAt": null
        })
    );

    let message = not_found(&catalog, "kinships.findOne", KINSHIP_DELETED).await;
    assert_eq!(message, "Kinship with id 3 not found");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_kinships_find_all_by_ids(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let kinships = catalog
        .call(
            "kinships.findAllByIds",
            json!({"ids": [KINSHIP_CHILD, KINSHIP_SPOUSE, KINSHIP_DELETED, UNKNOWN_ID]}),
        )
        .await?;
    assert_eq!(
        kinships,
        json!({
            "1": {"id": 1, "name": "Esposa"},
            "2": {"id": 2, "name": "Hijo"}
        })
    );

    // A bare list works as well
    let bare = catalog.call("kinships.findAllByIds", json!([1])).await?;
    assert_eq!(bare, json!({"1": {"id": 1, "name": "Esposa"}}));
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_kinships_find_all_by_ids_with_columns(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let kinships = catalog
        .call(
            "kinships.findAllByIds",
            json!({"ids": ["1"], "columns": ["createdAt", "name"]}),
        )
        .await?;

    assert_eq!(
        kinships,
        json!({"1": {"name": "Esposa", "createdAt": "2024-01-01T00:00:00Z"}})
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_all_by_ids_empty_list(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    for pattern in [
        "kinships.findAllByIds",
        "procedureDocuments.findAllByIds",
        "fileDossiers.findAllByIds",
    ] {
        let result = catalog.call(pattern, json!({"ids": []})).await?;
        assert_eq!(result, json!({}), "{pattern}");
    }
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_all_by_ids_rejects_non_numeric(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let result = catalog
        .call("kinships.findAllByIds", json!({"ids": [1, "two"]}))
        .await;
    assert!(matches!(result, Err(BusError::Remote { code: 400, .. })));
    Ok(())
}

// ============================================================================
// Procedure documents
// ============================================================================

/// Only documents with a non-empty abbreviation are listed.
#[sqlx::test(migrations = "../../migrations")]
async fn test_procedure_documents_find_all(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let documents = catalog.call("procedureDocuments.findAll", Value::Null).await?;

    assert_eq!(
        documents,
        json!([
            {"id": 1, "name": "Cedula de identidad", "shortened": "CI"},
            {"id": 2, "name": "Memorial", "shortened": "MEM"}
        ])
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_procedure_documents_find_all_by_ids(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let documents = catalog
        .call(
            "procedureDocuments.findAllByIds",
            json!({"ids": [DOCUMENT_ID_CARD, DOCUMENT_BIRTH_CERTIFICATE]}),
        )
        .await?;

    assert_eq!(
        documents,
        json!({
            "1": {"name": "Cedula de identidad", "shortened": "CI"},
            "3": {"name": "Certificado de nacimiento", "shortened": ""}
        })
    );

    let with_columns = catalog
        .call(
            "procedureDocuments.findAllByIds",
            json!({"ids": [DOCUMENT_PAYSLIP], "columns": ["id", "expireDate"]}),
        )
        .await?;
    assert_eq!(
        with_columns,
        json!({"4": {"id": 4, "expireDate": "2030-12-31T00:00:00Z"}})
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_procedure_document_find_one(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    // findOne is not restricted to abbreviated documents
    let document = catalog
        .call(
            "procedureDocuments.findOne",
            json!({"id": DOCUMENT_BIRTH_CERTIFICATE}),
        )
        .await?;
    assert_eq!(document["shortened"], Value::Null);
    assert_eq!(document["expireDate"], Value::Null);

    let message = not_found(&catalog, "procedureDocuments.findOne", UNKNOWN_ID).await;
    assert_eq!(message, "ProcedureDocument with id 9999 not found");
    Ok(())
}

// ============================================================================
// File dossiers
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_file_dossiers_find_all(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let dossiers = catalog.call("fileDossiers.findAll", Value::Null).await?;
    let rows = dossiers.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        json!({
            "id": 1,
            "name": "Expediente personal",
            "shortened": "EXP",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "deletedAt": null
        })
    );
    assert_eq!(rows[1]["id"], FILE_DOSSIER_CONTRIBUTIONS);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_file_dossiers_find_all_by_ids(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let dossiers = catalog
        .call(
            "fileDossiers.findAllByIds",
            json!({"ids": [FILE_DOSSIER_PERSONAL, FILE_DOSSIER_DELETED]}),
        )
        .await?;

    let keyed = dossiers.as_object().unwrap();
    assert_eq!(keyed.len(), 1);
    assert_eq!(keyed["1"]["shortened"], "EXP");

    let message = not_found(&catalog, "fileDossiers.findOne", FILE_DOSSIER_DELETED).await;
    assert_eq!(message, "FileDossier with id 3 not found");
    Ok(())
}
