//! Integration tests for modules, procedure types and modalities, including
//! relation loading and the documents required by a set of modules.

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

async fn remote_error(catalog: &TestCatalog, pattern: &str, data: Value) -> (u16, String) {
    match catalog.call(pattern, data).await {
        Err(BusError::Remote { message, code }) => (code, message),
        other => panic!("expected remote error for {pattern}, got {other:?}"),
    }
}

fn ids(rows: &Value) -> Vec<i64> {
    rows.as_array()
        .expect("expected an array")
        .iter()
        .filter_map(|row| row.get("id").and_then(Value::as_i64))
        .collect()
}

// ============================================================================
// findAll / findOne
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_modules_find_all(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let modules = catalog.call("modules.findAll", Value::Null).await?;
    assert_eq!(ids(&modules), vec![MODULE_COMPLEMENT, MODULE_LOANS, MODULE_EMPTY]);
    assert_eq!(
        modules[0],
        json!({
            "id": 1,
            "name": "complementary_economic",
            "displayName": "Complemento Economico",
            "description": "Pago del complemento",
            "shortened": "CE",
            "urlProd": "https://ce.example.org",
            "urlDev": null,
            "urlManual": null,
            "urlTest": null
        })
    );

    let names = catalog
        .call("modules.findAll", json!({"columns": ["shortened"]}))
        .await?;
    assert_eq!(
        names,
        json!([{"shortened": "CE"}, {"shortened": "PRE"}, {"shortened": "ARC"}])
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_module_find_one(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let module = catalog
        .call("modules.findOne", json!({"id": MODULE_LOANS}))
        .await?;
    assert_eq!(module["name"], "loans");

    let (code, message) =
        remote_error(&catalog, "modules.findOne", json!({"id": MISSING_MODULE})).await;
    assert_eq!(code, 404);
    assert_eq!(message, "Module with id 99 not found");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_procedure_types_hide_deleted(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let types = catalog.call("procedureTypes.findAll", Value::Null).await?;
    assert_eq!(
        ids(&types),
        vec![PROCEDURE_TYPE_RETIREMENT, PROCEDURE_TYPE_LOAN]
    );
    assert_eq!(types[0]["moduleId"], 1);
    assert_eq!(types[0]["secondName"], "Vejez");

    let (code, _) = remote_error(
        &catalog,
        "procedureTypes.findOne",
        json!({"id": PROCEDURE_TYPE_DELETED}),
    )
    .await;
    assert_eq!(code, 404);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_procedure_modalities(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let modalities = catalog
        .call(
            "procedureModalities.findAll",
            json!({"columns": ["id", "shortened"]}),
        )
        .await?;
    assert_eq!(
        modalities,
        json!([
            {"id": 1, "shortened": "EDAD"},
            {"id": 2, "shortened": "INV"},
            {"id": 3, "shortened": "HUE"},
            {"id": 4, "shortened": "EST"}
        ])
    );

    let orphaned = catalog
        .call("procedureModalities.findOne", json!({"id": MODALITY_ORPHANED}))
        .await?;
    assert_eq!(
        orphaned,
        json!({
            "id": 3,
            "procedureTypeId": 2,
            "name": "Modalidad huerfana",
            "shortened": "HUE",
            "isValid": false
        })
    );
    Ok(())
}

// ============================================================================
// findDataRelations
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_data_relations_without_relations(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let module = catalog
        .call(
            "modules.findDataRelations",
            json!({"id": MODULE_LOANS, "relations": [], "entity": "module"}),
        )
        .await?;

    assert_eq!(module["id"], 2);
    assert!(module.get("procedureTypes").is_none());
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_data_relations_nested_path(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let module = catalog
        .call(
            "modules.findDataRelations",
            json!({
                "id": MODULE_COMPLEMENT,
                "relations": ["procedureTypes.procedureModalities.procedureRequirements.procedureDocument"],
                "entity": "module"
            }),
        )
        .await?;

    // The deleted procedure type is not loaded
    let types = &module["procedureTypes"];
    assert_eq!(ids(types), vec![PROCEDURE_TYPE_RETIREMENT]);

    let modalities = &types[0]["procedureModalities"];
    assert_eq!(ids(modalities), vec![MODALITY_AGE, MODALITY_DISABILITY]);

    let age_requirements = &modalities[0]["procedureRequirements"];
    assert_eq!(ids(age_requirements), vec![1, 2]);
    assert_eq!(
        age_requirements[1]["procedureDocument"]["name"],
        "Memorial"
    );

    // The deleted requirement is not loaded
    let disability_requirements = &modalities[1]["procedureRequirements"];
    assert_eq!(ids(disability_requirements), vec![3]);
    assert_eq!(
        disability_requirements[0]["procedureDocument"]["id"],
        DOCUMENT_ID_CARD
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_data_relations_belongs_to(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let modality = catalog
        .call(
            "modules.findDataRelations",
            json!({
                "id": MODALITY_LOAN,
                "relations": ["procedureType.module", "procedureRequirements"],
                "entity": "procedureModality"
            }),
        )
        .await?;

    assert_eq!(modality["procedureType"]["id"], PROCEDURE_TYPE_LOAN);
    assert_eq!(modality["procedureType"]["module"]["name"], "loans");
    assert_eq!(ids(&modality["procedureRequirements"]), vec![6]);

    // A modality whose procedure type was deleted gets a null parent
    let orphaned = catalog
        .call(
            "modules.findDataRelations",
            json!({
                "id": MODALITY_ORPHANED,
                "relations": ["procedureType"],
                "entity": "procedureModality"
            }),
        )
        .await?;
    assert_eq!(orphaned["procedureType"], Value::Null);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_data_relations_from_procedure_type(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let procedure_type = catalog
        .call(
            "modules.findDataRelations",
            json!({
                "id": "1",
                "relations": ["module", "procedureModalities"],
                "entity": "procedureType"
            }),
        )
        .await?;

    assert_eq!(procedure_type["module"]["shortened"], "CE");
    assert_eq!(
        ids(&procedure_type["procedureModalities"]),
        vec![MODALITY_AGE, MODALITY_DISABILITY]
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_data_relations_errors(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let (code, message) = remote_error(
        &catalog,
        "modules.findDataRelations",
        json!({"id": 1, "relations": [], "entity": "procedureDocument"}),
    )
    .await;
    assert_eq!(code, 400);
    assert_eq!(message, "Invalid entity 'procedureDocument'");

    let (code, message) = remote_error(
        &catalog,
        "modules.findDataRelations",
        json!({"id": 1, "relations": ["procedureTypes.bogus"], "entity": "module"}),
    )
    .await;
    assert_eq!(code, 400);
    assert_eq!(
        message,
        "Invalid relation 'procedureTypes.bogus' for procedureType"
    );

    let (code, message) = remote_error(
        &catalog,
        "modules.findDataRelations",
        json!({"id": MISSING_MODULE, "relations": ["procedureTypes"], "entity": "module"}),
    )
    .await;
    assert_eq!(code, 404);
    assert_eq!(message, "module with ID: 99 not found");
    Ok(())
}

// ============================================================================
// findDocuments
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_documents_deduplicates(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let response = catalog
        .call(
            "modules.findDocuments",
            json!({"ids": [MODULE_LOANS, MODULE_COMPLEMENT]}),
        )
        .await?;

    assert_eq!(
        response,
        json!({
            "status": "success",
            "message": "Documents retrieved successfully",
            "data": [
                {"id": 2, "name": "Memorial"},
                {"id": 1, "name": "Cedula de identidad"}
            ]
        })
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_documents_module_without_procedures(
    pool: PgPool,
) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let response = catalog
        .call("modules.findDocuments", json!([MODULE_EMPTY]))
        .await?;

    assert_eq!(response["status"], "success");
    assert_eq!(response["data"], json!([]));
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_documents_empty_and_missing(pool: PgPool) -> Result<(), anyhow::Error> {
    let catalog = seeded(pool).await;

    let response = catalog
        .call("modules.findDocuments", json!({"ids": []}))
        .await?;
    assert_eq!(
        response,
        json!({"status": "error", "message": "No IDs provided", "data": []})
    );

    let (code, message) = remote_error(
        &catalog,
        "modules.findDocuments",
        json!({"ids": [MODULE_COMPLEMENT, MISSING_MODULE]}),
    )
    .await;
    assert_eq!(code, 404);
    assert_eq!(message, "module with ID: 99 not found");
    Ok(())
}
