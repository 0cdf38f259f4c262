//! Modules, procedure types and procedure modalities service.

use crate::errors::CatalogError;
use crate::models::{
    DocumentSummary, DocumentsResponse, Entity, Module, ProcedureModality, ProcedureType,
};
use crate::repositories::{
    ModulesRepository, ProcedureModalitiesRepository, ProcedureTypesRepository,
};
use crate::services::projection::{found, project, resolve_columns, to_value};
use crate::services::relations::{self, RelationEntity, RelationTree};
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashSet;

pub struct ModulesService;

impl ModulesService {
    pub async fn find_all_modules(
        pool: &PgPool,
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<Module>(columns, Module::COLUMNS)?;
        let rows = ModulesRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one_module(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        found(ModulesRepository::find_by_id(pool, id).await?, id)
    }

    pub async fn find_all_procedure_types(
        pool: &PgPool,
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<ProcedureType>(columns, ProcedureType::COLUMNS)?;
        let rows = ProcedureTypesRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one_procedure_type(pool: &PgPool, id: i64) -> Result<Value, CatalogError> {
        found(ProcedureTypesRepository::find_by_id(pool, id).await?, id)
    }

    pub async fn find_all_procedure_modalities(
        pool: &PgPool,
        columns: Option<&[String]>,
    ) -> Result<Value, CatalogError> {
        let columns = resolve_columns::<ProcedureModality>(columns, ProcedureModality::COLUMNS)?;
        let rows = ProcedureModalitiesRepository::find_all(pool).await?;
        Ok(Value::Array(project(&rows, &columns)?))
    }

    pub async fn find_one_procedure_modality(
        pool: &PgPool,
        id: i64,
    ) -> Result<Value, CatalogError> {
        found(ProcedureModalitiesRepository::find_by_id(pool, id).await?, id)
    }

    /// Load a root entity by id together with the requested relation paths.
    ///
    /// Entity and relation names are validated before touching the database.
    pub async fn find_data_relations(
        pool: &PgPool,
        id: i64,
        relations: &[String],
        entity: &str,
    ) -> Result<Value, CatalogError> {
        let root = RelationEntity::root(entity)
            .ok_or_else(|| CatalogError::BadRequest(format!("Invalid entity '{entity}'")))?;
        let tree = RelationTree::parse(root, relations)?;

        let row = match root {
            RelationEntity::Module => ModulesRepository::find_by_id(pool, id)
                .await?
                .map(|row| to_value(&row))
                .transpose()?,
            RelationEntity::ProcedureType => ProcedureTypesRepository::find_by_id(pool, id)
                .await?
                .map(|row| to_value(&row))
                .transpose()?,
            RelationEntity::ProcedureModality => {
                ProcedureModalitiesRepository::find_by_id(pool, id)
                    .await?
                    .map(|row| to_value(&row))
                    .transpose()?
            }
            RelationEntity::ProcedureRequirement | RelationEntity::ProcedureDocument => None,
        };
        let row = row.ok_or_else(|| {
            CatalogError::NotFound(format!("{entity} with ID: {id} not found"))
        })?;

        let mut rows = vec![row];
        relations::load(pool, &mut rows, &tree).await?;
        Ok(rows.into_iter().next().unwrap_or(Value::Null))
    }

    /// Distinct documents required by the given modules.
    pub async fn find_documents(pool: &PgPool, ids: &[i64]) -> Result<Value, CatalogError> {
        if ids.is_empty() {
            return to_value(&DocumentsResponse {
                status: "error",
                message: "No IDs provided",
                data: Vec::new(),
            });
        }

        let modules = ModulesRepository::find_by_ids(pool, ids).await?;
        if let Some(missing) = ids
            .iter()
            .find(|id| !modules.iter().any(|m| i64::from(m.id) == **id))
        {
            return Err(CatalogError::NotFound(format!(
                "{} with ID: {missing} not found",
                RelationEntity::Module.name()
            )));
        }

        let documents = ModulesRepository::find_documents(pool, ids).await?;
        to_value(&DocumentsResponse {
            status: "success",
            message: "Documents retrieved successfully",
            data: dedupe_documents(documents),
        })
    }
}

/// Keep the first occurrence of each document id.
fn dedupe_documents(documents: Vec<DocumentSummary>) -> Vec<DocumentSummary> {
    let mut seen = HashSet::new();
    documents
        .into_iter()
        .filter(|doc| seen.insert(doc.id))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn doc(id: i32, name: &str) -> DocumentSummary {
        DocumentSummary {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_dedupe_documents_keeps_first_occurrence() {
        let documents = vec![doc(5, "CI"), doc(2, "Memorial"), doc(5, "CI"), doc(9, "Boleta")];
        let ids: Vec<i32> = dedupe_documents(documents).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }
}
