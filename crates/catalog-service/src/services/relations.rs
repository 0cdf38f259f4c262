//! Relation loading for the modules domain.
//!
//! Dotted relation paths (`procedureTypes.procedureModalities`) are parsed
//! into a [`RelationTree`] rooted at a module, procedure type or procedure
//! modality. Each level of the tree is then loaded with one batched query per
//! relation and attached to the serialized parent rows.

use crate::errors::CatalogError;
use crate::repositories::{
    ModulesRepository, ProcedureDocumentsRepository, ProcedureModalitiesRepository,
    ProcedureRequirementsRepository, ProcedureTypesRepository,
};
use crate::services::projection::to_value;
use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};

/// Entities that take part in relation loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationEntity {
    Module,
    ProcedureType,
    ProcedureModality,
    ProcedureRequirement,
    ProcedureDocument,
}

impl RelationEntity {
    /// Parse an entity name accepted as the root of `findDataRelations`.
    pub fn root(name: &str) -> Option<Self> {
        match name {
            "module" => Some(Self::Module),
            "procedureType" => Some(Self::ProcedureType),
            "procedureModality" => Some(Self::ProcedureModality),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::ProcedureType => "procedureType",
            Self::ProcedureModality => "procedureModality",
            Self::ProcedureRequirement => "procedureRequirement",
            Self::ProcedureDocument => "procedureDocument",
        }
    }
}

/// A declared relation between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    ModuleProcedureTypes,
    ProcedureTypeModule,
    ProcedureTypeModalities,
    ModalityProcedureType,
    ModalityRequirements,
    RequirementModality,
    RequirementDocument,
}

impl Relation {
    /// The relation named `name` on `entity`, if declared.
    pub fn lookup(entity: RelationEntity, name: &str) -> Option<Self> {
        match (entity, name) {
            (RelationEntity::Module, "procedureTypes") => Some(Self::ModuleProcedureTypes),
            (RelationEntity::ProcedureType, "module") => Some(Self::ProcedureTypeModule),
            (RelationEntity::ProcedureType, "procedureModalities") => {
                Some(Self::ProcedureTypeModalities)
            }
            (RelationEntity::ProcedureModality, "procedureType") => {
                Some(Self::ModalityProcedureType)
            }
            (RelationEntity::ProcedureModality, "procedureRequirements") => {
                Some(Self::ModalityRequirements)
            }
            (RelationEntity::ProcedureRequirement, "procedureModality") => {
                Some(Self::RequirementModality)
            }
            (RelationEntity::ProcedureRequirement, "procedureDocument") => {
                Some(Self::RequirementDocument)
            }
            _ => None,
        }
    }

    /// Key under which the related rows are attached.
    pub fn name(self) -> &'static str {
        match self {
            Self::ModuleProcedureTypes => "procedureTypes",
            Self::ProcedureTypeModule => "module",
            Self::ProcedureTypeModalities => "procedureModalities",
            Self::ModalityProcedureType => "procedureType",
            Self::ModalityRequirements => "procedureRequirements",
            Self::RequirementModality => "procedureModality",
            Self::RequirementDocument => "procedureDocument",
        }
    }

    pub fn target(self) -> RelationEntity {
        match self {
            Self::ModuleProcedureTypes | Self::ModalityProcedureType => {
                RelationEntity::ProcedureType
            }
            Self::ProcedureTypeModule => RelationEntity::Module,
            Self::ProcedureTypeModalities | Self::RequirementModality => {
                RelationEntity::ProcedureModality
            }
            Self::ModalityRequirements => RelationEntity::ProcedureRequirement,
            Self::RequirementDocument => RelationEntity::ProcedureDocument,
        }
    }

    /// The linking key. For has-many relations it lives on the related rows;
    /// for belongs-to relations it lives on the parent.
    pub fn foreign_key(self) -> &'static str {
        match self {
            Self::ModuleProcedureTypes | Self::ProcedureTypeModule => "moduleId",
            Self::ProcedureTypeModalities | Self::ModalityProcedureType => "procedureTypeId",
            Self::ModalityRequirements | Self::RequirementModality => "procedureModalityId",
            Self::RequirementDocument => "procedureDocumentId",
        }
    }

    pub fn is_many(self) -> bool {
        matches!(
            self,
            Self::ModuleProcedureTypes | Self::ProcedureTypeModalities | Self::ModalityRequirements
        )
    }

    /// Fetch related rows. `keys` are parent ids for has-many relations and
    /// target ids for belongs-to relations.
    async fn fetch(self, pool: &PgPool, keys: &[i64]) -> Result<Vec<Value>, CatalogError> {
        match self {
            Self::ModuleProcedureTypes => {
                serialize(ProcedureTypesRepository::find_by_module_ids(pool, keys).await?)
            }
            Self::ProcedureTypeModule => serialize(ModulesRepository::find_by_ids(pool, keys).await?),
            Self::ProcedureTypeModalities => serialize(
                ProcedureModalitiesRepository::find_by_procedure_type_ids(pool, keys).await?,
            ),
            Self::ModalityProcedureType => {
                serialize(ProcedureTypesRepository::find_by_ids(pool, keys).await?)
            }
            Self::ModalityRequirements => serialize(
                ProcedureRequirementsRepository::find_by_procedure_modality_ids(pool, keys)
                    .await?,
            ),
            Self::RequirementModality => {
                serialize(ProcedureModalitiesRepository::find_by_ids(pool, keys).await?)
            }
            Self::RequirementDocument => {
                serialize(ProcedureDocumentsRepository::find_by_ids(pool, keys).await?)
            }
        }
    }
}

/// Relations to load below one entity, each with its own subtree.
#[derive(Debug, Default, PartialEq)]
pub struct RelationTree {
    children: Vec<(Relation, RelationTree)>,
}

impl RelationTree {
    /// Parse dotted relation paths rooted at `root`.
    ///
    /// Shared prefixes are merged, so `a.b` and `a.c` load `a` once.
    pub fn parse<S: AsRef<str>>(root: RelationEntity, paths: &[S]) -> Result<Self, CatalogError> {
        let mut tree = Self::default();
        for path in paths {
            let path = path.as_ref();
            let segments: Vec<&str> = path.split('.').collect();
            tree.insert(root, &segments, path)?;
        }
        Ok(tree)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[(Relation, RelationTree)] {
        &self.children
    }

    fn insert(
        &mut self,
        entity: RelationEntity,
        segments: &[&str],
        path: &str,
    ) -> Result<(), CatalogError> {
        let Some((first, rest)) = segments.split_first() else {
            return Ok(());
        };
        let relation = Relation::lookup(entity, first).ok_or_else(|| {
            CatalogError::BadRequest(format!(
                "Invalid relation '{path}' for {}",
                entity.name()
            ))
        })?;

        if !self.children.iter().any(|(r, _)| *r == relation) {
            self.children.push((relation, Self::default()));
        }
        match self.children.iter_mut().find(|(r, _)| *r == relation) {
            Some((_, subtree)) => subtree.insert(relation.target(), rest, path),
            None => Ok(()),
        }
    }
}

/// Load every relation of `tree` onto `rows`, depth first.
pub fn load<'a>(
    pool: &'a PgPool,
    rows: &'a mut [Value],
    tree: &'a RelationTree,
) -> BoxFuture<'a, Result<(), CatalogError>> {
    Box::pin(async move {
        for (relation, subtree) in &tree.children {
            attach(pool, *relation, rows, subtree).await?;
        }
        Ok(())
    })
}

async fn attach(
    pool: &PgPool,
    relation: Relation,
    rows: &mut [Value],
    subtree: &RelationTree,
) -> Result<(), CatalogError> {
    let parent_key = if relation.is_many() {
        "id"
    } else {
        relation.foreign_key()
    };
    let related_key = if relation.is_many() {
        relation.foreign_key()
    } else {
        "id"
    };

    let keys = distinct_keys(rows, parent_key);
    let mut related = relation.fetch(pool, &keys).await?;
    load(pool, &mut related, subtree).await?;

    let by_key = group_by_key(&related, related_key);
    for row in rows.iter_mut() {
        let group = int_field(row, parent_key).and_then(|key| by_key.get(&key));

        let value = match (relation.is_many(), group) {
            (true, Some(group)) => Value::Array(group.iter().map(|&v| v.clone()).collect()),
            (true, None) => Value::Array(Vec::new()),
            (false, group) => group
                .and_then(|group| group.first())
                .map_or(Value::Null, |&v| v.clone()),
        };
        if let Value::Object(map) = row {
            map.insert(relation.name().to_string(), value);
        }
    }
    Ok(())
}

fn serialize<T: Serialize>(rows: Vec<T>) -> Result<Vec<Value>, CatalogError> {
    rows.iter().map(to_value).collect()
}

fn int_field(row: &Value, key: &str) -> Option<i64> {
    row.get(key).and_then(Value::as_i64)
}

fn distinct_keys(rows: &[Value], key: &str) -> Vec<i64> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(|row| int_field(row, key))
        .filter(|value| seen.insert(*value))
        .collect()
}

/// Rows indexed by an integer field, keeping their original order per key.
fn group_by_key<'a>(rows: &'a [Value], key: &str) -> HashMap<i64, Vec<&'a Value>> {
    let mut groups: HashMap<i64, Vec<&Value>> = HashMap::new();
    for row in rows {
        if let Some(value) = int_field(row, key) {
            groups.entry(value).or_default().push(row);
        }
    }
    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_names() {
        assert_eq!(RelationEntity::root("module"), Some(RelationEntity::Module));
        assert_eq!(
            RelationEntity::root("procedureModality"),
            Some(RelationEntity::ProcedureModality)
        );
        assert_eq!(RelationEntity::root("procedureRequirement"), None);
        assert_eq!(RelationEntity::root("Module"), None);
    }

    #[test]
    fn test_parse_merges_shared_prefixes() {
        let tree = RelationTree::parse(
            RelationEntity::Module,
            &[
                "procedureTypes.procedureModalities",
                "procedureTypes.module",
                "procedureTypes",
            ],
        )
        .unwrap();

        assert_eq!(tree.children().len(), 1);
        let (relation, subtree) = tree.children().first().unwrap();
        assert_eq!(*relation, Relation::ModuleProcedureTypes);

        let nested: Vec<Relation> = subtree.children().iter().map(|(r, _)| *r).collect();
        assert_eq!(
            nested,
            vec![Relation::ProcedureTypeModalities, Relation::ProcedureTypeModule]
        );
    }

    #[test]
    fn test_parse_full_document_path() {
        let tree = RelationTree::parse(
            RelationEntity::Module,
            &["procedureTypes.procedureModalities.procedureRequirements.procedureDocument"],
        )
        .unwrap();

        let mut depth = 0;
        let mut node = &tree;
        while let Some((relation, subtree)) = node.children().first() {
            depth += 1;
            node = subtree;
            if depth == 4 {
                assert_eq!(*relation, Relation::RequirementDocument);
            }
        }
        assert_eq!(depth, 4);
    }

    #[test]
    fn test_parse_rejects_unknown_relation() {
        let err = RelationTree::parse(RelationEntity::ProcedureType, &["procedureDocument"])
            .unwrap_err();
        assert_eq!(err.code(), 400);
        assert!(err.to_string().contains("procedureDocument"));

        let err = RelationTree::parse(RelationEntity::Module, &["procedureTypes..module"])
            .unwrap_err();
        assert_eq!(err.code(), 400);
    }

    #[test]
    fn test_parse_empty_paths() {
        let tree = RelationTree::parse::<&str>(RelationEntity::Module, &[]).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_relation_keys() {
        assert!(Relation::ModuleProcedureTypes.is_many());
        assert!(!Relation::ProcedureTypeModule.is_many());
        assert_eq!(Relation::RequirementDocument.foreign_key(), "procedureDocumentId");
        assert_eq!(
            Relation::ModalityRequirements.target(),
            RelationEntity::ProcedureRequirement
        );
    }

    #[test]
    fn test_distinct_keys_keeps_first_seen_order() {
        let rows = vec![
            json!({"moduleId": 3}),
            json!({"moduleId": 1}),
            json!({"moduleId": 3}),
            json!({"moduleId": null}),
        ];
        assert_eq!(distinct_keys(&rows, "moduleId"), vec![3, 1]);
    }

    #[test]
    fn test_distinct_keys_many_duplicates() {
        let rows: Vec<Value> = (0..5000).map(|i| json!({"moduleId": i % 7})).collect();
        assert_eq!(distinct_keys(&rows, "moduleId"), (0..7).collect::<Vec<i64>>());
    }

    #[test]
    fn test_group_by_key_keeps_row_order() {
        let rows = vec![
            json!({"id": 1, "procedureModalityId": 2}),
            json!({"id": 2, "procedureModalityId": 1}),
            json!({"id": 3, "procedureModalityId": 2}),
            json!({"id": 4}),
        ];
        let groups = group_by_key(&rows, "procedureModalityId");

        assert_eq!(groups.len(), 2);
        let ids: Vec<i64> = groups[&2].iter().filter_map(|row| int_field(row, "id")).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(groups[&1].len(), 1);
    }
}
