//! Column projection over serialized rows.
//!
//! Callers name columns in camelCase. A requested column list is validated
//! against the entity's columns and applied in the entity's column order,
//! whatever order the caller sent.

use crate::errors::CatalogError;
use crate::models::Entity;
use common::bus::pick_keys;
use serde::Serialize;
use serde_json::{Map, Value};

/// Resolve the columns to keep for `E`.
///
/// `None` or an empty list selects `default`.
pub fn resolve_columns<E: Entity>(
    requested: Option<&[String]>,
    default: &'static [&'static str],
) -> Result<Vec<&'static str>, CatalogError> {
    let Some(requested) = requested.filter(|r| !r.is_empty()) else {
        return Ok(default.to_vec());
    };

    if let Some(unknown) = requested
        .iter()
        .find(|column| !E::COLUMNS.contains(&column.as_str()))
    {
        return Err(CatalogError::BadRequest(format!(
            "Unknown column '{unknown}' for {}",
            E::NAME
        )));
    }

    Ok(E::COLUMNS
        .iter()
        .copied()
        .filter(|column| requested.iter().any(|r| r == column))
        .collect())
}

pub fn to_value<T: Serialize>(row: &T) -> Result<Value, CatalogError> {
    Ok(serde_json::to_value(row)?)
}

/// Serialize every row keeping only `columns`.
pub fn project<E: Entity>(rows: &[E], columns: &[&str]) -> Result<Vec<Value>, CatalogError> {
    rows.iter()
        .map(|row| Ok(pick_keys(&to_value(row)?, columns)))
        .collect()
}

/// Serialize rows into an object keyed by id, keeping only `columns`.
pub fn key_by_id<E, F>(rows: &[E], id_of: F, columns: &[&str]) -> Result<Value, CatalogError>
where
    E: Entity,
    F: Fn(&E) -> i64,
{
    let mut keyed = Map::new();
    for row in rows {
        keyed.insert(id_of(row).to_string(), pick_keys(&to_value(row)?, columns));
    }
    Ok(Value::Object(keyed))
}

/// Attach a loaded relation to a serialized row.
pub fn with_relation(mut value: Value, name: &str, related: Value) -> Value {
    if let Value::Object(map) = &mut value {
        map.insert(name.to_string(), related);
    }
    value
}

/// The serialized row, or the entity's not-found error.
pub fn found<E: Entity>(row: Option<E>, id: i64) -> Result<Value, CatalogError> {
    match row {
        Some(row) => to_value(&row),
        None => Err(CatalogError::entity_not_found(E::NAME, id)),
    }
}
