//! Payload parsing for message handlers.
//!
//! Callers send ids as JSON numbers or numeric strings, either bare or inside
//! an object. Anything that is not an integer is rejected with the numeric
//! validation message.

use crate::errors::{CatalogError, NUMERIC_VALIDATION_MESSAGE};
use serde_json::Value;

fn numeric_error() -> CatalogError {
    CatalogError::BadRequest(NUMERIC_VALIDATION_MESSAGE.to_string())
}

/// Parse a single integer: a JSON integer or a string of digits with an
/// optional leading minus sign.
pub fn parse_integer(value: &Value) -> Result<i64, CatalogError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(numeric_error),
        Value::String(s) => {
            let digits = s.strip_prefix('-').unwrap_or(s);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(numeric_error());
            }
            s.parse::<i64>().map_err(|_| numeric_error())
        }
        _ => Err(numeric_error()),
    }
}

/// Read `field` from an object payload. A bare number or string payload is
/// accepted as the value itself.
pub fn parse_id(data: &Value, field: &str) -> Result<i64, CatalogError> {
    match data {
        Value::Object(map) => map.get(field).map_or_else(|| Err(numeric_error()), parse_integer),
        other => parse_integer(other),
    }
}

/// Read an id list, sent bare or as `{ids: [...]}`.
pub fn parse_ids(data: &Value) -> Result<Vec<i64>, CatalogError> {
    let list = match data {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("ids") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => return Ok(Vec::new()),
            Some(_) => return Err(numeric_error()),
        },
        Value::Null => return Ok(Vec::new()),
        _ => return Err(numeric_error()),
    };

    list.iter().map(parse_integer).collect()
}

/// Read an optional column list, sent bare or as `{columns: [...]}`.
///
/// `None` means the default projection.
pub fn parse_columns(data: &Value) -> Result<Option<Vec<String>>, CatalogError> {
    let list = match data {
        Value::Null => return Ok(None),
        Value::Array(items) => items,
        Value::Object(map) => match map.get("columns") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => return Ok(None),
            Some(_) => return Err(columns_error()),
        },
        _ => return Err(columns_error()),
    };

    list.iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(columns_error))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn columns_error() -> CatalogError {
    CatalogError::BadRequest("columns must be a list of column names".to_string())
}

/// Read the relation paths of `findDataRelations`. Missing means none.
pub fn parse_relations(data: &Value) -> Result<Vec<String>, CatalogError> {
    match data.get("relations") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    CatalogError::BadRequest("relations must be a list of strings".to_string())
                })
            })
            .collect(),
        Some(_) => Err(CatalogError::BadRequest(
            "relations must be a list of strings".to_string(),
        )),
    }
}

/// Read the root entity name of `findDataRelations`.
pub fn parse_entity(data: &Value) -> Result<String, CatalogError> {
    data.get("entity")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CatalogError::BadRequest("entity is required".to_string()))
}
