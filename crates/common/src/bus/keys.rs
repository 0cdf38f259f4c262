//! Key selection helpers for JSON objects.

use serde_json::{Map, Value};

/// Remove `keys` from `value` in place. Non-object values are left alone.
pub fn omit_keys(value: &mut Value, keys: &[&str]) {
    if let Value::Object(map) = value {
        for key in keys {
            map.remove(*key);
        }
    }
}

/// Build a new object holding only `keys` from `value`, in the order given.
///
/// Keys missing from `value` are skipped. A non-object input yields an
/// empty object.
#[must_use]
pub fn pick_keys<S: AsRef<str>>(value: &Value, keys: &[S]) -> Value {
    let mut picked = Map::new();
    if let Value::Object(map) = value {
        for key in keys {
            let key = key.as_ref();
            if let Some(field) = map.get(key) {
                picked.insert(key.to_string(), field.clone());
            }
        }
    }
    Value::Object(picked)
}
