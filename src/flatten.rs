//! Flattening of structured data into a path → leaf-value map.
//!
//! Input data of any shape is first adapted into a [`serde_json::Value`] tree
//! (any `T: Serialize` can be converted with [`serde_json::to_value`]), then
//! walked depth-first into a flat map keyed by the traversal path of each leaf.
//!
//! Path construction:
//! - object fields are joined with `.` (no leading dot at the root)
//! - array indices are appended as `[i]` with no separator
//! - a bare scalar at the top level gets the empty path
//!
//! So `{"Items": [{"Name": "a"}]}` flattens to `{"Items[0].Name": "a"}`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::RenderError;

/// Flat mapping from traversal path to leaf scalar.
///
/// Built once per validation pass and immutable afterwards. `BTreeMap` keeps
/// iteration order deterministic, so the first violation reported by the
/// strict check is stable across runs.
pub type FlatMap = BTreeMap<String, Value>;

/// Flatten a structured value into a path → leaf map.
///
/// Walks the tree depth-first, recording every scalar leaf under its path.
/// Empty objects and arrays contribute no entries. A null value anywhere in
/// the tree is an error ([`RenderError::NullData`] with the offending path);
/// there is no meaningful text to check for a null, and silently skipping it
/// would defeat the point of the strict guard.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let flat = renderguard::flatten(&json!({"Title": "Hello", "Tags": ["a", "b"]}))?;
/// assert_eq!(flat["Title"], json!("Hello"));
/// assert_eq!(flat["Tags[0]"], json!("a"));
/// assert_eq!(flat["Tags[1]"], json!("b"));
/// # Ok::<(), renderguard::RenderError>(())
/// ```
pub fn flatten(value: &Value) -> Result<FlatMap, RenderError> {
    let mut result = FlatMap::new();
    flatten_into(value, String::new(), &mut result)?;
    Ok(result)
}

fn flatten_into(value: &Value, prefix: String, result: &mut FlatMap) -> Result<(), RenderError> {
    match value {
        Value::Null => Err(RenderError::NullData { path: prefix }),
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, path, result)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(child, format!("{}[{}]", prefix, i), result)?;
            }
            Ok(())
        }
        leaf => {
            // Last write wins if two paths collide, e.g. via pathological
            // stringified keys. Accepted, not defended against.
            result.insert(prefix, leaf.clone());
            Ok(())
        }
    }
}
