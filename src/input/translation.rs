//! Key-path codec: nested JSON dictionaries <-> dot-separated key maps

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::types::FlatMap;

/// Errors raised while rebuilding a nested dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A flat key implies both a leaf and a subtree at the same path.
    #[error("Translation key '{path}' conflicts with the existing value '{value}'")]
    PathConflict {
        /// Offending flat key.
        path: String,
        /// Leaf value that blocks the path.
        value: String,
    },
}

/// Flatten nested JSON object into dot-separated key map.
///
/// Arrays are treated as keyed collections indexed by position, so
/// `{"items": ["a"]}` becomes `items.0`. `null` leaves carry no translation
/// and are skipped.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use t9n::input::translation::flatten_json;
///
/// let json = json!({
///     "common": {
///         "hello": "Hello",
///         "goodbye": "Goodbye"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("common.hello"), Some(&"Hello".to_string()));
/// assert_eq!(flattened.get("common.goodbye"), Some(&"Goodbye".to_string()));
/// ```
#[must_use]
pub fn flatten_json(json: &Value, separator: &str, prefix: Option<&str>) -> FlatMap {
    let mut result = FlatMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive step of [`flatten_json`].
fn flatten_json_value(json: &Value, separator: &str, prefix: Option<&str>, result: &mut FlatMap) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key = join_key(prefix, separator, key);
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key = join_key(prefix, separator, &index.to_string());
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        Value::Null => {
            if let Some(key) = prefix {
                tracing::debug!(key, "Skipping null translation value");
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// `prefix + separator + key`, or `key` at the root.
fn join_key(prefix: Option<&str>, separator: &str, key: &str) -> String {
    prefix.map_or_else(|| key.to_string(), |p| format!("{p}{separator}{key}"))
}

/// Split a flat key into trimmed, non-empty path segments.
///
/// `"foo..bar"`, `" foo . bar "` and `".foo.bar."` all yield `["foo", "bar"]`.
#[must_use]
pub fn split_key<'a>(key: &'a str, separator: &str) -> Vec<&'a str> {
    key.split(separator).map(str::trim).filter(|segment| !segment.is_empty()).collect()
}

/// Rebuild a nested dictionary from a dot-separated key map.
///
/// Segments are trimmed and empty segments dropped before walking the tree.
/// Numeric-looking segments stay object keys, they never turn into arrays.
/// A key that normalizes to an already assigned leaf keeps the first value.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use t9n::input::translation::deflatten_json;
/// use t9n::types::FlatMap;
///
/// let mut flat = FlatMap::new();
/// flat.insert("units.2".to_string(), "Two".to_string());
/// flat.insert(" units . 3 ".to_string(), "Three".to_string());
///
/// let tree = deflatten_json(&flat, ".").unwrap();
/// assert_eq!(tree, json!({"units": {"2": "Two", "3": "Three"}}));
/// ```
///
/// # Errors
/// [`CodecError::PathConflict`] when a key runs through an existing leaf or
/// would replace an existing subtree with a leaf.
pub fn deflatten_json(flat: &FlatMap, separator: &str) -> Result<Value, CodecError> {
    let mut root = Map::new();

    for (key, value) in flat {
        let segments = split_key(key, separator);
        let Some((last, parents)) = segments.split_last() else {
            tracing::debug!(key = %key, "Ignoring translation key without segments");
            continue;
        };

        let mut node = &mut root;
        for segment in parents {
            let child = node
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            node = match child {
                Value::Object(map) => map,
                other => {
                    return Err(CodecError::PathConflict {
                        path: key.clone(),
                        value: leaf_text(other),
                    });
                }
            };
        }

        match node.get(*last) {
            None => {
                node.insert((*last).to_string(), Value::String(value.clone()));
            }
            Some(Value::Object(_)) => {
                return Err(CodecError::PathConflict { path: key.clone(), value: value.clone() });
            }
            Some(existing) => {
                tracing::warn!(
                    key = %key,
                    kept = %leaf_text(existing),
                    "Duplicate translation key, keeping the first value"
                );
            }
        }
    }

    Ok(Value::Object(root))
}

/// Leaf text of a scalar; strings unquoted, numbers and booleans as JSON.
fn leaf_text(value: &Value) -> String {
    value.as_str().map_or_else(|| value.to_string(), str::to_string)
}
