use serde_json::{Map, Value};

use crate::error::{AliasError, Result};

/// Append `alias` to the node's `aliases` list, creating the list if absent.
///
/// Existing entries are kept and nothing is deduplicated.
pub fn push_alias(node: &mut Map<String, Value>, alias: String, path: &str) -> Result<()> {
    match node
        .entry("aliases")
        .or_insert_with(|| Value::Array(Vec::new()))
    {
        Value::Array(aliases) => {
            aliases.push(Value::String(alias));
            Ok(())
        }
        _ => Err(AliasError::UnexpectedType {
            key: "aliases",
            expected: "a list",
            path: path.to_string(),
        }),
    }
}

/// Read a string-valued key, or `None` if the key is absent.
pub fn optional_str<'a>(
    node: &'a Map<String, Value>,
    key: &'static str,
    path: &str,
) -> Result<Option<&'a str>> {
    match node.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(AliasError::UnexpectedType {
            key,
            expected: "a string",
            path: path.to_string(),
        }),
    }
}
