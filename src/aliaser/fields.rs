use serde_json::{Map, Value};

use super::aliases::{optional_str, push_alias};
use super::state::{AliasInjector, AliasStats};
use crate::common::names::to_snake_case;
use crate::error::{AliasError, Result};

impl AliasInjector {
    /// Give a field its snake_case alias. Field names never have the prefix removed.
    pub fn add_alias_to_field(
        &self,
        field: &mut Map<String, Value>,
        path: &str,
        stats: &mut AliasStats,
    ) -> Result<()> {
        let name = optional_str(field, "name", path)?.ok_or_else(|| AliasError::MissingKey {
            key: "name",
            path: path.to_string(),
        })?;
        let alias = to_snake_case(name);
        tracing::debug!(path, name, alias = %alias, "field alias");
        push_alias(field, alias, path)?;
        stats.fields += 1;
        Ok(())
    }
}
