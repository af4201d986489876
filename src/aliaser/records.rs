use serde_json::{Map, Value};

use super::aliases::{optional_str, push_alias};
use super::state::{AliasInjector, AliasStats};
use crate::common::names::{strip_record_prefix, to_snake_case};
use crate::error::Result;

impl AliasInjector {
    /// Give a record its snake_case alias, with the configured prefix removed
    /// from the name first.
    ///
    /// A record without `name` is left alone.
    pub fn add_alias_to_record(
        &self,
        record: &mut Map<String, Value>,
        path: &str,
        stats: &mut AliasStats,
    ) -> Result<()> {
        let Some(name) = optional_str(record, "name", path)? else {
            return Ok(());
        };
        let alias = to_snake_case(strip_record_prefix(name, &self.prefix));
        tracing::debug!(path, name, alias = %alias, "record alias");
        push_alias(record, alias, path)?;
        stats.records += 1;
        Ok(())
    }
}
