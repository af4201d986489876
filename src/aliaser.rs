pub mod aliases;
pub mod fields;
pub mod io;
pub mod records;
pub mod state;
pub mod traversal;

pub use io::{load_schema, save_schema, schema_to_string, DEFAULT_INDENT};
pub use state::{AliasInjector, AliasStats};

use serde_json::Value;
use std::path::Path;

use crate::error::Result;

/// Add snake_case aliases to every record and field of an in-memory Avro schema.
///
/// The tree is mutated in place and handed back. Record names have `prefix`
/// removed before their alias is derived; field names never do.
pub fn add_aliases_to_avro_schema(mut schema: Value, prefix: &str) -> Result<Value> {
    AliasInjector::new(prefix).inject(&mut schema)?;
    Ok(schema)
}

/// Add snake_case aliases to an Avro schema file.
///
/// Reads `input` in full, adds the aliases, and writes the result to
/// `output` pretty-printed with `indent` spaces. `input` and `output` may be
/// the same path.
///
/// # Arguments
/// * `input` - Path of the `.avsc` schema to read.
/// * `output` - Path the aliased schema is written to.
/// * `prefix` - Literal prefix removed from record names before casing.
/// * `indent` - Spaces per indentation level in the written file.
pub fn add_aliases_to_avro_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    prefix: &str,
    indent: usize,
) -> Result<AliasStats> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let mut schema = load_schema(input)?;
    let stats = AliasInjector::new(prefix).inject(&mut schema)?;
    save_schema(output, &schema, indent)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        records = stats.records,
        fields = stats.fields,
        "aliases added"
    );
    Ok(stats)
}
