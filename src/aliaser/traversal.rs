use serde_json::{Map, Value};

use super::state::{AliasInjector, AliasStats};
use crate::avro::{SchemaKind, TypeRef};
use crate::common::paths::{index_path, key_path, ROOT_PATH};
use crate::error::{AliasError, Result};

impl AliasInjector {
    /// Add aliases to every record and field reachable from `schema`, in place.
    ///
    /// The root goes through the same dispatch as a field type, so a
    /// top-level union of records is handled as well as a single record.
    pub fn inject(&self, schema: &mut Value) -> Result<AliasStats> {
        let mut stats = AliasStats::default();
        self.traverse_type(schema, ROOT_PATH, &mut stats)?;
        Ok(stats)
    }

    /// Depth-first walk of one schema object.
    ///
    /// Records get an alias, then each field gets one before its type is
    /// walked. Arrays only have their `items` walked. `enum`, `fixed` and
    /// `map` are not descended into, so a record nested in map `values` is
    /// never aliased.
    #[cfg_attr(feature = "trace", tracing::instrument(level = "trace", skip(self, schema, stats)))]
    pub fn traverse_schema(
        &self,
        schema: &mut Map<String, Value>,
        path: &str,
        stats: &mut AliasStats,
    ) -> Result<()> {
        match SchemaKind::of(schema) {
            SchemaKind::Record => {
                self.add_alias_to_record(schema, path, stats)?;

                let fields_path = key_path(path, "fields");
                let fields = match schema.get_mut("fields") {
                    None => return Ok(()),
                    Some(Value::Array(fields)) => fields,
                    Some(_) => {
                        return Err(AliasError::UnexpectedType {
                            key: "fields",
                            expected: "a list",
                            path: fields_path,
                        })
                    }
                };

                for (idx, field) in fields.iter_mut().enumerate() {
                    let field_path = index_path(&fields_path, idx);
                    let Value::Object(field) = field else {
                        return Err(AliasError::UnexpectedType {
                            key: "fields",
                            expected: "a list of objects",
                            path: field_path,
                        });
                    };

                    self.add_alias_to_field(field, &field_path, stats)?;

                    let field_type = field.get_mut("type").ok_or_else(|| AliasError::MissingKey {
                        key: "type",
                        path: field_path.clone(),
                    })?;
                    self.traverse_type(field_type, &key_path(&field_path, "type"), stats)?;
                }
                Ok(())
            }
            SchemaKind::Array => match schema.get_mut("items") {
                Some(items) => self.traverse_type(items, &key_path(path, "items"), stats),
                None => Ok(()),
            },
            SchemaKind::Other => Ok(()),
        }
    }

    /// Dispatch on the shape of a field's `type` or an array's `items`.
    #[cfg_attr(feature = "trace", tracing::instrument(level = "trace", skip(self, type_ref, stats)))]
    pub fn traverse_type(
        &self,
        type_ref: &mut Value,
        path: &str,
        stats: &mut AliasStats,
    ) -> Result<()> {
        match TypeRef::classify(type_ref) {
            TypeRef::Schema(schema) => self.traverse_schema(schema, path, stats),
            TypeRef::Union(members) => {
                // Only inline schema objects can carry aliases; names and nested unions are skipped.
                for (idx, member) in members.iter_mut().enumerate() {
                    let member_path = index_path(path, idx);
                    match TypeRef::classify(member) {
                        TypeRef::Schema(schema) => self.traverse_schema(schema, &member_path, stats)?,
                        TypeRef::NamedReference(name) => skip_named_reference(name, &member_path),
                        _ => {}
                    }
                }
                Ok(())
            }
            TypeRef::NamedReference(name) => {
                skip_named_reference(name, path);
                Ok(())
            }
            TypeRef::Primitive(_) | TypeRef::Other => Ok(()),
        }
    }
}

fn skip_named_reference(name: &str, path: &str) {
    tracing::debug!(path, name, "named type reference not followed");
}
