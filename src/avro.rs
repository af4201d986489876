use serde_json::{Map, Value};

/// The eight primitive type names defined by the Avro specification.
pub const PRIMITIVE_TYPES: [&str; 8] = [
    "null", "boolean", "int", "long", "float", "double", "bytes", "string",
];

/// Shape of a schema object, decided by its `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Record,
    Array,
    /// `enum`, `fixed`, `map`, a primitive name, or no `type` at all.
    Other,
}

impl SchemaKind {
    pub fn of(node: &Map<String, Value>) -> Self {
        match node.get("type").and_then(Value::as_str) {
            Some("record") => SchemaKind::Record,
            Some("array") => SchemaKind::Array,
            _ => SchemaKind::Other,
        }
    }
}

/// A borrowed view over a type reference (a field's `type` or an array's `items`).
#[derive(Debug)]
pub enum TypeRef<'a> {
    /// Inline schema object: record, array, enum, fixed or map.
    Schema(&'a mut Map<String, Value>),
    /// Union of alternative types.
    Union(&'a mut Vec<Value>),
    Primitive(&'a str),
    /// Name of a type declared elsewhere in the tree. Never followed.
    NamedReference(&'a str),
    /// Null, numbers and booleans. Not valid Avro, ignored.
    Other,
}

impl<'a> TypeRef<'a> {
    pub fn classify(value: &'a mut Value) -> Self {
        match value {
            Value::Object(map) => TypeRef::Schema(map),
            Value::Array(members) => TypeRef::Union(members),
            Value::String(name) => {
                if PRIMITIVE_TYPES.contains(&name.as_str()) {
                    TypeRef::Primitive(name)
                } else {
                    TypeRef::NamedReference(name)
                }
            }
            _ => TypeRef::Other,
        }
    }
}
