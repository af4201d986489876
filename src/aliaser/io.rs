use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{AliasError, Result};

/// Indentation used for written schemas unless told otherwise.
pub const DEFAULT_INDENT: usize = 4;

/// Read a whole `.avsc` file and decode it.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| AliasError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AliasError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print a schema with `indent` spaces per level.
///
/// Non-ASCII text is written as-is and there is no trailing newline.
pub fn schema_to_string(schema: &Value, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    // Writing a Value into a Vec cannot fail.
    schema.serialize(&mut ser).unwrap();
    // serde_json only ever emits UTF-8.
    String::from_utf8(buf).unwrap()
}

/// Write a schema to `path` in one go, replacing any existing file.
pub fn save_schema(path: impl AsRef<Path>, schema: &Value, indent: usize) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, schema_to_string(schema, indent)).map_err(|source| AliasError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn writes_four_space_indent_and_literal_unicode() {
        let schema = json!({"name": "Größe", "aliases": ["größe"]});
        assert_eq!(
            schema_to_string(&schema, DEFAULT_INDENT),
            "{\n    \"name\": \"Größe\",\n    \"aliases\": [\n        \"größe\"\n    ]\n}"
        );
    }

    #[test]
    fn round_trips_through_disk_preserving_key_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.avsc");
        let schema = json!({"type": "record", "name": "Z", "fields": [], "doc": "d", "aliases": ["z"]});

        save_schema(&path, &schema, 2).unwrap();
        let loaded = load_schema(&path).unwrap();

        let keys: Vec<&str> = loaded.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "name", "fields", "doc", "aliases"]);
    }

    #[test]
    fn numbers_are_written_back_as_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("decimal.avsc");
        fs::write(
            &path,
            r#"{"type": "bytes", "logicalType": "decimal", "precision": 123456789012345678901234567890, "scale": 2, "default": 1.10}"#,
        )
        .unwrap();

        let written = schema_to_string(&load_schema(&path).unwrap(), DEFAULT_INDENT);
        assert!(written.contains("\"precision\": 123456789012345678901234567890,"), "{written}");
        assert!(written.contains("\"default\": 1.10"), "{written}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load_schema(dir.path().join("absent.avsc")).unwrap_err();
        assert!(matches!(err, AliasError::Io { .. }));
    }

    #[test]
    fn bad_json_is_a_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.avsc");
        fs::write(&path, "{\"type\": ").unwrap();
        let err = load_schema(&path).unwrap_err();
        assert!(matches!(err, AliasError::Json { .. }));
    }
}
