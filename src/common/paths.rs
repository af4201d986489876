/// Path of the schema root.
pub const ROOT_PATH: &str = "$";

/// Append an object key to a JSON path: `$` + `fields` → `$.fields`.
pub fn key_path(path: &str, key: &str) -> String {
    format!("{}.{}", path, key)
}

/// Append an array index to a JSON path: `$.fields` + `2` → `$.fields[2]`.
pub fn index_path(path: &str, idx: usize) -> String {
    format!("{}[{}]", path, idx)
}
