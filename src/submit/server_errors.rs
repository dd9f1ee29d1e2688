use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::FieldErrors;

/// Reads a field-rejection body such as `{"Email": "Must be unique"}`.
///
/// Keys arrive title-cased; the first character is lower-cased to line up with field
/// ids. Only flat objects with string messages are understood; other entries are
/// skipped.
pub fn map_server_errors(body: &str) -> Result<FieldErrors, serde_json::Error> {
    let raw: IndexMap<String, Value> = serde_json::from_str(body)?;
    let mut errors = FieldErrors::with_capacity(raw.len());
    for (key, value) in raw {
        match value {
            Value::String(message) => {
                errors.insert(lower_first(&key), message);
            }
            other => {
                tracing::debug!(key = %key, value = %other, "skipping non-string server error");
            }
        }
    }
    Ok(errors)
}

fn lower_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
