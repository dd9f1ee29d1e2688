use indexmap::IndexMap;
use serde_json::Value;

/// Current value per field id.
pub type FieldValues = IndexMap<String, Value>;

/// Validation message per field id. An empty message means the field is valid.
pub type FieldErrors = IndexMap<String, String>;

/// Whether any entry carries a non-empty message.
pub fn has_errors(errors: &FieldErrors) -> bool {
    errors.values().any(|message| !message.is_empty())
}

pub fn first_error(errors: &FieldErrors) -> Option<(&str, &str)> {
    errors
        .iter()
        .find(|(_, message)| !message.is_empty())
        .map(|(id, message)| (id.as_str(), message.as_str()))
}
