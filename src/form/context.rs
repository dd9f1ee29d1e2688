use serde_json::Value;

use crate::domain::{FieldErrors, FieldValues};

/// What a field widget may see and do.
///
/// Widgets receive this explicitly on every call and never keep form state of their
/// own; the [`Form`](super::Form) container is the only implementor that owns data.
pub trait FormContext {
    fn values(&self) -> &FieldValues;

    fn errors(&self) -> &FieldErrors;

    /// Shallow merge: keys in `values` replace existing entries, the rest stay.
    fn set_values(&mut self, values: FieldValues);

    /// Re-runs the validation rule bound to `field_id`.
    fn validate(&mut self, field_id: &str);

    fn value(&self, field_id: &str) -> Option<&Value> {
        self.values().get(field_id)
    }

    /// Current message for `field_id`, if it is non-empty.
    fn error(&self, field_id: &str) -> Option<&str> {
        self.errors()
            .get(field_id)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }
}
