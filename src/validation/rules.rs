use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use serde_json::Value;

use crate::domain::FieldValues;

// Shape check only; quoted local parts and bracketed IPv4 hosts are accepted.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("invalid email pattern")
});

/// The field must hold something other than null or an empty string.
pub fn required(values: &FieldValues, field: &str, _args: Option<&Value>) -> String {
    match field_text(values, field) {
        Some(text) if !text.is_empty() => String::new(),
        _ => "This must be populated".to_string(),
    }
}

/// A non-empty value must look like an email address.
pub fn is_email(values: &FieldValues, field: &str, _args: Option<&Value>) -> String {
    match field_text(values, field) {
        Some(text) if !text.is_empty() && !EMAIL_PATTERN.is_match(&text) => {
            "This must be in a valid email format".to_string()
        }
        _ => String::new(),
    }
}

/// The value must not be longer than `args` characters.
pub fn max_length(values: &FieldValues, field: &str, args: Option<&Value>) -> String {
    let Some(limit) = args.and_then(Value::as_u64) else {
        return String::new();
    };
    match field_text(values, field) {
        Some(text) if text.chars().count() as u64 > limit => {
            format!("This can not exceed {limit} characters")
        }
        _ => String::new(),
    }
}

fn field_text<'a>(values: &'a FieldValues, field: &str) -> Option<Cow<'a, str>> {
    match values.get(field)? {
        Value::Null => None,
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}
