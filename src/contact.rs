//! The "contact us" form.

use crate::{
    domain::{EditorKind, FieldDescriptor},
    form::Form,
    validation::Rule,
};

pub const CONTACT_ACTION: &str = "http://localhost:3000/api/contactus";

pub const CONTACT_TITLE: &str = "Contact Us";

pub const CONTACT_INTRO: &str =
    "Enter the information below and we'll get back to you as soon as we can.";

pub const NOTES_MAX_LENGTH: u64 = 1000;

pub fn contact_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name")
            .with_label("Name")
            .with_rule(Rule::REQUIRED),
        FieldDescriptor::new("email")
            .with_label("Email")
            .with_rule(Rule::IS_EMAIL),
        FieldDescriptor::new("reason")
            .with_label("Reason")
            .with_editor(EditorKind::Dropdown)
            .with_options(["", "Marketing", "Support", "Feedback", "Jobs"])
            .with_rule(Rule::REQUIRED),
        FieldDescriptor::new("notes")
            .with_label("Notes")
            .with_editor(EditorKind::MultilineTextBox)
            .with_rule_args(Rule::MAX_LENGTH, NOTES_MAX_LENGTH),
    ]
}

/// The contact form posting to `action`.
pub fn contact_form(action: impl Into<String>) -> Form {
    Form::new(action, contact_fields()).expect("contact form fields are unique")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::form::FormContext;

    #[test]
    fn reason_needs_an_explicit_choice() {
        let mut form = contact_form(CONTACT_ACTION);
        form.set_values(
            [
                ("name".to_string(), json!("Ada")),
                ("email".to_string(), json!("ada@example.com")),
            ]
            .into_iter()
            .collect(),
        );
        assert!(!form.validate_form());
        assert_eq!(form.error("reason"), Some("This must be populated"));
        assert_eq!(form.error("email"), None);
        assert_eq!(form.error("notes"), None);
    }
}
