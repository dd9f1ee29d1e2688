use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    domain::{DescriptorError, EditorKind, FieldDescriptor},
    form::Form,
    validation::{Rule, ValidationBinding},
};

use super::format::{DocumentFormat, parse_document_str};

/// A form declared in a configuration document.
#[derive(Debug, Clone)]
pub struct FormDocument {
    pub action: String,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDocument {
    pub fn into_form(self) -> Result<Form, DescriptorError> {
        Form::new(self.action, self.fields)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    action: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    intro: Option<String>,
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    editor: Option<String>,
    #[serde(default, alias = "option")]
    options: Vec<String>,
    #[serde(default)]
    validation: Option<RawValidation>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawValidation {
    rule: String,
    #[serde(default)]
    args: Option<Value>,
}

/// Reads a form document such as:
///
/// ```json
/// {
///   "action": "http://localhost:3000/api/contactus",
///   "fields": [
///     { "id": "name", "label": "Name", "validation": { "rule": "required" } },
///     { "id": "notes", "editor": "multilinetextbox",
///       "validation": { "rule": "maxLength", "args": 1000 } }
///   ]
/// }
/// ```
pub fn parse_form_document(contents: &str, format: DocumentFormat) -> Result<FormDocument> {
    let value = parse_document_str(contents, format)?;
    let raw: RawDocument =
        serde_json::from_value(value).context("form document has an unexpected shape")?;
    let fields = raw
        .fields
        .into_iter()
        .map(RawField::into_descriptor)
        .collect::<Result<Vec<_>, _>>()
        .context("invalid field declaration")?;
    Ok(FormDocument {
        action: raw.action,
        title: raw.title,
        intro: raw.intro,
        fields,
    })
}

impl RawField {
    fn into_descriptor(self) -> Result<FieldDescriptor, DescriptorError> {
        let editor = match self.editor.as_deref() {
            Some(name) => name.parse::<EditorKind>()?,
            None => EditorKind::default(),
        };
        let validation = self
            .validation
            .map(|raw| {
                let rule = Rule::builtin(&raw.rule)
                    .ok_or_else(|| DescriptorError::UnknownRule(raw.rule.clone()))?;
                Ok::<_, DescriptorError>(ValidationBinding {
                    rule,
                    args: raw.args,
                })
            })
            .transpose()?;
        Ok(FieldDescriptor {
            id: self.id,
            label: self.label,
            editor,
            options: self.options,
            validation,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const CONTACT: &str = r#"{
        "action": "http://localhost:3000/api/contactus",
        "title": "Contact us",
        "fields": [
            { "id": "name", "label": "Name", "validation": { "rule": "required" } },
            { "id": "email", "label": "Email", "validation": { "rule": "isEmail" } },
            { "id": "reason", "editor": "Dropdown", "option": ["", "Support"] },
            { "id": "notes", "editor": "multilinetextbox",
              "validation": { "rule": "maxLength", "args": 1000 } }
        ]
    }"#;

    #[test]
    fn parses_fields_editors_and_rules() {
        let document = parse_form_document(CONTACT, DocumentFormat::Json).unwrap();
        assert_eq!(document.action, "http://localhost:3000/api/contactus");
        assert_eq!(document.title.as_deref(), Some("Contact us"));
        assert_eq!(document.intro, None);
        let ids: Vec<_> = document.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["name", "email", "reason", "notes"]);
        assert_eq!(document.fields[2].editor, EditorKind::Dropdown);
        assert_eq!(document.fields[2].options, ["", "Support"]);
        let notes = document.fields[3].validation.as_ref().unwrap();
        assert_eq!(notes.rule.name(), "maxLength");
        assert_eq!(notes.args, Some(json!(1000)));
        assert!(document.into_form().is_ok());
    }

    #[test]
    fn unknown_editor_is_an_error() {
        let raw = r#"{"action": "x", "fields": [{"id": "a", "editor": "checkbox"}]}"#;
        let err = parse_form_document(raw, DocumentFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("unknown editor `checkbox`"));
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let raw = r#"{"action": "x", "fields": [{"id": "a", "validation": {"rule": "isUrl"}}]}"#;
        let err = parse_form_document(raw, DocumentFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("unknown validation rule `isUrl`"));
    }

    #[test]
    fn unexpected_keys_are_rejected() {
        let raw = r#"{"action": "x", "fields": [{"id": "a", "colour": "red"}]}"#;
        assert!(parse_form_document(raw, DocumentFormat::Json).is_err());
    }

    #[test]
    fn duplicate_ids_surface_when_building_the_form() {
        let raw = r#"{"action": "x", "fields": [{"id": "a"}, {"id": "a"}]}"#;
        let document = parse_form_document(raw, DocumentFormat::Json).unwrap();
        assert!(matches!(
            document.into_form(),
            Err(DescriptorError::DuplicateId(id)) if id == "a"
        ));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parses_toml_documents() {
        let raw = r#"
            action = "http://localhost/api"

            [[fields]]
            id = "notes"
            editor = "multilinetextbox"
            validation = { rule = "maxLength", args = 10 }
        "#;
        let document = parse_form_document(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(document.fields[0].editor, EditorKind::MultilineTextBox);
        assert_eq!(
            document.fields[0].validation.as_ref().unwrap().args,
            Some(json!(10))
        );
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parses_yaml_documents() {
        let raw = "action: http://localhost/api\nfields:\n  - id: email\n    validation:\n      rule: isEmail\n";
        let document = parse_form_document(raw, DocumentFormat::Yaml).unwrap();
        assert_eq!(document.fields[0].validation.as_ref().unwrap().rule.name(), "isEmail");
    }
}
