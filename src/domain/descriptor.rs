use std::{fmt, str::FromStr};

use serde_json::Value;

use crate::validation::{Rule, ValidationBinding};

use super::error::DescriptorError;

/// Rendering strategy for a field's input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorKind {
    #[default]
    TextBox,
    MultilineTextBox,
    Dropdown,
}

impl EditorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorKind::TextBox => "textbox",
            EditorKind::MultilineTextBox => "multilinetextbox",
            EditorKind::Dropdown => "dropdown",
        }
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditorKind {
    type Err = DescriptorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "textbox" => Ok(EditorKind::TextBox),
            "multilinetextbox" => Ok(EditorKind::MultilineTextBox),
            "dropdown" => Ok(EditorKind::Dropdown),
            _ => Err(DescriptorError::UnknownEditor(raw.to_string())),
        }
    }
}

/// Static configuration of one form field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub id: String,
    pub label: Option<String>,
    pub editor: EditorKind,
    /// Dropdown entries, in display order. Ignored by the text editors.
    pub options: Vec<String>,
    pub validation: Option<ValidationBinding>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            editor: EditorKind::default(),
            options: Vec::new(),
            validation: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_editor(mut self, editor: EditorKind) -> Self {
        self.editor = editor;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.validation = Some(ValidationBinding::new(rule));
        self
    }

    pub fn with_rule_args(mut self, rule: Rule, args: impl Into<Value>) -> Self {
        self.validation = Some(ValidationBinding::with_args(rule, args));
        self
    }

    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.id.clone())
    }

    pub fn is_required(&self) -> bool {
        self.validation
            .as_ref()
            .is_some_and(|binding| binding.rule.name() == Rule::REQUIRED.name())
    }
}

/// Checks ids are present and unique across a field list.
pub(crate) fn check_descriptors(fields: &[FieldDescriptor]) -> Result<(), DescriptorError> {
    let mut seen = std::collections::HashSet::new();
    for field in fields {
        if field.id.is_empty() {
            return Err(DescriptorError::EmptyId);
        }
        if !seen.insert(field.id.as_str()) {
            return Err(DescriptorError::DuplicateId(field.id.clone()));
        }
    }
    Ok(())
}
