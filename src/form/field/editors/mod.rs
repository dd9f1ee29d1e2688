mod dropdown;
mod text;

use crossterm::event::KeyEvent;
use serde_json::Value;

use crate::domain::{EditorKind, FieldDescriptor};

pub(crate) use dropdown::{dropdown_index, option_label};

/// Stateless strategy behind one [`EditorKind`].
pub(crate) trait Editor {
    /// The value to push for `key`, or `None` when the key means nothing here.
    fn edit(&self, descriptor: &FieldDescriptor, current: Option<&Value>, key: &KeyEvent)
    -> Option<Value>;

    fn display(&self, descriptor: &FieldDescriptor, current: Option<&Value>) -> Vec<String>;
}

pub(crate) fn editor_for(kind: EditorKind) -> &'static dyn Editor {
    match kind {
        EditorKind::TextBox => &text::TextBoxEditor,
        EditorKind::MultilineTextBox => &text::MultilineEditor,
        EditorKind::Dropdown => &dropdown::DropdownEditor,
    }
}

pub(crate) fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
