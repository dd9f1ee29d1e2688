use crossterm::event::{KeyCode, KeyEvent};
use serde_json::Value;

use crate::domain::FieldDescriptor;

use super::{Editor, value_text};

const EMPTY_OPTION_LABEL: &str = "(none)";

#[derive(Debug, Clone, Copy)]
pub(crate) struct DropdownEditor;

impl Editor for DropdownEditor {
    fn edit(
        &self,
        descriptor: &FieldDescriptor,
        current: Option<&Value>,
        key: &KeyEvent,
    ) -> Option<Value> {
        let options = &descriptor.options;
        if options.is_empty() {
            return None;
        }
        let selected = dropdown_index(options, current);
        let next = match key.code {
            KeyCode::Up | KeyCode::Left => {
                if selected == 0 {
                    options.len() - 1
                } else {
                    selected - 1
                }
            }
            KeyCode::Down | KeyCode::Right => (selected + 1) % options.len(),
            _ => return None,
        };
        options.get(next).cloned().map(Value::String)
    }

    fn display(&self, descriptor: &FieldDescriptor, current: Option<&Value>) -> Vec<String> {
        let shown = descriptor
            .options
            .get(dropdown_index(&descriptor.options, current))
            .map(|option| option_label(option))
            .unwrap_or(EMPTY_OPTION_LABEL);
        vec![format!("‹ {shown} ›")]
    }
}

/// Position of the current value among `options`; the first entry when unset.
pub(crate) fn dropdown_index(options: &[String], current: Option<&Value>) -> usize {
    let text = value_text(current);
    options
        .iter()
        .position(|option| *option == text)
        .unwrap_or(0)
}

pub(crate) fn option_label(option: &str) -> &str {
    if option.is_empty() {
        EMPTY_OPTION_LABEL
    } else {
        option
    }
}
