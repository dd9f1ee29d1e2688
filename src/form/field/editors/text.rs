use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::domain::FieldDescriptor;

use super::{Editor, value_text};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextBoxEditor;

#[derive(Debug, Clone, Copy)]
pub(crate) struct MultilineEditor;

impl Editor for TextBoxEditor {
    fn edit(
        &self,
        _descriptor: &FieldDescriptor,
        current: Option<&Value>,
        key: &KeyEvent,
    ) -> Option<Value> {
        edit_text(value_text(current), key, false)
    }

    fn display(&self, _descriptor: &FieldDescriptor, current: Option<&Value>) -> Vec<String> {
        vec![value_text(current)]
    }
}

impl Editor for MultilineEditor {
    fn edit(
        &self,
        _descriptor: &FieldDescriptor,
        current: Option<&Value>,
        key: &KeyEvent,
    ) -> Option<Value> {
        edit_text(value_text(current), key, true)
    }

    fn display(&self, _descriptor: &FieldDescriptor, current: Option<&Value>) -> Vec<String> {
        let text = value_text(current);
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }
}

fn edit_text(mut buffer: String, key: &KeyEvent, multiline: bool) -> Option<Value> {
    match key.code {
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return None;
            }
            buffer.push(ch);
        }
        KeyCode::Enter if multiline => buffer.push('\n'),
        KeyCode::Backspace => {
            buffer.pop()?;
        }
        KeyCode::Delete => {
            if buffer.is_empty() {
                return None;
            }
            buffer.clear();
        }
        _ => return None,
    }
    Some(Value::String(buffer))
}
