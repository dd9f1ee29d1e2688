//! Field widgets.
//!
//! A [`Field`] is a thin view over a [`FieldDescriptor`]. It reads and writes the
//! form exclusively through the [`FormContext`] handed to each call, so the same
//! descriptor can be rendered any number of times without carrying state.

mod editors;

use crossterm::event::KeyEvent;
use serde_json::Value;

use crate::domain::{EditorKind, FieldDescriptor, FieldValues};

use super::context::FormContext;

pub(crate) use editors::{dropdown_index, option_label};

/// Everything needed to draw one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: String,
    pub label: String,
    pub editor: EditorKind,
    pub required: bool,
    pub lines: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    descriptor: &'a FieldDescriptor,
}

impl<'a> Field<'a> {
    pub fn new(descriptor: &'a FieldDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &'a FieldDescriptor {
        self.descriptor
    }

    pub fn id(&self) -> &'a str {
        &self.descriptor.id
    }

    /// Feeds a key to the editor. Returns true when the value changed.
    pub fn handle_key(&self, ctx: &mut dyn FormContext, key: &KeyEvent) -> bool {
        let editor = editors::editor_for(self.descriptor.editor);
        let next = editor.edit(self.descriptor, ctx.value(self.id()), key);
        match next {
            Some(value) => {
                self.change(ctx, value);
                true
            }
            None => false,
        }
    }

    /// Pushes a new value for this field only.
    pub fn change(&self, ctx: &mut dyn FormContext, value: Value) {
        let mut partial = FieldValues::with_capacity(1);
        partial.insert(self.descriptor.id.clone(), value);
        ctx.set_values(partial);
    }

    /// Focus left the field.
    pub fn blur(&self, ctx: &mut dyn FormContext) {
        ctx.validate(self.id());
    }

    /// Dropdown entries and the one currently shown, for choosing from a list.
    pub fn choices(&self, ctx: &dyn FormContext) -> Option<(Vec<String>, usize)> {
        if self.descriptor.editor != EditorKind::Dropdown || self.descriptor.options.is_empty() {
            return None;
        }
        let selected = dropdown_index(&self.descriptor.options, ctx.value(self.id()));
        Some((self.descriptor.options.clone(), selected))
    }

    /// Picks the dropdown entry at `index`, if it exists.
    pub fn choose(&self, ctx: &mut dyn FormContext, index: usize) -> bool {
        match self.descriptor.options.get(index) {
            Some(option) if self.descriptor.editor == EditorKind::Dropdown => {
                self.change(ctx, Value::String(option.clone()));
                true
            }
            _ => false,
        }
    }

    pub fn view(&self, ctx: &dyn FormContext) -> FieldView {
        let editor = editors::editor_for(self.descriptor.editor);
        FieldView {
            id: self.descriptor.id.clone(),
            label: self.descriptor.display_label(),
            editor: self.descriptor.editor,
            required: self.descriptor.is_required(),
            lines: editor.display(self.descriptor, ctx.value(self.id())),
            error: ctx.error(self.id()).map(str::to_string),
        }
    }
}
