use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::EditorKind;

pub const HELP_TEXT: &str = "Tab/↓ next • Shift+Tab/↑ previous • ←/→/↑/↓ or Enter choose option • Ctrl+S submit • Esc clear status • Ctrl+Q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Submit,
    Quit,
    NextField,
    PrevField,
    ResetStatus,
    /// Enter: meaning depends on what has focus.
    Activate,
    Edit(KeyEvent),
    None,
}

/// Maps a key to a command. Up/Down cycle a focused dropdown instead of moving focus.
pub fn classify(key: &KeyEvent, focused: Option<EditorKind>) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Down if focused == Some(EditorKind::Dropdown) => {
            KeyCommand::Edit(*key)
        }
        KeyCode::Tab | KeyCode::Down => KeyCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
        KeyCode::Esc => KeyCommand::ResetStatus,
        KeyCode::Enter => KeyCommand::Activate,
        _ => KeyCommand::Edit(*key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert_eq!(
            classify(&key(KeyCode::Char('s'), KeyModifiers::CONTROL), None),
            KeyCommand::Submit
        );
        assert_eq!(
            classify(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), None),
            KeyCommand::Quit
        );
        assert_eq!(
            classify(&key(KeyCode::Char('x'), KeyModifiers::CONTROL), None),
            KeyCommand::None
        );
    }

    #[test]
    fn shift_tab_moves_back() {
        assert_eq!(
            classify(&key(KeyCode::BackTab, KeyModifiers::SHIFT), None),
            KeyCommand::PrevField
        );
    }

    #[test]
    fn plain_characters_are_edits() {
        let event = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(classify(&event, None), KeyCommand::Edit(event));
        assert_eq!(
            classify(&key(KeyCode::Enter, KeyModifiers::NONE), None),
            KeyCommand::Activate
        );
    }

    #[test]
    fn arrows_cycle_a_focused_dropdown() {
        let down = key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            classify(&down, Some(EditorKind::Dropdown)),
            KeyCommand::Edit(down)
        );
        assert_eq!(
            classify(&down, Some(EditorKind::TextBox)),
            KeyCommand::NextField
        );
        assert_eq!(
            classify(&key(KeyCode::Up, KeyModifiers::NONE), None),
            KeyCommand::PrevField
        );
        assert_eq!(
            classify(&key(KeyCode::Tab, KeyModifiers::NONE), Some(EditorKind::Dropdown)),
            KeyCommand::NextField
        );
    }
}
