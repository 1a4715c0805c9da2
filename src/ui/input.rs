use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Global bindings, consulted only after the active view declined the key.
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Tab, _) => Some(AppMessage::NextTab),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousTab),
            (KeyCode::Char('1'), _) => Some(AppMessage::SelectTab(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SelectTab(1)),
            (KeyCode::Char('3'), _) => Some(AppMessage::SelectTab(2)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_global_bindings() {
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMessage::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('2'))),
            Some(AppMessage::SelectTab(1))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::BackTab)),
            Some(AppMessage::PreviousTab)
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('x'))), None);
    }
}
