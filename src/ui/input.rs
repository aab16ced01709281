use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('c'), _) => Some(AppMessage::OpenCreatePlaylist),
            (KeyCode::Char('a'), _) => Some(AppMessage::OpenAddToPlaylist),
            (KeyCode::Char('x'), _) => Some(AppMessage::DismissNotification),
            (KeyCode::Char('h'), _) => Some(AppMessage::SetSidebarIndex(0)),
            (KeyCode::Char('/'), _) => Some(AppMessage::SetSidebarIndex(1)),
            (KeyCode::Char('l'), _) => Some(AppMessage::SetSidebarIndex(2)),
            (KeyCode::Esc, _) => Some(AppMessage::GoBack),
            (KeyCode::Tab, _) => Some(AppMessage::NextSidebarItem),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSidebarItem),
            (KeyCode::Char('1'), _) => Some(AppMessage::SetSidebarIndex(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SetSidebarIndex(1)),
            (KeyCode::Char('3'), _) => Some(AppMessage::SetSidebarIndex(2)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_dismisses_the_notification() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(matches!(
            InputHandler::handle_key(key),
            Some(AppMessage::DismissNotification)
        ));
    }
}
