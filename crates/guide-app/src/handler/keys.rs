//! Key event handlers for each UI mode

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Search => handle_key_search(state, key),
        UiMode::Favorites => handle_key_favorites(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('q') => Some(Message::MainButtonPressed),

        // Sections
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectSectionByIndex(index))
        }
        InputKey::Tab => Some(Message::NextSection),
        InputKey::BackTab => Some(Message::PreviousSection),

        // Tabs of the current section
        InputKey::Right | InputKey::Char('l') if state.current_dimension().is_some() => {
            Some(Message::NextTab)
        }
        InputKey::Left | InputKey::Char('h') if state.current_dimension().is_some() => {
            Some(Message::PreviousTab)
        }

        InputKey::Char('f') => Some(Message::CycleFilter),

        // Items
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextItem),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousItem),
        InputKey::PageDown => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::ScrollUp),
        InputKey::Enter | InputKey::Char('c') => Some(Message::CopySelected),
        InputKey::Char('s') => Some(Message::ToggleFavoriteSelected),

        // Overlays
        InputKey::Char('/') | InputKey::CharCtrl('f') => Some(Message::StartSearch),
        InputKey::Char('v') => Some(Message::OpenFavorites),

        _ => None,
    }
}

fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('f') => Some(Message::CloseSearch),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Enter => Some(Message::SearchCopySelected),
        InputKey::Down => Some(Message::SearchSelectNext),
        InputKey::Up => Some(Message::SearchSelectPrevious),
        InputKey::Backspace => {
            let mut text = state.search.query.clone();
            text.pop()?;
            Some(Message::SearchInput { text })
        }
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut text = state.search.query.clone();
            text.push(c);
            Some(Message::SearchInput { text })
        }
        _ => None,
    }
}

fn handle_key_favorites(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('v' | 'q') => Some(Message::CloseFavorites),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Down | InputKey::Char('j') => Some(Message::FavoritesSelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::FavoritesSelectPrevious),
        InputKey::Enter | InputKey::Char('c') => Some(Message::FavoritesCopySelected),
        InputKey::Char('s' | 'd') | InputKey::Delete => Some(Message::FavoritesRemoveSelected),
        _ => None,
    }
}
