//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{items, keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => items::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Closing
        // ─────────────────────────────────────────────────────────
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::MainButtonPressed => match state.host.press_main_button() {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::NavigateToSection(id) => navigation::handle_navigate(state, &id),
        Message::SelectSectionByIndex(index) => {
            navigation::handle_select_section_index(state, index)
        }
        Message::NextSection => navigation::handle_step_section(state, true),
        Message::PreviousSection => navigation::handle_step_section(state, false),
        Message::SwitchTab { dimension, tab } => {
            navigation::handle_switch_tab(state, dimension, &tab)
        }
        Message::NextTab => navigation::handle_step_tab(state, true),
        Message::PreviousTab => navigation::handle_step_tab(state, false),
        Message::FilterExamples(filter) => navigation::handle_filter(state, &filter),
        Message::CycleFilter => navigation::handle_cycle_filter(state),
        Message::CommitTransition {
            dimension,
            generation,
        } => navigation::handle_commit(state, dimension, generation),

        // ─────────────────────────────────────────────────────────
        // Items
        // ─────────────────────────────────────────────────────────
        Message::SelectNextItem => items::handle_select_item(state, true),
        Message::SelectPreviousItem => items::handle_select_item(state, false),
        Message::ScrollDown => {
            state.views.scroll_by(3);
            UpdateResult::none()
        }
        Message::ScrollUp => {
            state.views.scroll_by(-3);
            UpdateResult::none()
        }
        Message::CopySelected => items::handle_copy_selected(state),
        Message::ToggleFavoriteSelected => items::handle_toggle_favorite_selected(state),
        Message::CopyCompleted { text, method } => {
            items::handle_copy_completed(state, text, method)
        }
        Message::CopyFailed { reason } => items::handle_copy_failed(state, &reason),

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => items::handle_start_search(state),
        Message::CloseSearch => items::handle_close_search(state),
        Message::SearchInput { text } => items::handle_search_input(state, &text),
        Message::SearchSelectNext => {
            state.search.select_next();
            UpdateResult::none()
        }
        Message::SearchSelectPrevious => {
            state.search.select_previous();
            UpdateResult::none()
        }
        Message::SearchCopySelected => items::handle_search_copy_selected(state),

        // ─────────────────────────────────────────────────────────
        // Favorites
        // ─────────────────────────────────────────────────────────
        Message::OpenFavorites => items::handle_open_favorites(state),
        Message::CloseFavorites => items::handle_close_favorites(state),
        Message::FavoritesSelectNext => items::handle_favorites_select(state, true),
        Message::FavoritesSelectPrevious => items::handle_favorites_select(state, false),
        Message::FavoritesCopySelected => items::handle_favorites_copy_selected(state),
        Message::FavoritesRemoveSelected => items::handle_favorites_remove_selected(state),
    }
}
