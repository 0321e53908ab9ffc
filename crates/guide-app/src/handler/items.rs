//! Copy, favorites and search handlers

use std::time::Instant;

use guide_core::prelude::*;

use crate::clipboard::CopyMethod;
use crate::host::{ImpactStyle, NotificationKind};
use crate::state::{AppState, CopiedMarker, UiMode, COPIED_MARKER};
use crate::toast::ToastKind;

use super::{UpdateAction, UpdateResult};

fn copy(text: String) -> UpdateResult {
    UpdateResult::action(UpdateAction::CopyToClipboard { text })
}

// ─────────────────────────────────────────────────────────
// Section items
// ─────────────────────────────────────────────────────────

pub fn handle_select_item(state: &mut AppState, forward: bool) -> UpdateResult {
    let count = state.visible_items().len();
    if count == 0 {
        state.selected_item = 0;
        return UpdateResult::none();
    }
    state.selected_item = if forward {
        (state.selected_item + 1).min(count - 1)
    } else {
        state.selected_item.saturating_sub(1)
    };
    UpdateResult::none()
}

pub fn handle_copy_selected(state: &mut AppState) -> UpdateResult {
    match state.selected_text() {
        Some(text) => copy(text),
        None => UpdateResult::none(),
    }
}

pub fn handle_toggle_favorite_selected(state: &mut AppState) -> UpdateResult {
    if let Some(text) = state.selected_text() {
        toggle_favorite(state, &text);
    }
    UpdateResult::none()
}

fn toggle_favorite(state: &mut AppState, text: &str) {
    let added = state.favorites.toggle(text, state.store.as_mut());
    let message = if added {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };
    state.toast.show(message, ToastKind::Info, Instant::now());
    state.host.impact_occurred(ImpactStyle::Light);
}

// ─────────────────────────────────────────────────────────
// Clipboard results
// ─────────────────────────────────────────────────────────

pub fn handle_copy_completed(state: &mut AppState, text: String, method: CopyMethod) -> UpdateResult {
    let now = Instant::now();
    let message = match method {
        CopyMethod::System => "Prompt copied!",
        CopyMethod::Fallback => "Prompt copied via terminal clipboard",
    };
    state.toast.show(message, ToastKind::Success, now);
    state.host.notification_occurred(NotificationKind::Success);
    state.copied = Some(CopiedMarker { text, at: now });
    UpdateResult::none()
}

pub fn handle_copy_failed(state: &mut AppState, reason: &str) -> UpdateResult {
    warn!("Copy failed: {}", reason);
    state
        .toast
        .show("Copy failed", ToastKind::Error, Instant::now());
    state.host.notification_occurred(NotificationKind::Error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────

pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    state.search.activate();
    state.ui_mode = UiMode::Search;
    UpdateResult::none()
}

pub fn handle_close_search(state: &mut AppState) -> UpdateResult {
    state.search.deactivate();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_search_input(state: &mut AppState, text: &str) -> UpdateResult {
    state.search.set_query(text, Instant::now());
    UpdateResult::none()
}

pub fn handle_search_copy_selected(state: &mut AppState) -> UpdateResult {
    state.search.flush(state.guide.prompts());
    let text = state
        .search
        .selected_hit()
        .and_then(|hit| state.guide.prompts().get(hit.index))
        .map(|item| item.text.clone());
    match text {
        Some(text) => {
            handle_close_search(state);
            copy(text)
        }
        None => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────
// Favorites overlay
// ─────────────────────────────────────────────────────────

pub fn handle_open_favorites(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Favorites;
    clamp_favorites_selection(state);
    UpdateResult::none()
}

pub fn handle_close_favorites(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_favorites_select(state: &mut AppState, forward: bool) -> UpdateResult {
    let count = state.favorites.len();
    if count > 0 {
        state.favorites_selected = if forward {
            (state.favorites_selected + 1) % count
        } else {
            (state.favorites_selected + count - 1) % count
        };
    }
    UpdateResult::none()
}

pub fn handle_favorites_copy_selected(state: &mut AppState) -> UpdateResult {
    match state.favorites.get(state.favorites_selected) {
        Some(text) => copy(text.to_string()),
        None => UpdateResult::none(),
    }
}

pub fn handle_favorites_remove_selected(state: &mut AppState) -> UpdateResult {
    if let Some(text) = state.favorites.get(state.favorites_selected).map(str::to_string) {
        toggle_favorite(state, &text);
        clamp_favorites_selection(state);
    }
    UpdateResult::none()
}

fn clamp_favorites_selection(state: &mut AppState) {
    state.favorites_selected = state
        .favorites_selected
        .min(state.favorites.len().saturating_sub(1));
}

// ─────────────────────────────────────────────────────────
// Periodic
// ─────────────────────────────────────────────────────────

/// Expire toasts and copied markers, run a due search
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    let now = Instant::now();
    state.toast.expire(now);

    if state
        .copied
        .as_ref()
        .is_some_and(|marker| now.saturating_duration_since(marker.at) >= COPIED_MARKER)
    {
        state.copied = None;
    }

    if state.search.is_active {
        state.search.run_if_due(state.guide.prompts(), now);
    }
    UpdateResult::none()
}
