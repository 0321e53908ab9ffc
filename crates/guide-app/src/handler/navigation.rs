//! Section, tab and example filter handlers

use guide_core::{SectionId, TabDimension, TabId};

use crate::navigation::{Dimension, NavOutcome};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_navigate(state: &mut AppState, id: &SectionId) -> UpdateResult {
    let outcome = state.with_nav(|nav, ctx, _| nav.navigate_to_section(id, ctx));
    handle_outcome(state, outcome)
}

pub fn handle_select_section_index(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(id) = state.guide.sections().get(index).map(|s| s.id.clone()) else {
        return UpdateResult::none();
    };
    handle_navigate(state, &id)
}

/// Move to the neighbouring section in navigation order (wraps)
pub fn handle_step_section(state: &mut AppState, forward: bool) -> UpdateResult {
    let sections = state.guide.sections();
    let current = state
        .guide
        .section_index(&state.nav.state().current_section)
        .unwrap_or(0);
    let next = step(current, sections.len(), forward);
    let id = sections[next].id.clone();
    handle_navigate(state, &id)
}

pub fn handle_switch_tab(state: &mut AppState, dimension: TabDimension, id: &TabId) -> UpdateResult {
    let outcome = state.with_nav(|nav, ctx, _| nav.switch_tab(dimension, id, ctx));
    handle_outcome(state, outcome)
}

/// Move to the neighbouring tab of the current section's dimension. Stops
/// at the first and last tab.
pub fn handle_step_tab(state: &mut AppState, forward: bool) -> UpdateResult {
    let Some(dimension) = state.current_dimension() else {
        return UpdateResult::none();
    };
    let tabs = state.guide.tabs(dimension);
    if tabs.is_empty() {
        return UpdateResult::none();
    }
    let current = state
        .nav
        .state()
        .current_tab(dimension)
        .and_then(|id| tabs.iter().position(|t| &t.id == id))
        .unwrap_or(0);
    let next = if forward {
        (current + 1).min(tabs.len() - 1)
    } else {
        current.saturating_sub(1)
    };
    let id = tabs[next].id.clone();
    handle_switch_tab(state, dimension, &id)
}

pub fn handle_filter(state: &mut AppState, filter: &str) -> UpdateResult {
    let AppState {
        nav, guide, views, ..
    } = state;
    if nav.filter_examples(filter, guide, views) {
        state.selected_item = 0;
    }
    UpdateResult::none()
}

/// Advance to the next example filter (wraps)
pub fn handle_cycle_filter(state: &mut AppState) -> UpdateResult {
    let filters = state.guide.filters();
    if filters.is_empty() {
        return UpdateResult::none();
    }
    let current = filters
        .iter()
        .position(|f| f.id == state.nav.state().current_filter)
        .unwrap_or(0);
    let id = filters[step(current, filters.len(), true)].id.clone();
    handle_filter(state, &id)
}

pub fn handle_commit(state: &mut AppState, dimension: Dimension, generation: u64) -> UpdateResult {
    state.with_nav(|nav, ctx, _| nav.commit(dimension, generation, ctx));
    UpdateResult::none()
}

fn handle_outcome(state: &mut AppState, outcome: NavOutcome) -> UpdateResult {
    match outcome {
        NavOutcome::Unchanged | NavOutcome::MissingTarget => UpdateResult::none(),
        NavOutcome::Committed(visit) => {
            state.selected_item = 0;
            state.note_visit(visit);
            UpdateResult::none()
        }
        NavOutcome::Scheduled { pending, visit } => {
            state.selected_item = 0;
            state.note_visit(visit);
            UpdateResult::action(UpdateAction::ScheduleCommit(pending))
        }
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
