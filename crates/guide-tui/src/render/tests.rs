//! Full-screen rendering tests

use super::view;
use crate::host::TerminalHost;
use crate::test_utils::TestTerminal;
use guide_app::config::Settings;
use guide_app::handler::update;
use guide_app::message::Message;
use guide_app::state::AppState;
use guide_app::{CopyMethod, Host, MemoryStore, UpdateAction};
use guide_core::{Guide, SectionId};

fn settings(delay_ms: u64) -> Settings {
    let mut settings = Settings::default();
    settings.navigation.transition_delay_ms = delay_ms;
    settings.search.debounce_ms = 0;
    settings
}

fn state_with(delay_ms: u64, host: Host) -> AppState {
    let guide = Guide::builtin().unwrap();
    AppState::new(guide, settings(delay_ms), Box::new(MemoryStore::new()), host)
}

fn test_state() -> AppState {
    state_with(0, Host::absent())
}

fn terminal_host() -> Host {
    let settings = Settings::default();
    Host::new(Box::new(TerminalHost::new(&settings.host, Vec::new())))
}

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_view_shows_entry_section() {
    let state = test_state();
    let term = render(&state);

    assert!(term.buffer_contains("Photo Editing Prompt Guide"));
    assert!(term.buffer_contains("Edit photos by describing what you want."));
    assert!(term.buffer_contains("1 Home"));
    assert!(term.buffer_contains("Explored 1/"));
}

#[test]
fn test_navigation_renders_new_section() {
    let mut state = test_state();
    update(&mut state, Message::NavigateToSection(SectionId::from("basics")));
    let term = render(&state);

    assert!(term.buffer_contains("How to write a prompt the editor understands."));
    assert!(!term.buffer_contains("Edit photos by describing what you want."));
    assert!(term.buffer_contains("Explored 2/"));
}

#[test]
fn test_body_is_empty_during_transition() {
    let mut state = state_with(150, Host::absent());
    let result = update(&mut state, Message::NavigateToSection(SectionId::from("basics")));
    let Some(UpdateAction::ScheduleCommit(pending)) = result.action else {
        panic!("expected a scheduled commit");
    };

    let term = render(&state);
    assert!(!term.buffer_contains("Edit photos by describing what you want."));
    assert!(!term.buffer_contains("How to write a prompt the editor understands."));

    update(
        &mut state,
        Message::CommitTransition {
            dimension: pending.dimension,
            generation: pending.generation,
        },
    );
    let term = render(&state);
    assert!(term.buffer_contains("How to write a prompt the editor understands."));
}

#[test]
fn test_category_tabs_render_in_processing() {
    let mut state = test_state();
    update(&mut state, Message::NavigateToSection(SectionId::from("processing")));
    let term = render(&state);

    assert!(term.buffer_contains("Categories:"));
    assert!(!state.visible_items().is_empty());
    let first = state.visible_items()[0].text.chars().take(20).collect::<String>();
    assert!(term.buffer_contains(&first));
}

#[test]
fn test_search_overlay_shows_highlighted_results() {
    let mut state = test_state();
    update(&mut state, Message::StartSearch);
    update(
        &mut state,
        Message::SearchInput {
            text: "watercolor".to_string(),
        },
    );
    update(&mut state, Message::Tick);
    let term = render(&state);

    assert!(term.buffer_contains("Search prompts"));
    assert!(term.buffer_contains("1 match"));
    assert!(term.buffer_contains("Render the scene as a watercolor sketch"));
}

#[test]
fn test_search_overlay_no_matches() {
    let mut state = test_state();
    update(&mut state, Message::StartSearch);
    update(
        &mut state,
        Message::SearchInput {
            text: "zzzz".to_string(),
        },
    );
    update(&mut state, Message::Tick);
    let term = render(&state);

    assert!(term.buffer_contains("No prompts match \"zzzz\"."));
}

#[test]
fn test_favorites_overlay_empty() {
    let mut state = test_state();
    update(&mut state, Message::OpenFavorites);
    let term = render(&state);

    assert!(term.buffer_contains("No favorites yet"));
}

#[test]
fn test_copy_shows_toast_and_marker() {
    let mut state = test_state();
    update(&mut state, Message::NavigateToSection(SectionId::from("processing")));
    let text = state.selected_text().unwrap();
    update(
        &mut state,
        Message::CopyCompleted {
            text,
            method: CopyMethod::System,
        },
    );
    let mut term = TestTerminal::with_size(140, 30);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Prompt copied!"));
    assert!(term.buffer_contains("✓ Copied"));
}

#[test]
fn test_host_chrome_and_close_confirmation() {
    let mut state = state_with(0, terminal_host());
    let term = render(&state);
    assert!(term.buffer_contains("[ ^Q Close guide ]"));

    update(&mut state, Message::RequestQuit);
    let term = render(&state);
    assert!(term.buffer_contains("Close the guide?"));
    assert!(term.buffer_contains("[y] Close"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = test_state();
    update(&mut state, Message::NavigateToSection(SectionId::from("processing")));
    update(&mut state, Message::StartSearch);

    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));
    let mut term = TestTerminal::with_size(5, 3);
    term.draw_with(|frame| view(frame, &state));
}
