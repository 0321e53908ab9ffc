//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use guide_core::prelude::*;
use guide_core::{Guide, Section, TabDimension};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::favorites::Favorites;
use crate::host::{Host, NotificationKind};
use crate::message::Message;
use crate::navigation::{NavContext, NavigationController};
use crate::progress::{ProgressTracker, VisitOutcome};
use crate::search::SearchState;
use crate::storage::PreferenceStore;
use crate::toast::{ToastKind, ToastState};
use crate::views::VisibilityRegistry;

/// How long a copied item keeps its "copied" marker
pub const COPIED_MARKER: Duration = Duration::from_secs(2);

const COMPLETION_TOAST: &str = "You have explored every section of the guide!";

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Section view
    #[default]
    Normal,

    /// Search panel capturing query input
    Search,

    /// Favorites overlay
    Favorites,

    /// Confirmation dialog (close confirmation)
    ConfirmDialog,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// A copyable entry of the visible section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem<'a> {
    pub text: &'a str,
    /// Example card title; prompts have none
    pub title: Option<&'a str>,
}

/// Recently copied text, for the copied marker
#[derive(Debug, Clone)]
pub struct CopiedMarker {
    pub text: String,
    pub at: Instant,
}

/// Complete application state
pub struct AppState {
    pub guide: Guide,
    pub settings: Settings,
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    pub nav: NavigationController,
    pub views: VisibilityRegistry,
    pub progress: ProgressTracker,
    pub favorites: Favorites,
    pub store: Box<dyn PreferenceStore>,
    pub host: Host,

    pub search: SearchState,
    pub toast: ToastState,
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Selection among `visible_items()`
    pub selected_item: usize,
    /// Selection in the favorites overlay
    pub favorites_selected: usize,
    pub copied: Option<CopiedMarker>,
    /// The completion notification already fired this session
    pub completion_announced: bool,
}

impl AppState {
    /// Build the state and run startup: host bridge sequence, then the
    /// initial views and entry visit.
    pub fn new(guide: Guide, settings: Settings, store: Box<dyn PreferenceStore>, host: Host) -> Self {
        let views = VisibilityRegistry::from_guide(&guide);
        let nav = NavigationController::new(&guide, settings.navigation.transition_delay());
        let progress = ProgressTracker::load(&guide, store.as_ref());
        let favorites = Favorites::load(store.as_ref());
        let search = SearchState::new(settings.search.debounce());
        let toast = ToastState::new(settings.ui.toast_duration());

        let mut state = Self {
            guide,
            settings,
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            nav,
            views,
            progress,
            favorites,
            store,
            host,
            search,
            toast,
            confirm_dialog_state: None,
            selected_item: 0,
            favorites_selected: 0,
            copied: None,
            completion_announced: false,
        };

        state.host.initialize(&state.settings.host, Message::RequestQuit);
        let AppState {
            guide,
            nav,
            views,
            host,
            progress,
            store,
            ..
        } = &mut state;
        let mut ctx = NavContext {
            views,
            host,
            progress,
            store: store.as_mut(),
        };
        let entry_visit = nav.initialize(guide, &mut ctx);
        state.note_visit(entry_visit);

        info!(
            "Guide ready: {} sections, {} prompts, {} favorites",
            state.guide.sections().len(),
            state.guide.prompts().len(),
            state.favorites.len()
        );
        state
    }

    /// Run `f` with the controller and a context over the other fields
    pub fn with_nav<R>(
        &mut self,
        f: impl FnOnce(&mut NavigationController, &mut NavContext<'_>, &Guide) -> R,
    ) -> R {
        let AppState {
            guide,
            nav,
            views,
            host,
            progress,
            store,
            ..
        } = self;
        let mut ctx = NavContext {
            views,
            host,
            progress,
            store: store.as_mut(),
        };
        f(nav, &mut ctx, guide)
    }

    /// The section currently shown, if no transition is in flight
    pub fn visible_section(&self) -> Option<&Section> {
        self.views
            .visible_section()
            .and_then(|id| self.guide.section(id))
    }

    /// The tab dimension of the current section, if it has one
    pub fn current_dimension(&self) -> Option<TabDimension> {
        self.guide
            .section(&self.nav.state().current_section)
            .and_then(|section| section.dimension)
    }

    /// Copyable entries of the visible section: its prompts (section-level
    /// and visible tab), then its visible example cards
    pub fn visible_items(&self) -> Vec<VisibleItem<'_>> {
        let Some(section) = self.visible_section() else {
            return Vec::new();
        };
        let tab = section
            .dimension
            .and_then(|dimension| self.views.visible_tab(dimension));

        let prompts = self
            .guide
            .prompts()
            .iter()
            .filter(|item| {
                item.anchor.section == section.id
                    && match &item.anchor.tab {
                        None => true,
                        Some((_, id)) => Some(id) == tab,
                    }
            })
            .map(|item| VisibleItem {
                text: &item.text,
                title: None,
            });

        let examples = self
            .views
            .visible_examples()
            .into_iter()
            .filter_map(|index| self.guide.examples().get(index))
            .filter(|example| example.section == section.id)
            .map(|example| VisibleItem {
                text: &example.prompt,
                title: Some(&example.title),
            });

        prompts.chain(examples).collect()
    }

    pub fn selected_text(&self) -> Option<String> {
        self.visible_items()
            .get(self.selected_item)
            .map(|item| item.text.to_string())
    }

    /// Forget all visits; the section on screen counts as visited again
    pub fn reset_progress(&mut self) {
        self.progress.reset(self.store.as_mut());
        let current = self.nav.state().current_section.clone();
        let visit = self.progress.record_visit(&current, self.store.as_mut());
        info!("Progress reset");
        self.note_visit(visit);
    }

    /// React to a recorded visit: announce completion once per session
    pub fn note_visit(&mut self, visit: VisitOutcome) {
        if !visit.completed_now || self.completion_announced {
            return;
        }
        self.completion_announced = true;
        if !self.settings.progress.celebrate {
            return;
        }
        info!("Guide completed");
        self.toast
            .show(COMPLETION_TOAST, ToastKind::Success, Instant::now());
        self.host.notification_occurred(NotificationKind::Success);
    }

    /// Whether `text` was copied within the marker window
    pub fn was_recently_copied(&self, text: &str) -> bool {
        self.copied.as_ref().is_some_and(|marker| marker.text == text)
    }

    // ─────────────────────────────────────────────────────────
    // Closing
    // ─────────────────────────────────────────────────────────

    /// Close, asking first when the host has closing confirmation enabled
    pub fn request_quit(&mut self) {
        if self.host.closing_confirmation_enabled() {
            self.confirm_dialog_state = Some(ConfirmDialogState::close_confirmation(
                self.progress.visited().len(),
                self.progress.total(),
            ));
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.quit();
        }
    }

    /// Confirm close (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.quit();
    }

    /// Cancel close (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    fn quit(&mut self) {
        self.host.close();
        self.phase = AppPhase::Quitting;
    }

    /// Quit without confirmation or host involvement
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
