//! Navigation controller
//!
//! Switches the visible section, the current tab of each tab dimension and
//! the example filter. Section and tab switches are two-phase: the outgoing
//! view is hidden and the current id updated immediately, and the incoming
//! view is shown once the transition delay has elapsed. A section counts as
//! visited as soon as it becomes current. Each dimension
//! keeps a generation counter; a commit whose generation is no longer the
//! latest is dropped, so rapid switches resolve to the last one requested.

use std::collections::HashMap;
use std::mem;
use std::time::Duration;

use guide_core::prelude::*;
use guide_core::{Guide, SectionId, TabDimension, TabId, ALL_FILTER};

use crate::host::{Host, ImpactStyle};
use crate::progress::{ProgressTracker, VisitOutcome};
use crate::storage::PreferenceStore;
use crate::views::{ViewGroup, ViewKey, ViewRegistry};

/// Axis along which transitions are serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Section,
    Tab(TabDimension),
}

/// Current selection along every axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_section: SectionId,
    pub current_category: Option<TabId>,
    pub current_technique: Option<TabId>,
    pub current_template_category: Option<TabId>,
    pub current_filter: String,
}

impl NavigationState {
    /// Entry section, first tab of each dimension, `all` filter
    pub fn initial(guide: &Guide) -> Self {
        Self {
            current_section: guide.entry_section().clone(),
            current_category: guide.default_tab(TabDimension::Category).cloned(),
            current_technique: guide.default_tab(TabDimension::Technique).cloned(),
            current_template_category: guide
                .default_tab(TabDimension::TemplateCategory)
                .cloned(),
            current_filter: ALL_FILTER.to_string(),
        }
    }

    pub fn current_tab(&self, dimension: TabDimension) -> Option<&TabId> {
        match dimension {
            TabDimension::Category => self.current_category.as_ref(),
            TabDimension::Technique => self.current_technique.as_ref(),
            TabDimension::TemplateCategory => self.current_template_category.as_ref(),
        }
    }

    fn tab_slot(&mut self, dimension: TabDimension) -> &mut Option<TabId> {
        match dimension {
            TabDimension::Category => &mut self.current_category,
            TabDimension::Technique => &mut self.current_technique,
            TabDimension::TemplateCategory => &mut self.current_template_category,
        }
    }
}

/// Collaborators a navigation operation touches
pub struct NavContext<'a> {
    pub views: &'a mut dyn ViewRegistry,
    pub host: &'a mut Host,
    pub progress: &'a mut ProgressTracker,
    pub store: &'a mut dyn PreferenceStore,
}

/// A commit the caller must deliver after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCommit {
    pub dimension: Dimension,
    pub generation: u64,
    pub delay: Duration,
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Target is already current; nothing happened
    Unchanged,
    /// No view is registered for the target; nothing happened
    MissingTarget,
    /// Transition completed synchronously
    Committed(VisitOutcome),
    /// Outgoing view hidden; deliver the commit later
    Scheduled {
        pending: PendingCommit,
        visit: VisitOutcome,
    },
}

/// Result of delivering a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Superseded by a later request
    Stale,
    Applied,
}

#[derive(Debug)]
pub struct NavigationController {
    state: NavigationState,
    transition_delay: Duration,
    generations: HashMap<Dimension, u64>,
    pending: HashMap<Dimension, ViewKey>,
}

impl NavigationController {
    pub fn new(guide: &Guide, transition_delay: Duration) -> Self {
        Self {
            state: NavigationState::initial(guide),
            transition_delay,
            generations: HashMap::new(),
            pending: HashMap::new(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Whether a transition on `dimension` awaits its commit
    pub fn is_transitioning(&self, dimension: Dimension) -> bool {
        self.pending.contains_key(&dimension)
    }

    /// Show the initial views synchronously and record the entry visit
    pub fn initialize(&mut self, guide: &Guide, ctx: &mut NavContext<'_>) -> VisitOutcome {
        let entry = ViewKey::Section(self.state.current_section.clone());
        show_exclusive(ctx.views, &entry);

        for dimension in TabDimension::ALL {
            if let Some(tab) = self.state.current_tab(dimension) {
                show_exclusive(ctx.views, &ViewKey::Tab(dimension, tab.clone()));
            }
        }

        apply_filter(ctx.views, guide, &self.state.current_filter);

        debug!("Navigation initialized at {}", self.state.current_section);
        ctx.progress
            .record_visit(&self.state.current_section, ctx.store)
    }

    // ─────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────

    pub fn navigate_to_section(&mut self, id: &SectionId, ctx: &mut NavContext<'_>) -> NavOutcome {
        if *id == self.state.current_section {
            trace!("Already on section {}", id);
            return NavOutcome::Unchanged;
        }

        let target = ViewKey::Section(id.clone());
        if !ctx.views.contains(&target) {
            debug!("No view for section {}, ignoring", id);
            return NavOutcome::MissingTarget;
        }

        let outgoing = mem::replace(&mut self.state.current_section, id.clone());
        ctx.views.hide(&ViewKey::Section(outgoing));
        let visit = ctx.progress.record_visit(id, ctx.store);
        debug!("Navigating to section {}", id);

        self.begin(Dimension::Section, target, visit, ctx)
    }

    // ─────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────

    pub fn switch_tab(
        &mut self,
        dimension: TabDimension,
        id: &TabId,
        ctx: &mut NavContext<'_>,
    ) -> NavOutcome {
        if self.state.current_tab(dimension) == Some(id) {
            trace!("Already on {} tab {}", dimension, id);
            return NavOutcome::Unchanged;
        }

        let target = ViewKey::Tab(dimension, id.clone());
        if !ctx.views.contains(&target) {
            debug!("No view for {} tab {}, ignoring", dimension, id);
            return NavOutcome::MissingTarget;
        }

        if let Some(outgoing) = self.state.tab_slot(dimension).replace(id.clone()) {
            ctx.views.hide(&ViewKey::Tab(dimension, outgoing));
        }
        ctx.host.impact_occurred(ImpactStyle::Light);
        debug!("Switching {} tab to {}", dimension, id);

        self.begin(Dimension::Tab(dimension), target, VisitOutcome::default(), ctx)
    }

    pub fn switch_category(&mut self, id: &TabId, ctx: &mut NavContext<'_>) -> NavOutcome {
        self.switch_tab(TabDimension::Category, id, ctx)
    }

    pub fn switch_technique(&mut self, id: &TabId, ctx: &mut NavContext<'_>) -> NavOutcome {
        self.switch_tab(TabDimension::Technique, id, ctx)
    }

    pub fn switch_template_category(
        &mut self,
        id: &TabId,
        ctx: &mut NavContext<'_>,
    ) -> NavOutcome {
        self.switch_tab(TabDimension::TemplateCategory, id, ctx)
    }

    // ─────────────────────────────────────────────────────────
    // Examples
    // ─────────────────────────────────────────────────────────

    /// Show exactly the examples matching `filter`. Unknown filters are
    /// ignored and return false.
    pub fn filter_examples(&mut self, filter: &str, guide: &Guide, views: &mut dyn ViewRegistry) -> bool {
        if !guide.has_filter(filter) {
            debug!("Unknown example filter {:?}, ignoring", filter);
            return false;
        }

        self.state.current_filter = filter.to_string();
        apply_filter(views, guide, filter);
        true
    }

    // ─────────────────────────────────────────────────────────
    // Two-phase machinery
    // ─────────────────────────────────────────────────────────

    fn begin(
        &mut self,
        dimension: Dimension,
        target: ViewKey,
        visit: VisitOutcome,
        ctx: &mut NavContext<'_>,
    ) -> NavOutcome {
        let counter = self.generations.entry(dimension).or_insert(0);
        *counter += 1;
        let generation = *counter;
        self.pending.insert(dimension, target);

        if self.transition_delay.is_zero() {
            return match self.commit(dimension, generation, ctx) {
                CommitOutcome::Applied => NavOutcome::Committed(visit),
                CommitOutcome::Stale => NavOutcome::Unchanged,
            };
        }

        NavOutcome::Scheduled {
            pending: PendingCommit {
                dimension,
                generation,
                delay: self.transition_delay,
            },
            visit,
        }
    }

    /// Deliver a scheduled commit. Ignored unless `generation` is the latest
    /// request on `dimension`.
    pub fn commit(
        &mut self,
        dimension: Dimension,
        generation: u64,
        ctx: &mut NavContext<'_>,
    ) -> CommitOutcome {
        if self.generations.get(&dimension) != Some(&generation) {
            trace!("Dropping stale {:?} commit #{}", dimension, generation);
            return CommitOutcome::Stale;
        }
        let Some(target) = self.pending.remove(&dimension) else {
            trace!("{:?} commit #{} already applied", dimension, generation);
            return CommitOutcome::Stale;
        };

        show_exclusive(ctx.views, &target);

        if let ViewKey::Section(_) = target {
            ctx.views.scroll_to_top();
            ctx.host.impact_occurred(ImpactStyle::Light);
        }

        CommitOutcome::Applied
    }
}

/// Hide every other view of the target's group, then show the target
fn show_exclusive(views: &mut dyn ViewRegistry, target: &ViewKey) {
    for key in views.keys_in(target.group()) {
        if &key != target {
            views.hide(&key);
        }
    }
    views.show(target);
}

fn apply_filter(views: &mut dyn ViewRegistry, guide: &Guide, filter: &str) {
    for key in views.keys_in(ViewGroup::Examples) {
        let matches = match key {
            ViewKey::Example(index) => guide
                .examples()
                .get(index)
                .is_some_and(|example| example.matches(filter)),
            _ => false,
        };
        if matches {
            views.show(&key);
        } else {
            views.hide(&key);
        }
    }
}
