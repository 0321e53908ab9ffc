//! Visited-section tracking and completion
//!
//! Visits are persisted under [`VISITED_SECTIONS_KEY`]. Persistence failures
//! are logged; the in-memory set stays authoritative for the session.

use guide_core::prelude::*;
use guide_core::{Guide, SectionId};

use crate::storage::{read_string_list, write_string_list, PreferenceStore, VISITED_SECTIONS_KEY};

/// Result of recording a visit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitOutcome {
    /// The section was not visited before
    pub newly_visited: bool,
    /// This visit made the visited set cover every section
    pub completed_now: bool,
}

/// Ordered set of visited sections with a known total
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    visited: Vec<SectionId>,
    known: Vec<SectionId>,
}

impl ProgressTracker {
    /// Tracker over `known` sections with an initial visited set. Ids that
    /// are not known sections are dropped, as are duplicates.
    pub fn new(known: Vec<SectionId>, visited: impl IntoIterator<Item = SectionId>) -> Self {
        let mut tracker = Self {
            visited: Vec::new(),
            known,
        };
        for id in visited {
            if tracker.known.contains(&id) && !tracker.visited.contains(&id) {
                tracker.visited.push(id);
            }
        }
        tracker
    }

    /// Load the persisted visited set for a guide
    pub fn load(guide: &Guide, store: &dyn PreferenceStore) -> Self {
        let known = guide.sections().iter().map(|s| s.id.clone()).collect();
        let stored = read_string_list(store, VISITED_SECTIONS_KEY)
            .into_iter()
            .map(SectionId::new);
        let tracker = Self::new(known, stored);
        debug!(
            "Progress loaded: {}/{} sections visited",
            tracker.visited.len(),
            tracker.total()
        );
        tracker
    }

    /// Add a section to the visited set and persist it.
    ///
    /// `completed_now` is true only when this call added a section and the
    /// set now covers every known section.
    pub fn record_visit(&mut self, id: &SectionId, store: &mut dyn PreferenceStore) -> VisitOutcome {
        if !self.known.contains(id) {
            debug!("Ignoring visit to unknown section {}", id);
            return VisitOutcome::default();
        }
        if self.visited.contains(id) {
            return VisitOutcome::default();
        }

        self.visited.push(id.clone());
        self.persist(store);

        let completed_now = self.is_complete();
        if completed_now {
            info!("All {} sections visited", self.total());
        }
        VisitOutcome {
            newly_visited: true,
            completed_now,
        }
    }

    /// Forget every visit
    pub fn reset(&mut self, store: &mut dyn PreferenceStore) {
        self.visited.clear();
        if let Err(e) = store.remove(VISITED_SECTIONS_KEY) {
            warn!("Failed to clear visited sections: {}", e);
        }
    }

    fn persist(&self, store: &mut dyn PreferenceStore) {
        let ids: Vec<String> = self.visited.iter().map(|id| id.as_str().to_string()).collect();
        if let Err(e) = write_string_list(store, VISITED_SECTIONS_KEY, &ids) {
            warn!("Failed to persist visited sections: {}", e);
        }
    }

    pub fn visited(&self) -> &[SectionId] {
        &self.visited
    }

    pub fn is_visited(&self, id: &SectionId) -> bool {
        self.visited.contains(id)
    }

    pub fn total(&self) -> usize {
        self.known.len()
    }

    /// `|visited| / |sections|`
    pub fn completion_ratio(&self) -> f64 {
        if self.known.is_empty() {
            return 0.0;
        }
        self.visited.len() as f64 / self.known.len() as f64
    }

    pub fn is_complete(&self) -> bool {
        !self.known.is_empty() && self.visited.len() == self.known.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, UnavailableStore};

    fn ids(names: &[&str]) -> Vec<SectionId> {
        names.iter().map(|n| SectionId::from(*n)).collect()
    }

    #[test]
    fn test_new_drops_unknown_and_duplicate_ids() {
        let tracker = ProgressTracker::new(ids(&["a", "b"]), ids(&["a", "zzz", "a"]));
        assert_eq!(tracker.visited(), ids(&["a"]).as_slice());
    }

    #[test]
    fn test_completion_fires_once_on_last_new_section() {
        let mut store = MemoryStore::new();
        let mut tracker = ProgressTracker::new(ids(&["a", "b"]), Vec::new());

        let first = tracker.record_visit(&SectionId::from("a"), &mut store);
        assert!(first.newly_visited);
        assert!(!first.completed_now);
        assert_eq!(tracker.completion_ratio(), 0.5);

        let second = tracker.record_visit(&SectionId::from("b"), &mut store);
        assert!(second.completed_now);
        assert_eq!(tracker.completion_ratio(), 1.0);

        let revisit = tracker.record_visit(&SectionId::from("a"), &mut store);
        assert_eq!(revisit, VisitOutcome::default());
    }

    #[test]
    fn test_already_complete_on_load_never_fires() {
        let mut store = MemoryStore::new();
        let mut tracker = ProgressTracker::new(ids(&["a"]), ids(&["a"]));
        assert!(tracker.is_complete());
        let outcome = tracker.record_visit(&SectionId::from("a"), &mut store);
        assert!(!outcome.completed_now);
    }

    #[test]
    fn test_visits_persist_and_reload() {
        let guide = Guide::builtin().unwrap();
        let mut store = MemoryStore::new();
        let mut tracker = ProgressTracker::load(&guide, &store);
        tracker.record_visit(guide.entry_section(), &mut store);

        let reloaded = ProgressTracker::load(&guide, &store);
        assert!(reloaded.is_visited(guide.entry_section()));
        assert_eq!(reloaded.total(), guide.sections().len());
    }

    #[test]
    fn test_persistence_failure_keeps_memory_state() {
        let mut store = UnavailableStore;
        let mut tracker = ProgressTracker::new(ids(&["a", "b"]), Vec::new());
        let outcome = tracker.record_visit(&SectionId::from("a"), &mut store);
        assert!(outcome.newly_visited);
        assert!(tracker.is_visited(&SectionId::from("a")));
    }

    #[test]
    fn test_reset_clears_visits() {
        let mut store = MemoryStore::new();
        let mut tracker = ProgressTracker::new(ids(&["a", "b"]), Vec::new());
        tracker.record_visit(&SectionId::from("a"), &mut store);
        tracker.reset(&mut store);
        assert_eq!(tracker.completion_ratio(), 0.0);
        assert_eq!(store.get(VISITED_SECTIONS_KEY).unwrap(), None);
    }
}
