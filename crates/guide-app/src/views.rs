//! View registry: visibility of sections, tab panes and example cards
//!
//! The navigation controller only ever talks to [`ViewRegistry`]; the TUI
//! renders whatever the concrete [`VisibilityRegistry`] marks visible.

use std::collections::HashSet;

use guide_core::{Guide, SectionId, TabDimension, TabId};

/// Identifies one registered view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Section(SectionId),
    Tab(TabDimension, TabId),
    /// Example card, by index into `Guide::examples()`
    Example(usize),
}

/// Views that are switched as a group (at most one visible, except examples)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewGroup {
    Sections,
    Tabs(TabDimension),
    Examples,
}

impl ViewKey {
    pub fn group(&self) -> ViewGroup {
        match self {
            ViewKey::Section(_) => ViewGroup::Sections,
            ViewKey::Tab(dimension, _) => ViewGroup::Tabs(*dimension),
            ViewKey::Example(_) => ViewGroup::Examples,
        }
    }
}

/// Lookup and visibility toggling of views by id
pub trait ViewRegistry {
    /// Whether a view with this key exists
    fn contains(&self, key: &ViewKey) -> bool;

    /// All registered keys of a group, in registration order
    fn keys_in(&self, group: ViewGroup) -> Vec<ViewKey>;

    fn show(&mut self, key: &ViewKey);

    fn hide(&mut self, key: &ViewKey);

    fn is_visible(&self, key: &ViewKey) -> bool;

    /// Reset the viewport scroll position
    fn scroll_to_top(&mut self);
}

/// In-memory registry backing the terminal UI
#[derive(Debug, Clone, Default)]
pub struct VisibilityRegistry {
    keys: Vec<ViewKey>,
    visible: HashSet<ViewKey>,
    scroll_offset: u16,
}

impl VisibilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every section, tab pane and example card of a guide.
    /// Nothing is visible until navigation shows it.
    pub fn from_guide(guide: &Guide) -> Self {
        let mut registry = Self::new();
        for section in guide.sections() {
            registry.register(ViewKey::Section(section.id.clone()));
        }
        for dimension in TabDimension::ALL {
            for tab in guide.tabs(dimension) {
                registry.register(ViewKey::Tab(dimension, tab.id.clone()));
            }
        }
        for index in 0..guide.examples().len() {
            registry.register(ViewKey::Example(index));
        }
        registry
    }

    pub fn register(&mut self, key: ViewKey) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    /// The visible section, if any (none while a transition is in flight)
    pub fn visible_section(&self) -> Option<&SectionId> {
        self.keys.iter().find_map(|key| match key {
            ViewKey::Section(id) if self.visible.contains(key) => Some(id),
            _ => None,
        })
    }

    /// The visible tab pane of a dimension, if any
    pub fn visible_tab(&self, dimension: TabDimension) -> Option<&TabId> {
        self.keys.iter().find_map(|key| match key {
            ViewKey::Tab(d, id) if *d == dimension && self.visible.contains(key) => Some(id),
            _ => None,
        })
    }

    /// Indices of visible example cards, in order
    pub fn visible_examples(&self) -> Vec<usize> {
        self.keys
            .iter()
            .filter_map(|key| match key {
                ViewKey::Example(index) if self.visible.contains(key) => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn visible_count(&self, group: ViewGroup) -> usize {
        self.keys
            .iter()
            .filter(|key| key.group() == group && self.visible.contains(*key))
            .count()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll_offset) + delta;
        self.scroll_offset = next.clamp(0, i32::from(u16::MAX)) as u16;
    }
}

impl ViewRegistry for VisibilityRegistry {
    fn contains(&self, key: &ViewKey) -> bool {
        self.keys.contains(key)
    }

    fn keys_in(&self, group: ViewGroup) -> Vec<ViewKey> {
        self.keys
            .iter()
            .filter(|key| key.group() == group)
            .cloned()
            .collect()
    }

    fn show(&mut self, key: &ViewKey) {
        if self.contains(key) {
            self.visible.insert(key.clone());
        }
    }

    fn hide(&mut self, key: &ViewKey) {
        self.visible.remove(key);
    }

    fn is_visible(&self, key: &ViewKey) -> bool {
        self.visible.contains(key)
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}
