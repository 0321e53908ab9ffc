//! Favorite prompts, persisted under [`FAVORITES_KEY`]

use guide_core::prelude::*;

use crate::storage::{read_string_list, write_string_list, PreferenceStore, FAVORITES_KEY};

/// Ordered list of favorited prompt texts, without duplicates
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    items: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(store: &dyn PreferenceStore) -> Self {
        let mut favorites = Self::new();
        for text in read_string_list(store, FAVORITES_KEY) {
            if !favorites.items.contains(&text) {
                favorites.items.push(text);
            }
        }
        debug!("Loaded {} favorites", favorites.items.len());
        favorites
    }

    /// Add `text` if absent, remove it if present, then persist.
    ///
    /// Returns true if the text is now a favorite. A persistence failure is
    /// logged and the in-memory toggle stands.
    pub fn toggle(&mut self, text: &str, store: &mut dyn PreferenceStore) -> bool {
        let now_favorite = match self.items.iter().position(|item| item == text) {
            Some(index) => {
                self.items.remove(index);
                false
            }
            None => {
                self.items.push(text.to_string());
                true
            }
        };

        if let Err(e) = write_string_list(store, FAVORITES_KEY, &self.items) {
            warn!("Failed to persist favorites: {}", e);
        }
        now_favorite
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|item| item == text)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, UnavailableStore};

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();

        assert!(favorites.toggle("Sharpen", &mut store));
        assert!(favorites.contains("Sharpen"));
        assert!(!favorites.toggle("Sharpen", &mut store));
        assert!(!favorites.contains("Sharpen"));
    }

    #[test]
    fn test_toggle_persists_order() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.toggle("b", &mut store);
        favorites.toggle("a", &mut store);

        let reloaded = Favorites::load(&store);
        assert_eq!(reloaded.items(), &["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_load_deduplicates() {
        let mut store = MemoryStore::new();
        store
            .set(FAVORITES_KEY, "[\"a\",\"a\",\"b\"]".to_string())
            .unwrap();
        assert_eq!(Favorites::load(&store).len(), 2);
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let mut store = UnavailableStore;
        let mut favorites = Favorites::new();
        assert!(favorites.toggle("Sharpen", &mut store));
        assert_eq!(favorites.get(0), Some("Sharpen"));
    }
}
