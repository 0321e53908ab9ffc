//! Core domain types for the guide: identifiers, tab dimensions and items

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter id that matches every example item
pub const ALL_FILTER: &str = "all";

/// Identifier of a top-level navigable section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a tab (category, technique or template category)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A secondary tab axis nested inside a section.
///
/// Each dimension has exactly one current tab, independent of the current
/// section and of the other dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabDimension {
    /// Prompt categories (quality, style, colors, ...)
    Category,
    /// Editing techniques
    Technique,
    /// Template categories
    TemplateCategory,
}

impl TabDimension {
    pub const ALL: [TabDimension; 3] = [
        TabDimension::Category,
        TabDimension::Technique,
        TabDimension::TemplateCategory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TabDimension::Category => "Categories",
            TabDimension::Technique => "Techniques",
            TabDimension::TemplateCategory => "Templates",
        }
    }
}

impl fmt::Display for TabDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabDimension::Category => write!(f, "category"),
            TabDimension::Technique => write!(f, "technique"),
            TabDimension::TemplateCategory => write!(f, "template_category"),
        }
    }
}

/// Where a prompt card lives. Opaque to navigation and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAnchor {
    pub section: SectionId,
    pub tab: Option<(TabDimension, TabId)>,
    /// Position among all prompts in document order
    pub ordinal: usize,
}

/// A copyable prompt payload and its anchor. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptItem {
    pub text: String,
    pub anchor: PromptAnchor,
}

impl PromptItem {
    /// Returns true if this prompt belongs to the given section and tab
    pub fn is_in(&self, section: &SectionId, tab: Option<&TabId>) -> bool {
        if &self.anchor.section != section {
            return false;
        }
        match (tab, &self.anchor.tab) {
            (None, _) => true,
            (Some(wanted), Some((_, id))) => wanted == id,
            (Some(_), None) => false,
        }
    }
}

/// An example card filtered by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleItem {
    pub section: SectionId,
    pub title: String,
    pub category: String,
    pub prompt: String,
}

impl ExampleItem {
    /// `filter == "all" || item.category == filter`
    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL_FILTER || self.category == filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(category: &str) -> ExampleItem {
        ExampleItem {
            section: SectionId::from("gallery"),
            title: "Sunset".to_string(),
            category: category.to_string(),
            prompt: "Make the sky warmer".to_string(),
        }
    }

    #[test]
    fn test_example_matches_all_filter() {
        assert!(example("portrait").matches("all"));
        assert!(example("landscape").matches(ALL_FILTER));
    }

    #[test]
    fn test_example_matches_own_category_only() {
        assert!(example("portrait").matches("portrait"));
        assert!(!example("portrait").matches("landscape"));
    }

    #[test]
    fn test_prompt_is_in_section_and_tab() {
        let item = PromptItem {
            text: "Sharpen".to_string(),
            anchor: PromptAnchor {
                section: SectionId::from("processing"),
                tab: Some((TabDimension::Category, TabId::from("quality"))),
                ordinal: 0,
            },
        };
        let section = SectionId::from("processing");
        assert!(item.is_in(&section, None));
        assert!(item.is_in(&section, Some(&TabId::from("quality"))));
        assert!(!item.is_in(&section, Some(&TabId::from("style"))));
        assert!(!item.is_in(&SectionId::from("basics"), None));
    }

    #[test]
    fn test_dimension_serde_names() {
        let dim: TabDimension = serde_json::from_str("\"template_category\"").unwrap();
        assert_eq!(dim, TabDimension::TemplateCategory);
        assert_eq!(TabDimension::TemplateCategory.to_string(), "template_category");
    }

    #[test]
    fn test_ids_are_transparent() {
        let json = serde_json::to_string(&SectionId::from("main")).unwrap();
        assert_eq!(json, "\"main\"");
    }
}
