//! Guide content: sections, tabs, prompts and example items
//!
//! Content is authored as TOML and validated once at startup. Everything the
//! navigation layer can address (sections, tabs per dimension, example
//! items) comes from here; the rest of the application never mutates it.
//!
//! ```toml
//! title = "Prompt Guide"
//! entry_section = "main"
//!
//! [[sections]]
//! id = "processing"
//! title = "Processing"
//! dimension = "category"
//!
//! [[tabs]]
//! dimension = "category"
//! id = "quality"
//! title = "Quality"
//!
//! [[prompts]]
//! section = "processing"
//! tab = "quality"
//! text = "Increase sharpness and remove noise"
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result, ResultExt};
use crate::types::{
    ExampleItem, PromptAnchor, PromptItem, SectionId, TabDimension, TabId, ALL_FILTER,
};

const BUILTIN_GUIDE: &str = include_str!("../assets/default_guide.toml");

// ─────────────────────────────────────────────────────────────────
// Raw (on-disk) representation
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawGuide {
    title: String,
    #[serde(default = "default_entry_section")]
    entry_section: String,
    #[serde(default)]
    filters: Vec<RawFilter>,
    sections: Vec<RawSection>,
    #[serde(default)]
    tabs: Vec<RawTab>,
    #[serde(default)]
    prompts: Vec<RawPrompt>,
    #[serde(default)]
    examples: Vec<RawExample>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    id: String,
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    body: Vec<String>,
    #[serde(default)]
    dimension: Option<TabDimension>,
}

#[derive(Debug, Deserialize)]
struct RawTab {
    dimension: TabDimension,
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct RawPrompt {
    section: String,
    #[serde(default)]
    tab: Option<String>,
    text: String,
}

#[derive(Debug, Deserialize)]
struct RawExample {
    section: String,
    title: String,
    category: String,
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct RawFilter {
    id: String,
    label: String,
}

fn default_entry_section() -> String {
    "main".to_string()
}

// ─────────────────────────────────────────────────────────────────
// Validated representation
// ─────────────────────────────────────────────────────────────────

/// A top-level section of the guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub summary: String,
    pub body: Vec<String>,
    /// Tab dimension shown inside this section, if any
    pub dimension: Option<TabDimension>,
}

/// A tab within a dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
}

/// An example filter chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub id: String,
    pub label: String,
}

/// Validated guide content
#[derive(Debug, Clone)]
pub struct Guide {
    title: String,
    entry_section: SectionId,
    sections: Vec<Section>,
    tabs: BTreeMap<TabDimension, Vec<Tab>>,
    prompts: Vec<PromptItem>,
    examples: Vec<ExampleItem>,
    filters: Vec<Filter>,
}

impl Guide {
    /// The content shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_GUIDE)
    }

    /// Load and validate content from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::content_not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read guide content {:?}", path))?;
        let guide = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid guide content {:?}", path))?;
        tracing::debug!(
            "Loaded guide {:?} from {:?} ({} sections, {} prompts)",
            guide.title,
            path,
            guide.sections.len(),
            guide.prompts.len()
        );
        Ok(guide)
    }

    /// Parse and validate content from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawGuide = toml::from_str(content)?;
        Self::validate(raw)
    }

    fn validate(raw: RawGuide) -> Result<Self> {
        if raw.sections.is_empty() {
            return Err(Error::content_invalid("guide declares no sections"));
        }

        let mut seen = HashSet::new();
        let sections: Vec<Section> = raw
            .sections
            .into_iter()
            .map(|s| {
                if !seen.insert(s.id.clone()) {
                    return Err(Error::content_invalid(format!(
                        "duplicate section id '{}'",
                        s.id
                    )));
                }
                Ok(Section {
                    id: SectionId::new(s.id),
                    title: s.title,
                    summary: s.summary,
                    body: s.body,
                    dimension: s.dimension,
                })
            })
            .collect::<Result<_>>()?;

        let entry_section = SectionId::new(raw.entry_section);
        if !sections.iter().any(|s| s.id == entry_section) {
            return Err(Error::content_invalid(format!(
                "entry section '{}' is not declared",
                entry_section
            )));
        }

        let mut tabs: BTreeMap<TabDimension, Vec<Tab>> = BTreeMap::new();
        for raw_tab in raw.tabs {
            let list = tabs.entry(raw_tab.dimension).or_default();
            if list.iter().any(|t| t.id.as_str() == raw_tab.id) {
                return Err(Error::content_invalid(format!(
                    "duplicate {} tab '{}'",
                    raw_tab.dimension, raw_tab.id
                )));
            }
            list.push(Tab {
                id: TabId::new(raw_tab.id),
                title: raw_tab.title,
            });
        }

        for section in &sections {
            if let Some(dimension) = section.dimension {
                if tabs.get(&dimension).map_or(true, |t| t.is_empty()) {
                    return Err(Error::content_invalid(format!(
                        "section '{}' shows {} tabs but none are declared",
                        section.id, dimension
                    )));
                }
            }
        }

        let section_index = |id: &str| sections.iter().position(|s| s.id.as_str() == id);

        // (section order, tab order, declaration order) gives document order
        let mut keyed_prompts = Vec::with_capacity(raw.prompts.len());
        for (declared, raw_prompt) in raw.prompts.into_iter().enumerate() {
            let Some(s_idx) = section_index(&raw_prompt.section) else {
                return Err(Error::content_invalid(format!(
                    "prompt references unknown section '{}'",
                    raw_prompt.section
                )));
            };
            let section = &sections[s_idx];
            let (tab, t_idx) = match raw_prompt.tab {
                None => (None, 0),
                Some(tab_id) => {
                    let Some(dimension) = section.dimension else {
                        return Err(Error::content_invalid(format!(
                            "prompt in section '{}' names tab '{}' but the section has no tabs",
                            section.id, tab_id
                        )));
                    };
                    let Some(t_idx) = tabs
                        .get(&dimension)
                        .and_then(|list| list.iter().position(|t| t.id.as_str() == tab_id))
                    else {
                        return Err(Error::content_invalid(format!(
                            "prompt references unknown {} tab '{}'",
                            dimension, tab_id
                        )));
                    };
                    (Some((dimension, TabId::new(tab_id))), t_idx + 1)
                }
            };
            keyed_prompts.push(((s_idx, t_idx, declared), raw_prompt.text, section.id.clone(), tab));
        }
        keyed_prompts.sort_by_key(|(key, ..)| *key);
        let prompts = keyed_prompts
            .into_iter()
            .enumerate()
            .map(|(ordinal, (_, text, section, tab))| PromptItem {
                text,
                anchor: PromptAnchor {
                    section,
                    tab,
                    ordinal,
                },
            })
            .collect();

        let examples: Vec<ExampleItem> = raw
            .examples
            .into_iter()
            .map(|e| {
                if section_index(&e.section).is_none() {
                    return Err(Error::content_invalid(format!(
                        "example '{}' references unknown section '{}'",
                        e.title, e.section
                    )));
                }
                Ok(ExampleItem {
                    section: SectionId::new(e.section),
                    title: e.title,
                    category: e.category,
                    prompt: e.prompt,
                })
            })
            .collect::<Result<_>>()?;

        let filters = build_filters(raw.filters, &examples);

        Ok(Self {
            title: raw.title,
            entry_section,
            sections,
            tabs,
            prompts,
            examples,
            filters,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entry_section(&self) -> &SectionId {
        &self.entry_section
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn section_index(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    /// Tabs of a dimension in declaration order (empty if none)
    pub fn tabs(&self, dimension: TabDimension) -> &[Tab] {
        self.tabs.get(&dimension).map_or(&[], Vec::as_slice)
    }

    /// Dimensions that declare at least one tab
    pub fn dimensions(&self) -> impl Iterator<Item = TabDimension> + '_ {
        self.tabs
            .iter()
            .filter(|(_, tabs)| !tabs.is_empty())
            .map(|(dimension, _)| *dimension)
    }

    /// First tab of a dimension; the one shown at startup
    pub fn default_tab(&self, dimension: TabDimension) -> Option<&TabId> {
        self.tabs(dimension).first().map(|t| &t.id)
    }

    /// All prompts in document order
    pub fn prompts(&self) -> &[PromptItem] {
        &self.prompts
    }

    pub fn examples(&self) -> &[ExampleItem] {
        &self.examples
    }

    /// Example filters; always starts with `all` when examples exist
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn has_filter(&self, id: &str) -> bool {
        self.filters.iter().any(|f| f.id == id)
    }
}

fn build_filters(declared: Vec<RawFilter>, examples: &[ExampleItem]) -> Vec<Filter> {
    let mut filters: Vec<Filter> = declared
        .into_iter()
        .map(|f| Filter {
            id: f.id,
            label: f.label,
        })
        .collect();

    if filters.is_empty() {
        let mut seen = HashSet::new();
        filters = examples
            .iter()
            .filter(|e| seen.insert(e.category.clone()))
            .map(|e| Filter {
                id: e.category.clone(),
                label: e.category.clone(),
            })
            .collect();
    }

    if !examples.is_empty() && !filters.iter().any(|f| f.id == ALL_FILTER) {
        filters.insert(
            0,
            Filter {
                id: ALL_FILTER.to_string(),
                label: "All".to_string(),
            },
        );
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
title = "Test Guide"

[[sections]]
id = "main"
title = "Home"

[[sections]]
id = "processing"
title = "Processing"
dimension = "category"

[[sections]]
id = "gallery"
title = "Gallery"

[[tabs]]
dimension = "category"
id = "quality"
title = "Quality"

[[tabs]]
dimension = "category"
id = "style"
title = "Style"

[[prompts]]
section = "processing"
tab = "style"
text = "Oil painting"

[[prompts]]
section = "main"
text = "Hello"

[[prompts]]
section = "processing"
tab = "quality"
text = "Sharpen"

[[examples]]
section = "gallery"
title = "Portrait"
category = "portrait"
prompt = "Soft light"

[[examples]]
section = "gallery"
title = "Mountains"
category = "landscape"
prompt = "Golden hour"
"#;

    #[test]
    fn test_builtin_guide_is_valid() {
        let guide = Guide::builtin().unwrap();
        assert_eq!(guide.entry_section().as_str(), "main");
        assert!(guide.sections().len() >= 5);
        assert!(!guide.prompts().is_empty());
    }

    #[test]
    fn test_entry_section_defaults_to_main() {
        let guide = Guide::from_toml_str(MINIMAL).unwrap();
        assert_eq!(guide.entry_section(), &SectionId::from("main"));
    }

    #[test]
    fn test_prompts_sorted_in_document_order() {
        let guide = Guide::from_toml_str(MINIMAL).unwrap();
        let texts: Vec<_> = guide.prompts().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "Sharpen", "Oil painting"]);
        let ordinals: Vec<_> = guide.prompts().iter().map(|p| p.anchor.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[test]
    fn test_filters_derived_from_examples() {
        let guide = Guide::from_toml_str(MINIMAL).unwrap();
        let ids: Vec<_> = guide.filters().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["all", "portrait", "landscape"]);
        assert!(guide.has_filter("landscape"));
        assert!(!guide.has_filter("macro"));
    }

    #[test]
    fn test_default_tab_is_first_declared() {
        let guide = Guide::from_toml_str(MINIMAL).unwrap();
        assert_eq!(
            guide.default_tab(TabDimension::Category),
            Some(&TabId::from("quality"))
        );
        assert_eq!(guide.default_tab(TabDimension::Technique), None);
        assert_eq!(
            guide.dimensions().collect::<Vec<_>>(),
            vec![TabDimension::Category]
        );
    }

    #[test]
    fn test_rejects_unknown_entry_section() {
        let content = MINIMAL.replace("title = \"Test Guide\"", "title = \"T\"\nentry_section = \"nowhere\"");
        let err = Guide::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn test_rejects_duplicate_section() {
        let content = format!(
            "{}\n[[sections]]\nid = \"main\"\ntitle = \"Again\"\n",
            MINIMAL
        );
        let err = Guide::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, Error::ContentInvalid { .. }));
    }

    #[test]
    fn test_rejects_prompt_with_unknown_tab() {
        let content = format!(
            "{}\n[[prompts]]\nsection = \"processing\"\ntab = \"nope\"\ntext = \"x\"\n",
            MINIMAL
        );
        let err = Guide::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_rejects_tabbed_section_without_tabs() {
        let content = r#"
title = "T"
[[sections]]
id = "main"
title = "Home"
dimension = "technique"
"#;
        assert!(Guide::from_toml_str(content).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Guide::load(&temp.path().join("guide.toml")).unwrap_err();
        assert!(matches!(err, Error::ContentNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("guide.toml");
        std::fs::write(&path, MINIMAL).unwrap();
        let guide = Guide::load(&path).unwrap();
        assert_eq!(guide.title(), "Test Guide");
        assert_eq!(guide.examples().len(), 2);
    }
}
