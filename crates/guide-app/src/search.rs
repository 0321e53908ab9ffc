//! Prompt search: case-insensitive literal substring matching with
//! highlight ranges, plus the debounced search state driven by input.

use std::ops::Range;
use std::time::{Duration, Instant};

use guide_core::prelude::*;
use guide_core::PromptItem;
use regex::RegexBuilder;

/// A prompt that matched the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Index into `Guide::prompts()`
    pub index: usize,
    /// Byte ranges of every match in the prompt text
    pub ranges: Vec<Range<usize>>,
}

/// Outcome of running a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty or whitespace-only query; no results area is shown
    #[default]
    EmptyQuery,
    NoMatches,
    /// Matches in document order
    Matches(Vec<SearchHit>),
}

impl SearchOutcome {
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Matches(hits) => hits,
            _ => &[],
        }
    }
}

/// Find every prompt containing `query`, ignoring case.
///
/// The query is a literal; regex metacharacters match themselves.
pub fn search(items: &[PromptItem], query: &str) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    let hits: Vec<SearchHit> = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let ranges: Vec<Range<usize>> =
                    re.find_iter(&item.text).map(|m| m.range()).collect();
                (!ranges.is_empty()).then_some(SearchHit { index, ranges })
            })
            .collect(),
        Err(e) => {
            // Escaped input only fails on size limits; match without highlights
            warn!("Search pattern rejected ({}), using plain matching", e);
            let needle = query.to_lowercase();
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.text.to_lowercase().contains(&needle))
                .map(|(index, _)| SearchHit {
                    index,
                    ranges: Vec::new(),
                })
                .collect()
        }
    };

    if hits.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(hits)
    }
}

/// Search panel state with input debouncing
#[derive(Debug, Clone)]
pub struct SearchState {
    /// The current query string
    pub query: String,
    /// Whether the search panel is open
    pub is_active: bool,
    outcome: SearchOutcome,
    selected: Option<usize>,
    debounce: Duration,
    /// When the query last changed without a search being run
    dirty_since: Option<Instant>,
}

impl SearchState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            query: String::new(),
            is_active: false,
            outcome: SearchOutcome::EmptyQuery,
            selected: None,
            debounce,
            dirty_since: None,
        }
    }

    /// Open the panel with an empty query
    pub fn activate(&mut self) {
        self.is_active = true;
        self.query.clear();
        self.outcome = SearchOutcome::EmptyQuery;
        self.selected = None;
        self.dirty_since = None;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.dirty_since = None;
    }

    /// Replace the query; the search runs once input has been idle for the
    /// debounce interval
    pub fn set_query(&mut self, query: &str, now: Instant) {
        if self.query == query {
            return;
        }
        self.query = query.to_string();
        self.dirty_since = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Whether a pending query has been idle long enough to run
    pub fn is_due(&self, now: Instant) -> bool {
        self.dirty_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.debounce)
    }

    /// Run the current query now
    pub fn run(&mut self, items: &[PromptItem]) {
        self.dirty_since = None;
        self.outcome = search(items, &self.query);
        trace!("Search {:?}: {} hits", self.query, self.outcome.hits().len());

        let count = self.outcome.hits().len();
        self.selected = match self.selected {
            _ if count == 0 => None,
            Some(i) if i < count => Some(i),
            _ => Some(0),
        };
    }

    /// Run the query if it is pending and due; returns true if it ran
    pub fn run_if_due(&mut self, items: &[PromptItem], now: Instant) -> bool {
        if self.is_due(now) {
            self.run(items);
            true
        } else {
            false
        }
    }

    /// Run a pending query immediately, skipping the remaining debounce
    pub fn flush(&mut self, items: &[PromptItem]) {
        if self.is_pending() {
            self.run(items);
        }
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.selected.and_then(|i| self.outcome.hits().get(i))
    }

    /// Move to the next hit (wraps around)
    pub fn select_next(&mut self) {
        let count = self.outcome.hits().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    /// Move to the previous hit (wraps around)
    pub fn select_previous(&mut self) {
        let count = self.outcome.hits().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }
}
