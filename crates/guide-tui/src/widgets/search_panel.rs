//! Search overlay: query input and highlighted prompt results

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use guide_app::search::{SearchOutcome, SearchState};
use guide_core::Guide;

use crate::theme::styles;

/// Split `text` into spans, styling the byte `ranges` as matches.
///
/// Ranges must be sorted, non-overlapping and on char boundaries.
pub fn highlight_spans<'a>(
    text: &'a str,
    ranges: &[Range<usize>],
    base: Style,
    highlight: Style,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for range in ranges {
        let (Some(before), Some(matched)) = (text.get(cursor..range.start), text.get(range.clone()))
        else {
            continue;
        };
        if !before.is_empty() {
            spans.push(Span::styled(before, base));
        }
        spans.push(Span::styled(matched, highlight));
        cursor = range.end;
    }
    if let Some(rest) = text.get(cursor..) {
        if !rest.is_empty() {
            spans.push(Span::styled(rest, base));
        }
    }
    spans
}

pub struct SearchPanel<'a> {
    search: &'a SearchState,
    guide: &'a Guide,
}

impl<'a> SearchPanel<'a> {
    pub fn new(search: &'a SearchState, guide: &'a Guide) -> Self {
        Self { search, guide }
    }

    fn input_line(&self) -> Line<'a> {
        let status = if self.search.is_pending() {
            Span::styled("  …", styles::text_muted())
        } else {
            match self.search.outcome() {
                SearchOutcome::EmptyQuery => Span::raw(""),
                SearchOutcome::NoMatches => Span::styled("  no matches", styles::error()),
                SearchOutcome::Matches(hits) => Span::styled(
                    format!("  {} match{}", hits.len(), if hits.len() == 1 { "" } else { "es" }),
                    styles::copied(),
                ),
            }
        };
        Line::from(vec![
            Span::styled("/ ", styles::keybinding()),
            Span::styled(self.search.query.as_str(), styles::text_primary()),
            Span::styled("▏", styles::accent()),
            status,
        ])
    }

    fn result_lines(&self, height: usize) -> Vec<Line<'a>> {
        let hits = match self.search.outcome() {
            SearchOutcome::EmptyQuery => {
                return vec![Line::from(Span::styled(
                    "Type to search every prompt in the guide.",
                    styles::text_muted(),
                ))]
            }
            SearchOutcome::NoMatches => {
                return vec![Line::from(Span::styled(
                    format!("No prompts match \"{}\".", self.search.query.trim()),
                    styles::text_secondary(),
                ))]
            }
            SearchOutcome::Matches(hits) => hits,
        };

        let selected = self.search.selected().unwrap_or(0);
        let first = selected.saturating_sub(height.saturating_sub(1));

        hits.iter()
            .enumerate()
            .skip(first)
            .take(height)
            .filter_map(|(i, hit)| {
                let item = self.guide.prompts().get(hit.index)?;
                let is_selected = i == selected;
                let base = if is_selected {
                    styles::selected()
                } else {
                    styles::text_primary()
                };

                let mut spans = vec![if is_selected {
                    Span::styled("▸ ", styles::accent_bold())
                } else {
                    Span::raw("  ")
                }];
                spans.extend(highlight_spans(
                    &item.text,
                    &hit.ranges,
                    base,
                    styles::search_highlight(),
                ));
                if let Some(section) = self.guide.section(&item.anchor.section) {
                    spans.push(Span::styled(format!("  · {}", section.title), styles::text_muted()));
                }
                Some(Line::from(spans))
            })
            .collect()
    }
}

impl Widget for SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block().title(Span::styled(" Search prompts ", styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.input_line(), inner.width);
        if inner.height < 3 {
            return;
        }

        let results = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);
        Paragraph::new(self.result_lines(usize::from(results.height))).render(results, buf);
    }
}
