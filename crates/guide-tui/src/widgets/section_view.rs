//! Body of the visible section: text, tab bar, filter chips and the
//! copyable items.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use guide_app::state::{AppState, VisibleItem};
use guide_core::{Section, TabDimension};

use crate::theme::styles;

pub struct SectionView<'a> {
    state: &'a AppState,
}

impl<'a> SectionView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn tab_bar(&self, dimension: TabDimension) -> Line<'a> {
        let current = self.state.nav.state().current_tab(dimension);
        let mut spans = vec![Span::styled(
            format!("{}: ", dimension.label()),
            styles::text_muted(),
        )];
        for tab in self.state.guide.tabs(dimension) {
            let style = if Some(&tab.id) == current {
                styles::selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", tab.title), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn filter_chips(&self) -> Line<'a> {
        let current = &self.state.nav.state().current_filter;
        let mut spans = vec![Span::styled("Filter: ", styles::text_muted())];
        for filter in self.state.guide.filters() {
            let style = if &filter.id == current {
                styles::selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", filter.label), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn item_line(&self, index: usize, item: &VisibleItem<'a>) -> Line<'a> {
        let selected = index == self.state.selected_item;
        let mut spans = Vec::new();

        spans.push(if selected {
            Span::styled("▸ ", styles::accent_bold())
        } else {
            Span::raw("  ")
        });
        spans.push(if self.state.favorites.contains(item.text) {
            Span::styled("★ ", styles::favorite())
        } else {
            Span::raw("  ")
        });
        if let Some(title) = item.title {
            spans.push(Span::styled(
                format!("{}: ", title),
                styles::title().add_modifier(Modifier::UNDERLINED),
            ));
        }
        let text_style = if selected {
            styles::selected()
        } else {
            styles::text_primary()
        };
        spans.push(Span::styled(item.text, text_style));
        if self.state.was_recently_copied(item.text) {
            spans.push(Span::styled(" ✓ Copied", styles::copied()));
        }
        Line::from(spans)
    }

    /// Content lines and the line index of the selected item
    fn lines(&self, section: &'a Section) -> (Vec<Line<'a>>, Option<usize>) {
        let mut lines = vec![
            Line::from(Span::styled(
                section.summary.as_str(),
                styles::text_secondary().add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
        ];
        for paragraph in &section.body {
            lines.push(Line::from(Span::styled(paragraph.as_str(), styles::text_primary())));
        }
        if !section.body.is_empty() {
            lines.push(Line::default());
        }

        if let Some(dimension) = section.dimension {
            lines.push(self.tab_bar(dimension));
            lines.push(Line::default());
        }

        let has_examples = self
            .state
            .guide
            .examples()
            .iter()
            .any(|example| example.section == section.id);
        if has_examples && !self.state.guide.filters().is_empty() {
            lines.push(self.filter_chips());
            lines.push(Line::default());
        }

        let items = self.state.visible_items();
        let mut selected_line = None;
        if items.is_empty() && (section.dimension.is_some() || has_examples) {
            lines.push(Line::from(Span::styled("Nothing here yet.", styles::text_muted())));
        }
        for (index, item) in items.iter().enumerate() {
            if index == self.state.selected_item {
                selected_line = Some(lines.len());
            }
            lines.push(self.item_line(index, item));
        }

        (lines, selected_line)
    }
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(section) = self.state.visible_section() else {
            // Mid-transition: nothing is shown
            styles::panel_block(false).render(area, buf);
            return;
        };

        let block = styles::panel_block(true)
            .title(Span::styled(format!(" {} ", section.title), styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (lines, selected_line) = self.lines(section);
        let follow = selected_line
            .map(|line| line.saturating_sub(usize::from(inner.height) - 1))
            .unwrap_or(0);
        let offset = self
            .state
            .views
            .scroll_offset()
            .max(u16::try_from(follow).unwrap_or(u16::MAX));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .render(inner, buf);
    }
}
