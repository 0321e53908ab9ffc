//! Header with the guide title, progress and section tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};
use unicode_width::UnicodeWidthStr;

use guide_app::progress::ProgressTracker;
use guide_core::{Section, SectionId};

use crate::theme::styles;

const PROGRESS_CELLS: usize = 10;

pub struct GuideHeader<'a> {
    title: &'a str,
    sections: &'a [Section],
    current: &'a SectionId,
    progress: Option<&'a ProgressTracker>,
    background: Option<ratatui::style::Color>,
}

impl<'a> GuideHeader<'a> {
    pub fn new(title: &'a str, sections: &'a [Section], current: &'a SectionId) -> Self {
        Self {
            title,
            sections,
            current,
            progress: None,
            background: None,
        }
    }

    pub fn progress(mut self, progress: &'a ProgressTracker) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Tint from the host's header color
    pub fn background(mut self, color: Option<ratatui::style::Color>) -> Self {
        self.background = color;
        self
    }

    fn progress_span(progress: &ProgressTracker) -> Span<'static> {
        let ratio = progress.completion_ratio();
        let filled = ((ratio * PROGRESS_CELLS as f64).round() as usize).min(PROGRESS_CELLS);
        let bar = format!(
            "Explored {}/{} {}{} {:>3}% ",
            progress.visited().len(),
            progress.total(),
            "▰".repeat(filled),
            "▱".repeat(PROGRESS_CELLS - filled),
            (ratio * 100.0).round() as u32,
        );
        let style = if progress.is_complete() {
            styles::copied()
        } else {
            styles::accent()
        };
        Span::styled(bar, style)
    }
}

impl Widget for GuideHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::panel_block(false);
        if let Some(color) = self.background {
            block = block.style(Style::default().bg(color));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = format!(" ◆ {}", self.title);
        buf.set_line(
            inner.x,
            inner.y,
            &Line::from(Span::styled(title.as_str(), styles::accent_bold())),
            inner.width,
        );

        if let Some(progress) = self.progress {
            let span = Self::progress_span(progress);
            let width = span.content.width() as u16;
            let title_width = title.width() as u16;
            if title_width + width + 1 <= inner.width {
                buf.set_line(inner.x + inner.width - width, inner.y, &Line::from(span), width);
            }
        }

        if inner.height < 2 {
            return;
        }

        let titles: Vec<Line> = self
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| Line::from(format!("{} {}", i + 1, section.title)))
            .collect();
        let selected = self.sections.iter().position(|s| &s.id == self.current);

        Tabs::new(titles)
            .select(selected.unwrap_or_default())
            .style(styles::text_secondary())
            .highlight_style(styles::selected())
            .divider(Span::styled("│", styles::text_muted()))
            .render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
    }
}
