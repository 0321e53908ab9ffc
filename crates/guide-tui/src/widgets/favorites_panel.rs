//! Favorites overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use guide_app::favorites::Favorites;

use crate::theme::styles;

pub struct FavoritesPanel<'a> {
    favorites: &'a Favorites,
    selected: usize,
}

impl<'a> FavoritesPanel<'a> {
    pub fn new(favorites: &'a Favorites, selected: usize) -> Self {
        Self {
            favorites,
            selected,
        }
    }
}

impl Widget for FavoritesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block().title(Span::styled(
            format!(" ★ Favorites ({}) ", self.favorites.len()),
            styles::title(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.favorites.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No favorites yet. Press s on a prompt to save it.",
                styles::text_muted(),
            )))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let height = usize::from(inner.height);
        let first = self.selected.saturating_sub(height - 1);
        let lines: Vec<Line> = self
            .favorites
            .items()
            .iter()
            .enumerate()
            .skip(first)
            .take(height)
            .map(|(i, text)| {
                if i == self.selected {
                    Line::from(vec![
                        Span::styled("▸ ", styles::accent_bold()),
                        Span::styled(text.as_str(), styles::selected()),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(text.as_str(), styles::text_primary()),
                    ])
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
