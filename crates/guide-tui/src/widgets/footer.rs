//! Footer with key hints and the host main button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use guide_app::host::MainButton;
use guide_app::UiMode;

use crate::theme::styles;

pub struct Footer<'a> {
    mode: UiMode,
    main_button: Option<&'a MainButton>,
}

impl<'a> Footer<'a> {
    pub fn new(mode: UiMode) -> Self {
        Self {
            mode,
            main_button: None,
        }
    }

    /// Show the host main button, if visible
    pub fn main_button(mut self, button: Option<&'a MainButton>) -> Self {
        self.main_button = button.filter(|b| b.visible);
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => &[
                ("Tab", "sections"),
                ("←→", "tabs"),
                ("↑↓", "select"),
                ("Enter", "copy"),
                ("s", "save"),
                ("f", "filter"),
                ("/", "search"),
                ("v", "favorites"),
                ("q", "quit"),
            ],
            UiMode::Search => &[
                ("type", "to search"),
                ("↑↓", "select"),
                ("Enter", "copy"),
                ("Esc", "close"),
            ],
            UiMode::Favorites => &[
                ("↑↓", "select"),
                ("Enter", "copy"),
                ("d", "remove"),
                ("Esc", "close"),
            ],
            UiMode::ConfirmDialog => &[("y", "close"), ("n", "stay")],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut reserved = 0;
        if let Some(button) = self.main_button {
            let label = format!("[ ^Q {} ]", button.text);
            let width = label.width() as u16;
            if width < area.width {
                reserved = width + 1;
                buf.set_line(
                    area.x + area.width - width,
                    area.y,
                    &Line::from(Span::styled(label, styles::accent_bold())),
                    width,
                );
            }
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        buf.set_line(
            area.x,
            area.y,
            &Line::from(spans),
            area.width.saturating_sub(reserved),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_normal_hints() {
        let mut term = TestTerminal::with_size(120, 1);
        let area = term.area();
        term.render_widget(Footer::new(UiMode::Normal), area);

        assert!(term.buffer_contains("Enter copy"));
        assert!(term.buffer_contains("/ search"));
    }

    #[test]
    fn test_main_button_shown_when_visible() {
        let button = MainButton {
            text: "Close guide".to_string(),
            visible: true,
        };
        let mut term = TestTerminal::with_size(120, 1);
        let area = term.area();
        term.render_widget(Footer::new(UiMode::Normal).main_button(Some(&button)), area);

        assert!(term.buffer_contains("[ ^Q Close guide ]"));
    }

    #[test]
    fn test_hidden_main_button_not_rendered() {
        let button = MainButton {
            text: "Close guide".to_string(),
            visible: false,
        };
        let mut term = TestTerminal::with_size(120, 1);
        let area = term.area();
        term.render_widget(Footer::new(UiMode::Search).main_button(Some(&button)), area);

        assert!(!term.buffer_contains("Close guide"));
        assert!(term.buffer_contains("Esc close"));
    }
}
