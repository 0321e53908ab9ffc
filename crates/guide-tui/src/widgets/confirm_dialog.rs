//! Confirmation dialog widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use guide_app::confirm_dialog::ConfirmDialogState;
use guide_app::message::Message;

use crate::theme::styles;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn option_key(message: &Message) -> &'static str {
        match message {
            Message::ConfirmQuit => "y",
            Message::CancelQuit => "n",
            _ => "?",
        }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block().title(Span::styled(
            format!(" {} ", self.state.title),
            styles::title(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut options = Vec::new();
        for (label, message) in &self.state.options {
            options.push(Span::styled(
                format!("[{}]", Self::option_key(message)),
                styles::keybinding(),
            ));
            options.push(Span::styled(format!(" {}   ", label), styles::text_primary()));
        }

        let lines = vec![
            Line::from(Span::styled(self.state.message.as_str(), styles::text_secondary())),
            Line::default(),
            Line::from(options),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
