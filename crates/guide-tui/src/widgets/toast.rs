//! Toast notification box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use guide_app::toast::{Toast, ToastKind};

use crate::theme::styles;

pub struct ToastView<'a> {
    toast: &'a Toast,
}

impl<'a> ToastView<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    /// Icon and message as rendered
    pub fn label(toast: &Toast) -> String {
        let icon = match toast.kind {
            ToastKind::Success => "✓",
            ToastKind::Info => "•",
            ToastKind::Error => "✗",
        };
        format!("{} {}", icon, toast.message)
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let style = styles::toast(self.toast.kind);
        let block = styles::popup_block().border_style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(Span::styled(Self::label(self.toast), style))).render(inner, buf);
    }
}
