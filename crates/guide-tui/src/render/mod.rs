//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use guide_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{layout, widgets};
use crate::theme;
use crate::widgets::modal_overlay::{centered_rect, centered_rect_percent};

/// Render the complete UI. Pure: reads state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let chrome = state.host.chrome();

    if let Some(bg) = chrome
        .as_ref()
        .and_then(|c| c.background_color.as_deref())
        .and_then(theme::parse_hex)
    {
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);
    }

    let areas = layout::create(area);

    let mut header = widgets::GuideHeader::new(
        state.guide.title(),
        state.guide.sections(),
        &state.nav.state().current_section,
    )
    .background(
        chrome
            .as_ref()
            .and_then(|c| c.header_color.as_deref())
            .and_then(theme::parse_hex),
    );
    if state.settings.progress.enabled {
        header = header.progress(&state.progress);
    }
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::SectionView::new(state), areas.body);

    frame.render_widget(
        widgets::Footer::new(state.ui_mode).main_button(chrome.as_ref().map(|c| &c.main_button)),
        areas.footer,
    );

    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Search => {
            frame.render_widget(
                widgets::SearchPanel::new(&state.search, &state.guide),
                centered_rect_percent(90, 80, areas.body),
            );
        }
        UiMode::Favorites => {
            frame.render_widget(
                widgets::FavoritesPanel::new(&state.favorites, state.favorites_selected),
                centered_rect_percent(80, 70, areas.body),
            );
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog_state {
                frame.render_widget(
                    widgets::ConfirmDialog::new(dialog),
                    centered_rect(56, 7, area),
                );
            }
        }
    }

    if let Some(toast) = state.toast.current() {
        let label = widgets::ToastView::label(toast);
        frame.render_widget(
            widgets::ToastView::new(toast),
            layout::toast_area(areas.body, label.width() as u16),
        );
    }
}
