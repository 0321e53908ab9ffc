//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use crate::theme::palette;
use guide_app::toast::ToastKind;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection ---
pub fn selected() -> Style {
    Style::default()
        .fg(palette::SELECTED_FG)
        .bg(palette::SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn search_highlight() -> Style {
    Style::default()
        .fg(palette::SEARCH_HIGHLIGHT_FG)
        .bg(palette::SEARCH_HIGHLIGHT_BG)
}

pub fn favorite() -> Style {
    Style::default().fg(palette::FAVORITE_STAR)
}

pub fn copied() -> Style {
    Style::default()
        .fg(palette::STATUS_GREEN)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn toast(kind: ToastKind) -> Style {
    let color = match kind {
        ToastKind::Success => palette::STATUS_GREEN,
        ToastKind::Info => palette::STATUS_BLUE,
        ToastKind::Error => palette::STATUS_RED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// --- Blocks ---
pub fn panel_block(active: bool) -> Block<'static> {
    let border = if active {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

pub fn popup_block() -> Block<'static> {
    panel_block(true).style(Style::default().bg(palette::POPUP_BG))
}
