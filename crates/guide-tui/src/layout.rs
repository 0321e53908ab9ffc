//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, progress and section tabs
    pub header: Rect,

    /// Visible section content
    pub body: Rect,

    /// Key hints and main button
    pub footer: Rect,
}

/// Split the screen into header, body and footer.
///
/// The header drops its section tab row on very short terminals.
pub fn create(area: Rect) -> ScreenAreas {
    let header_height = if area.height >= 12 { 4 } else { 3 };

    let chunks = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Area for a toast: bottom-right corner of the body
pub fn toast_area(body: Rect, message_width: u16) -> Rect {
    let width = (message_width + 4).min(body.width);
    let height = 3.min(body.height);
    Rect::new(
        body.x + body.width.saturating_sub(width + 1),
        body.y + body.height.saturating_sub(height),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.body.y, 4);
        assert_eq!(layout.body.height, 19); // 24 - 4 - 1
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_create_layout_short_terminal() {
        let layout = create(Rect::new(0, 0, 40, 10));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.height, 6);
    }

    #[test]
    fn test_toast_area_fits_in_body() {
        let body = Rect::new(0, 4, 80, 19);
        let area = toast_area(body, 20);

        assert_eq!(area.width, 24);
        assert_eq!(area.height, 3);
        assert_eq!(area.y + area.height, body.y + body.height);
        assert!(area.x + area.width <= body.x + body.width);
    }

    #[test]
    fn test_toast_area_clamps_long_message() {
        let body = Rect::new(0, 0, 30, 10);
        let area = toast_area(body, 200);

        assert_eq!(area.width, 30);
        assert_eq!(area.x, 0);
    }
}
