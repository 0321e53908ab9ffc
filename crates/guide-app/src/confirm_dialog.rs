//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in guide-tui's widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Dialog shown when closing confirmation is enabled
    pub fn close_confirmation(visited: usize, total: usize) -> Self {
        let message = if visited < total {
            format!("You have explored {} of {} sections.", visited, total)
        } else {
            "You have explored the whole guide.".to_string()
        };
        Self::new(
            "Close the guide?",
            message,
            vec![("Close", Message::ConfirmQuit), ("Stay", Message::CancelQuit)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_confirmation_mentions_progress() {
        let dialog = ConfirmDialogState::close_confirmation(2, 6);
        assert_eq!(dialog.message, "You have explored 2 of 6 sections.");
        assert_eq!(dialog.options.len(), 2);
        assert!(matches!(dialog.options[0].1, Message::ConfirmQuit));
    }

    #[test]
    fn test_close_confirmation_when_complete() {
        let dialog = ConfirmDialogState::close_confirmation(6, 6);
        assert_eq!(dialog.message, "You have explored the whole guide.");
    }
}
