//! Transient status notifications

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

/// At most one toast at a time; a new one replaces the old
#[derive(Debug, Clone)]
pub struct ToastState {
    current: Option<Toast>,
    duration: Duration,
}

impl ToastState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// Drop the toast once it has been visible for the configured duration.
    /// Returns true if one was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|toast| now.saturating_duration_since(toast.shown_at) >= self.duration);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let start = Instant::now();
        let mut toasts = ToastState::new(Duration::from_secs(3));
        toasts.show("Copied", ToastKind::Success, start);

        assert!(!toasts.expire(start + Duration::from_secs(1)));
        assert_eq!(toasts.current().map(|t| t.kind), Some(ToastKind::Success));
        assert!(toasts.expire(start + Duration::from_secs(3)));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_old() {
        let start = Instant::now();
        let mut toasts = ToastState::new(Duration::from_secs(3));
        toasts.show("first", ToastKind::Info, start);
        toasts.show("second", ToastKind::Error, start + Duration::from_secs(2));

        assert!(!toasts.expire(start + Duration::from_secs(4)));
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("second"));
    }
}
