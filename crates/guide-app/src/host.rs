//! Optional host bridge
//!
//! The guide may run embedded in a host that offers chrome colors, haptic
//! feedback, a main button and closing confirmation. [`Host`] wraps an
//! optional [`HostBridge`]; with no bridge every call is a no-op.

use std::fmt;

use guide_core::prelude::*;

use crate::config::HostSettings;
use crate::message::Message;

/// Impact feedback strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Notification feedback kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// Main button as presented by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainButton {
    pub text: String,
    pub visible: bool,
}

/// Host chrome the UI renders around the guide
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostChrome {
    pub ready: bool,
    pub expanded: bool,
    pub header_color: Option<String>,
    pub background_color: Option<String>,
    pub main_button: MainButton,
}

/// Capabilities a host environment exposes to the guide
#[cfg_attr(test, mockall::automock)]
pub trait HostBridge: Send {
    fn ready(&mut self);

    fn expand(&mut self);

    fn set_header_color(&mut self, color: &str);

    fn set_background_color(&mut self, color: &str);

    fn enable_closing_confirmation(&mut self);

    fn closing_confirmation_enabled(&self) -> bool;

    fn close(&mut self);

    fn impact_occurred(&mut self, style: ImpactStyle);

    fn notification_occurred(&mut self, kind: NotificationKind);

    fn main_button_set_text(&mut self, text: &str);

    fn main_button_show(&mut self);

    /// Current chrome state for rendering
    fn chrome(&self) -> HostChrome;
}

/// The guide's handle on an optional host bridge
#[derive(Default)]
pub struct Host {
    bridge: Option<Box<dyn HostBridge>>,
    main_button_on_click: Option<Message>,
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("present", &self.bridge.is_some())
            .field("main_button_on_click", &self.main_button_on_click)
            .finish()
    }
}

impl Host {
    /// No host: all calls are no-ops
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn new(bridge: Box<dyn HostBridge>) -> Self {
        Self {
            bridge: Some(bridge),
            main_button_on_click: None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.bridge.is_some()
    }

    /// Startup sequence: ready, expand, chrome colors, closing
    /// confirmation, then the main button wired to `on_click`.
    pub fn initialize(&mut self, settings: &HostSettings, on_click: Message) {
        let Some(bridge) = self.bridge.as_deref_mut() else {
            debug!("No host bridge; running standalone");
            return;
        };

        bridge.ready();
        bridge.expand();
        bridge.set_header_color(&settings.header_color);
        bridge.set_background_color(&settings.background_color);
        if settings.closing_confirmation {
            bridge.enable_closing_confirmation();
        }
        bridge.main_button_set_text(&settings.main_button_text);
        bridge.main_button_show();
        self.main_button_on_click = Some(on_click);
        info!("Host bridge initialized");
    }

    /// Message to dispatch when the main button is pressed
    pub fn press_main_button(&self) -> Option<Message> {
        let chrome = self.chrome()?;
        if !chrome.main_button.visible {
            return None;
        }
        self.main_button_on_click.clone()
    }

    pub fn impact_occurred(&mut self, style: ImpactStyle) {
        if let Some(bridge) = self.bridge.as_deref_mut() {
            bridge.impact_occurred(style);
        }
    }

    pub fn notification_occurred(&mut self, kind: NotificationKind) {
        if let Some(bridge) = self.bridge.as_deref_mut() {
            bridge.notification_occurred(kind);
        }
    }

    pub fn closing_confirmation_enabled(&self) -> bool {
        self.bridge
            .as_deref()
            .is_some_and(|bridge| bridge.closing_confirmation_enabled())
    }

    pub fn close(&mut self) {
        if let Some(bridge) = self.bridge.as_deref_mut() {
            bridge.close();
        }
    }

    pub fn chrome(&self) -> Option<HostChrome> {
        self.bridge.as_deref().map(|bridge| bridge.chrome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{predicate::eq, Sequence};

    #[test]
    fn test_absent_host_is_noop() {
        let mut host = Host::absent();
        host.initialize(&HostSettings::default(), Message::RequestQuit);
        host.impact_occurred(ImpactStyle::Light);
        host.notification_occurred(NotificationKind::Error);
        host.close();

        assert!(!host.is_present());
        assert!(!host.closing_confirmation_enabled());
        assert!(host.chrome().is_none());
        assert!(host.press_main_button().is_none());
    }

    #[test]
    fn test_initialize_runs_startup_sequence_in_order() {
        let settings = HostSettings::default();
        let mut bridge = MockHostBridge::new();
        let mut seq = Sequence::new();

        bridge.expect_ready().times(1).in_sequence(&mut seq).return_const(());
        bridge.expect_expand().times(1).in_sequence(&mut seq).return_const(());
        bridge
            .expect_set_header_color()
            .with(eq("#1e293b"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        bridge
            .expect_set_background_color()
            .with(eq("#0a0f1c"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        bridge
            .expect_enable_closing_confirmation()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        bridge
            .expect_main_button_set_text()
            .with(eq("Close guide"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        bridge
            .expect_main_button_show()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut host = Host::new(Box::new(bridge));
        host.initialize(&settings, Message::RequestQuit);
    }

    #[test]
    fn test_closing_confirmation_respects_setting() {
        let settings = HostSettings {
            closing_confirmation: false,
            ..HostSettings::default()
        };
        let mut bridge = MockHostBridge::new();
        bridge.expect_ready().return_const(());
        bridge.expect_expand().return_const(());
        bridge.expect_set_header_color().return_const(());
        bridge.expect_set_background_color().return_const(());
        bridge.expect_enable_closing_confirmation().never();
        bridge.expect_main_button_set_text().return_const(());
        bridge.expect_main_button_show().return_const(());

        let mut host = Host::new(Box::new(bridge));
        host.initialize(&settings, Message::RequestQuit);
    }

    #[test]
    fn test_main_button_dispatches_registered_message() {
        let mut bridge = MockHostBridge::new();
        bridge.expect_chrome().returning(|| HostChrome {
            main_button: MainButton {
                text: "Close guide".to_string(),
                visible: true,
            },
            ..HostChrome::default()
        });
        bridge.expect_ready().return_const(());
        bridge.expect_expand().return_const(());
        bridge.expect_set_header_color().return_const(());
        bridge.expect_set_background_color().return_const(());
        bridge.expect_enable_closing_confirmation().return_const(());
        bridge.expect_main_button_set_text().return_const(());
        bridge.expect_main_button_show().return_const(());

        let mut host = Host::new(Box::new(bridge));
        assert!(host.press_main_button().is_none());

        host.initialize(&HostSettings::default(), Message::RequestQuit);
        assert!(matches!(host.press_main_button(), Some(Message::RequestQuit)));
    }

    #[test]
    fn test_haptics_forwarded() {
        let mut bridge = MockHostBridge::new();
        bridge
            .expect_impact_occurred()
            .with(eq(ImpactStyle::Light))
            .times(1)
            .return_const(());
        bridge
            .expect_notification_occurred()
            .with(eq(NotificationKind::Success))
            .times(1)
            .return_const(());

        let mut host = Host::new(Box::new(bridge));
        host.impact_occurred(ImpactStyle::Light);
        host.notification_occurred(NotificationKind::Success);
    }
}
