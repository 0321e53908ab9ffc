//! Terminal host bridge
//!
//! Stands in for an embedding host when the guide runs in a terminal:
//! chrome colors tint the header and background, haptics ring the bell
//! when enabled, the main button shows in the footer and `close` becomes a
//! quit message on the event loop.

use std::io::Write;

use tokio::sync::mpsc;

use guide_app::config::HostSettings;
use guide_app::message::Message;
use guide_app::{HostBridge, HostChrome, ImpactStyle, NotificationKind};
use guide_core::prelude::*;

pub struct TerminalHost<W: Write + Send> {
    chrome: HostChrome,
    closing_confirmation: bool,
    bell: bool,
    out: W,
    quit_tx: Option<mpsc::Sender<Message>>,
}

impl TerminalHost<std::io::Stdout> {
    pub fn stdout(settings: &HostSettings) -> Self {
        Self::new(settings, std::io::stdout())
    }
}

impl<W: Write + Send> TerminalHost<W> {
    pub fn new(settings: &HostSettings, out: W) -> Self {
        Self {
            chrome: HostChrome::default(),
            closing_confirmation: false,
            bell: settings.haptic_bell,
            out,
            quit_tx: None,
        }
    }

    /// Deliver `close` to the event loop as [`Message::Quit`]
    pub fn with_quit_sender(mut self, tx: mpsc::Sender<Message>) -> Self {
        self.quit_tx = Some(tx);
        self
    }

    fn ring(&mut self) {
        if !self.bell {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            debug!("Bell failed: {}", e);
        }
    }
}

impl<W: Write + Send> HostBridge for TerminalHost<W> {
    fn ready(&mut self) {
        self.chrome.ready = true;
    }

    fn expand(&mut self) {
        self.chrome.expanded = true;
    }

    fn set_header_color(&mut self, color: &str) {
        self.chrome.header_color = Some(color.to_string());
    }

    fn set_background_color(&mut self, color: &str) {
        self.chrome.background_color = Some(color.to_string());
    }

    fn enable_closing_confirmation(&mut self) {
        self.closing_confirmation = true;
    }

    fn closing_confirmation_enabled(&self) -> bool {
        self.closing_confirmation
    }

    fn close(&mut self) {
        debug!("Host close requested");
        let Some(tx) = &self.quit_tx else {
            return;
        };
        if let Err(e) = tx.try_send(Message::Quit) {
            warn!("Could not deliver host close: {}", e);
        }
    }

    fn impact_occurred(&mut self, style: ImpactStyle) {
        trace!("Impact {:?}", style);
        // Light taps are too frequent for a bell
        if style != ImpactStyle::Light {
            self.ring();
        }
    }

    fn notification_occurred(&mut self, kind: NotificationKind) {
        trace!("Notification {:?}", kind);
        self.ring();
    }

    fn main_button_set_text(&mut self, text: &str) {
        self.chrome.main_button.text = text.to_string();
    }

    fn main_button_show(&mut self) {
        self.chrome.main_button.visible = true;
    }

    fn chrome(&self) -> HostChrome {
        self.chrome.clone()
    }
}
