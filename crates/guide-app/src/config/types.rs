//! Configuration types for Prompt Guide
//!
//! Contains:
//! - Settings: Application settings from config.toml
//! - Per-concern sub-settings (navigation, search, progress, host, ui)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings (<config dir>/prompt-guide/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub progress: ProgressSettings,

    #[serde(default)]
    pub host: HostSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Section/tab transition settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Delay between hiding the outgoing view and showing the incoming one.
    /// Zero commits transitions immediately.
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            transition_delay_ms: default_transition_delay_ms(),
        }
    }
}

impl NavigationSettings {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

fn default_transition_delay_ms() -> u64 {
    150
}

/// Prompt search settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Input inactivity before the query is re-run
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    300
}

/// Progress tracking settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressSettings {
    /// Show the progress gauge in the header
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Announce when every section has been visited
    #[serde(default = "default_true")]
    pub celebrate: bool,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            celebrate: true,
        }
    }
}

/// Host bridge settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostSettings {
    /// Attach the terminal host bridge. When false the guide runs without one
    /// and every bridge call is a no-op.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Header chrome color (#rrggbb)
    #[serde(default = "default_header_color")]
    pub header_color: String,

    /// Backdrop color (#rrggbb)
    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// Ask before closing the guide
    #[serde(default = "default_true")]
    pub closing_confirmation: bool,

    /// Ring the terminal bell for haptic feedback
    #[serde(default)]
    pub haptic_bell: bool,

    /// Main button label
    #[serde(default = "default_main_button_text")]
    pub main_button_text: String,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            header_color: default_header_color(),
            background_color: default_background_color(),
            closing_confirmation: true,
            haptic_bell: false,
            main_button_text: default_main_button_text(),
        }
    }
}

fn default_header_color() -> String {
    "#1e293b".to_string()
}

fn default_background_color() -> String {
    "#0a0f1c".to_string()
}

fn default_main_button_text() -> String {
    "Close guide".to_string()
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long toast notifications stay visible
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_ms: default_toast_ms(),
        }
    }
}

impl UiSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

fn default_toast_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.navigation.transition_delay_ms, 150);
        assert_eq!(settings.search.debounce_ms, 300);
        assert!(settings.progress.enabled);
        assert!(settings.host.closing_confirmation);
        assert!(!settings.host.haptic_bell);
        assert_eq!(settings.ui.toast_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[navigation]
transition_delay_ms = 0

[host]
haptic_bell = true
"#,
        )
        .unwrap();
        assert_eq!(settings.navigation.transition_delay(), Duration::ZERO);
        assert!(settings.host.haptic_bell);
        assert_eq!(settings.host.header_color, "#1e293b");
        assert_eq!(settings.search.debounce_ms, 300);
    }
}
