//! Settings and content loading from the user's config directory

use super::types::Settings;
use guide_core::logging::APP_DIR_NAME;
use guide_core::prelude::*;
use guide_core::Guide;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONTENT_FILENAME: &str = "guide.toml";
const PREFERENCES_FILENAME: &str = "preferences.json";

/// `<config dir>/prompt-guide`, if the platform has a config dir
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME))
}

/// `<data dir>/prompt-guide/preferences.json`, if the platform has a data dir
pub fn preferences_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|base| base.join(APP_DIR_NAME).join(PREFERENCES_FILENAME))
}

/// Load settings from `<dir>/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a default config.toml in `dir` if none exists
pub fn init_config_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r##"# Prompt Guide Configuration

[navigation]
transition_delay_ms = 150   # 0 switches sections instantly

[search]
debounce_ms = 300

[progress]
enabled = true
celebrate = true

[host]
enabled = true
header_color = "#1e293b"
background_color = "#0a0f1c"
closing_confirmation = true
haptic_bell = false
main_button_text = "Close guide"

[ui]
toast_ms = 3000
"##;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

/// Resolve the guide content.
///
/// An explicitly requested file must load; its errors are returned. A
/// `guide.toml` in the config dir is used when valid, otherwise the
/// built-in guide is used with a warning.
pub fn load_guide(explicit: Option<&Path>, dir: Option<&Path>) -> Result<Guide> {
    if let Some(path) = explicit {
        return Guide::load(path);
    }

    if let Some(dir) = dir {
        let path = dir.join(CONTENT_FILENAME);
        if path.exists() {
            match Guide::load(&path) {
                Ok(guide) => return Ok(guide),
                Err(e) => warn!("Ignoring {:?}: {}", path, e),
            }
        }
    }

    Guide::builtin()
}
