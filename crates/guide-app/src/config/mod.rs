//! Configuration file parsing for Prompt Guide
//!
//! Supports:
//! - `<config dir>/prompt-guide/config.toml` - Settings
//! - `<config dir>/prompt-guide/guide.toml` - Custom guide content

pub mod settings;
pub mod types;

pub use settings::{config_dir, init_config_dir, load_guide, load_settings, preferences_path};
pub use types::*;
