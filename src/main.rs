//! Prompt Guide - a terminal guide and catalog of copyable prompts
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use guide_app::config::{self, Settings};
use guide_app::{FileStore, PreferenceStore, UnavailableStore};
use guide_core::prelude::*;
use guide_tui::RunOptions;

/// Prompt Guide - browse, search and copy prompts from the terminal
#[derive(Parser, Debug)]
#[command(name = "guide")]
#[command(about = "A terminal guide and catalog of copyable prompts", long_about = None)]
struct Args {
    /// Guide content file (TOML) to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Forget visited sections before starting
    #[arg(long)]
    reset_progress: bool,

    /// Run without the host bridge (no chrome colors, main button or
    /// closing confirmation)
    #[arg(long)]
    no_host: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    guide_core::logging::init()?;

    let config_dir = config::config_dir();
    let settings = match &config_dir {
        Some(dir) => {
            if let Err(e) = config::init_config_dir(dir) {
                warn!("Could not create config directory {:?}: {}", dir, e);
            }
            config::load_settings(dir)
        }
        None => {
            warn!("No config directory on this platform, using default settings");
            Settings::default()
        }
    };

    let guide = config::load_guide(args.content.as_deref(), config_dir.as_deref())?;
    info!("Loaded guide \"{}\"", guide.title());

    let store: Box<dyn PreferenceStore> = match config::preferences_path() {
        Some(path) => {
            info!("Preferences: {}", path.display());
            Box::new(FileStore::open(path))
        }
        None => {
            warn!("No data directory; progress and favorites will not be saved");
            Box::new(UnavailableStore)
        }
    };

    let result = guide_tui::run(RunOptions {
        guide,
        settings,
        store,
        host: !args.no_host,
        reset_progress: args.reset_progress,
    })
    .await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("Prompt Guide exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["guide"]);
        assert!(args.content.is_none());
        assert!(!args.reset_progress);
        assert!(!args.no_host);
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from([
            "guide",
            "--content",
            "my_guide.toml",
            "--reset-progress",
            "--no-host",
        ]);
        assert_eq!(args.content, Some(PathBuf::from("my_guide.toml")));
        assert!(args.reset_progress);
        assert!(args.no_host);
    }
}
