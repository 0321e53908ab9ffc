//! guide-app - Application state and orchestration for Prompt Guide
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the navigation controller with its two-phase transitions,
//! configuration loading, preference storage, search, favorites, progress,
//! the clipboard writer and the optional host bridge.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod confirm_dialog;
pub mod favorites;
pub mod handler;
pub mod host;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod process;
pub mod progress;
pub mod search;
pub mod signals;
pub mod state;
pub mod storage;
pub mod toast;
pub mod views;

// Re-export primary types
pub use clipboard::{ClipboardWriter, CopyMethod};
pub use handler::{UpdateAction, UpdateResult};
pub use host::{Host, HostBridge, HostChrome, ImpactStyle, NotificationKind};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{NavigationController, NavigationState};
pub use state::{AppState, UiMode};
pub use storage::{FileStore, MemoryStore, PreferenceStore, UnavailableStore};
