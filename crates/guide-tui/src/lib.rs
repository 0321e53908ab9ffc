//! guide-tui - Terminal UI for Prompt Guide
//!
//! Renders the guide with ratatui and runs the event loop that feeds
//! terminal input into the guide-app update function.

pub mod event;
pub mod host;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use host::TerminalHost;
pub use runner::{run, RunOptions};
