//! # guide-core - Core Domain Types
//!
//! Foundation crate for Prompt Guide. Provides identifiers, guide content,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SectionId`], [`TabId`] - Identifiers for navigable views
//! - [`TabDimension`] - Secondary tab axis (category, technique, template category)
//! - [`PromptItem`] - A copyable prompt with its anchor
//! - [`ExampleItem`] - An example card filtered by category
//!
//! ### Content (`content`)
//! - [`Guide`] - Validated sections, tabs, prompts and examples
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use guide_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Prompt Guide crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{Filter, Guide, Section, Tab};
pub use error::{Error, Result, ResultExt};
pub use types::{
    ExampleItem, PromptAnchor, PromptItem, SectionId, TabDimension, TabId, ALL_FILTER,
};
