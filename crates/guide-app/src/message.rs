//! Message types for the application (TEA pattern)

use guide_core::{SectionId, TabDimension, TabId};

use crate::clipboard::CopyMethod;
use crate::input_key::InputKey;
use crate::navigation::Dimension;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toasts, search debounce)
    Tick,

    // ─────────────────────────────────────────────────────────
    // Closing
    // ─────────────────────────────────────────────────────────
    /// Request to close (may show confirmation dialog)
    RequestQuit,
    /// Close immediately
    Quit,
    /// Confirm close from dialog
    ConfirmQuit,
    /// Cancel close from dialog
    CancelQuit,
    /// Host main button pressed
    MainButtonPressed,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    NavigateToSection(SectionId),
    /// Section by zero-based position in the navigation bar
    SelectSectionByIndex(usize),
    NextSection,
    PreviousSection,
    SwitchTab {
        dimension: TabDimension,
        tab: TabId,
    },
    /// Next tab of the current section's dimension
    NextTab,
    PreviousTab,
    FilterExamples(String),
    /// Advance to the next example filter (wraps)
    CycleFilter,
    /// Delayed second phase of a section or tab switch
    CommitTransition {
        dimension: Dimension,
        generation: u64,
    },

    // ─────────────────────────────────────────────────────────
    // Items in the visible section
    // ─────────────────────────────────────────────────────────
    SelectNextItem,
    SelectPreviousItem,
    ScrollDown,
    ScrollUp,
    CopySelected,
    ToggleFavoriteSelected,

    // ─────────────────────────────────────────────────────────
    // Clipboard results
    // ─────────────────────────────────────────────────────────
    CopyCompleted {
        text: String,
        method: CopyMethod,
    },
    CopyFailed {
        reason: String,
    },

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    StartSearch,
    CloseSearch,
    SearchInput {
        text: String,
    },
    SearchSelectNext,
    SearchSelectPrevious,
    /// Run any pending query, then copy the selected hit
    SearchCopySelected,

    // ─────────────────────────────────────────────────────────
    // Favorites overlay
    // ─────────────────────────────────────────────────────────
    OpenFavorites,
    CloseFavorites,
    FavoritesSelectNext,
    FavoritesSelectPrevious,
    FavoritesCopySelected,
    FavoritesRemoveSelected,
}
