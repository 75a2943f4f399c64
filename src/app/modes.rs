//! State machine types for the search overlay.
//!
//! The overlay has exactly two states. There is no "opening" or "closing"
//! phase: every transition is a single synchronous assignment made inside the
//! event handler.
//!
//! ```text
//!            activate (pointer | keyboard)
//!   Closed ─────────────────────────────────▶ Open
//!     ▲                                         │
//!     └─────────────────────────────────────────┘
//!        dismiss (escape | backdrop | close control)
//! ```
//!
//! [`Activation`] and [`Dismissal`] record which entry point requested the
//! transition. They affect focus and logging only, never the resulting state.

/// Whether the search workspace is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Only the compact trigger is shown.
    #[default]
    Closed,
    /// The full-pane workspace is shown above the page.
    Open,
}

impl OverlayState {
    /// Returns `true` for [`OverlayState::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// How the overlay was asked to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A pointer press landed on the trigger, focusing its input.
    Pointer,
    /// The global modifier+I shortcut, or an `open` pipe message.
    Keyboard,
}

/// How the overlay was asked to close.
///
/// All variants share one close routine, so the end state never depends on
/// which one fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The global Escape key, or a `close` pipe message.
    Escape,
    /// A pointer press on the backdrop outside the content panel.
    Backdrop,
    /// The close control inside the content panel.
    CloseControl,
}
