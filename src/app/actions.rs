//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](crate::app::AppState) directly and
//! returns the host-side effects that must follow as a `Vec<Action>`. Focus and
//! overlay visibility are plain state; only what Zellij itself has to do is
//! expressed as an action.
//!
//! # Example
//!
//! ```rust
//! use concierge::Action;
//!
//! let actions = vec![Action::RaiseSurface];
//! assert_eq!(actions[0], Action::RaiseSurface);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Moves host keyboard focus to the plugin pane so the overlay input
    /// receives keys, including Escape.
    ///
    /// Emitted when the overlay becomes visible and the pane is not raised.
    FocusSurface,

    /// Focuses the plugin pane and makes it fullscreen so the overlay covers
    /// every other pane.
    ///
    /// Emitted once when the overlay becomes visible, if `raise_on_open` is
    /// enabled and the host does not already show the pane fullscreen.
    RaiseSurface,

    /// Returns the plugin pane to its place in the layout.
    ///
    /// Emitted once when a raised overlay is dismissed. A pane that was
    /// fullscreen before the overlay opened is never lowered.
    LowerSurface,
}
