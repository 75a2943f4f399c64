//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: the overlay section exists
//! only while the overlay is visible, and the shortcut hint only while it is
//! closed, so the renderer never has to consult the state machine.
//!
//! # Example
//!
//! ```rust
//! use concierge::app::AppState;
//!
//! let vm = AppState::default().compute_viewmodel();
//! assert!(vm.overlay.is_none());
//! assert_eq!(vm.trigger.input.text, "Search");
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Page header (brand and navigation).
    pub header: HeaderInfo,

    /// The always-mounted trigger.
    pub trigger: TriggerInfo,

    /// The overlay, present only while it is visible.
    pub overlay: Option<OverlayInfo>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Brand text at the left of the header.
    pub brand: String,
    /// Navigation labels at the right of the header.
    pub nav: Vec<NavItem>,
}

/// One navigation label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label.
    pub label: String,
    /// Whether the link is the current page.
    pub active: bool,
}

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputInfo {
    /// Typed text, or the placeholder when nothing is typed.
    pub text: String,
    /// Whether `text` is the placeholder.
    pub is_placeholder: bool,
    /// Whether the input receives typed characters.
    pub is_focused: bool,
}

/// Trigger display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerInfo {
    /// The compact input.
    pub input: InputInfo,
    /// Accessible name.
    pub label: String,
    /// Shortcut glyph, `None` while the overlay is open.
    pub shortcut_hint: Option<String>,
}

/// A trending product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    /// Product name.
    pub name: String,
    /// Display price.
    pub price: String,
    /// File name of the product image.
    pub image: String,
}

/// Overlay display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInfo {
    /// Panel title, the accessible name.
    pub label: String,
    /// The overlay search input.
    pub input: InputInfo,
    /// Recent searches side list.
    pub recent_searches: Vec<String>,
    /// Trending product cards.
    pub trending: Vec<CardInfo>,
    /// Suggested query rows.
    pub suggested_queries: Vec<String>,
    /// Keybinding help text on the panel's bottom border.
    pub hints: String,
}
