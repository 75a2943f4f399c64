//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Draw the page into the base layer of a
//!    [`RenderRoot`], and the overlay, when visible, into a portal layer
//!    attached at the root
//!
//! The overlay's portal is composited after the page, so it covers the page
//! no matter where the trigger sits in the page's own layout.
//!
//! # Example
//!
//! ```rust
//! use concierge::app::{Activation, AppState};
//! use concierge::ui::render_root;
//!
//! let mut state = AppState::default();
//! state.mount(24, 80);
//! state.activate(Activation::Keyboard);
//!
//! let root = render_root(&state, 24, 80)?;
//! assert_eq!(root.portal_count(), 1);
//! # Ok::<(), concierge::ConciergeError>(())
//! ```

use crate::app::AppState;
use crate::domain::error::{ConciergeError, Result};
use crate::ui::components;
use crate::ui::portal::RenderRoot;

/// Name of the portal layer that holds the overlay.
pub const OVERLAY_PORTAL: &str = "overlay";

/// Builds the layered frame for the current state.
///
/// # Errors
///
/// Returns [`ConciergeError::RenderTargetUnavailable`] if the state has not
/// been mounted yet.
pub fn render_root(state: &AppState, rows: usize, cols: usize) -> Result<RenderRoot> {
    if !state.is_mounted() {
        return Err(ConciergeError::RenderTargetUnavailable("render before mount"));
    }

    let viewmodel = state.compute_viewmodel();
    let mut root = RenderRoot::new(rows, cols);

    let page = state.page_layout(rows, cols);
    components::render_page(root.base(), &viewmodel, &page, &state.props, &state.theme);

    if let Some(overlay) = &viewmodel.overlay {
        let layout = state.overlay_layout(rows, cols);
        components::render_overlay(
            root.portal(OVERLAY_PORTAL),
            &layout,
            overlay,
            &state.props,
            &state.theme,
        );
    }

    tracing::trace!(rows, cols, portals = root.portal_count(), "frame rendered");
    Ok(root)
}

/// Renders the current state to a composited frame.
///
/// # Errors
///
/// See [`render_root`].
pub fn render(state: &AppState, rows: usize, cols: usize) -> Result<String> {
    render_root(state, rows, cols).map(RenderRoot::finish)
}
