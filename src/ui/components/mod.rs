//! Composable UI component renderers.
//!
//! Each component draws one part of the interface into a [`Layer`].
//!
//! # Components
//!
//! - [`header`]: Brand and navigation title bar
//! - [`trigger`]: Compact search box with its shortcut badge
//! - [`overlay`]: Backdrop, content panel and overlay input
//! - [`cards`]: Trending product cards
//! - [`input`]: Bordered single-line input shared by trigger and overlay
//!
//! # Layout
//!
//! [`render_page`] draws everything that belongs to the page body:
//!
//! ```text
//! [Header]
//! [Border]
//! [Page background]
//! [Trigger - 3 lines, near the bottom edge]
//! ```
//!
//! The overlay is not part of the page; the renderer draws it into a portal.

mod cards;
mod header;
mod input;
mod overlay;
mod trigger;

pub use overlay::render_overlay;

use crate::app::props::TriggerProps;
use crate::ui::helpers::fill_rect;
use crate::ui::layout::{PageLayout, HEADER_ROWS};
use crate::ui::portal::Layer;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use header::render_header;
use trigger::render_trigger;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(layer: &mut Layer, row: usize, theme: &Theme, cols: usize) -> usize {
    layer.move_to(row, 1);
    layer.put(&Theme::bg(&theme.colors.page_bg));
    layer.put(&Theme::fg(&theme.colors.border));
    layer.put(&"─".repeat(cols));
    layer.put(Theme::reset());
    row + 1
}

/// Renders the page body: header, separator, background and trigger.
///
/// # Parameters
///
/// * `layer` - Base layer of the frame
/// * `vm` - View model
/// * `layout` - Page geometry shared with hit-testing
/// * `props` - Host-configured trigger attributes
/// * `theme` - Active color theme
pub fn render_page(layer: &mut Layer, vm: &UIViewModel, layout: &PageLayout, props: &TriggerProps, theme: &Theme) {
    let cols = layout.viewport.width;
    let rows = layout.viewport.height;

    fill_rect(layer, layout.viewport, &theme.colors.page_bg);

    if rows >= 1 {
        let next_row = render_header(layer, layout.header.y, &vm.header, theme, cols);
        if rows >= HEADER_ROWS {
            render_border(layer, next_row, theme, cols);
        }
    }

    render_trigger(layer, layout.trigger, &vm.trigger, props, theme);
}
