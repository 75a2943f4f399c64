//! Header component renderer.
//!
//! Renders the page title bar: the brand on the left and the navigation
//! labels on the right, with the active link underlined.

use crate::ui::helpers::{fit, text_width};
use crate::ui::portal::Layer;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

const NAV_GAP: usize = 3;

/// Renders the header title bar at the specified row.
///
/// # Parameters
///
/// * `layer` - Layer to draw into
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Brand and navigation labels
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///  DIGITAL CONCIERGE                                          Home   Shop
/// ```
///
/// Navigation is dropped entirely when it would collide with the brand.
pub fn render_header(layer: &mut Layer, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let bg = theme.colors.header_bg.as_deref().unwrap_or(&theme.colors.page_bg);

    let brand = fit(&format!(" {}", header.brand), cols);
    let nav_width: usize = header
        .nav
        .iter()
        .map(|item| text_width(&item.label) + NAV_GAP)
        .sum();
    let show_nav = !header.nav.is_empty() && text_width(&brand) + nav_width + 1 <= cols;

    layer.move_to(row, 1);
    layer.put(&Theme::bg(bg));
    layer.put(Theme::bold());
    layer.put(&Theme::fg(&theme.colors.header_fg));
    layer.put(&brand);
    layer.put(Theme::reset());
    layer.put(&Theme::bg(bg));

    let used = text_width(&brand) + if show_nav { nav_width } else { 0 };
    layer.put(&" ".repeat(cols.saturating_sub(used)));

    if show_nav {
        for item in &header.nav {
            if item.active {
                layer.put(Theme::underline());
                layer.put(&Theme::fg(&theme.colors.nav_active_fg));
            } else {
                layer.put(&Theme::fg(&theme.colors.text_dim));
            }
            layer.put(&item.label);
            layer.put(Theme::reset());
            layer.put(&Theme::bg(bg));
            layer.put(&" ".repeat(NAV_GAP));
        }
    }

    layer.put(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::portal::RenderRoot;
    use crate::ui::viewmodel::NavItem;

    fn header() -> HeaderInfo {
        HeaderInfo {
            brand: "DIGITAL CONCIERGE".to_string(),
            nav: vec![NavItem {
                label: "Home".to_string(),
                active: true,
            }],
        }
    }

    #[test]
    fn renders_brand_and_nav_on_wide_panes() {
        let mut root = RenderRoot::new(24, 80);
        let next = render_header(root.base(), 1, &header(), &Theme::default(), 80);
        let out = root.finish();

        assert_eq!(next, 2);
        assert!(out.contains("DIGITAL CONCIERGE"));
        assert!(out.contains("Home"));
    }

    #[test]
    fn drops_nav_on_narrow_panes() {
        let mut root = RenderRoot::new(24, 20);
        render_header(root.base(), 1, &header(), &Theme::default(), 20);
        let out = root.finish();

        assert!(!out.contains("Home"));
        assert!(out.contains("DIGITAL CONCIER"));
    }
}
