//! Overlay component renderer.
//!
//! Draws the full-pane backdrop, the content panel with its close control,
//! the recent and suggested lists, the trending cards and the labelled
//! overlay input. Everything here is written to a portal layer by the
//! renderer, so the page below never paints over it.

use super::cards::render_card;
use super::input::{render_input_box, render_input_title, InputColors};
use crate::app::props::TriggerProps;
use crate::ui::helpers::{draw_box, fill_rect, fit, text_width};
use crate::ui::layout::{OverlayLayout, Rect};
use crate::ui::portal::Layer;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OverlayInfo;

const CLOSE_GLYPH: &str = "[x]";

/// Renders the overlay.
///
/// # Parameters
///
/// * `layer` - Portal layer to draw into
/// * `layout` - Overlay geometry shared with hit-testing
/// * `overlay` - Display data
/// * `props` - Host-configured input colors
/// * `theme` - Active color theme
pub fn render_overlay(
    layer: &mut Layer,
    layout: &OverlayLayout,
    overlay: &OverlayInfo,
    props: &TriggerProps,
    theme: &Theme,
) {
    let colors = &theme.colors;

    fill_rect(layer, layout.backdrop, &colors.backdrop_bg);
    draw_box(layer, layout.panel, &colors.panel_border, &colors.panel_bg);

    render_panel_chrome(layer, layout, overlay, theme);

    render_heading(layer, layout.recent, "Recent", theme);
    for (rect, query) in layout.recent_rows.iter().zip(&overlay.recent_searches) {
        render_list_row(layer, *rect, "↺ ", query, &colors.text_dim, theme);
    }

    render_heading(layer, layout.trending, "Trending now", theme);
    for (rect, card) in layout.cards.iter().zip(&overlay.trending) {
        render_card(layer, *rect, card, theme);
    }

    render_heading(layer, layout.suggestions, "Try searching", theme);
    for (rect, query) in layout.suggestion_rows.iter().zip(&overlay.suggested_queries) {
        render_list_row(layer, *rect, "› ", query, &colors.text_normal, theme);
    }

    let input_colors = InputColors {
        border: &colors.input_border,
        bg: &colors.panel_bg,
        text: props.input_style.fg.as_deref().unwrap_or(&colors.text_normal),
        placeholder: props
            .input_style
            .placeholder_fg
            .as_deref()
            .unwrap_or(&colors.text_normal),
        hint_fg: &colors.hint_fg,
        hint_bg: &colors.hint_bg,
    };
    render_input_box(layer, layout.input, &overlay.input, None, &input_colors);
    render_input_title(layer, layout.input, &overlay.label, &input_colors);
}

/// Close control and keybinding hints on the panel border.
fn render_panel_chrome(layer: &mut Layer, layout: &OverlayLayout, overlay: &OverlayInfo, theme: &Theme) {
    let colors = &theme.colors;
    let panel = layout.panel;
    if panel.width < 4 || panel.height < 2 {
        return;
    }

    if !layout.close_control.is_empty() {
        layer.move_to(layout.close_control.y, layout.close_control.x);
        layer.put(&Theme::bg(&colors.panel_bg));
        layer.put(&Theme::fg(&colors.close_fg));
        layer.put(CLOSE_GLYPH);
        layer.put(Theme::reset());
    }

    let hints = fit(&format!(" {} ", overlay.hints), panel.width.saturating_sub(4));
    let hints_col = panel.x + (panel.width.saturating_sub(text_width(&hints))) / 2;
    layer.move_to(panel.bottom(), hints_col);
    layer.put(&Theme::bg(&colors.panel_bg));
    layer.put(&Theme::fg(&colors.text_dim));
    layer.put(&hints);
    layer.put(Theme::reset());
}

/// Accessible name on the input's top border.
fn render_heading(layer: &mut Layer, area: Rect, heading: &str, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    layer.move_to(area.y, area.x);
    layer.put(&Theme::bg(&theme.colors.panel_bg));
    layer.put(Theme::bold());
    layer.put(&Theme::fg(&theme.colors.heading_fg));
    layer.put(&fit(heading, area.width));
    layer.put(Theme::reset());
}

fn render_list_row(layer: &mut Layer, rect: Rect, bullet: &str, text: &str, fg: &str, theme: &Theme) {
    if rect.is_empty() {
        return;
    }

    layer.move_to(rect.y, rect.x);
    layer.put(&Theme::bg(&theme.colors.panel_bg));
    layer.put(&Theme::fg(fg));
    layer.put(&fit(&format!("{bullet}{text}"), rect.width));
    layer.put(Theme::reset());
}
