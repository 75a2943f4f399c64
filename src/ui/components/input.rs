//! Bordered single-line input shared by the trigger and the overlay.

use crate::ui::helpers::{draw_box, fit, text_width};
use crate::ui::layout::Rect;
use crate::ui::portal::Layer;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputInfo;

const SEARCH_GLYPH: &str = " ⌕ ";
const CARET: &str = "▏";

/// Resolved colors for one input box.
#[derive(Debug, Clone, Copy)]
pub struct InputColors<'a> {
    pub border: &'a str,
    pub bg: &'a str,
    pub text: &'a str,
    pub placeholder: &'a str,
    pub hint_fg: &'a str,
    pub hint_bg: &'a str,
}

/// Renders a bordered input into `rect`.
///
/// ```text
/// ┌──────────────────────────────────────┐
/// │ ⌕ Search products…▏            ⌘ I │
/// └──────────────────────────────────────┘
/// ```
///
/// The caret is drawn only while the input is focused; `hint`, when given, is
/// right-aligned as a badge. Boxes shorter than three rows lose their border
/// and keep the text line.
pub fn render_input_box(
    layer: &mut Layer,
    rect: Rect,
    input: &InputInfo,
    hint: Option<&str>,
    colors: &InputColors<'_>,
) {
    if rect.is_empty() {
        return;
    }

    let (row, x, width) = if rect.height >= 3 && rect.width >= 2 {
        draw_box(layer, rect, colors.border, colors.bg);
        (rect.y + 1, rect.x + 1, rect.width - 2)
    } else {
        (rect.y, rect.x, rect.width)
    };

    render_input_line(layer, row, x, width, input, hint, colors);
}

/// Writes ` {label} ` into the top border of a bordered input.
///
/// Drawn in the border colour, so it reads as the box's title. Boxes too
/// small to carry a border get no title.
pub fn render_input_title(layer: &mut Layer, rect: Rect, label: &str, colors: &InputColors<'_>) {
    if rect.height < 3 || rect.width < 6 || label.is_empty() {
        return;
    }

    layer.move_to(rect.y, rect.x + 2);
    layer.put(&Theme::bg(colors.bg));
    layer.put(Theme::bold());
    layer.put(&Theme::fg(colors.border));
    layer.put(&fit(&format!(" {label} "), rect.width - 4));
    layer.put(Theme::reset());
}

fn render_input_line(
    layer: &mut Layer,
    row: usize,
    x: usize,
    width: usize,
    input: &InputInfo,
    hint: Option<&str>,
    colors: &InputColors<'_>,
) {
    let badge = hint.map(|h| format!(" {h} "));
    let badge_width = badge.as_deref().map_or(0, |b| text_width(b) + 1);

    let glyph = fit(SEARCH_GLYPH, width);
    let caret_width = usize::from(input.is_focused);
    let text_room = width
        .saturating_sub(text_width(&glyph) + badge_width)
        .saturating_sub(caret_width);
    let text = fit(&input.text, text_room);
    let text_fg = if input.is_placeholder {
        colors.placeholder
    } else {
        colors.text
    };

    layer.move_to(row, x);
    layer.put(&Theme::bg(colors.bg));
    layer.put(&Theme::fg(colors.placeholder));
    layer.put(&glyph);
    layer.put(&Theme::fg(text_fg));
    layer.put(&text);
    if input.is_focused {
        layer.put(&Theme::fg(colors.border));
        layer.put(CARET);
    }

    let used = text_width(&glyph) + text_width(&text) + caret_width;
    let gap = width.saturating_sub(used + badge_width);
    layer.put(&" ".repeat(gap));

    if let Some(badge) = badge.filter(|_| used + badge_width <= width) {
        layer.put(&Theme::fg(colors.hint_fg));
        layer.put(&Theme::bg(colors.hint_bg));
        layer.put(&badge);
        layer.put(&Theme::bg(colors.bg));
        layer.put(" ");
    }

    layer.put(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::portal::RenderRoot;

    const COLORS: InputColors<'static> = InputColors {
        border: "#ffffff",
        bg: "#000000",
        text: "#eeeeee",
        placeholder: "#777777",
        hint_fg: "#000000",
        hint_bg: "#999999",
    };

    fn input(text: &str, is_placeholder: bool, is_focused: bool) -> InputInfo {
        InputInfo {
            text: text.to_string(),
            is_placeholder,
            is_focused,
        }
    }

    fn render(rect: Rect, info: &InputInfo, hint: Option<&str>) -> String {
        let mut root = RenderRoot::new(10, 80);
        render_input_box(root.base(), rect, info, hint, &COLORS);
        root.finish()
    }

    #[test]
    fn focused_input_draws_caret() {
        let out = render(Rect::new(1, 1, 30, 3), &input("shoes", false, true), None);
        assert!(out.contains("shoes"));
        assert!(out.contains(CARET));
    }

    #[test]
    fn blurred_input_has_no_caret() {
        let out = render(Rect::new(1, 1, 30, 3), &input("Search", true, false), None);
        assert!(out.contains("Search"));
        assert!(!out.contains(CARET));
    }

    #[test]
    fn hint_badge_is_drawn_when_it_fits() {
        let info = input("Search", true, false);
        assert!(render(Rect::new(1, 1, 30, 3), &info, Some("⌘ I")).contains(" ⌘ I "));
        assert!(!render(Rect::new(1, 1, 6, 3), &info, Some("⌘ I")).contains("⌘ I"));
    }

    #[test]
    fn title_sits_on_the_top_border() {
        let mut root = RenderRoot::new(10, 80);
        let rect = Rect::new(1, 1, 30, 3);
        render_input_box(root.base(), rect, &input("Search", true, false), None, &COLORS);
        render_input_title(root.base(), rect, "Find", &COLORS);
        let out = root.finish();

        let title = out.find(" Find ").unwrap();
        let line = out.find("Search").unwrap();
        assert!(title < line);
    }

    #[test]
    fn title_is_skipped_without_a_border() {
        let mut root = RenderRoot::new(10, 80);
        render_input_title(root.base(), Rect::new(1, 1, 30, 1), "Find", &COLORS);
        assert!(!root.finish().contains("Find"));
    }

    #[test]
    fn short_box_keeps_text_line_without_border() {
        let out = render(Rect::new(1, 1, 30, 1), &input("Search", true, false), None);
        assert!(out.contains("Search"));
        assert!(!out.contains('┌'));
    }
}
