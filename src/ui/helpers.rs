//! Shared rendering utilities and helpers.
//!
//! Low-level drawing used by several components: text fitting, filled
//! rectangles and bordered boxes. All widths are counted in characters, so
//! multi-byte text such as `⌘` or `€` is measured as one cell.
//!
//! # Example
//!
//! ```rust
//! use concierge::ui::helpers::fit;
//!
//! assert_eq!(fit("Linen Shirt", 20), "Linen Shirt");
//! assert_eq!(fit("Merino Crewneck Sweater", 10), "Merino Cr…");
//! ```

use crate::ui::layout::Rect;
use crate::ui::portal::Layer;
use crate::ui::theme::Theme;

/// Width of `text` in terminal cells.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` cells, marking the cut with `…`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push('…');
    fitted
}

/// Fits `text` into exactly `width` cells, padding with spaces on the right.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let padding = width.saturating_sub(text_width(&fitted));
    format!("{fitted}{}", " ".repeat(padding))
}

/// Fills `rect` with the background color `bg`.
pub fn fill_rect(layer: &mut Layer, rect: Rect, bg: &str) {
    if rect.is_empty() {
        return;
    }

    let blank = " ".repeat(rect.width);
    layer.put(&Theme::bg(bg));
    for row in rect.y..=rect.bottom() {
        layer.move_to(row, rect.x);
        layer.put(&blank);
    }
    layer.put(Theme::reset());
}

/// Draws a single-line border around `rect` and fills its interior with `bg`.
///
/// Rectangles smaller than 2x2 are filled without a border.
pub fn draw_box(layer: &mut Layer, rect: Rect, border: &str, bg: &str) {
    if rect.width < 2 || rect.height < 2 {
        fill_rect(layer, rect, bg);
        return;
    }

    let inner = rect.width - 2;
    let edge = Theme::fg(border);
    let fill = Theme::bg(bg);

    layer.move_to(rect.y, rect.x);
    layer.put(&format!("{fill}{edge}┌{}┐", "─".repeat(inner)));

    for row in rect.y + 1..rect.bottom() {
        layer.move_to(row, rect.x);
        layer.put(&format!("{fill}{edge}│{}│", " ".repeat(inner)));
    }

    layer.move_to(rect.bottom(), rect.x);
    layer.put(&format!("{fill}{edge}└{}┘", "─".repeat(inner)));
    layer.put(Theme::reset());
}
