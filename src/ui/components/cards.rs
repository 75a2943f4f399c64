//! Trending product card renderer.

use crate::ui::helpers::{draw_box, fit};
use crate::ui::layout::Rect;
use crate::ui::portal::Layer;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardInfo;

/// Renders one product card.
///
/// ```text
/// ┌────────────────────┐
/// │ Linen Shirt        │
/// │ $49.00             │
/// │ ▣ linen-shirt.jpg  │
/// └────────────────────┘
/// ```
pub fn render_card(layer: &mut Layer, rect: Rect, card: &CardInfo, theme: &Theme) {
    let colors = &theme.colors;
    draw_box(layer, rect, &colors.border, &colors.panel_bg);

    if rect.height < 5 || rect.width < 4 {
        return;
    }

    let room = rect.width - 4;
    let col = rect.x + 2;
    let lines = [
        (Theme::fg(&colors.text_normal), Theme::bold(), fit(&card.name, room)),
        (Theme::fg(&colors.price_fg), "", fit(&card.price, room)),
        (Theme::fg(&colors.text_dim), "", fit(&format!("▣ {}", card.image), room)),
    ];

    layer.put(&Theme::bg(&colors.panel_bg));
    for (offset, (fg, weight, text)) in lines.iter().enumerate() {
        layer.move_to(rect.y + 1 + offset, col);
        layer.put(weight);
        layer.put(fg);
        layer.put(text);
        layer.put(Theme::reset());
        layer.put(&Theme::bg(&colors.panel_bg));
    }
    layer.put(Theme::reset());
}
