//! Trigger component renderer.
//!
//! The trigger is the compact search box that stays on the page. It looks
//! like an input but only opens the overlay; its shortcut badge is shown
//! while the overlay is closed.

use super::input::{render_input_box, render_input_title, InputColors};
use crate::app::props::TriggerProps;
use crate::ui::layout::Rect;
use crate::ui::portal::Layer;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TriggerInfo;

/// Renders the trigger container into `rect`.
///
/// Colors configured on the host (`input_fg`, `placeholder_fg`,
/// `container_border`) take precedence over the theme. The accessible label
/// is drawn as the box title.
pub fn render_trigger(layer: &mut Layer, rect: Rect, trigger: &TriggerInfo, props: &TriggerProps, theme: &Theme) {
    let colors = &theme.colors;

    let default_border = if trigger.input.is_focused {
        &colors.trigger_focus_border
    } else {
        &colors.trigger_border
    };

    let resolved = InputColors {
        border: props.container_style.border.as_deref().unwrap_or(default_border),
        bg: &colors.page_bg,
        text: props.input_style.fg.as_deref().unwrap_or(&colors.text_normal),
        placeholder: props
            .input_style
            .placeholder_fg
            .as_deref()
            .unwrap_or(&colors.text_normal),
        hint_fg: &colors.hint_fg,
        hint_bg: &colors.hint_bg,
    };

    render_input_box(layer, rect, &trigger.input, trigger.shortcut_hint.as_deref(), &resolved);
    render_input_title(layer, rect, &trigger.label, &resolved);
}
