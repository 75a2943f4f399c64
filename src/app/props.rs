//! Pass-through attributes of the trigger.
//!
//! These are supplied by the host configuration and are never validated: a
//! malformed colour renders as white and a missing value uses its default.

/// Placeholder and accessible name used when none is configured.
pub const DEFAULT_LABEL: &str = "Search";

/// Shortcut glyph shown inside the closed trigger.
pub const DEFAULT_SHORTCUT_HINT: &str = "⌘ I";

/// Styling hooks for the trigger's input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputStyle {
    /// Colour of typed text (hex). Falls back to the theme's normal text.
    pub fg: Option<String>,
    /// Colour of the placeholder (hex). Falls back to the theme's normal text,
    /// as the placeholder is drawn at full strength.
    pub placeholder_fg: Option<String>,
}

/// Overrides for the trigger's outer container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStyle {
    /// Border colour (hex).
    pub border: Option<String>,
    /// Maximum width in columns.
    pub width: Option<usize>,
    /// Rows between the container and the bottom edge of the pane.
    pub offset: Option<usize>,
}

/// Attributes of the trigger, all optional with documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerProps {
    /// Placeholder text shown while the input is empty. Default: `Search`.
    pub placeholder: String,
    /// Accessible name. Default: `Search`.
    pub label: String,
    /// Shortcut glyph shown while closed. Default: `⌘ I`.
    pub shortcut_hint: String,
    /// Input text styling hooks.
    pub input_style: InputStyle,
    /// Container override.
    pub container_style: ContainerStyle,
}

impl Default for TriggerProps {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_LABEL.to_string(),
            label: DEFAULT_LABEL.to_string(),
            shortcut_hint: DEFAULT_SHORTCUT_HINT.to_string(),
            input_style: InputStyle::default(),
            container_style: ContainerStyle::default(),
        }
    }
}
