//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Four Catppuccin flavours are built in; a custom
//! theme can be loaded from a file with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! page_bg = "#1e1e2e"
//! header_fg = "#cdd6f4"
//! nav_active_fg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! trigger_border = "#585b70"
//! trigger_focus_border = "#f5c2e7"
//! hint_fg = "#1e1e2e"
//! hint_bg = "#9399b2"
//! backdrop_bg = "#11111b"
//! panel_bg = "#181825"
//! panel_border = "#cba6f7"
//! heading_fg = "#89b4fa"
//! price_fg = "#a6e3a1"
//! input_border = "#f5c2e7"
//! close_fg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use concierge::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let heading = format!("{}Trending{}", Theme::fg(&theme.colors.heading_fg), Theme::reset());
//! assert!(heading.starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::error::{ConciergeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page background behind the header and trigger.
    pub page_bg: String,
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Active navigation link.
    pub nav_active_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (placeholders of secondary info, help text).
    pub text_dim: String,
    /// Separator line color.
    pub border: String,

    /// Trigger container border.
    pub trigger_border: String,
    /// Trigger container border while its input is focused.
    pub trigger_focus_border: String,
    /// Shortcut glyph foreground.
    pub hint_fg: String,
    /// Shortcut glyph background.
    pub hint_bg: String,

    /// Overlay backdrop fill.
    pub backdrop_bg: String,
    /// Overlay panel fill.
    pub panel_bg: String,
    /// Overlay panel border.
    pub panel_border: String,
    /// Section headings inside the panel.
    pub heading_fg: String,
    /// Product prices.
    pub price_fg: String,
    /// Overlay input border.
    pub input_border: String,
    /// Close control.
    pub close_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-in themes.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConciergeError::Io`] if the file cannot be read and
    /// [`ConciergeError::Theme`] if the TOML is invalid or incomplete.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ConciergeError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Malformed colors render as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI underline escape sequence.
    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the theme tests
    /// rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
